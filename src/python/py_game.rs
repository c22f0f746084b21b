//! Game bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::cards::Possibilities;
use crate::error::GameError;
use crate::game::Game;
use crate::rules::TurnOutcome;

fn to_py_err(err: GameError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn knowledge(p: &Possibilities) -> (Vec<char>, Vec<u8>) {
    (
        p.colors.iter().map(|c| c.code()).collect(),
        p.ranks.iter().map(|r| r.value()).collect(),
    )
}

/// Python wrapper for Game.
#[pyclass(name = "Game")]
pub struct PyGame {
    game: Game,
}

#[pymethods]
impl PyGame {
    /// Create a match and deal.
    ///
    /// # Arguments
    /// - players: Unique names in turn order (at least 2)
    /// - variation: Variation name ("classic" or "rainbow")
    /// - seed: Shuffle seed; random when omitted
    #[new]
    #[pyo3(signature = (players, variation = "classic", seed = None))]
    fn new(players: Vec<String>, variation: &str, seed: Option<u64>) -> PyResult<Self> {
        let mut builder = Game::builder().players(players).variation(variation);
        if let Some(seed) = seed {
            builder = builder.seed(seed);
        }
        let game = builder.build().map_err(to_py_err)?;
        Ok(Self { game })
    }

    /// Take a turn.
    ///
    /// Returns the next player's name, or the final score as an int.
    #[pyo3(signature = (player, choice, value, hint_target = None))]
    fn turn(
        &mut self,
        py: Python<'_>,
        player: &str,
        choice: &str,
        value: &Bound<'_, PyAny>,
        hint_target: Option<&str>,
    ) -> PyResult<PyObject> {
        let value = value.str()?.to_string();
        let outcome = self
            .game
            .turn_str(player, choice, &value, hint_target)
            .map_err(to_py_err)?;

        Ok(match outcome {
            TurnOutcome::Next(id) => self.game.players()[id].name().to_string().into_py(py),
            TurnOutcome::Finished { score, .. } => score.into_py(py),
        })
    }

    /// Name of the player to act.
    #[getter]
    fn current_player(&self) -> String {
        let id = self.game.current_player();
        self.game.players()[id].name().to_string()
    }

    #[getter]
    fn tokens(&self) -> u8 {
        self.game.tokens()
    }

    #[getter]
    fn fuses(&self) -> u8 {
        self.game.fuses()
    }

    #[getter]
    fn score(&self) -> u32 {
        self.game.score()
    }

    #[getter]
    fn current_max(&self) -> u32 {
        self.game.current_max()
    }

    #[getter]
    fn deck_len(&self) -> usize {
        self.game.deck_len()
    }

    #[getter]
    fn is_finished(&self) -> bool {
        self.game.is_finished()
    }

    /// [(color, highest played rank)] in variation order.
    fn played(&self) -> Vec<(char, u8)> {
        self.game
            .piles()
            .played_iter()
            .map(|(c, r)| (c.code(), r))
            .collect()
    }

    /// [(color, [discarded ranks])] in variation order.
    fn discarded(&self) -> Vec<(char, Vec<u8>)> {
        self.game
            .piles()
            .discarded_iter()
            .map(|(c, ranks)| (c.code(), ranks.iter().map(|r| r.value()).collect()))
            .collect()
    }

    /// The named player's knowledge of their own hand.
    fn possibilities(&self, player: &str) -> PyResult<Vec<(Vec<char>, Vec<u8>)>> {
        let id = self.game.seat(player).map_err(to_py_err)?;
        Ok(self.game.possibilities(id).iter().map(knowledge).collect())
    }

    /// Every hand except the viewer's: [(name, [(color, rank)])].
    fn visible_hands(&self, viewer: &str) -> PyResult<Vec<(String, Vec<(char, u8)>)>> {
        let id = self.game.seat(viewer).map_err(to_py_err)?;
        Ok(self
            .game
            .visible_hands(id)
            .map(|(_, p)| {
                let cards = p.cards().map(|c| (c.color.code(), c.rank.value())).collect();
                (p.name().to_string(), cards)
            })
            .collect())
    }

    /// Text board as seen by `viewer`.
    fn render(&self, viewer: &str) -> PyResult<String> {
        let id = self.game.seat(viewer).map_err(to_py_err)?;
        self.game
            .view(id)
            .map(|v| v.to_string())
            .ok_or_else(|| PyValueError::new_err(format!("player '{viewer}' not found")))
    }

    fn __repr__(&self) -> String {
        format!(
            "Game(variation={}, score={}/{}, tokens={}, fuses={}, deck={})",
            self.game.variation().name,
            self.game.score(),
            self.game.current_max(),
            self.game.tokens(),
            self.game.fuses(),
            self.game.deck_len()
        )
    }
}
