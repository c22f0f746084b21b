//! Python bindings for the hanabi engine.
//!
//! Lets a Python driver run matches without reimplementing the rules.
//!
//! # Quick Start
//!
//! ```python
//! import hanabi
//!
//! game = hanabi.Game(["Ada", "Grace"], variation="classic", seed=42)
//!
//! # Returns the next player's name, or the final score once the match ends
//! nxt = game.turn("Ada", "hint", 1, hint_target="Grace")
//! print(game.render("Grace"))
//! ```

use pyo3::prelude::*;

mod py_game;

pub use py_game::*;

/// hanabi: rules engine for a cooperative hidden-hand card game.
#[pymodule]
fn hanabi(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGame>()?;
    Ok(())
}
