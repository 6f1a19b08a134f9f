//! Python bindings for the color-guessing round engine.
//!
//! Lets a Python front end (notebook, web handler, GUI) drive the engine.
//!
//! # Quick Start
//!
//! ```python
//! import color_guess as cg
//!
//! game = cg.ColorGame(seed=42)
//! print(game.target.css(), [c.label() for c in game.options])
//!
//! outcome = game.guess("RGB(10, 20, 30)")   # "correct" / "incorrect" / "ignored"
//! game.tick()                               # starts the next round once due
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_games;

pub use py_core::*;
pub use py_games::*;

/// color_guess: round engine for an RGB color-guessing game.
#[pymodule]
fn color_guess(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyColor>()?;
    m.add_class::<PyColorGame>()?;

    Ok(())
}
