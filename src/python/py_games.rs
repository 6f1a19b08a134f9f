//! Game bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyBool, PyInt};
use std::time::{Duration, Instant};

use crate::core::{Color, GameConfig};
use crate::engine::RoundEngine;

use super::py_core::PyColor;

const BOOL_INDEX: &str = "option index must be an int, not bool";

/// Option index from a Python int; negative indices are rejected.
fn option_index(index: i64) -> Result<usize, String> {
    usize::try_from(index).map_err(|_| format!("option index must be non-negative, got {}", index))
}

/// Python wrapper for RoundEngine.
///
/// Time comes from the wall clock: call `tick()` from the host event loop.
#[pyclass(name = "ColorGame")]
pub struct PyColorGame {
    engine: RoundEngine,
}

#[pymethods]
impl PyColorGame {
    /// Create a game and start its first round.
    ///
    /// # Arguments
    /// - seed: RNG seed, or None for OS entropy
    /// - min_options / max_options: option count range per round
    /// - advance_delay_ms: delay before a solved round is replaced
    /// - auto_advance: replace solved rounds automatically
    #[new]
    #[pyo3(signature = (
        seed = None,
        min_options = 3,
        max_options = 6,
        advance_delay_ms = 1500,
        auto_advance = true
    ))]
    fn new(
        seed: Option<u64>,
        min_options: usize,
        max_options: usize,
        advance_delay_ms: u64,
        auto_advance: bool,
    ) -> PyResult<Self> {
        let mut config = GameConfig::new()
            .with_option_range(min_options, max_options)
            .with_advance_delay(Duration::from_millis(advance_delay_ms));
        config.seed = seed;
        config.auto_advance = auto_advance;

        let engine =
            RoundEngine::new(config).map_err(|e| PyErr::new::<PyValueError, _>(format!("{}", e)))?;
        Ok(Self { engine })
    }

    /// Abandon the current round and start another.
    fn start_new_round(&mut self) {
        self.engine.start_new_round();
    }

    /// Submit a guess: a `Color`, a color string, or an option index.
    ///
    /// Returns "correct", "incorrect" or "ignored". A bool or negative int
    /// raises ValueError.
    fn guess(&mut self, guess: &Bound<'_, PyAny>) -> PyResult<String> {
        let now = Instant::now();

        let outcome = if let Ok(color) = guess.extract::<PyColor>() {
            self.engine.submit_guess(color.0, now)
        } else if guess.is_instance_of::<PyBool>() {
            return Err(PyErr::new::<PyValueError, _>(BOOL_INDEX));
        } else if guess.is_instance_of::<PyInt>() {
            let index = option_index(guess.extract::<i64>()?)
                .map_err(PyErr::new::<PyValueError, _>)?;
            self.engine
                .submit_option(index, now)
                .ok_or_else(|| PyErr::new::<PyValueError, _>(format!("no option at index {}", index)))?
        } else {
            let text: String = guess.extract()?;
            let color: Color = text
                .parse()
                .map_err(|e| PyErr::new::<PyValueError, _>(format!("{}", e)))?;
            self.engine.submit_guess(color, now)
        };

        Ok(outcome.to_string())
    }

    /// Start the next round if a solved one is due to advance.
    fn tick(&mut self) -> bool {
        self.engine.tick(Instant::now())
    }

    #[getter]
    fn target(&self) -> PyColor {
        PyColor(self.engine.round().target())
    }

    #[getter]
    fn options(&self) -> Vec<PyColor> {
        self.engine.round().options().iter().copied().map(PyColor).collect()
    }

    #[getter]
    fn round(&self) -> u64 {
        self.engine.round().id().0
    }

    #[getter]
    fn score(&self) -> u64 {
        self.engine.session().score()
    }

    #[getter]
    fn attempts(&self) -> u64 {
        self.engine.session().attempts()
    }

    #[getter]
    fn solved(&self) -> bool {
        self.engine.round().is_solved()
    }

    #[getter]
    fn message(&self) -> Option<&'static str> {
        self.engine.message()
    }

    fn __repr__(&self) -> String {
        format!(
            "ColorGame(round={}, score={}, attempts={}, solved={})",
            self.engine.round().id().0,
            self.engine.session().score(),
            self.engine.session().attempts(),
            self.engine.round().is_solved()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_index() {
        assert_eq!(option_index(0), Ok(0));
        assert_eq!(option_index(5), Ok(5));
        assert_eq!(
            option_index(-1),
            Err("option index must be non-negative, got -1".to_string())
        );
    }
}
