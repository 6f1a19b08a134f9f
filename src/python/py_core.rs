//! Core type bindings for Python.

use pyo3::prelude::*;

use crate::core::Color;

/// Python wrapper for Color.
#[pyclass(name = "Color")]
#[derive(Clone, Copy, Debug)]
pub struct PyColor(pub Color);

#[pymethods]
impl PyColor {
    #[new]
    fn new(r: u8, g: u8, b: u8) -> Self {
        Self(Color::new(r, g, b))
    }

    /// Parse `rgb(R, G, B)`, `RGB(R, G, B)` or `R, G, B`.
    #[staticmethod]
    fn parse(s: &str) -> PyResult<Self> {
        s.parse()
            .map(Self)
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("{}", e)))
    }

    #[getter]
    fn r(&self) -> u8 {
        self.0.r
    }

    #[getter]
    fn g(&self) -> u8 {
        self.0.g
    }

    #[getter]
    fn b(&self) -> u8 {
        self.0.b
    }

    fn css(&self) -> String {
        self.0.css()
    }

    fn label(&self) -> String {
        self.0.label()
    }

    fn __repr__(&self) -> String {
        format!("Color({}, {}, {})", self.0.r, self.0.g, self.0.b)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        let (r, g, b) = self.0.channels();
        (u64::from(r) << 16) | (u64::from(g) << 8) | u64::from(b)
    }
}
