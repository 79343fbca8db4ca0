//! PyO3 bindings for Python integration

use pyo3::prelude::*;
use pyo3::exceptions::{PyIOError, PyValueError};
use crate::error::{DecodeError, InvalidArgument};

mod waveform_bindings;
mod spectrum_bindings;

impl From<DecodeError> for PyErr {
    fn from(err: DecodeError) -> Self {
        PyIOError::new_err(err.to_string())
    }
}

impl From<InvalidArgument> for PyErr {
    fn from(err: InvalidArgument) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// Python module definition
#[pymodule]
fn wave_spectrum(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(waveform_bindings::py_load, m)?)?;
    m.add_function(wrap_pyfunction!(spectrum_bindings::py_transform, m)?)?;

    Ok(())
}
