//! Python bindings for waveform loading

use pyo3::prelude::*;
use numpy::{IntoPyArray, PyArray1, PyArray2};
use crate::waveform;

/// Load a 16-bit PCM WAV file
///
/// Args:
///     path: Path to the WAV file
///
/// Returns:
///     (samples, time_axis): int16 array of shape (channels, frames) and
///     float64 timestamps in seconds
#[pyfunction]
#[pyo3(name = "load")]
pub fn py_load<'py>(
    py: Python<'py>,
    path: &str,
) -> PyResult<(&'py PyArray2<i16>, &'py PyArray1<f64>)> {
    let (samples, time_axis) = waveform::load(path)?;

    Ok((
        samples.into_inner().into_pyarray(py),
        PyArray1::from_vec(py, time_axis.to_vec()),
    ))
}
