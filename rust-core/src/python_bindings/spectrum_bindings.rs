//! Python bindings for windowed transforms

use pyo3::prelude::*;
use pyo3::exceptions::PyTypeError;
use numpy::{Complex64, IntoPyArray, PyArray1, PyArray2, PyReadonlyArray1, PyReadonlyArray2};
use crate::spectrum::{SpectrumMatrix, SpectrumTransformer, TimeWindow, TransformConfig, Direction};
use crate::waveform::{SampleMatrix, TimeAxis};

/// Forward or inverse DFT over a time window
///
/// Args:
///     samples: int16 or complex128 array of shape (channels, columns)
///     time_axis: Timestamps matching the columns of `samples`
///     time_range: (start, end) in seconds, inclusive; (-1, -1) for everything
///     inverse: Apply the inverse transform instead of the forward one
///
/// Returns:
///     (spectrum, selected_time_axis)
#[pyfunction]
#[pyo3(name = "transform", signature = (samples, time_axis, time_range=vec![-1.0, -1.0], inverse=false))]
pub fn py_transform<'py>(
    py: Python<'py>,
    samples: &'py PyAny,
    time_axis: PyReadonlyArray1<'py, f64>,
    time_range: Vec<f64>,
    inverse: bool,
) -> PyResult<(&'py PyArray2<Complex64>, &'py PyArray1<f64>)> {
    let config = TransformConfig {
        window: TimeWindow::from_bounds(&time_range)?,
        direction: Direction::from_inverse(inverse),
    };
    let axis = TimeAxis::new(time_axis.as_array().to_vec())?;
    let mut transformer = SpectrumTransformer::new(config);

    let (spectrum, times) = if let Ok(ints) = samples.extract::<PyReadonlyArray2<i16>>() {
        let matrix = SampleMatrix::new(ints.as_array().to_owned())?;
        transformer.transform(&matrix, &axis)?
    } else if let Ok(complex) = samples.extract::<PyReadonlyArray2<Complex64>>() {
        let matrix = SpectrumMatrix::new(complex.as_array().to_owned());
        transformer.transform(&matrix, &axis)?
    } else {
        return Err(PyTypeError::new_err(
            "samples must be a 2-D int16 or complex128 array",
        ));
    };

    Ok((
        spectrum.into_inner().into_pyarray(py),
        PyArray1::from_vec(py, times.to_vec()),
    ))
}
