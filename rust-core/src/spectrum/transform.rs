//! Windowed per-channel DFT
//!
//! Slices the columns inside a time window and transforms every channel
//! independently, forward or inverse.

use ndarray::{Array2, ArrayView1, ArrayView2, Axis};
use num_complex::Complex;

use super::fft::{fft_frequencies, FftEngine};
use super::window::TimeWindow;
use crate::error::InvalidArgument;
use crate::waveform::{SampleMatrix, TimeAxis};

/// Complex spectral coefficients, one row per channel
#[derive(Debug, Clone, PartialEq)]
pub struct SpectrumMatrix {
    data: Array2<Complex<f64>>,
}

impl SpectrumMatrix {
    pub fn new(data: Array2<Complex<f64>>) -> Self {
        Self {
            data: data.as_standard_layout().into_owned(),
        }
    }

    pub fn channel_count(&self) -> usize {
        self.data.nrows()
    }

    /// Number of transformed columns (selected samples)
    pub fn len(&self) -> usize {
        self.data.ncols()
    }

    pub fn is_empty(&self) -> bool {
        self.data.ncols() == 0
    }

    pub fn channel(&self, index: usize) -> Option<ArrayView1<'_, Complex<f64>>> {
        (index < self.channel_count()).then(|| self.data.row(index))
    }

    pub fn view(&self) -> ArrayView2<'_, Complex<f64>> {
        self.data.view()
    }

    /// Bin frequencies in Hz for a spectrum taken at `sample_period` spacing
    pub fn frequencies(&self, sample_period: f64) -> Vec<f64> {
        fft_frequencies(self.len(), sample_period)
    }

    pub fn into_inner(self) -> Array2<Complex<f64>> {
        self.data
    }
}

/// Transform direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Unnormalized forward DFT
    #[default]
    Forward,

    /// Inverse DFT normalized by the transform length
    Inverse,
}

impl Direction {
    pub fn from_inverse(inverse: bool) -> Self {
        if inverse {
            Self::Inverse
        } else {
            Self::Forward
        }
    }

    pub fn is_inverse(self) -> bool {
        self == Self::Inverse
    }
}

/// Data a transform can run over
///
/// Integer samples are only widened to complex inside the transform.
#[derive(Debug, Clone, Copy)]
pub enum TransformInput<'a> {
    Samples(&'a SampleMatrix),
    Spectrum(&'a SpectrumMatrix),
}

impl TransformInput<'_> {
    fn channel_count(&self) -> usize {
        match self {
            Self::Samples(m) => m.channel_count(),
            Self::Spectrum(m) => m.channel_count(),
        }
    }

    fn column_count(&self) -> usize {
        match self {
            Self::Samples(m) => m.frame_count(),
            Self::Spectrum(m) => m.len(),
        }
    }
}

impl<'a> From<&'a SampleMatrix> for TransformInput<'a> {
    fn from(samples: &'a SampleMatrix) -> Self {
        Self::Samples(samples)
    }
}

impl<'a> From<&'a SpectrumMatrix> for TransformInput<'a> {
    fn from(spectrum: &'a SpectrumMatrix) -> Self {
        Self::Spectrum(spectrum)
    }
}

/// Transformer configuration
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TransformConfig {
    /// Columns to transform (default: the whole axis)
    pub window: TimeWindow,

    /// Forward or inverse (default: forward)
    pub direction: Direction,
}

/// Windowed DFT over sample or spectrum matrices
///
/// Holds an FFT engine so repeated calls reuse plans.
pub struct SpectrumTransformer {
    config: TransformConfig,
    engine: FftEngine,
}

impl SpectrumTransformer {
    pub fn new(config: TransformConfig) -> Self {
        Self {
            config,
            engine: FftEngine::new(),
        }
    }

    /// Transform the configured window of `input`
    ///
    /// # Arguments
    /// * `input` - Samples or a previous spectrum
    /// * `time_axis` - Timestamps paired with the input's columns
    ///
    /// # Returns
    /// The spectrum and the timestamps of the columns that were selected
    pub fn transform<'a>(
        &mut self,
        input: impl Into<TransformInput<'a>>,
        time_axis: &TimeAxis,
    ) -> Result<(SpectrumMatrix, TimeAxis), InvalidArgument> {
        let input = input.into();

        if input.column_count() != time_axis.len() {
            return Err(InvalidArgument::new(format!(
                "time axis has {} entries but the matrix has {} columns",
                time_axis.len(),
                input.column_count()
            )));
        }

        let selected = self.config.window.select_indices(time_axis);
        log::trace!(
            "Transforming {} of {} columns ({:?}, {:?})",
            selected.len(),
            time_axis.len(),
            self.config.window,
            self.config.direction
        );

        let mut output = Array2::<Complex<f64>>::zeros((input.channel_count(), selected.len()));

        match input {
            TransformInput::Samples(samples) => {
                let window = samples.select_columns(&selected);
                for (row, mut out) in window.axis_iter(Axis(0)).zip(output.axis_iter_mut(Axis(0))) {
                    let spectrum = match self.config.direction {
                        Direction::Forward => {
                            let real: Vec<f64> = row.iter().map(|&s| s as f64).collect();
                            self.engine.forward_real(&real)
                        }
                        Direction::Inverse => {
                            let mut buffer: Vec<Complex<f64>> =
                                row.iter().map(|&s| Complex::new(s as f64, 0.0)).collect();
                            self.engine.inverse(&mut buffer);
                            buffer
                        }
                    };
                    out.assign(&ArrayView1::from(&spectrum));
                }
            }
            TransformInput::Spectrum(spectrum) => {
                let window = spectrum.view().select(Axis(1), &selected);
                for (row, mut out) in window.axis_iter(Axis(0)).zip(output.axis_iter_mut(Axis(0))) {
                    let mut buffer = row.to_vec();
                    match self.config.direction {
                        Direction::Forward => self.engine.forward(&mut buffer),
                        Direction::Inverse => self.engine.inverse(&mut buffer),
                    }
                    out.assign(&ArrayView1::from(&buffer));
                }
            }
        }

        Ok((SpectrumMatrix::new(output), time_axis.select(&selected)))
    }

    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    pub fn update_config(&mut self, config: TransformConfig) {
        self.config = config;
    }
}

impl Default for SpectrumTransformer {
    fn default() -> Self {
        Self::new(TransformConfig::default())
    }
}

/// One-shot windowed transform
///
/// # Arguments
/// * `input` - Samples or a previous spectrum
/// * `time_axis` - Timestamps paired with the input's columns
/// * `window` - Columns to transform; `TimeWindow::Full` for all of them
/// * `direction` - Forward or inverse DFT
pub fn transform<'a>(
    input: impl Into<TransformInput<'a>>,
    time_axis: &TimeAxis,
    window: TimeWindow,
    direction: Direction,
) -> Result<(SpectrumMatrix, TimeAxis), InvalidArgument> {
    SpectrumTransformer::new(TransformConfig { window, direction }).transform(input, time_axis)
}
