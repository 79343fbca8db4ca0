//! Windowed spectral transforms

pub mod fft;
pub mod window;
pub mod transform;

pub use fft::{fft_frequencies, FftEngine};
pub use window::TimeWindow;
pub use transform::{
    transform, Direction, SpectrumMatrix, SpectrumTransformer, TransformConfig, TransformInput,
};
