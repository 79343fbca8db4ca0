//! Wave Spectrum - PCM Waveform Loading and Windowed DFT
//!
//! Decodes 16-bit PCM WAV files into channel-major sample matrices and
//! computes forward or inverse Fourier transforms over time windows.

// Suppress PyO3 non-local impl warnings (harmless macro-generated code)
#![cfg_attr(feature = "python", allow(non_local_definitions))]

pub mod error;
pub mod waveform;
pub mod spectrum;
#[cfg(feature = "python")]
pub mod python_bindings;

pub use error::{DecodeError, InvalidArgument};
pub use waveform::{load, SampleMatrix, TimeAxis};
pub use spectrum::{transform, Direction, SpectrumMatrix, SpectrumTransformer, TimeWindow};
