//! Waveform loading from 16-bit PCM WAV files

pub mod matrix;
pub mod loader;

pub use matrix::{SampleMatrix, TimeAxis};
pub use loader::{decode, load, load_waveform, read_header, WaveHeader, Waveform};
