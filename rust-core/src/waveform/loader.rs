//! WAV file decoding into a channel-major sample matrix
//!
//! The RIFF header is parsed with hound; the payload is then read raw and
//! reinterpreted as little-endian 16-bit signed samples.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use super::matrix::{SampleMatrix, TimeAxis};
use crate::error::DecodeError;

/// The only sample width this loader accepts
pub const SUPPORTED_BITS_PER_SAMPLE: u16 = 16;

/// Header fields the loader relies on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaveHeader {
    pub channel_count: u16,

    /// Bytes per sample
    pub sample_width: u16,

    /// Frames per second
    pub frame_rate: u32,

    pub frame_count: u32,
}

impl WaveHeader {
    fn from_spec(spec: hound::WavSpec, frame_count: u32) -> Self {
        Self {
            channel_count: spec.channels,
            sample_width: (spec.bits_per_sample + 7) / 8,
            frame_rate: spec.sample_rate,
            frame_count,
        }
    }

    /// Payload size implied by the header, `None` if it does not fit in `usize`
    pub fn payload_bytes(&self) -> Option<usize> {
        (self.frame_count as usize)
            .checked_mul(self.channel_count as usize)?
            .checked_mul(self.sample_width as usize)
    }

    /// Recording length in seconds
    pub fn duration_seconds(&self) -> f64 {
        self.frame_count as f64 / self.frame_rate as f64
    }
}

/// A fully decoded recording
#[derive(Debug, Clone)]
pub struct Waveform {
    pub header: WaveHeader,
    pub samples: SampleMatrix,
    pub time_axis: TimeAxis,
}

impl Waveform {
    pub fn into_parts(self) -> (SampleMatrix, TimeAxis) {
        (self.samples, self.time_axis)
    }
}

/// Read and validate only the header of a file
pub fn read_header(path: impl AsRef<Path>) -> Result<WaveHeader, DecodeError> {
    let reader = hound::WavReader::new(open(path.as_ref())?)?;
    validated_header(&reader)
}

/// Decode a file into `(samples, time_axis)`
pub fn load(path: impl AsRef<Path>) -> Result<(SampleMatrix, TimeAxis), DecodeError> {
    load_waveform(path).map(Waveform::into_parts)
}

/// Decode a file, keeping the header alongside the data
pub fn load_waveform(path: impl AsRef<Path>) -> Result<Waveform, DecodeError> {
    let path = path.as_ref();
    log::debug!("Loading waveform from {}", path.display());

    // The file handle lives inside the reader and is dropped on every return path
    decode(open(path)?)
}

/// Decode a WAV stream positioned at its first byte
pub fn decode<R: Read>(source: R) -> Result<Waveform, DecodeError> {
    let reader = hound::WavReader::new(source)?;
    let header = validated_header(&reader)?;

    let expected = header.payload_bytes().ok_or_else(|| {
        DecodeError::Malformed(hound::Error::FormatError("declared payload size overflows"))
    })?;
    let mut payload = Vec::new();
    reader
        .into_inner()
        .take(expected as u64)
        .read_to_end(&mut payload)?;

    if payload.len() < expected {
        return Err(DecodeError::Truncated {
            expected,
            available: payload.len(),
        });
    }

    let interleaved: Vec<i16> = payload
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect();

    let samples = SampleMatrix::from_interleaved(interleaved, header.channel_count as usize)
        .map_err(|e| DecodeError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))?;
    let time_axis = TimeAxis::from_frame_rate(header.frame_count as usize, header.frame_rate)
        .map_err(|_| DecodeError::ZeroFrameRate)?;

    log::debug!(
        "Decoded {} channel(s) x {} frame(s) at {} Hz",
        header.channel_count,
        header.frame_count,
        header.frame_rate
    );

    Ok(Waveform {
        header,
        samples,
        time_axis,
    })
}

fn open(path: &Path) -> Result<BufReader<File>, DecodeError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| DecodeError::Open {
            path: path.to_path_buf(),
            source,
        })
}

fn validated_header<R: Read>(reader: &hound::WavReader<R>) -> Result<WaveHeader, DecodeError> {
    let spec = reader.spec();

    if spec.bits_per_sample != SUPPORTED_BITS_PER_SAMPLE {
        return Err(DecodeError::UnsupportedSampleWidth {
            bits: spec.bits_per_sample,
        });
    }
    if spec.sample_rate == 0 {
        return Err(DecodeError::ZeroFrameRate);
    }

    Ok(WaveHeader::from_spec(spec, reader.duration()))
}
