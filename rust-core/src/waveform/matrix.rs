//! Channel-major sample storage and its paired time axis

use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};
use crate::error::InvalidArgument;

/// 16-bit PCM samples, one row per channel
///
/// Rows always share the same length (`frame_count`) and there is at least
/// one row. Storage is kept in standard layout so each channel is contiguous.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleMatrix {
    data: Array2<i16>,
}

impl SampleMatrix {
    /// Wrap an existing `(channel_count, frame_count)` array
    pub fn new(data: Array2<i16>) -> Result<Self, InvalidArgument> {
        if data.nrows() == 0 {
            return Err(InvalidArgument::new("sample matrix needs at least one channel"));
        }

        Ok(Self {
            data: data.as_standard_layout().into_owned(),
        })
    }

    /// Build from frame-interleaved samples (channel index varies fastest)
    ///
    /// # Arguments
    /// * `interleaved` - Flat samples in on-disk order
    /// * `channel_count` - Number of channels per frame
    ///
    /// # Returns
    /// Matrix of shape `(channel_count, interleaved.len() / channel_count)`
    pub fn from_interleaved(interleaved: Vec<i16>, channel_count: usize) -> Result<Self, InvalidArgument> {
        if channel_count == 0 {
            return Err(InvalidArgument::new("sample matrix needs at least one channel"));
        }
        if interleaved.len() % channel_count != 0 {
            return Err(InvalidArgument::new(format!(
                "{} samples do not split into whole frames of {} channels",
                interleaved.len(),
                channel_count
            )));
        }

        let frame_count = interleaved.len() / channel_count;
        let frames = Array2::from_shape_vec((frame_count, channel_count), interleaved)
            .map_err(|e| InvalidArgument::new(e.to_string()))?;

        // (frames, channels) -> (channels, frames)
        Self::new(frames.reversed_axes())
    }

    pub fn channel_count(&self) -> usize {
        self.data.nrows()
    }

    pub fn frame_count(&self) -> usize {
        self.data.ncols()
    }

    /// Samples of a single channel in chronological order
    pub fn channel(&self, index: usize) -> Option<ArrayView1<'_, i16>> {
        (index < self.channel_count()).then(|| self.data.row(index))
    }

    pub fn view(&self) -> ArrayView2<'_, i16> {
        self.data.view()
    }

    /// Keep only the given columns, in the given order
    pub fn select_columns(&self, columns: &[usize]) -> Array2<i16> {
        self.data.select(Axis(1), columns)
    }

    pub fn into_inner(self) -> Array2<i16> {
        self.data
    }
}

/// Timestamps in seconds, positionally paired with the columns of a matrix
#[derive(Debug, Clone, PartialEq)]
pub struct TimeAxis {
    times: Array1<f64>,
}

impl TimeAxis {
    /// Validate caller-supplied timestamps (finite, strictly increasing)
    pub fn new(times: Vec<f64>) -> Result<Self, InvalidArgument> {
        if let Some(bad) = times.iter().find(|t| !t.is_finite()) {
            return Err(InvalidArgument::new(format!("time axis contains non-finite value {}", bad)));
        }
        if let Some(i) = times.windows(2).position(|w| w[1] <= w[0]) {
            return Err(InvalidArgument::new(format!(
                "time axis is not strictly increasing at index {}",
                i + 1
            )));
        }

        Ok(Self {
            times: Array1::from(times),
        })
    }

    /// `frame_index * (1 / frame_rate)` for every frame
    pub fn from_frame_rate(frame_count: usize, frame_rate: u32) -> Result<Self, InvalidArgument> {
        if frame_rate == 0 {
            return Err(InvalidArgument::new("frame rate must be positive"));
        }

        let period = 1.0 / frame_rate as f64;
        let times = (0..frame_count).map(|i| i as f64 * period).collect::<Array1<f64>>();

        Ok(Self { times })
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn first(&self) -> Option<f64> {
        self.times.first().copied()
    }

    pub fn last(&self) -> Option<f64> {
        self.times.last().copied()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.times.get(index).copied()
    }

    /// Spacing between the first two timestamps, if there are two
    pub fn sample_period(&self) -> Option<f64> {
        match (self.get(0), self.get(1)) {
            (Some(a), Some(b)) => Some(b - a),
            _ => None,
        }
    }

    /// Positional subsequence at `indices`
    pub fn select(&self, indices: &[usize]) -> Self {
        Self {
            times: self.times.select(Axis(0), indices),
        }
    }

    pub fn view(&self) -> ArrayView1<'_, f64> {
        self.times.view()
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.times.to_vec()
    }
}
