//! Time windows over a time axis
//!
//! A window picks the columns whose timestamps fall inside a closed interval.

use crate::error::InvalidArgument;
use crate::waveform::TimeAxis;

/// Which part of a recording to transform
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TimeWindow {
    /// The whole axis, from its first timestamp to its last
    #[default]
    Full,

    /// `start <= t <= end`, bounds taken verbatim (start may exceed end)
    Bounded { start: f64, end: f64 },
}

impl TimeWindow {
    /// Sentinel pair meaning "entire axis" in the sequence form
    pub const FULL_SENTINEL: (f64, f64) = (-1.0, -1.0);

    pub fn bounded(start: f64, end: f64) -> Self {
        Self::Bounded { start, end }
    }

    /// Parse a `(start, end)` sequence, mapping the `(-1, -1)` sentinel to `Full`
    pub fn from_bounds(bounds: &[f64]) -> Result<Self, InvalidArgument> {
        match *bounds {
            [start, end] if (start, end) == Self::FULL_SENTINEL => Ok(Self::Full),
            [start, end] => Ok(Self::Bounded { start, end }),
            _ => Err(InvalidArgument::new("window must have exactly two bounds")),
        }
    }

    /// Concrete `(start, end)` on `axis`, or `None` for `Full` on an empty axis
    pub fn resolve(&self, axis: &TimeAxis) -> Option<(f64, f64)> {
        match *self {
            Self::Full => axis.first().zip(axis.last()),
            Self::Bounded { start, end } => Some((start, end)),
        }
    }

    /// Indices `i` with `start <= axis[i] <= end`, in ascending order
    pub fn select_indices(&self, axis: &TimeAxis) -> Vec<usize> {
        let Some((start, end)) = self.resolve(axis) else {
            return Vec::new();
        };

        axis.view()
            .iter()
            .enumerate()
            .filter(|&(_, &t)| start <= t && t <= end)
            .map(|(i, _)| i)
            .collect()
    }
}

impl From<(f64, f64)> for TimeWindow {
    fn from((start, end): (f64, f64)) -> Self {
        Self::Bounded { start, end }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn axis() -> TimeAxis {
        TimeAxis::new(vec![0.0, 0.1, 0.2, 0.3]).unwrap()
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let window = TimeWindow::bounded(0.1, 0.2);
        assert_eq!(window.select_indices(&axis()), vec![1, 2]);
    }

    #[test]
    fn test_full_resolves_to_axis_ends() {
        assert_eq!(TimeWindow::Full.resolve(&axis()), Some((0.0, 0.3)));
        assert_eq!(TimeWindow::Full.select_indices(&axis()), vec![0, 1, 2, 3]);
        assert_eq!(
            TimeWindow::Full.select_indices(&axis()),
            TimeWindow::bounded(0.0, 0.3).select_indices(&axis())
        );
    }

    #[test]
    fn test_full_on_empty_axis_selects_nothing() {
        let empty = TimeAxis::new(Vec::new()).unwrap();
        assert_eq!(TimeWindow::Full.resolve(&empty), None);
        assert!(TimeWindow::Full.select_indices(&empty).is_empty());
    }

    #[test]
    fn test_degenerate_windows_select_nothing() {
        assert!(TimeWindow::bounded(5.0, 1.0).select_indices(&axis()).is_empty());
        assert!(TimeWindow::bounded(0.25, 0.22).select_indices(&axis()).is_empty());
        assert!(TimeWindow::bounded(1.0, 2.0).select_indices(&axis()).is_empty());
        assert!(TimeWindow::bounded(f64::NAN, 1.0).select_indices(&axis()).is_empty());
    }

    #[test]
    fn test_from_bounds() {
        assert_eq!(TimeWindow::from_bounds(&[-1.0, -1.0]), Ok(TimeWindow::Full));
        assert_eq!(
            TimeWindow::from_bounds(&[0.5, 1.5]),
            Ok(TimeWindow::bounded(0.5, 1.5))
        );
        // Only the exact pair is the sentinel
        assert_eq!(
            TimeWindow::from_bounds(&[-1.0, 2.0]),
            Ok(TimeWindow::bounded(-1.0, 2.0))
        );

        let err = TimeWindow::from_bounds(&[0.5]).unwrap_err();
        assert!(err.to_string().contains("exactly two bounds"));
        assert!(TimeWindow::from_bounds(&[0.0, 1.0, 2.0]).is_err());
        assert!(TimeWindow::from_bounds(&[]).is_err());
    }
}
