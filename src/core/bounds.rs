//! Axis ranges for the chart.

use std::fmt;

use crate::core::data::Point;

/// Which axis we’re measuring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    #[inline]
    fn of(self, p: &Point) -> f64 {
        match self {
            Self::X => p.x,
            Self::Y => p.y,
        }
    }

    /// Inclusive bounds without any padding.
    ///
    /// * If the series is empty or contains only non-finite values the
    ///   fallback is `(0.0, 1.0)`.
    /// * If *all* finite points are identical we expand by +-0.5 so the chart
    ///   still has non-zero height/width.
    #[must_use]
    pub fn bounds(self, points: &[Point]) -> (f64, f64) {
        let (mut low, mut high) = (f64::INFINITY, f64::NEG_INFINITY);

        for v in points.iter().map(|p| self.of(p)) {
            low = low.min(v);
            high = high.max(v);
        }

        if !low.is_finite() || !high.is_finite() {
            return (0.0, 1.0);
        }

        // Degenerate (flat-line) series - give it some breathing room.
        if (high - low).abs() < f64::EPSILON {
            return (low - 0.5, high + 0.5);
        }

        (low, high)
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::X => "X",
            Self::Y => "Y",
        })
    }
}
