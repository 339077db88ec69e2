//! Piecewise-linear easing curve used to slow the camera down with zoom.

use serde::{Deserialize, Serialize};

/// A single keyframe on a [`SlowdownCurve`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Position along the curve, usually in `[0, 1]`.
    pub offset: f64,
    /// Multiplier returned at `offset`.
    pub value: f64,
}

impl CurvePoint {
    pub const fn new(offset: f64, value: f64) -> Self {
        Self { offset, value }
    }
}

/// Maps a normalized zoom level to a speed multiplier.
///
/// Samples outside the keyframe range return the nearest end value, and a
/// curve with no keyframes samples to `1.0` (no slowdown).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<CurvePoint>", into = "Vec<CurvePoint>")]
pub struct SlowdownCurve {
    /// Keyframes sorted by offset.
    points: Vec<CurvePoint>,
}

impl SlowdownCurve {
    /// Build a curve from keyframes in any order. Non-finite keyframes are dropped.
    pub fn new(points: impl IntoIterator<Item = CurvePoint>) -> Self {
        let mut points: Vec<CurvePoint> = points
            .into_iter()
            .filter(|p| p.offset.is_finite() && p.value.is_finite())
            .collect();
        points.sort_by(|a, b| a.offset.total_cmp(&b.offset));
        Self { points }
    }

    /// Straight line from `from` at offset 0 to `to` at offset 1.
    pub fn linear(from: f64, to: f64) -> Self {
        Self::new([CurvePoint::new(0.0, from), CurvePoint::new(1.0, to)])
    }

    /// Flat curve returning `value` everywhere.
    pub fn constant(value: f64) -> Self {
        Self::new([CurvePoint::new(0.0, value)])
    }

    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// Evaluate the curve at `t`.
    pub fn sample(&self, t: f64) -> f64 {
        let (Some(first), Some(last)) = (self.points.first(), self.points.last()) else {
            return 1.0;
        };
        if t.is_nan() || t <= first.offset {
            return first.value;
        }
        if t >= last.offset {
            return last.value;
        }

        // First keyframe strictly past t; t > first.offset guarantees idx >= 1.
        let idx = self.points.partition_point(|p| p.offset <= t);
        let a = self.points[idx - 1];
        let b = self.points[idx];
        let span = b.offset - a.offset;
        if span <= 0.0 {
            return b.value;
        }
        a.value + (b.value - a.value) * ((t - a.offset) / span)
    }
}

impl Default for SlowdownCurve {
    fn default() -> Self {
        Self::constant(1.0)
    }
}

impl From<Vec<CurvePoint>> for SlowdownCurve {
    fn from(points: Vec<CurvePoint>) -> Self {
        Self::new(points)
    }
}

impl From<SlowdownCurve> for Vec<CurvePoint> {
    fn from(curve: SlowdownCurve) -> Self {
        curve.points
    }
}
