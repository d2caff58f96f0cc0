// SPDX-License-Identifier: MIT OR Apache-2.0
//! Linear tweening between two keyframes.

use crate::error::{AnimationError, Result};
use crate::keyframe::{Keyframe, Rgb};

/// Interpolation utilities
pub struct Interpolation;

impl Interpolation {
    /// Blend one integer channel at `time` between `t0` and `t1`
    ///
    /// Computes `start * (t1 - t) / (t1 - t0) + end * (t - t0) / (t1 - t0)` and
    /// rounds to the nearest integer, ties away from zero.
    pub fn lerp(start: i32, end: i32, t0: i32, t1: i32, time: i32) -> i32 {
        if t0 == t1 {
            return start;
        }
        let span = f64::from(t1) - f64::from(t0);
        let before = f64::from(t1) - f64::from(time);
        let after = f64::from(time) - f64::from(t0);
        let value = f64::from(start) * before / span + f64::from(end) * after / span;
        value.round() as i32
    }

    /// Compute the state at `time` between `start` and `end`
    ///
    /// A zero-duration pair returns `start` unchanged. The result is a new
    /// keyframe at `time`; nothing is inserted anywhere.
    pub fn between(start: &Keyframe, end: &Keyframe, time: i32) -> Result<Keyframe> {
        let (t0, t1) = (start.time(), end.time());
        if time < t0 || time > t1 {
            return Err(AnimationError::OutOfRange { time, start: t0, end: t1 });
        }
        if t0 == t1 {
            return Ok(*start);
        }

        let lerp = |a: i32, b: i32| Self::lerp(a, b, t0, t1, time);
        let (from, to) = (start.color(), end.color());
        let color = Rgb::clamped(
            lerp(i32::from(from.red), i32::from(to.red)),
            lerp(i32::from(from.green), i32::from(to.green)),
            lerp(i32::from(from.blue), i32::from(to.blue)),
        );

        // Both sides are positive, so the blend of them is at least 1.
        Ok(Keyframe::from_parts(
            time,
            [lerp(start.x(), end.x()), lerp(start.y(), end.y())],
            [lerp(start.width(), end.width()), lerp(start.height(), end.height())],
            color,
            lerp(start.rotation(), end.rotation()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(time: i32, v: i32) -> Keyframe {
        Keyframe::new(time, [v, v], [v, v], [v, v, v]).unwrap()
    }

    #[test]
    fn test_linear_midpoints() {
        let start = uniform(1, 1);
        let end = uniform(5, 5);
        let mid = Interpolation::between(&start, &end, 2).unwrap();
        assert_eq!(mid.display(), "2 2 2 2 2 2 2 2");

        let three = Interpolation::between(&start, &end, 3).unwrap();
        assert_eq!(three.display(), "3 3 3 3 3 3 3 3");
    }

    #[test]
    fn test_endpoints_are_exact() {
        let start = Keyframe::new(10, [0, 100], [10, 20], [0, 0, 0]).unwrap();
        let end = Keyframe::new(20, [50, -100], [30, 40], [255, 255, 255]).unwrap();
        assert_eq!(Interpolation::between(&start, &end, 10).unwrap(), start);
        assert_eq!(
            Interpolation::between(&start, &end, 20).unwrap().display(),
            end.display()
        );
    }

    #[test]
    fn test_rounding_is_half_away_from_zero() {
        // 0 -> 1 over two ticks: halfway is 0.5
        assert_eq!(Interpolation::lerp(0, 1, 0, 2, 1), 1);
        assert_eq!(Interpolation::lerp(0, -1, 0, 2, 1), -1);
        // 0 -> 10 over three ticks: 3.33 and 6.67
        assert_eq!(Interpolation::lerp(0, 10, 0, 3, 1), 3);
        assert_eq!(Interpolation::lerp(0, 10, 0, 3, 2), 7);
    }

    #[test]
    fn test_zero_duration_pair_returns_start() {
        let start = Keyframe::new(3, [1, 2], [3, 4], [5, 6, 7]).unwrap();
        let end = Keyframe::new(3, [9, 9], [9, 9], [9, 9, 9]).unwrap();
        assert_eq!(Interpolation::between(&start, &end, 3).unwrap(), start);
        assert_eq!(Interpolation::lerp(4, 8, 3, 3, 3), 4);
    }

    #[test]
    fn test_rotation_is_interpolated() {
        let start = uniform(0, 10).with_rotation(0);
        let end = uniform(10, 10).with_rotation(90);
        let mid = Interpolation::between(&start, &end, 5).unwrap();
        assert_eq!(mid.rotation(), 45);
    }

    #[test]
    fn test_query_outside_pair_rejected() {
        let start = uniform(2, 1);
        let end = uniform(4, 1);
        let err = Interpolation::between(&start, &end, 5).unwrap_err();
        assert_eq!(err, AnimationError::OutOfRange { time: 5, start: 2, end: 4 });
    }
}
