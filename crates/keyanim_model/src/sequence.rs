// SPDX-License-Identifier: MIT OR Apache-2.0
//! Time-ordered keyframe storage for a single shape.

use crate::error::{AnimationError, Result};
use crate::interpolation::Interpolation;
use crate::keyframe::Keyframe;
use std::collections::BTreeMap;
use std::ops::Bound;

/// Ordered keyframes of one shape, unique by time
///
/// The timeline is append-only: new keyframes must come strictly after the
/// current last one, with gaps allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyframeSequence {
    keyframes: BTreeMap<i32, Keyframe>,
}

impl KeyframeSequence {
    /// Create an empty sequence
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a keyframe after the current last one
    pub fn add(&mut self, keyframe: Keyframe) -> Result<()> {
        let time = keyframe.time();
        match self.end_time() {
            Some(end) if time == end => return Err(AnimationError::OverlappingTime(time)),
            Some(end) if time < end => {
                return Err(AnimationError::InvalidTime {
                    time,
                    reason: "cannot insert into the middle of a sequence",
                });
            }
            _ => {}
        }
        self.keyframes.insert(time, keyframe);
        Ok(())
    }

    /// Hold the last keyframe's state until `time`
    pub fn extend(&mut self, time: i32) -> Result<()> {
        let last = self.last().ok_or(AnimationError::EmptySequence)?;
        let extended = last.extend(time)?;
        self.add(extended)
    }

    /// Remove and return the last keyframe
    pub fn delete_last(&mut self) -> Result<Keyframe> {
        self.keyframes
            .pop_last()
            .map(|(_, kf)| kf)
            .ok_or(AnimationError::EmptySequence)
    }

    /// Remove and return the keyframe at exactly `time`
    pub fn delete_at(&mut self, time: i32) -> Result<Keyframe> {
        self.keyframes
            .remove(&time)
            .ok_or(AnimationError::KeyframeNotFound(time))
    }

    /// Replace the values of the keyframe at exactly `time`
    ///
    /// The slot keeps its time and rotation. Nothing changes on failure.
    pub fn edit_at(&mut self, time: i32, position: [i32; 2], size: [i32; 2], color: [i32; 3]) -> Result<()> {
        let slot = self
            .keyframes
            .get_mut(&time)
            .ok_or(AnimationError::KeyframeNotFound(time))?;
        let replacement = Keyframe::new(time, position, size, color)?.with_rotation(slot.rotation());
        *slot = replacement;
        Ok(())
    }

    /// Interpolated state at `time`
    pub fn state_at(&self, time: i32) -> Result<Keyframe> {
        let (start, end) = match (self.first(), self.last()) {
            (Some(first), Some(last)) => (first.time(), last.time()),
            _ => return Err(AnimationError::EmptySequence),
        };
        if time < start || time > end {
            return Err(AnimationError::OutOfRange { time, start, end });
        }

        let floor = self.keyframes.range(..=time).next_back().map(|(_, kf)| kf);
        let ceiling = self.keyframes.range(time..).next().map(|(_, kf)| kf);
        match (floor, ceiling) {
            (Some(floor), Some(ceiling)) => Interpolation::between(floor, ceiling, time),
            _ => Err(AnimationError::OutOfRange { time, start, end }),
        }
    }

    /// Owned snapshot of every keyframe in time order
    pub fn all(&self) -> Vec<Keyframe> {
        self.keyframes.values().copied().collect()
    }

    /// Iterate keyframes in time order
    pub fn iter(&self) -> impl Iterator<Item = &Keyframe> {
        self.keyframes.values()
    }

    /// Consecutive `(k_i, k_i+1)` pairs
    pub fn pairs(&self) -> impl Iterator<Item = (&Keyframe, &Keyframe)> {
        self.keyframes
            .values()
            .zip(self.keyframes.values().skip(1))
    }

    /// Keyframe at exactly `time`
    pub fn get(&self, time: i32) -> Option<&Keyframe> {
        self.keyframes.get(&time)
    }

    /// Earliest keyframe
    pub fn first(&self) -> Option<&Keyframe> {
        self.keyframes.values().next()
    }

    /// Latest keyframe
    pub fn last(&self) -> Option<&Keyframe> {
        self.keyframes.values().next_back()
    }

    /// Keyframe strictly after `time`
    pub fn next_after(&self, time: i32) -> Option<&Keyframe> {
        self.keyframes
            .range((Bound::Excluded(time), Bound::Unbounded))
            .next()
            .map(|(_, kf)| kf)
    }

    /// Time of the first keyframe
    pub fn start_time(&self) -> Option<i32> {
        self.first().map(Keyframe::time)
    }

    /// Time of the last keyframe
    pub fn end_time(&self) -> Option<i32> {
        self.last().map(Keyframe::time)
    }

    /// Whether `time` lies within the first..=last range
    pub fn covers(&self, time: i32) -> bool {
        matches!((self.start_time(), self.end_time()), (Some(s), Some(e)) if s <= time && time <= e)
    }

    /// Number of keyframes
    pub fn len(&self) -> usize {
        self.keyframes.len()
    }

    /// True when there are no keyframes
    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }
}
