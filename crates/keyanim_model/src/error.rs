// SPDX-License-Identifier: MIT OR Apache-2.0
//! Errors raised by the animation model.

/// Result alias used throughout the model crate
pub type Result<T> = std::result::Result<T, AnimationError>;

/// Error when mutating or querying an animation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnimationError {
    /// A shape with this name is already registered
    #[error("Shape already exists: {0}")]
    DuplicateName(String),

    /// No shape is registered under this name
    #[error("Shape not found: {0}")]
    ShapeNotFound(String),

    /// No keyframe exists at exactly this time
    #[error("No keyframe at time {0}")]
    KeyframeNotFound(i32),

    /// Width or height is not strictly positive
    #[error("Invalid dimensions {width}x{height}: width and height must be positive")]
    InvalidDimension {
        /// Requested width
        width: i32,
        /// Requested height
        height: i32,
    },

    /// Negative time, or a time that would break the sequence ordering
    #[error("Invalid time {time}: {reason}")]
    InvalidTime {
        /// Offending time
        time: i32,
        /// What was wrong with it
        reason: &'static str,
    },

    /// A keyframe already exists at this time
    #[error("A keyframe already exists at time {0}")]
    OverlappingTime(i32),

    /// The operation needs at least one keyframe
    #[error("Keyframe sequence is empty")]
    EmptySequence,

    /// The query time falls outside the sequence's timeline
    #[error("Time {time} is outside the range {start}..={end}")]
    OutOfRange {
        /// Query time
        time: i32,
        /// First keyframe time
        start: i32,
        /// Last keyframe time
        end: i32,
    },
}

impl AnimationError {
    /// True for both shape and keyframe lookup failures
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ShapeNotFound(_) | Self::KeyframeNotFound(_))
    }
}
