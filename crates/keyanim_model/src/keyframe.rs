// SPDX-License-Identifier: MIT OR Apache-2.0
//! Keyframe definitions for shape timelines.

use crate::error::{AnimationError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An RGB color with channels in `0..=255`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel
    pub red: u8,
    /// Green channel
    pub green: u8,
    /// Blue channel
    pub blue: u8,
}

impl Rgb {
    /// Create a color, clamping each channel into `0..=255`
    pub fn clamped(red: i32, green: i32, blue: i32) -> Self {
        Self {
            red: clamp_channel(red),
            green: clamp_channel(green),
            blue: clamp_channel(blue),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.red, self.green, self.blue)
    }
}

fn clamp_channel(value: i32) -> u8 {
    // In range after the clamp, so the cast is lossless.
    value.clamp(0, 255) as u8
}

/// The visual state of a shape at one instant
///
/// Keyframes are immutable: every "change" produces a new keyframe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Keyframe {
    time: i32,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    color: Rgb,
    rotation: i32,
}

impl Keyframe {
    /// Create a new keyframe
    ///
    /// Fails with [`AnimationError::InvalidTime`] for a negative time and
    /// [`AnimationError::InvalidDimension`] unless both sides are positive.
    /// Color channels are clamped rather than rejected.
    pub fn new(time: i32, position: [i32; 2], size: [i32; 2], color: [i32; 3]) -> Result<Self> {
        if time < 0 {
            return Err(AnimationError::InvalidTime {
                time,
                reason: "time cannot be negative",
            });
        }
        let [width, height] = size;
        if width <= 0 || height <= 0 {
            return Err(AnimationError::InvalidDimension { width, height });
        }

        Ok(Self {
            time,
            x: position[0],
            y: position[1],
            width,
            height,
            color: Rgb::clamped(color[0], color[1], color[2]),
            rotation: 0,
        })
    }

    /// Set the rotation in degrees
    pub fn with_rotation(mut self, degrees: i32) -> Self {
        self.rotation = degrees;
        self
    }

    /// Copy this keyframe to a new time, keeping every other field
    ///
    /// Ordering against other keyframes is checked by the sequence, not here.
    pub fn extend(&self, new_time: i32) -> Result<Self> {
        if new_time < 0 {
            return Err(AnimationError::InvalidTime {
                time: new_time,
                reason: "time cannot be negative",
            });
        }
        Ok(Self { time: new_time, ..*self })
    }

    /// Build a keyframe from already-validated parts
    pub(crate) fn from_parts(time: i32, position: [i32; 2], size: [i32; 2], color: Rgb, rotation: i32) -> Self {
        Self {
            time,
            x: position[0],
            y: position[1],
            width: size[0],
            height: size[1],
            color,
            rotation,
        }
    }

    /// Time of this keyframe
    pub fn time(&self) -> i32 {
        self.time
    }

    /// Horizontal position
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Vertical position
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Width, always positive
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height, always positive
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Fill color
    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Rotation in degrees
    pub fn rotation(&self) -> i32 {
        self.rotation
    }

    /// `time x y width height red green blue`
    ///
    /// Rotation is not part of this rendering; read it with [`Keyframe::rotation`].
    pub fn display(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Keyframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {} {}",
            self.time,
            self.x,
            self.y,
            self.width,
            self.height,
            self.color.red,
            self.color.green,
            self.color.blue
        )
    }
}
