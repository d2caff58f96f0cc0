// SPDX-License-Identifier: MIT OR Apache-2.0
//! Named shapes and their kinds.

use crate::sequence::KeyframeSequence;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Ellipse inscribed in the keyframe's bounding box
    Ellipse,
    /// Axis-aligned rectangle
    Rectangle,
}

impl ShapeKind {
    /// Every supported kind
    pub const ALL: [ShapeKind; 2] = [ShapeKind::Ellipse, ShapeKind::Rectangle];

    /// Get the name used in text output
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ellipse => "ellipse",
            Self::Rectangle => "rectangle",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error when parsing an unknown shape kind
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown shape kind: {0}")]
pub struct UnknownShapeKind(pub String);

impl FromStr for ShapeKind {
    type Err = UnknownShapeKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ellipse" | "oval" => Ok(Self::Ellipse),
            "rectangle" | "rect" => Ok(Self::Rectangle),
            other => Err(UnknownShapeKind(other.to_string())),
        }
    }
}

/// A named shape owning its keyframe timeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    name: String,
    kind: ShapeKind,
    keyframes: KeyframeSequence,
}

impl Shape {
    /// Create a shape with an empty timeline
    pub fn new(name: impl Into<String>, kind: ShapeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            keyframes: KeyframeSequence::new(),
        }
    }

    /// Shape name, unique within a model
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Shape kind
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// The shape's keyframes
    pub fn keyframes(&self) -> &KeyframeSequence {
        &self.keyframes
    }

    /// Mutable access to the shape's keyframes
    pub(crate) fn keyframes_mut(&mut self) -> &mut KeyframeSequence {
        &mut self.keyframes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parsing() {
        assert_eq!("ellipse".parse::<ShapeKind>().unwrap(), ShapeKind::Ellipse);
        assert_eq!("Rectangle".parse::<ShapeKind>().unwrap(), ShapeKind::Rectangle);
        assert_eq!(" rect ".parse::<ShapeKind>().unwrap(), ShapeKind::Rectangle);
        assert_eq!(
            "triangle".parse::<ShapeKind>().unwrap_err(),
            UnknownShapeKind("triangle".to_string())
        );
    }

    #[test]
    fn test_kind_names_round_trip() {
        for kind in ShapeKind::ALL {
            assert_eq!(kind.to_string().parse::<ShapeKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_new_shape_is_empty() {
        let shape = Shape::new("R", ShapeKind::Rectangle);
        assert_eq!(shape.name(), "R");
        assert_eq!(shape.kind(), ShapeKind::Rectangle);
        assert!(shape.keyframes().is_empty());
    }
}
