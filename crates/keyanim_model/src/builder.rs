// SPDX-License-Identifier: MIT OR Apache-2.0
//! Entry points used by description parsers to populate a model.

use crate::error::Result;
use crate::keyframe::Keyframe;
use crate::model::AnimationModel;
use crate::shape::ShapeKind;

/// Receiver for the calls a parsed animation description produces
///
/// Calls may arrive in any order as long as a shape is declared before its
/// keyframes and each shape's keyframes arrive in time order.
pub trait AnimationBuilder {
    /// The finished animation
    type Output;

    /// Set the canvas bounds
    fn set_bounds(&mut self, x: i32, y: i32, width: i32, height: i32) -> Result<&mut Self>;

    /// Declare a new shape
    fn declare_shape(&mut self, name: &str, kind: ShapeKind) -> Result<&mut Self>;

    /// Add a keyframe to a declared shape
    fn add_keyframe(
        &mut self,
        name: &str,
        time: i32,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        red: i32,
        green: i32,
        blue: i32,
    ) -> Result<&mut Self>;

    /// Finish building
    fn build(self) -> Self::Output;
}

/// Builds an [`AnimationModel`]
#[derive(Debug, Default)]
pub struct ModelBuilder {
    model: AnimationModel,
}

impl ModelBuilder {
    /// Start from an empty model
    pub fn new() -> Self {
        Self::default()
    }
}

impl AnimationBuilder for ModelBuilder {
    type Output = AnimationModel;

    fn set_bounds(&mut self, x: i32, y: i32, width: i32, height: i32) -> Result<&mut Self> {
        self.model.set_bounds(x, y, width, height)?;
        Ok(self)
    }

    fn declare_shape(&mut self, name: &str, kind: ShapeKind) -> Result<&mut Self> {
        self.model.add_shape(name, kind)?;
        Ok(self)
    }

    fn add_keyframe(
        &mut self,
        name: &str,
        time: i32,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        red: i32,
        green: i32,
        blue: i32,
    ) -> Result<&mut Self> {
        let keyframe = Keyframe::new(time, [x, y], [width, height], [red, green, blue])?;
        self.model.add_motion(name, keyframe)?;
        Ok(self)
    }

    fn build(self) -> AnimationModel {
        self.model
    }
}
