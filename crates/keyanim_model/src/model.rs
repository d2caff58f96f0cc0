// SPDX-License-Identifier: MIT OR Apache-2.0
//! Animation model containing every shape and the canvas bounds.

use crate::error::{AnimationError, Result};
use crate::keyframe::Keyframe;
use crate::shape::{Shape, ShapeKind};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Origin and size of the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Canvas {
    /// Left edge
    pub x: i32,
    /// Top edge
    pub y: i32,
    /// Width, zero until set
    pub width: i32,
    /// Height, zero until set
    pub height: i32,
}

/// One shape's interpolated state in a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeState<'a> {
    /// Shape name
    pub name: &'a str,
    /// Shape kind
    pub kind: ShapeKind,
    /// State at the frame's time
    pub state: Keyframe,
}

/// Read-only access to an animation
///
/// This is all a renderer gets to see.
pub trait AnimationView {
    /// Canvas bounds
    fn canvas(&self) -> Canvas;

    /// Shapes in declaration order
    fn shapes(&self) -> impl Iterator<Item = &Shape>;

    /// Look up a shape by name
    fn shape(&self, name: &str) -> Option<&Shape>;

    /// Interpolated state of one shape at `time`
    fn state_at(&self, name: &str, time: i32) -> Result<Keyframe> {
        self.shape(name)
            .ok_or_else(|| AnimationError::ShapeNotFound(name.to_string()))?
            .keyframes()
            .state_at(time)
    }

    /// State of every shape whose timeline covers `time`
    fn frame_at(&self, time: i32) -> Vec<ShapeState<'_>> {
        self.shapes()
            .filter_map(|shape| {
                let state = shape.keyframes().state_at(time).ok()?;
                Some(ShapeState {
                    name: shape.name(),
                    kind: shape.kind(),
                    state,
                })
            })
            .collect()
    }

    /// Time of the latest keyframe of any shape
    fn end_time(&self) -> Option<i32> {
        self.shapes().filter_map(|s| s.keyframes().end_time()).max()
    }
}

/// Mutating access to an animation
pub trait AnimationEditor: AnimationView {
    /// Register a new shape with an empty timeline
    fn add_shape(&mut self, name: &str, kind: ShapeKind) -> Result<()>;

    /// Remove a shape and its timeline
    fn delete_shape(&mut self, name: &str) -> Result<Shape>;

    /// Append a keyframe to a shape
    fn add_motion(&mut self, name: &str, keyframe: Keyframe) -> Result<()>;

    /// Hold a shape's last state until `time`
    fn extend(&mut self, name: &str, time: i32) -> Result<()>;

    /// Remove a shape's last keyframe
    fn delete_last_motion(&mut self, name: &str) -> Result<Keyframe>;

    /// Remove a shape's keyframe at exactly `time`
    fn delete_motion_at(&mut self, name: &str, time: i32) -> Result<Keyframe>;

    /// Replace the values of a shape's keyframe at exactly `time`
    fn edit_motion(&mut self, name: &str, time: i32, position: [i32; 2], size: [i32; 2], color: [i32; 3]) -> Result<()>;

    /// Set the canvas bounds
    fn set_bounds(&mut self, x: i32, y: i32, width: i32, height: i32) -> Result<()>;
}

/// The registry of shapes plus canvas bounds
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnimationModel {
    canvas: Canvas,
    shapes: IndexMap<String, Shape>,
}

impl AnimationModel {
    /// Create an empty model
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of shapes
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Whether a shape with this name exists
    pub fn contains_shape(&self, name: &str) -> bool {
        self.shapes.contains_key(name)
    }

    /// Register a new shape with an empty timeline
    pub fn add_shape(&mut self, name: &str, kind: ShapeKind) -> Result<()> {
        if self.shapes.contains_key(name) {
            return Err(AnimationError::DuplicateName(name.to_string()));
        }
        self.shapes.insert(name.to_string(), Shape::new(name, kind));
        tracing::debug!(shape = name, %kind, "added shape");
        Ok(())
    }

    /// Remove a shape and its timeline
    pub fn delete_shape(&mut self, name: &str) -> Result<Shape> {
        // shift_remove keeps the remaining shapes in declaration order
        let shape = self
            .shapes
            .shift_remove(name)
            .ok_or_else(|| AnimationError::ShapeNotFound(name.to_string()))?;
        tracing::debug!(shape = name, "deleted shape");
        Ok(shape)
    }

    /// Append a keyframe to a shape
    pub fn add_motion(&mut self, name: &str, keyframe: Keyframe) -> Result<()> {
        self.shape_mut(name)?.keyframes_mut().add(keyframe)?;
        tracing::trace!(shape = name, time = keyframe.time(), "added keyframe");
        Ok(())
    }

    /// Hold a shape's last state until `time`
    pub fn extend(&mut self, name: &str, time: i32) -> Result<()> {
        self.shape_mut(name)?.keyframes_mut().extend(time)?;
        tracing::trace!(shape = name, time, "extended timeline");
        Ok(())
    }

    /// Remove a shape's last keyframe
    pub fn delete_last_motion(&mut self, name: &str) -> Result<Keyframe> {
        self.shape_mut(name)?.keyframes_mut().delete_last()
    }

    /// Remove a shape's keyframe at exactly `time`
    pub fn delete_motion_at(&mut self, name: &str, time: i32) -> Result<Keyframe> {
        self.shape_mut(name)?.keyframes_mut().delete_at(time)
    }

    /// Replace the values of a shape's keyframe at exactly `time`
    pub fn edit_motion(&mut self, name: &str, time: i32, position: [i32; 2], size: [i32; 2], color: [i32; 3]) -> Result<()> {
        self.shape_mut(name)?
            .keyframes_mut()
            .edit_at(time, position, size, color)
    }

    /// Set the canvas bounds; the last call wins
    pub fn set_bounds(&mut self, x: i32, y: i32, width: i32, height: i32) -> Result<()> {
        if width <= 0 || height <= 0 {
            return Err(AnimationError::InvalidDimension { width, height });
        }
        self.canvas = Canvas { x, y, width, height };
        tracing::debug!(x, y, width, height, "set canvas bounds");
        Ok(())
    }

    fn shape_mut(&mut self, name: &str) -> Result<&mut Shape> {
        self.shapes
            .get_mut(name)
            .ok_or_else(|| AnimationError::ShapeNotFound(name.to_string()))
    }
}

impl AnimationView for AnimationModel {
    fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn shapes(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.values()
    }

    fn shape(&self, name: &str) -> Option<&Shape> {
        self.shapes.get(name)
    }
}

impl AnimationEditor for AnimationModel {
    fn add_shape(&mut self, name: &str, kind: ShapeKind) -> Result<()> {
        AnimationModel::add_shape(self, name, kind)
    }

    fn delete_shape(&mut self, name: &str) -> Result<Shape> {
        AnimationModel::delete_shape(self, name)
    }

    fn add_motion(&mut self, name: &str, keyframe: Keyframe) -> Result<()> {
        AnimationModel::add_motion(self, name, keyframe)
    }

    fn extend(&mut self, name: &str, time: i32) -> Result<()> {
        AnimationModel::extend(self, name, time)
    }

    fn delete_last_motion(&mut self, name: &str) -> Result<Keyframe> {
        AnimationModel::delete_last_motion(self, name)
    }

    fn delete_motion_at(&mut self, name: &str, time: i32) -> Result<Keyframe> {
        AnimationModel::delete_motion_at(self, name, time)
    }

    fn edit_motion(&mut self, name: &str, time: i32, position: [i32; 2], size: [i32; 2], color: [i32; 3]) -> Result<()> {
        AnimationModel::edit_motion(self, name, time, position, size, color)
    }

    fn set_bounds(&mut self, x: i32, y: i32, width: i32, height: i32) -> Result<()> {
        AnimationModel::set_bounds(self, x, y, width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kf(time: i32, x: i32) -> Keyframe {
        Keyframe::new(time, [x, x], [10, 10], [0, 0, 0]).unwrap()
    }

    #[test]
    fn test_add_and_delete_shape() {
        let mut model = AnimationModel::new();
        model.add_shape("R", ShapeKind::Rectangle).unwrap();
        model.add_shape("C", ShapeKind::Ellipse).unwrap();
        assert_eq!(
            model.add_shape("R", ShapeKind::Ellipse).unwrap_err(),
            AnimationError::DuplicateName("R".to_string())
        );
        assert_eq!(model.shape("R").unwrap().kind(), ShapeKind::Rectangle);

        model.delete_shape("R").unwrap();
        assert!(!model.contains_shape("R"));
        assert_eq!(
            model.delete_shape("R").unwrap_err(),
            AnimationError::ShapeNotFound("R".to_string())
        );
        assert_eq!(model.shape_count(), 1);
    }

    #[test]
    fn test_declaration_order_preserved() {
        let mut model = AnimationModel::new();
        for name in ["b", "a", "c", "d"] {
            model.add_shape(name, ShapeKind::Ellipse).unwrap();
        }
        model.delete_shape("a").unwrap();
        let names: Vec<&str> = model.shapes().map(Shape::name).collect();
        assert_eq!(names, vec!["b", "c", "d"]);
    }

    #[test]
    fn test_motions_require_shape() {
        let mut model = AnimationModel::new();
        let missing = AnimationError::ShapeNotFound("X".to_string());
        assert_eq!(model.add_motion("X", kf(1, 0)).unwrap_err(), missing);
        assert_eq!(model.extend("X", 2).unwrap_err(), missing);
        assert_eq!(model.delete_last_motion("X").unwrap_err(), missing);
        assert_eq!(model.delete_motion_at("X", 1).unwrap_err(), missing);
        assert_eq!(
            model.edit_motion("X", 1, [0, 0], [1, 1], [0, 0, 0]).unwrap_err(),
            missing
        );
        assert!(model.state_at("X", 1).unwrap_err().is_not_found());
    }

    #[test]
    fn test_motion_dispatch() {
        let mut model = AnimationModel::new();
        model.add_shape("R", ShapeKind::Rectangle).unwrap();
        model.add_motion("R", kf(4, 0)).unwrap();
        model.add_motion("R", kf(7, 30)).unwrap();

        let err = model.add_motion("R", kf(5, 0)).unwrap_err();
        assert!(matches!(err, AnimationError::InvalidTime { time: 5, .. }));
        assert_eq!(model.shape("R").unwrap().keyframes().len(), 2);

        model.extend("R", 10).unwrap();
        model.edit_motion("R", 10, [1, 2], [3, 4], [5, 6, 7]).unwrap();
        assert_eq!(model.state_at("R", 10).unwrap().display(), "10 1 2 3 4 5 6 7");
        assert_eq!(model.state_at("R", 5).unwrap().x(), 10);

        assert_eq!(model.delete_motion_at("R", 7).unwrap().time(), 7);
        assert_eq!(model.delete_last_motion("R").unwrap().time(), 10);
        assert_eq!(model.end_time(), Some(4));
    }

    #[test]
    fn test_set_bounds() {
        let mut model = AnimationModel::new();
        assert_eq!(model.canvas(), Canvas::default());

        model.set_bounds(200, 70, 360, 360).unwrap();
        model.set_bounds(-10, 5, 640, 480).unwrap();
        assert_eq!(model.canvas(), Canvas { x: -10, y: 5, width: 640, height: 480 });

        for (w, h) in [(0, 10), (10, 0), (-5, -5)] {
            assert_eq!(
                model.set_bounds(0, 0, w, h).unwrap_err(),
                AnimationError::InvalidDimension { width: w, height: h }
            );
        }
        assert_eq!(model.canvas().width, 640);
    }

    #[test]
    fn test_frame_at_skips_uncovered_shapes() {
        let mut model = AnimationModel::new();
        model.add_shape("early", ShapeKind::Rectangle).unwrap();
        model.add_shape("late", ShapeKind::Ellipse).unwrap();
        model.add_shape("empty", ShapeKind::Ellipse).unwrap();
        model.add_motion("early", kf(0, 0)).unwrap();
        model.add_motion("early", kf(10, 100)).unwrap();
        model.add_motion("late", kf(8, 0)).unwrap();
        model.add_motion("late", kf(20, 0)).unwrap();

        let frame = model.frame_at(5);
        assert_eq!(frame.len(), 1);
        assert_eq!(frame[0].name, "early");
        assert_eq!(frame[0].state.x(), 50);

        let names: Vec<&str> = model.frame_at(9).iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["early", "late"]);
        assert_eq!(model.end_time(), Some(20));
    }

    #[test]
    fn test_editor_trait_populates_model() {
        fn populate(editor: &mut impl AnimationEditor) -> Result<()> {
            editor.set_bounds(0, 0, 100, 100)?;
            editor.add_shape("S", ShapeKind::Ellipse)?;
            editor.add_motion("S", Keyframe::new(1, [0, 0], [5, 5], [1, 2, 3])?)?;
            editor.extend("S", 4)
        }

        let mut model = AnimationModel::new();
        populate(&mut model).unwrap();
        assert_eq!(model.shape("S").unwrap().keyframes().len(), 2);
    }
}
