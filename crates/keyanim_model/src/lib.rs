// SPDX-License-Identifier: MIT OR Apache-2.0
//! Keyframe animation model.
//!
//! This crate provides the data model behind keyanim:
//! - Keyframes with validated dimensions and clamped colors
//! - Append-only, time-ordered keyframe sequences
//! - Named ellipse/rectangle shapes
//! - Linear interpolation between keyframes
//!
//! ## Architecture
//!
//! The model is built on:
//! - An insertion-ordered shape registry
//! - A read-only [`AnimationView`] for renderers
//! - A mutating [`AnimationEditor`] for editors and builders

pub mod error;
pub mod keyframe;
pub mod interpolation;
pub mod sequence;
pub mod shape;
pub mod model;
pub mod builder;

pub use error::{AnimationError, Result};
pub use keyframe::{Keyframe, Rgb};
pub use interpolation::Interpolation;
pub use sequence::KeyframeSequence;
pub use shape::{Shape, ShapeKind, UnknownShapeKind};
pub use model::{AnimationEditor, AnimationModel, AnimationView, Canvas, ShapeState};
pub use builder::{AnimationBuilder, ModelBuilder};
