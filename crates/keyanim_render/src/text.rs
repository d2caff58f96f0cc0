// SPDX-License-Identifier: MIT OR Apache-2.0
//! Plain-text keyframe dump.
//!
//! ```text
//! canvas 200 70 360 360
//! shape R rectangle
//! motion R 1 200 200 50 100 255 0 0    10 200 200 50 100 255 0 0
//!
//! shape C ellipse
//! ```

use crate::error::RenderError;
use crate::renderer::Renderer;
use keyanim_model::{AnimationView, Keyframe, Shape};
use std::fmt::Write;

/// Renders the canvas line, then each shape with its motion lines
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl TextRenderer {
    fn write_motion<W: Write>(out: &mut W, name: &str, start: &Keyframe, end: &Keyframe) -> Result<(), RenderError> {
        writeln!(out, "motion {name} {start}    {end}")?;
        Ok(())
    }

    fn write_shape<W: Write>(out: &mut W, shape: &Shape) -> Result<(), RenderError> {
        writeln!(out, "shape {} {}", shape.name(), shape.kind())?;

        let keyframes = shape.keyframes();
        if keyframes.len() == 1 {
            // A lone keyframe is paired with itself
            if let Some(only) = keyframes.first() {
                Self::write_motion(out, shape.name(), only, only)?;
            }
        } else {
            for (start, end) in keyframes.pairs() {
                Self::write_motion(out, shape.name(), start, end)?;
            }
        }
        Ok(())
    }
}

impl Renderer for TextRenderer {
    fn render_to<V, W>(&self, view: &V, out: &mut W) -> Result<(), RenderError>
    where
        V: AnimationView,
        W: Write,
    {
        let canvas = view.canvas();
        writeln!(out, "canvas {} {} {} {}", canvas.x, canvas.y, canvas.width, canvas.height)?;

        for (index, shape) in view.shapes().enumerate() {
            if index > 0 {
                writeln!(out)?;
            }
            Self::write_shape(out, shape)?;
        }

        tracing::trace!(renderer = "text", "rendered animation");
        Ok(())
    }
}
