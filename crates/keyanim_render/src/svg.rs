// SPDX-License-Identifier: MIT OR Apache-2.0
//! SVG animation output.
//!
//! Each shape becomes one `<rect>` or `<ellipse>` holding its first
//! keyframe, followed by `<animate>` children for every attribute that
//! changes between consecutive keyframes.

use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::renderer::Renderer;
use keyanim_model::{AnimationView, Canvas, Keyframe, Shape, ShapeKind};
use std::fmt::Write;

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Geometry attributes of one shape kind, in output order
struct Geometry {
    tag: &'static str,
    attributes: [(&'static str, String); 4],
    center: (f64, f64),
}

impl Geometry {
    /// Map a keyframe onto the kind's SVG attributes, relative to the canvas origin
    fn of(kind: ShapeKind, keyframe: &Keyframe, canvas: Canvas) -> Self {
        let x = keyframe.x() - canvas.x;
        let y = keyframe.y() - canvas.y;
        let width = f64::from(keyframe.width());
        let height = f64::from(keyframe.height());

        match kind {
            ShapeKind::Rectangle => Self {
                tag: "rect",
                attributes: [
                    ("x", x.to_string()),
                    ("y", y.to_string()),
                    ("width", keyframe.width().to_string()),
                    ("height", keyframe.height().to_string()),
                ],
                center: (f64::from(x) + width / 2.0, f64::from(y) + height / 2.0),
            },
            // Ellipses are positioned by their centre
            ShapeKind::Ellipse => Self {
                tag: "ellipse",
                attributes: [
                    ("cx", x.to_string()),
                    ("cy", y.to_string()),
                    ("rx", (width / 2.0).to_string()),
                    ("ry", (height / 2.0).to_string()),
                ],
                center: (f64::from(x), f64::from(y)),
            },
        }
    }
}

/// Renders a declarative SVG animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SvgRenderer {
    speed: f64,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self { speed: 1.0 }
    }
}

impl SvgRenderer {
    /// Create a renderer running at `speed` ticks per second
    pub fn new(speed: f64) -> Result<Self, RenderError> {
        Self::from_config(&RenderConfig::default().with_speed(speed))
    }

    /// Create a renderer from shared settings
    pub fn from_config(config: &RenderConfig) -> Result<Self, RenderError> {
        config.validate()?;
        Ok(Self { speed: config.speed })
    }

    /// Ticks per second
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Milliseconds for a tick offset
    fn millis(&self, ticks: f64) -> i64 {
        (ticks * 1000.0 / self.speed).round() as i64
    }

    fn write_shape<W: Write>(&self, out: &mut W, shape: &Shape, canvas: Canvas) -> Result<(), RenderError> {
        let Some(first) = shape.keyframes().first() else {
            return Ok(());
        };
        let geometry = Geometry::of(shape.kind(), first, canvas);

        let id = html_escape::encode_quoted_attribute(shape.name());
        write!(out, "<{} id=\"{id}\"", geometry.tag)?;
        for (name, value) in &geometry.attributes {
            write!(out, " {name}=\"{value}\"")?;
        }
        write!(out, " fill=\"{}\" visibility=\"visible\"", first.color())?;
        if first.rotation() != 0 {
            let (cx, cy) = geometry.center;
            write!(out, " transform=\"rotate({} {cx} {cy})\"", first.rotation())?;
        }
        writeln!(out, " >")?;

        for (start, end) in shape.keyframes().pairs() {
            self.write_transition(out, shape.kind(), start, end, canvas)?;
        }

        writeln!(out, "</{}>", geometry.tag)?;
        Ok(())
    }

    fn write_transition<W: Write>(
        &self,
        out: &mut W,
        kind: ShapeKind,
        start: &Keyframe,
        end: &Keyframe,
        canvas: Canvas,
    ) -> Result<(), RenderError> {
        let begin = self.millis(f64::from(start.time()) - 1.0);
        let duration = self.millis(f64::from(end.time()) - f64::from(start.time()));
        let timing = format!("attributeType=\"xml\" begin=\"{begin}ms\" dur=\"{duration}ms\"");

        let from = Geometry::of(kind, start, canvas);
        let to = Geometry::of(kind, end, canvas);
        for ((name, from_value), (_, to_value)) in from.attributes.iter().zip(to.attributes.iter()) {
            if from_value != to_value {
                writeln!(
                    out,
                    "    <animate {timing} attributeName=\"{name}\" from=\"{from_value}\" to=\"{to_value}\" fill=\"freeze\" />"
                )?;
            }
        }

        if start.color() != end.color() {
            writeln!(
                out,
                "    <animate {timing} attributeName=\"fill\" from=\"{}\" to=\"{}\" fill=\"freeze\" />",
                start.color(),
                end.color()
            )?;
        }

        // The pivot has to travel with the shape whenever it is rotated
        let turned = start.rotation() != end.rotation();
        let pivot_moved = from.center != to.center && (start.rotation() != 0 || end.rotation() != 0);
        if turned || pivot_moved {
            let (from_cx, from_cy) = from.center;
            let (to_cx, to_cy) = to.center;
            writeln!(
                out,
                "    <animateTransform {timing} attributeName=\"transform\" type=\"rotate\" from=\"{} {from_cx} {from_cy}\" to=\"{} {to_cx} {to_cy}\" fill=\"freeze\" />",
                start.rotation(),
                end.rotation()
            )?;
        }
        Ok(())
    }
}

impl Renderer for SvgRenderer {
    fn render_to<V, W>(&self, view: &V, out: &mut W) -> Result<(), RenderError>
    where
        V: AnimationView,
        W: Write,
    {
        let canvas = view.canvas();
        writeln!(
            out,
            "<svg width=\"{}\" height=\"{}\" version=\"1.1\" xmlns=\"{}\">",
            i64::from(canvas.width) + i64::from(canvas.x),
            i64::from(canvas.height) + i64::from(canvas.y),
            SVG_NAMESPACE,
        )?;

        for shape in view.shapes() {
            self.write_shape(out, shape, canvas)?;
        }

        writeln!(out, "</svg>")?;
        tracing::trace!(renderer = "svg", speed = self.speed, "rendered animation");
        Ok(())
    }
}
