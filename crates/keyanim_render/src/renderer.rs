// SPDX-License-Identifier: MIT OR Apache-2.0
//! Renderer trait and format dispatch.

use crate::config::{OutputFormat, RenderConfig};
use crate::error::RenderError;
use crate::svg::SvgRenderer;
use crate::text::TextRenderer;
use keyanim_model::AnimationView;
use std::fmt::Write;

/// Turns a read-only animation into an output document
pub trait Renderer {
    /// Write the document for `view` into `out`
    fn render_to<V, W>(&self, view: &V, out: &mut W) -> Result<(), RenderError>
    where
        V: AnimationView,
        W: Write;

    /// Render the document for `view` into a new string
    fn render<V>(&self, view: &V) -> Result<String, RenderError>
    where
        V: AnimationView,
    {
        let mut out = String::new();
        self.render_to(view, &mut out)?;
        Ok(out)
    }
}

/// Render `view` with the renderer `config` selects
pub fn render<V>(view: &V, config: &RenderConfig) -> Result<String, RenderError>
where
    V: AnimationView,
{
    match config.format {
        OutputFormat::Text => TextRenderer.render(view),
        OutputFormat::Svg => SvgRenderer::from_config(config)?.render(view),
    }
}
