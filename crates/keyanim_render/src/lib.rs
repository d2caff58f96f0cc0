// SPDX-License-Identifier: MIT OR Apache-2.0
//! Renderers for keyanim animation models.
//!
//! This crate turns a read-only model into:
//! - A plain-text keyframe dump
//! - An SVG document with declarative `<animate>` elements
//!
//! Both renderers are deterministic: the same model always produces the
//! same bytes.

pub mod config;
pub mod error;
pub mod renderer;
pub mod svg;
pub mod text;

pub use config::{OutputFormat, RenderConfig};
pub use error::RenderError;
pub use renderer::{render, Renderer};
pub use svg::SvgRenderer;
pub use text::TextRenderer;
