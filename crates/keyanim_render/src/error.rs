// SPDX-License-Identifier: MIT OR Apache-2.0
//! Errors raised while rendering.

use keyanim_model::AnimationError;

/// Error when rendering an animation
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Tick rate must be a positive, finite number
    #[error("Invalid speed {0}: ticks per second must be positive")]
    InvalidSpeed(f64),

    /// The model reported an inconsistency
    #[error("Model error: {0}")]
    Model(#[from] AnimationError),

    /// Writing to the output failed
    #[error("Formatting error: {0}")]
    Format(#[from] std::fmt::Error),

    /// A renderer configuration could not be parsed
    #[error("Invalid render config: {0}")]
    Config(#[from] ron::error::SpannedError),

    /// A renderer configuration could not be written
    #[error("Could not serialize render config: {0}")]
    Serialize(#[from] ron::Error),

    /// Unknown output format name
    #[error("Unknown output format: {0}")]
    UnknownFormat(String),
}
