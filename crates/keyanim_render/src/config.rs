// SPDX-License-Identifier: MIT OR Apache-2.0
//! Renderer settings.

use crate::error::RenderError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Plain-text keyframe dump
    #[default]
    Text,
    /// SVG animation document
    Svg,
}

impl OutputFormat {
    /// Get the format name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Svg => "svg",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "svg" => Ok(Self::Svg),
            other => Err(RenderError::UnknownFormat(other.to_string())),
        }
    }
}

/// Settings shared by the renderers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Ticks per second, used for SVG timing
    #[serde(default = "default_speed")]
    pub speed: f64,
    /// Which renderer to use
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_speed() -> f64 {
    1.0
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            speed: default_speed(),
            format: OutputFormat::default(),
        }
    }
}

impl RenderConfig {
    /// Set the tick rate
    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    /// Set the output format
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Check the tick rate is positive and finite
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.speed.is_finite() && self.speed > 0.0 {
            Ok(())
        } else {
            Err(RenderError::InvalidSpeed(self.speed))
        }
    }

    /// Serialize to RON format
    pub fn to_ron(&self) -> Result<String, RenderError> {
        Ok(ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?)
    }

    /// Deserialize from RON format
    pub fn from_ron(s: &str) -> Result<Self, RenderError> {
        Ok(ron::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RenderConfig::default();
        assert_eq!(config.speed, 1.0);
        assert_eq!(config.format, OutputFormat::Text);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_ron() {
        let config = RenderConfig::from_ron("(speed: 2.0, format: Svg)").unwrap();
        assert_eq!(config.speed, 2.0);
        assert_eq!(config.format, OutputFormat::Svg);

        let partial = RenderConfig::from_ron("(speed: 20.0)").unwrap();
        assert_eq!(partial.format, OutputFormat::Text);

        assert!(matches!(
            RenderConfig::from_ron("(speed: \"fast\")"),
            Err(RenderError::Config(_))
        ));
    }

    #[test]
    fn test_ron_round_trip() {
        let config = RenderConfig::default().with_speed(4.5).with_format(OutputFormat::Svg);
        let loaded = RenderConfig::from_ron(&config.to_ron().unwrap()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_invalid_speed() {
        for speed in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let config = RenderConfig::default().with_speed(speed);
            assert!(matches!(config.validate(), Err(RenderError::InvalidSpeed(_))));
        }
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("SVG".parse::<OutputFormat>().unwrap(), OutputFormat::Svg);
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!(matches!(
            "gif".parse::<OutputFormat>(),
            Err(RenderError::UnknownFormat(name)) if name == "gif"
        ));
    }
}
