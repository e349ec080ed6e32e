//! Configuration for the paint front end.
//!
//! Supports YAML configuration with precedence: CLI > ENV > file > defaults.
//!
//! ```yaml
//! version: 1
//! canvas:
//!   width: 640
//!   height: 480
//!   background: "#ffffff"
//!   ink: "#000000"
//! shape: bresenham
//! output: drawing.png
//! ```

use crate::canvas::Canvas;
use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::shape::ShapeKind;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding `canvas.width`.
pub const ENV_WIDTH: &str = "SCANPAINT_WIDTH";
/// Environment variable overriding `canvas.height`.
pub const ENV_HEIGHT: &str = "SCANPAINT_HEIGHT";
/// Environment variable overriding `shape`.
pub const ENV_SHAPE: &str = "SCANPAINT_SHAPE";

/// Drawing surface settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CanvasConfig {
    /// Width in pixels.
    #[serde(default = "default_width")]
    pub width: u32,

    /// Height in pixels.
    #[serde(default = "default_height")]
    pub height: u32,

    /// Background color, `#rrggbb`.
    #[serde(default = "default_background")]
    pub background: String,

    /// Ink color, `#rrggbb`.
    #[serde(default = "default_ink")]
    pub ink: String,
}

fn default_width() -> u32 {
    640
}
fn default_height() -> u32 {
    480
}
fn default_background() -> String {
    "#ffffff".to_string()
}
fn default_ink() -> String {
    "#000000".to_string()
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            background: default_background(),
            ink: default_ink(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Configuration version.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Canvas settings.
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Default shape kind for new gestures.
    #[serde(default = "default_shape")]
    pub shape: String,

    /// Default PNG export path.
    #[serde(default)]
    pub output: Option<PathBuf>,
}

fn default_version() -> u32 {
    1
}
fn default_shape() -> String {
    ShapeKind::default().short_name().to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            canvas: CanvasConfig::default(),
            shape: default_shape(),
            output: None,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Standard location: `<config dir>/scanpaint/config.yaml`.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("scanpaint").join("config.yaml"))
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;

        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map(|l| l.line()).unwrap_or(0);
            Error::ConfigParse { line, message: e.to_string() }
        })
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                log::debug!("using default configuration: {err}");
                Self::default()
            }
        }
    }

    /// Apply `SCANPAINT_*` overrides from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unparsable value.
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unparsable value.
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let dimension = |key: &str, value: String| {
            value.trim().parse::<u32>().map_err(|_| Error::ConfigInvalid {
                key: key.to_string(),
                message: format!("'{value}' is not a pixel count"),
            })
        };

        if let Some(value) = lookup(ENV_WIDTH) {
            self.canvas.width = dimension(ENV_WIDTH, value)?;
        }
        if let Some(value) = lookup(ENV_HEIGHT) {
            self.canvas.height = dimension(ENV_HEIGHT, value)?;
        }
        if let Some(value) = lookup(ENV_SHAPE) {
            self.shape = value;
        }
        Ok(())
    }

    /// Check every value that the YAML types alone cannot.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigInvalid`] naming the first bad key.
    pub fn validate(&self) -> Result<()> {
        let invalid = |key: &str, message: String| Error::ConfigInvalid {
            key: key.to_string(),
            message,
        };

        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(invalid(
                "canvas",
                format!("size {}x{} must be non-zero", self.canvas.width, self.canvas.height),
            ));
        }
        self.background().map_err(|e| invalid("canvas.background", e.to_string()))?;
        self.ink().map_err(|e| invalid("canvas.ink", e.to_string()))?;
        self.shape_kind().map_err(|e| invalid("shape", e.to_string()))?;
        Ok(())
    }

    /// Parsed background color.
    ///
    /// # Errors
    ///
    /// Returns an error if the color string is malformed.
    pub fn background(&self) -> Result<Rgba> {
        self.canvas.background.parse()
    }

    /// Parsed ink color.
    ///
    /// # Errors
    ///
    /// Returns an error if the color string is malformed.
    pub fn ink(&self) -> Result<Rgba> {
        self.canvas.ink.parse()
    }

    /// Parsed default shape kind.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape name is unknown.
    pub fn shape_kind(&self) -> Result<ShapeKind> {
        self.shape.parse()
    }

    /// Build an empty canvas from these settings.
    ///
    /// # Errors
    ///
    /// Returns an error if any setting is invalid.
    pub fn build_canvas(&self) -> Result<Canvas> {
        self.validate()?;
        let mut canvas = Canvas::new(self.canvas.width, self.canvas.height)?
            .with_background(self.background()?)
            .with_ink(self.ink()?);
        canvas.select_shape(self.shape_kind()?);
        Ok(canvas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_config_default() {
        let config = Config::new();

        assert_eq!(config.version, 1);
        assert_eq!(config.canvas.width, 640);
        assert_eq!(config.canvas.height, 480);
        assert_eq!(config.shape_kind().unwrap(), ShapeKind::DdaLine);
        assert!(config.output.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_parse_minimal() {
        let config = Config::parse("version: 1").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_parse_full() {
        let yaml = r##"
version: 1
canvas:
  width: 320
  height: 200
  background: "#000000"
  ink: "#ff0000"
shape: Ellips Midpoint
output: out.png
"##;

        let config = Config::parse(yaml).unwrap();

        assert_eq!(config.canvas.width, 320);
        assert_eq!(config.canvas.height, 200);
        assert_eq!(config.background().unwrap(), Rgba::BLACK);
        assert_eq!(config.ink().unwrap(), Rgba::RED);
        assert_eq!(config.shape_kind().unwrap(), ShapeKind::EllipseMidpoint);
        assert_eq!(config.output, Some(PathBuf::from("out.png")));
    }

    #[test]
    fn test_config_parse_error_includes_line() {
        let yaml = r#"
version: 1
canvas:
  width: not_a_number
"#;

        let err = Config::parse(yaml).unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }), "got {err}");
        assert!(err.to_string().contains('4'), "Error should include line number");
    }

    #[test]
    fn test_config_load_or_default() {
        let config = Config::load_or_default("/nonexistent/path");
        assert_eq!(config.version, 1);
    }

    #[test]
    fn test_config_load_missing_file() {
        assert!(matches!(Config::load("/nonexistent/path"), Err(Error::ConfigNotFound(_))));
    }

    #[test]
    fn test_env_overrides_file_values() {
        let mut config = Config::parse("canvas:\n  width: 100\n").unwrap();
        let env: HashMap<&str, &str> =
            [(ENV_WIDTH, "800"), (ENV_SHAPE, "circle")].into_iter().collect();

        config.apply_env_from(|key| env.get(key).map(|v| (*v).to_string())).unwrap();

        assert_eq!(config.canvas.width, 800);
        assert_eq!(config.canvas.height, 480);
        assert_eq!(config.shape_kind().unwrap(), ShapeKind::CircleMidpoint);
    }

    #[test]
    fn test_env_rejects_bad_dimension() {
        let mut config = Config::new();
        let err = config
            .apply_env_from(|key| (key == ENV_HEIGHT).then(|| "tall".to_string()))
            .unwrap_err();
        assert!(matches!(err, Error::ConfigInvalid { ref key, .. } if key == ENV_HEIGHT));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::new();
        config.canvas.width = 0;
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.canvas.ink = "black".to_string();
        assert!(matches!(
            config.validate(),
            Err(Error::ConfigInvalid { ref key, .. }) if key == "canvas.ink"
        ));

        let mut config = Config::new();
        config.shape = "spiral".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_build_canvas() {
        let mut config = Config::new();
        config.canvas.width = 32;
        config.canvas.height = 16;
        config.shape = "bresenham".to_string();

        let canvas = config.build_canvas().unwrap();
        assert_eq!(canvas.width(), 32);
        assert_eq!(canvas.height(), 16);
        assert_eq!(canvas.shape_kind(), ShapeKind::BresenhamLine);
    }
}
