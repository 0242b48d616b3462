//! Conversion configuration.
//!
//! Handles loading and validating an optional TOML config file. Stock
//! defaults cover the common case; a user file overrides them sparsely, and
//! a handful of CLI flags override the file in turn.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! source_root = "images"            # Tree scanned for source images
//! output_root = "images_optimized"  # Root of the mirrored output tree
//! thumb_subdir = "thumbs"           # Thumbnail mirror under output_root
//!
//! max_width = 1600        # Width cap for hi-res outputs (px)
//! thumb_width = 400       # Width cap for thumbnails (px)
//!
//! jpeg_quality = 85       # Hi-res JPEG quality (1-100)
//! thumb_quality = 70      # Thumbnail JPEG quality (1-100)
//! webp_quality = 80       # WebP quality (1-100)
//!
//! make_webp = true        # Emit a WebP alternate next to each hi-res JPEG
//! strip_metadata = true   # Drop EXIF/ICC metadata from outputs
//!
//! extensions = ["jpg", "jpeg", "png"]
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse; override just the values you want:
//!
//! ```toml
//! # Only raise the width cap
//! max_width = 2400
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Conversion settings loaded from a TOML file.
///
/// All fields have stock defaults matching a plain run. User config files
/// need only specify the values they want to override. Unknown keys are
/// rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConvertConfig {
    /// Tree scanned for source images.
    pub source_root: PathBuf,
    /// Root of the mirrored output tree.
    pub output_root: PathBuf,
    /// Subdirectory of `output_root` holding the thumbnail mirror.
    pub thumb_subdir: String,
    /// Width cap for hi-res outputs, in pixels. Narrower images are never
    /// upscaled.
    pub max_width: u32,
    /// Width cap for thumbnails, in pixels.
    pub thumb_width: u32,
    /// Hi-res JPEG quality (1-100).
    pub jpeg_quality: u32,
    /// Thumbnail JPEG quality (1-100).
    pub thumb_quality: u32,
    /// WebP quality (1-100).
    pub webp_quality: u32,
    /// Whether to emit a WebP alternate next to each hi-res JPEG.
    pub make_webp: bool,
    /// Whether to drop EXIF and ICC metadata from outputs.
    pub strip_metadata: bool,
    /// File extensions accepted as source images, matched case-insensitively.
    pub extensions: Vec<String>,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            source_root: PathBuf::from("images"),
            output_root: PathBuf::from("images_optimized"),
            thumb_subdir: "thumbs".to_string(),
            max_width: 1600,
            thumb_width: 400,
            jpeg_quality: 85,
            thumb_quality: 70,
            webp_quality: 80,
            make_webp: true,
            strip_metadata: true,
            extensions: vec!["jpg".to_string(), "jpeg".to_string(), "png".to_string()],
        }
    }
}

impl ConvertConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("jpeg_quality", self.jpeg_quality),
            ("thumb_quality", self.thumb_quality),
            ("webp_quality", self.webp_quality),
        ] {
            if !(1..=100).contains(&value) {
                return Err(ConfigError::Validation(format!(
                    "{name} must be 1-100, got {value}"
                )));
            }
        }
        if self.max_width == 0 {
            return Err(ConfigError::Validation("max_width must be non-zero".into()));
        }
        if self.thumb_width == 0 {
            return Err(ConfigError::Validation(
                "thumb_width must be non-zero".into(),
            ));
        }
        if self.extensions.is_empty() {
            return Err(ConfigError::Validation(
                "extensions must not be empty".into(),
            ));
        }
        if self.thumb_subdir.is_empty() {
            return Err(ConfigError::Validation(
                "thumb_subdir must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Load configuration, optionally from a TOML file.
///
/// With no path, stock defaults apply. With a path, the file must exist and
/// parse; keys it omits fall back to the defaults. The result is validated
/// either way.
pub fn load_config(path: Option<&Path>) -> Result<ConvertConfig, ConfigError> {
    let config: ConvertConfig = match path {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            toml::from_str(&content)?
        }
        None => ConvertConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock config with all keys and explanations.
///
/// Used by the `--print-config` CLI flag.
pub fn stock_config_toml() -> &'static str {
    r##"# webready configuration
# ======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Trees
# ---------------------------------------------------------------------------
# Tree scanned for source images.
source_root = "images"

# Root of the mirrored output tree.
output_root = "images_optimized"

# Subdirectory of output_root holding the thumbnail mirror.
thumb_subdir = "thumbs"

# ---------------------------------------------------------------------------
# Sizing
# ---------------------------------------------------------------------------
# Width cap for hi-res outputs, in pixels. Narrower images pass through
# at their original size; nothing is ever upscaled.
max_width = 1600

# Width cap for thumbnails, in pixels.
thumb_width = 400

# ---------------------------------------------------------------------------
# Encoding
# ---------------------------------------------------------------------------
# Hi-res JPEG quality (1 = worst, 100 = best).
jpeg_quality = 85

# Thumbnail JPEG quality.
thumb_quality = 70

# WebP quality.
webp_quality = 80

# Emit a WebP alternate next to each hi-res JPEG.
make_webp = true

# Drop EXIF and ICC metadata from outputs. Set to false to carry camera
# metadata and color profiles over to the JPEG outputs.
strip_metadata = true

# ---------------------------------------------------------------------------
# Selection
# ---------------------------------------------------------------------------
# File extensions accepted as source images (matched case-insensitively).
# Anything else in the tree is silently ignored.
extensions = ["jpg", "jpeg", "png"]
"##
}
