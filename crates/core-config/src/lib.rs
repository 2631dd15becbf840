//! Configuration loading and parsing.
//!
//! Parses `tiletext.toml` (or an override path provided by the binary):
//!
//! ```toml
//! [text]
//! line_spacing = 1.25
//! color = 0xFFFFFF
//! max_glyphs = 64
//!
//! [bounds]
//! track_left = false
//! ```
//!
//! Every field is optional. A missing file yields defaults; a file that fails
//! to parse also yields defaults (logged at warn) so a typo never blocks
//! startup. Unknown fields are ignored to allow forward evolution.
//!
//! The raw `line_spacing` is retained; `Config::effective_line_spacing` clamps
//! it to `[MIN_LINE_SPACING, MAX_LINE_SPACING]` at application time.

use anyhow::Result;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::{info, warn};

pub const CONFIG_FILE_NAME: &str = "tiletext.toml";
pub const MIN_LINE_SPACING: f64 = 0.5;
pub const MAX_LINE_SPACING: f64 = 4.0;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TextConfig {
    #[serde(default = "TextConfig::default_line_spacing")]
    pub line_spacing: f64,
    #[serde(default = "TextConfig::default_color")]
    pub color: u32,
    #[serde(default)]
    pub max_glyphs: Option<usize>,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            line_spacing: Self::default_line_spacing(),
            color: Self::default_color(),
            max_glyphs: None,
        }
    }
}

impl TextConfig {
    const fn default_line_spacing() -> f64 {
        1.25
    }
    const fn default_color() -> u32 {
        0xFF_FFFF
    }
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct BoundsConfig {
    /// Track the leftmost glyph edge instead of pinning the box's left at 0.
    #[serde(default)]
    pub track_left: bool,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct ConfigFile {
    #[serde(default)]
    pub text: TextConfig,
    #[serde(default)]
    pub bounds: BoundsConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub raw: Option<String>, // original file string (optional)
    pub file: ConfigFile,    // parsed (or default) data
    pub source: Option<PathBuf>,
}

/// Best-effort config path: working directory first, then the platform config dir.
pub fn discover() -> PathBuf {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("tiletext").join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    let Ok(content) = fs::read_to_string(&path) else {
        info!(target: "config", path = %path.display(), "config_absent_using_defaults");
        return Ok(Config::default());
    };
    match toml::from_str::<ConfigFile>(&content) {
        Ok(file) => {
            info!(target: "config", path = %path.display(), "config_loaded");
            Ok(Config {
                raw: Some(content),
                file,
                source: Some(path),
            })
        }
        Err(e) => {
            warn!(target: "config", path = %path.display(), error = %e, "config_parse_failed_using_defaults");
            Ok(Config::default())
        }
    }
}

/// Clamp a line spacing from any source to `[MIN_LINE_SPACING, MAX_LINE_SPACING]`.
/// Non-finite values fall back to the default. Adjustments are logged under `config`.
pub fn clamp_line_spacing(raw: f64) -> f64 {
    let clamped = if raw.is_finite() {
        raw.clamp(MIN_LINE_SPACING, MAX_LINE_SPACING)
    } else {
        TextConfig::default_line_spacing()
    };
    if clamped != raw {
        info!(
            target: "config",
            raw,
            clamped,
            min = MIN_LINE_SPACING,
            max = MAX_LINE_SPACING,
            "line_spacing_clamped"
        );
    }
    clamped
}

impl Config {
    /// Configured line spacing passed through `clamp_line_spacing`.
    pub fn effective_line_spacing(&self) -> f64 {
        clamp_line_spacing(self.file.text.line_spacing)
    }

    /// Foreground color reduced to 24-bit RGB.
    pub fn color(&self) -> u32 {
        self.file.text.color & 0x00FF_FFFF
    }

    pub fn max_glyphs(&self) -> Option<usize> {
        self.file.text.max_glyphs.filter(|&n| n > 0)
    }

    pub fn track_left(&self) -> bool {
        self.file.bounds.track_left
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_testutil::capture_logs;
    use std::path::PathBuf;
    use tracing::Level;

    fn write_config(body: &str) -> tempfile::NamedTempFile {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), body).unwrap();
        tmp
    }

    #[test]
    fn default_config_when_missing_file() {
        let cfg = load_from(Some(PathBuf::from("__nonexistent_hopefully__.toml"))).unwrap();
        assert_eq!(cfg.file, ConfigFile::default());
        assert_eq!(cfg.effective_line_spacing(), 1.25);
        assert_eq!(cfg.color(), 0xFF_FFFF);
        assert_eq!(cfg.max_glyphs(), None);
        assert!(!cfg.track_left());
        assert!(cfg.source.is_none());
    }

    #[test]
    fn parses_text_and_bounds_sections() {
        let tmp = write_config(
            "[text]\nline_spacing = 1.5\ncolor = 0x00FF80\nmax_glyphs = 32\n[bounds]\ntrack_left = true\n",
        );
        let cfg = load_from(Some(tmp.path().to_path_buf())).unwrap();
        assert_eq!(cfg.effective_line_spacing(), 1.5);
        assert_eq!(cfg.color(), 0x00FF80);
        assert_eq!(cfg.max_glyphs(), Some(32));
        assert!(cfg.track_left());
        assert!(cfg.raw.is_some());
    }

    #[test]
    fn partial_section_keeps_field_defaults() {
        let tmp = write_config("[text]\ncolor = 0xFF0000\n");
        let cfg = load_from(Some(tmp.path().to_path_buf())).unwrap();
        assert_eq!(cfg.file.text.line_spacing, 1.25);
        assert_eq!(cfg.color(), 0xFF0000);
    }

    #[test]
    fn zero_max_glyphs_treated_as_unset() {
        let tmp = write_config("[text]\nmax_glyphs = 0\n");
        let cfg = load_from(Some(tmp.path().to_path_buf())).unwrap();
        assert_eq!(cfg.max_glyphs(), None);
    }

    #[test]
    fn parse_error_falls_back_to_defaults() {
        let tmp = write_config("[text\nline_spacing = ");
        let cfg = load_from(Some(tmp.path().to_path_buf())).unwrap();
        assert_eq!(cfg.file, ConfigFile::default());
        assert!(cfg.raw.is_none());
    }

    #[test]
    fn line_spacing_clamped_into_range() {
        let tmp = write_config("[text]\nline_spacing = 9.0\n");
        let cfg = load_from(Some(tmp.path().to_path_buf())).unwrap();
        assert_eq!(cfg.effective_line_spacing(), MAX_LINE_SPACING);
        let tmp = write_config("[text]\nline_spacing = 0.1\n");
        let cfg = load_from(Some(tmp.path().to_path_buf())).unwrap();
        assert_eq!(cfg.effective_line_spacing(), MIN_LINE_SPACING);
    }

    #[test]
    fn clamp_handles_values_from_any_source() {
        assert_eq!(clamp_line_spacing(1.0e9), MAX_LINE_SPACING);
        assert_eq!(clamp_line_spacing(-2.0), MIN_LINE_SPACING);
        assert_eq!(clamp_line_spacing(f64::NAN), 1.25);
        assert_eq!(clamp_line_spacing(2.0), 2.0);
    }

    #[test]
    fn clamp_logging_uses_config_target() {
        let tmp = write_config("[text]\nline_spacing = 12.0\n");
        let cfg = load_from(Some(tmp.path().to_path_buf())).unwrap();
        let (spacing, log_output) = capture_logs(Level::INFO, || cfg.effective_line_spacing());

        assert!(log_output.contains("INFO config:"));
        assert!(log_output.contains("line_spacing_clamped"));
        assert_eq!(spacing, MAX_LINE_SPACING);
    }

    #[test]
    fn parse_failure_logged_as_warning() {
        let tmp = write_config("not = [valid");
        let (cfg, log_output) = capture_logs(Level::WARN, || {
            load_from(Some(tmp.path().to_path_buf())).unwrap()
        });

        assert_eq!(cfg.file, ConfigFile::default());
        assert!(log_output.contains("WARN config:"));
        assert!(log_output.contains("config_parse_failed_using_defaults"));
    }
}
