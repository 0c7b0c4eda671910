//! Vitrine configuration system
//!
//! Centralized configuration for the gallery, loaded from `vitrine.toml`
//! with environment-variable overrides on top.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Main configuration structure for the gallery
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct VitrineConfig {
    /// Window settings
    pub window: WindowConfig,
    /// Gallery behavior settings
    pub gallery: GalleryConfig,
    /// Text rendering settings
    pub text: TextConfig,
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Initial logical width in pixels
    pub width: u32,
    /// Initial logical height in pixels
    pub height: u32,
}

/// Gallery behavior configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Play every demo on startup and loop it; when false, demos replay on
    /// pointer-enter instead.
    pub autoplay: bool,
    /// Restrict the gallery to these category slugs (all when empty)
    pub categories: Vec<String>,
}

/// Text rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Path to a custom font file (.ttf); system sans-serif when unset
    pub font: Option<PathBuf>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Vitrine — animation gallery".to_string(),
            width: 1280,
            height: 800,
        }
    }
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            autoplay: true,
            categories: Vec::new(),
        }
    }
}

impl Default for TextConfig {
    fn default() -> Self {
        Self { font: None }
    }
}

impl VitrineConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration from the default location (vitrine.toml in the
    /// current directory) or return default configuration if the file
    /// doesn't exist
    pub fn load_or_default() -> Self {
        match Self::load_from_file("vitrine.toml") {
            Ok(config) => config,
            Err(ConfigError::Io(_)) => Self::default(),
            Err(err) => {
                tracing::warn!("ignoring unreadable vitrine.toml: {err}");
                Self::default()
            }
        }
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values,
    /// allowing temporary overrides without editing the file.
    pub fn merge_with_env(&mut self) {
        if let Ok(val) = std::env::var("VITRINE_AUTOPLAY") {
            self.gallery.autoplay = val == "1" || val.eq_ignore_ascii_case("true");
        }
        if let Ok(val) = std::env::var("VITRINE_CATEGORIES") {
            self.gallery.categories = val
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }
        if let Ok(font) = std::env::var("VITRINE_FONT") {
            self.text.font = Some(PathBuf::from(font));
        }
        if let Ok(title) = std::env::var("VITRINE_TITLE") {
            self.window.title = title;
        }
        if let Ok(val) = std::env::var("VITRINE_WINDOW_SIZE") {
            if let Some((w, h)) = val.split_once('x') {
                if let (Ok(w), Ok(h)) = (w.trim().parse(), h.trim().parse()) {
                    self.window.width = w;
                    self.window.height = h;
                }
            }
        }
    }

    /// Load configuration with environment variable overrides
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = VitrineConfig::default();
        assert!(config.gallery.autoplay);
        assert!(config.gallery.categories.is_empty());
        assert_eq!(config.window.width, 1280);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = VitrineConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: VitrineConfig = toml::from_str(&toml_str).unwrap();
        assert!(parsed.gallery.autoplay);
        assert_eq!(parsed.window.title, config.window.title);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let parsed: VitrineConfig = toml::from_str("[gallery]\nautoplay = false\n").unwrap();
        assert!(!parsed.gallery.autoplay);
        assert_eq!(parsed.window.width, 1280);
    }

    #[test]
    fn test_merge_with_env() {
        unsafe {
            std::env::set_var("VITRINE_AUTOPLAY", "false");
            std::env::set_var("VITRINE_CATEGORIES", "staggered, timelines");
            std::env::set_var("VITRINE_WINDOW_SIZE", "1024x768");
        }

        let mut config = VitrineConfig::default();
        config.merge_with_env();

        assert!(!config.gallery.autoplay);
        assert_eq!(
            config.gallery.categories,
            vec!["staggered".to_string(), "timelines".to_string()]
        );
        assert_eq!(config.window.width, 1024);
        assert_eq!(config.window.height, 768);

        unsafe {
            std::env::remove_var("VITRINE_AUTOPLAY");
            std::env::remove_var("VITRINE_CATEGORIES");
            std::env::remove_var("VITRINE_WINDOW_SIZE");
        }
    }
}
