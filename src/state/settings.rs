/// User settings for rendering and output
///
/// Stored as JSON in the user's config directory:
/// - Linux: ~/.config/pdf-jpg-converter/settings.json
/// - macOS: ~/Library/Application Support/pdf-jpg-converter/settings.json
/// - Windows: %APPDATA%\pdf-jpg-converter\settings.json
///
/// Every field has a default, so a missing or partial file is fine.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::Result;

/// How converted pages are named on disk
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PageNaming {
    /// `{base}.jpg` for one page, `{base}_{n}.jpg` for each page otherwise
    #[default]
    Numbered,
    /// Every page goes to `{base}.jpg`; only the last page survives
    Overwrite,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Edge length of the square list thumbnails, in pixels
    pub thumbnail_size: u32,

    /// Page render scale (1.0 = 72 DPI)
    pub render_scale: f32,

    /// JPEG quality, 1-100
    pub jpeg_quality: u8,

    pub page_naming: PageNaming,

    /// Directory the file dialog opens in
    pub last_directory: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            thumbnail_size: 100,
            render_scale: 1.0,
            jpeg_quality: 90,
            page_naming: PageNaming::Numbered,
            last_directory: None,
        }
    }
}

impl Settings {
    /// Get the path where the settings file should be stored
    pub fn default_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir().or_else(dirs::home_dir)?;
        path.push("pdf-jpg-converter");
        path.push("settings.json");
        Some(path)
    }

    /// Load settings from the default location, falling back to defaults
    pub fn load() -> Self {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => {
                warn!("Could not determine config directory, using default settings");
                Self::default()
            }
        }
    }

    /// Load settings from `path`. Missing or malformed files yield defaults.
    pub fn load_from(path: &Path) -> Self {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                debug!("No settings at {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => settings.sanitized(),
            Err(e) => {
                warn!("Ignoring malformed settings at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save to the default location
    pub fn save(&self) -> Result<()> {
        match Self::default_path() {
            Some(path) => self.save_to(&path),
            None => Ok(()),
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_json()?)?;
        debug!("Settings saved to {}", path.display());
        Ok(())
    }

    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Clamp out-of-range values read from disk
    fn sanitized(mut self) -> Self {
        self.jpeg_quality = self.jpeg_quality.clamp(1, 100);
        if self.thumbnail_size == 0 {
            self.thumbnail_size = Self::default().thumbnail_size;
        }
        if !self.render_scale.is_finite() || self.render_scale <= 0.0 {
            self.render_scale = Self::default().render_scale;
        }
        self
    }
}
