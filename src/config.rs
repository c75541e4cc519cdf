//! Application Configuration
//! Data paths and sidebar text, overridable from an optional `dashboard.json`.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Dashboard configuration with sensible defaults for every field.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Directory holding the CSV datasets and the branding image.
    pub data_dir: PathBuf,
    pub day_file: String,
    pub hour_file: String,
    pub logo_file: String,
    pub title: String,
    pub operating_hours: String,
    pub contact: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            day_file: "daycleaned.csv".to_string(),
            hour_file: "hourcleaned.csv".to_string(),
            logo_file: "bike_logo.jpg".to_string(),
            title: "City Bike Rental".to_string(),
            operating_hours: "Monday - Sunday | 24 Hours 🕐".to_string(),
            contact: "📞 1234567890".to_string(),
        }
    }
}

impl AppConfig {
    pub const FILE_NAME: &'static str = "dashboard.json";

    pub fn day_path(&self) -> PathBuf {
        self.data_dir.join(&self.day_file)
    }

    pub fn hour_path(&self) -> PathBuf {
        self.data_dir.join(&self.hour_file)
    }

    pub fn logo_path(&self) -> PathBuf {
        self.data_dir.join(&self.logo_file)
    }

    /// Parse a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("parsing config file {}", path.display()))
    }

    /// Load `dashboard.json` from the working directory when present,
    /// falling back to defaults (a broken file is reported, not fatal).
    pub fn load_or_default() -> Self {
        let path = Path::new(Self::FILE_NAME);
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(error) => {
                warn!(%error, "ignoring invalid config file");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = AppConfig::default();
        assert_eq!(config.day_path(), PathBuf::from("data/daycleaned.csv"));
        assert_eq!(config.hour_path(), PathBuf::from("data/hourcleaned.csv"));
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"data_dir": "/srv/bike", "title": "Harbor Bikes"}"#).unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/srv/bike"));
        assert_eq!(config.title, "Harbor Bikes");
        assert_eq!(config.day_file, "daycleaned.csv");
        assert_eq!(config.contact, AppConfig::default().contact);
    }
}
