//! TOML settings file.
//!
//! ```toml
//! [naming]
//! default_release_group = "NOGROUP"
//! output_extension = "mkv"
//!
//! [naming.service_mapping]
//! CRAV = "CRAV"
//!
//! [lookup]
//! language = "it-IT"
//! min_score = 0.6
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use scenetag_core::NamingConfig;

/// Default location: `<config dir>/scenetag/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("scenetag").join("config.toml"))
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub naming: NamingConfig,
    pub lookup: LookupSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LookupSettings {
    /// TMDb language for localized titles, e.g. `it-IT`.
    pub language: Option<String>,
    /// Minimum title similarity for a hit to be used.
    pub min_score: f64,
    pub timeout_secs: u64,
    pub base_url: Option<String>,
}

impl Default for LookupSettings {
    fn default() -> Self {
        Self {
            language: None,
            min_score: 0.6,
            timeout_secs: 10,
            base_url: None,
        }
    }
}

impl LookupSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

impl Settings {
    /// Parses settings; absent keys keep their defaults.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("invalid settings file")
    }

    /// Loads `explicit` if given (it must exist), otherwise the default
    /// location when present, otherwise built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match default_config_path().filter(|p| p.is_file()) {
                Some(path) => path,
                None => {
                    debug!("no settings file, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;
        let settings =
            Self::from_toml(&text).with_context(|| format!("in {}", path.display()))?;
        settings.naming.validate()?;
        debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_keeps_defaults() {
        let settings = Settings::from_toml("").unwrap();
        assert_eq!(settings.naming, NamingConfig::default());
        assert!(settings.lookup.language.is_none());
        assert!((settings.lookup.min_score - 0.6).abs() < f64::EPSILON);
        assert_eq!(settings.lookup.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn partial_overrides() {
        let settings = Settings::from_toml(
            r#"
            [naming]
            default_release_group = "MYGRP"
            remux_markers = ["REMUX", "BDMUX"]

            [naming.service_mapping]
            CRAV = "CRAV"

            [lookup]
            language = "it-IT"
            timeout_secs = 0
            "#,
        )
        .unwrap();
        assert_eq!(settings.naming.default_release_group, "MYGRP");
        assert_eq!(settings.naming.remux_markers, vec!["REMUX", "BDMUX"]);
        assert_eq!(settings.naming.output_extension, "mkv");
        assert_eq!(
            settings.naming.service_mapping.get("CRAV").map(String::as_str),
            Some("CRAV")
        );
        assert_eq!(settings.lookup.language.as_deref(), Some("it-IT"));
        assert_eq!(settings.lookup.timeout(), Duration::from_secs(1));
    }

    #[test]
    fn bad_toml_is_an_error() {
        assert!(Settings::from_toml("[naming\n").is_err());
        assert!(Settings::from_toml("[lookup]\nmin_score = \"high\"").is_err());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        assert!(Settings::load(Some(Path::new("/nonexistent/scenetag.toml"))).is_err());
    }

    #[test]
    fn default_path_ends_with_app_dir() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("scenetag/config.toml"));
        }
    }
}
