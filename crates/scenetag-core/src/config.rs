//! Naming configuration.
//!
//! Every table the engine consults lives here so that callers can load
//! overrides from a file and merge them over the built-in defaults.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScenetagError};

/// Release group emitted when no valid tag can be recovered from the filename.
pub const DEFAULT_RELEASE_GROUP: &str = "NoGroup";

/// Video bitrate (bits/s) above which an unmarked, unencoded disc rip is
/// assumed to be a REMUX.
pub const DEFAULT_REMUX_BITRATE: u64 = 15_000_000;

/// Longest release group tag accepted by the extractor.
pub const DEFAULT_MAX_GROUP_LEN: usize = 30;

/// Configuration for classification and name synthesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    /// Sentinel used when no release group is found.
    pub default_release_group: String,
    /// Filename markers that flag untouched disc content.
    pub remux_markers: Vec<String>,
    /// Extension appended to synthesized filenames (without leading dot).
    pub output_extension: String,
    /// Bitrate threshold for the REMUX fallback heuristic.
    pub remux_bitrate_threshold: u64,
    /// Maximum accepted release group length.
    pub max_group_len: usize,
    /// Static audio format names used when no per-codec rule applies.
    pub audio_format_mapping: BTreeMap<String, String>,
    /// Extra codec names for the encode vocabulary (x264/x265 family).
    pub video_codec_mapping: BTreeMap<String, String>,
    /// Filename token → canonical streaming service tag.
    pub service_mapping: BTreeMap<String, String>,
    /// Lowercased language code → display name.
    pub language_mapping: BTreeMap<String, String>,
}

fn table(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            default_release_group: DEFAULT_RELEASE_GROUP.to_string(),
            remux_markers: ["REMUX", "UNTOUCHED", "VU1080", "VU720", "VU"]
                .iter()
                .map(|m| (*m).to_string())
                .collect(),
            output_extension: "mkv".to_string(),
            remux_bitrate_threshold: DEFAULT_REMUX_BITRATE,
            max_group_len: DEFAULT_MAX_GROUP_LEN,
            audio_format_mapping: table(&[
                ("AAC", "AAC"),
                ("AC-3", "DD5.1"),
                ("E-AC-3", "DDP5.1"),
                ("Dolby Digital Plus", "DDP5.1"),
                ("TrueHD", "TrueHD.Atmos.7.1"),
                ("MLP FBA", "TrueHD.Atmos.7.1"),
                ("DTS", "DTS"),
                ("DTS-HD MA", "DTS-HD.MA.7.1"),
                ("DTS-HD HRA", "DTS-HD.HRA"),
                ("FLAC", "FLAC"),
                ("PCM", "PCM"),
                ("Opus", "Opus"),
            ]),
            video_codec_mapping: table(&[
                ("MPEG-4 Visual", "XviD"),
                ("MPEG-2 Video", "MPEG2"),
            ]),
            service_mapping: table(&[
                ("AMZN", "AMZN"),
                ("AMAZON", "AMZN"),
                ("NF", "NF"),
                ("NETFLIX", "NF"),
                ("DSNP", "DSNP"),
                ("DISNEY", "DSNP"),
                ("HULU", "HULU"),
                ("HMAX", "HMAX"),
                ("ATVP", "ATVP"),
                ("APPLE", "ATVP"),
                ("PMTP", "PMTP"),
                ("PARAMOUNT", "PMTP"),
            ]),
            language_mapping: table(&[
                ("it", "ITALIAN"),
                ("ita", "ITALIAN"),
                ("italian", "ITALIAN"),
                ("italiano", "ITALIAN"),
                ("en", "ENGLISH"),
                ("eng", "ENGLISH"),
                ("english", "ENGLISH"),
                ("es", "SPANISH"),
                ("spa", "SPANISH"),
                ("spanish", "SPANISH"),
                ("fr", "FRENCH"),
                ("fra", "FRENCH"),
                ("french", "FRENCH"),
                ("de", "GERMAN"),
                ("ger", "GERMAN"),
                ("german", "GERMAN"),
                ("ja", "JAPANESE"),
                ("jpn", "JAPANESE"),
                ("japanese", "JAPANESE"),
            ]),
        }
    }
}

impl NamingConfig {
    /// Create a configuration with the built-in defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the release group sentinel.
    pub fn with_default_release_group(mut self, group: impl Into<String>) -> Self {
        self.default_release_group = group.into();
        self
    }

    /// Set the output extension. A leading dot is tolerated and removed.
    pub fn with_output_extension(mut self, extension: impl Into<String>) -> Self {
        self.output_extension = extension.into().trim_start_matches('.').to_string();
        self
    }

    /// Output extension without surrounding whitespace or leading dots.
    #[must_use]
    pub fn extension(&self) -> &str {
        self.output_extension.trim().trim_start_matches('.')
    }

    /// Replace the untouched-content markers.
    pub fn with_remux_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.remux_markers = markers.into_iter().map(Into::into).collect();
        self
    }

    /// Set the REMUX bitrate threshold in bits per second.
    pub fn with_remux_bitrate_threshold(mut self, bits_per_second: u64) -> Self {
        self.remux_bitrate_threshold = bits_per_second;
        self
    }

    /// Checks that the configuration can drive the engine.
    ///
    /// # Errors
    ///
    /// Returns `ScenetagError::InvalidConfig` naming the first bad field.
    pub fn validate(&self) -> Result<()> {
        if self.default_release_group.trim().is_empty() {
            return Err(ScenetagError::InvalidConfig {
                field: "default_release_group",
                reason: "must not be empty".into(),
            });
        }
        if self.extension().is_empty() {
            return Err(ScenetagError::InvalidConfig {
                field: "output_extension",
                reason: "must not be empty".into(),
            });
        }
        if self.extension().contains(['/', '\\']) {
            return Err(ScenetagError::InvalidConfig {
                field: "output_extension",
                reason: "must not contain path separators".into(),
            });
        }
        if self.remux_markers.iter().any(|m| m.trim().is_empty()) {
            return Err(ScenetagError::InvalidConfig {
                field: "remux_markers",
                reason: "markers must not be blank".into(),
            });
        }
        if self.max_group_len == 0 {
            return Err(ScenetagError::InvalidConfig {
                field: "max_group_len",
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }
}

/// Case-insensitive lookup into one of the configuration tables.
pub(crate) fn lookup<'a>(map: &'a BTreeMap<String, String>, key: &str) -> Option<&'a str> {
    map.iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(key))
        .map(|(_, v)| v.as_str())
}
