//! Scene filename and tracker title synthesis.
//!
//! The template is chosen by release type. Metadata without a release type
//! (no resolution was known) is named with the encode template.

mod scene;
mod tracker;

use regex::Regex;

use crate::config::NamingConfig;
use crate::error::Result;
use crate::extract::tidy_title;
use crate::normalize::map_codec;
use crate::types::{ExtractedMetadata, ReleaseType};

/// Builds output names from finished metadata.
pub struct NameSynthesizer {
    config: NamingConfig,
    re_whitespace: Regex,
    re_dots: Regex,
}

impl NameSynthesizer {
    /// Creates a synthesizer for `config`. The output extension is used
    /// without any leading dot.
    ///
    /// # Errors
    ///
    /// Returns `ScenetagError::RegexError` if a pattern fails to compile.
    pub fn new(config: &NamingConfig) -> Result<Self> {
        let mut config = config.clone();
        config.output_extension = config.extension().to_string();
        Ok(Self {
            config,
            re_whitespace: Regex::new(r"\s+")?,
            re_dots: Regex::new(r"\.{2,}")?,
        })
    }

    /// Title with reserved characters and dot runs removed, words spaced.
    fn title(meta: &ExtractedMetadata) -> Option<String> {
        meta.title.as_deref().and_then(tidy_title)
    }

    /// Template selector: the classified type, or ENCODE when unclassified.
    fn template(meta: &ExtractedMetadata) -> ReleaseType {
        meta.release_type.unwrap_or(ReleaseType::Encode)
    }

    /// Codec token in the vocabulary of the template in use.
    fn codec(&self, meta: &ExtractedMetadata) -> Option<String> {
        meta.video_codec
            .as_deref()
            .map(|codec| map_codec(codec, Self::template(meta), &self.config))
    }

    /// `-Group` suffix, empty for the sentinel.
    fn group_suffix(&self, meta: &ExtractedMetadata) -> String {
        let group = meta.release_group.trim();
        if group.is_empty() || group == self.config.default_release_group {
            String::new()
        } else {
            format!("-{group}")
        }
    }
}
