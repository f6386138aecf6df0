use regex::Regex;
use tracing::debug;

use crate::classify::release::marker_pattern;
use crate::config::NamingConfig;
use crate::error::Result;

/// Recovers the release group tag from an extension-stripped basename.
///
/// Always yields a usable tag: when every strategy fails the configured
/// sentinel is returned.
pub struct GroupExtractor {
    re_denylist: Regex,
    re_marker: Option<Regex>,
    max_len: usize,
    sentinel: String,
}

impl GroupExtractor {
    /// Builds an extractor using the configured markers, length limit and
    /// sentinel.
    ///
    /// # Errors
    ///
    /// Returns `ScenetagError::RegexError` if a configured marker produces an
    /// invalid pattern.
    pub fn new(config: &NamingConfig) -> Result<Self> {
        Ok(Self {
            re_denylist: Regex::new(r"(?i)^(?:no-?gr(?:ou)?p|unknown|unk)$")?,
            re_marker: marker_pattern(&config.remux_markers)?,
            max_len: config.max_group_len,
            sentinel: config.default_release_group.clone(),
        })
    }

    /// Whether `tag` is acceptable as a release group.
    #[must_use]
    pub fn is_valid(&self, tag: &str) -> bool {
        !tag.is_empty()
            && tag.chars().count() <= self.max_len
            && tag.chars().all(|c| c.is_alphanumeric() || c == '_')
            && !self.re_denylist.is_match(tag)
    }

    #[must_use]
    pub fn extract(&self, basename: &str) -> String {
        if let Some((_, suffix)) = basename.rsplit_once('-') {
            let suffix = suffix.trim();
            if self.is_valid(suffix) {
                debug!(group = suffix, "group from hyphen suffix");
                return suffix.to_string();
            }
        }

        if let Some(m) = self.re_marker.as_ref().and_then(|re| re.find(basename)) {
            if self.is_valid(m.as_str()) {
                debug!(group = m.as_str(), "group from untouched marker");
                return m.as_str().to_string();
            }
        }

        if let Some((_, segment)) = basename.rsplit_once('.') {
            let segment = segment.trim();
            let tagged = segment
                .chars()
                .any(|c| c.is_ascii_digit() || c == '-' || c == '_');
            if tagged && self.is_valid(segment) {
                debug!(group = segment, "group from last dot segment");
                return segment.to_string();
            }
        }

        debug!(basename, "no release group, using sentinel");
        self.sentinel.clone()
    }
}
