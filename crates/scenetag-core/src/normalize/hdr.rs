use regex::Regex;

use crate::error::Result;
use crate::types::VideoAttributes;

/// Collects HDR and Dolby Vision tags from video metadata, falling back to
/// filename tokens when the metadata says nothing.
pub struct HdrDetector {
    re_dv_profile: Regex,
    re_name_dv: Regex,
    re_name_hdr10: Regex,
    re_name_hdr: Regex,
}

impl HdrDetector {
    /// Compiles the profile and filename patterns.
    ///
    /// # Errors
    ///
    /// Returns `ScenetagError::RegexError` if a pattern fails to compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            re_dv_profile: Regex::new(r"(?i)dv(?:he|av)\.\d{2}")?,
            re_name_dv: Regex::new(r"(?i)\b(?:DV|DOVI|DOLBY[ ._-]?VISION)\b")?,
            re_name_hdr10: Regex::new(r"(?i)\bHDR10\b")?,
            re_name_hdr: Regex::new(r"(?i)\bHDR\b")?,
        })
    }

    /// Ordered, duplicate-free HDR tags (`DV`, `HDR10`, `HDR`, `HLG`).
    #[must_use]
    pub fn detect(&self, video: Option<&VideoAttributes>, basename: &str) -> Vec<String> {
        let mut tags: Vec<&'static str> = Vec::new();
        if let Some(video) = video {
            self.from_metadata(video, &mut tags);
        }
        if tags.is_empty() {
            self.from_filename(basename, &mut tags);
        }

        let mut unique: Vec<String> = Vec::with_capacity(tags.len());
        for tag in tags {
            if !unique.iter().any(|t| t == tag) {
                unique.push(tag.to_string());
            }
        }
        unique
    }

    fn from_metadata(&self, video: &VideoAttributes, tags: &mut Vec<&'static str>) {
        let lower = |field: &Option<String>| field.as_deref().unwrap_or_default().to_lowercase();
        let format = lower(&video.hdr_format);
        let profile = lower(&video.hdr_format_profile);
        let compatibility = lower(&video.hdr_format_compatibility);
        let settings = lower(&video.hdr_format_settings);

        if format.contains("dolby vision")
            || self.re_dv_profile.is_match(&format)
            || self.re_dv_profile.is_match(&profile)
        {
            tags.push("DV");
        }

        if compatibility.contains("hdr10") {
            tags.push("HDR10");
        } else if compatibility.contains("hdr") {
            tags.push("HDR");
        }

        if settings.contains("hdr10") {
            tags.push("HDR10");
        }

        if tags.is_empty() {
            let primaries = lower(&video.color_primaries);
            if primaries.contains("bt.2020") || primaries.contains("bt2020") {
                let transfer = lower(&video.transfer_characteristics);
                if transfer.contains("smpte st 2084") || transfer.contains("pq") {
                    tags.push("HDR10");
                } else if transfer.contains("arib std-b67") || transfer.contains("hlg") {
                    tags.push("HLG");
                } else {
                    tags.push("HDR");
                }
            }
        }
    }

    fn from_filename(&self, basename: &str, tags: &mut Vec<&'static str>) {
        if self.re_name_dv.is_match(basename) {
            tags.push("DV");
        }
        if self.re_name_hdr10.is_match(basename) {
            tags.push("HDR10");
        } else if self.re_name_hdr.is_match(basename) {
            tags.push("HDR");
        }
    }
}
