use std::fmt;

use serde::{Deserialize, Serialize};

use super::release::{ReleaseType, Resolution, Source};

/// Everything the engine learned about one file.
///
/// Built fresh for each file through [`MetadataBuilder`] and consumed by the
/// name synthesizers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedMetadata {
    /// Filename without its container extension.
    pub basename: String,
    pub resolution: Option<Resolution>,
    /// Codec family as reported: "HEVC", "AVC" or the raw format uppercased.
    pub video_format: Option<String>,
    /// Codec token in the vocabulary of the release type.
    pub video_codec: Option<String>,
    /// Encoder family (x264/x265), only for re-compressed releases.
    pub compressor: Option<String>,
    pub source: Option<Source>,
    pub release_type: Option<ReleaseType>,
    /// Normalized token for the first audio track, e.g. "DDP5.1.Atmos".
    pub audio: Option<String>,
    pub audio_languages: Vec<String>,
    pub hdr_info: Vec<String>,
    pub service: Option<String>,
    pub release_group: String,
    pub season: Option<u32>,
    pub episode: Option<u32>,
    pub title: Option<String>,
    pub year: Option<u16>,
}

impl ExtractedMetadata {
    /// `SxxEyy` marker for series episodes.
    #[must_use]
    pub fn series_marker(&self) -> Option<String> {
        match (self.season, self.episode) {
            (Some(s), Some(e)) => Some(format!("S{s:02}E{e:02}")),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_remux(&self) -> bool {
        self.release_type == Some(ReleaseType::Remux)
    }
}

impl fmt::Display for ExtractedMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn or_na<T: fmt::Display>(value: Option<T>) -> String {
            value.map_or_else(|| "n/a".to_string(), |v| v.to_string())
        }
        fn list(values: &[String]) -> String {
            if values.is_empty() {
                "n/a".to_string()
            } else {
                values.join(", ")
            }
        }

        let compressor = match (&self.compressor, self.release_type) {
            (Some(c), _) => c.clone(),
            (None, Some(t)) if !t.is_compressed() => "not applicable".to_string(),
            (None, _) => "n/a".to_string(),
        };

        writeln!(f, "Resolution:      {}", or_na(self.resolution))?;
        writeln!(f, "Format:          {}", or_na(self.video_format.as_deref()))?;
        writeln!(f, "Compressor:      {compressor}")?;
        writeln!(f, "Release type:    {}", or_na(self.release_type))?;
        writeln!(f, "Source:          {}", or_na(self.source))?;
        writeln!(f, "Audio:           {}", or_na(self.audio.as_deref()))?;
        writeln!(f, "Audio languages: {}", list(&self.audio_languages))?;
        writeln!(f, "HDR:             {}", list(&self.hdr_info))?;
        writeln!(f, "Service:         {}", or_na(self.service.as_deref()))?;
        writeln!(f, "Release group:   {}", self.release_group)?;
        write!(
            f,
            "REMUX:           {}",
            if self.is_remux() { "yes" } else { "no" }
        )
    }
}

/// Assembles an [`ExtractedMetadata`] from the outputs of each pipeline stage.
#[derive(Debug, Clone)]
pub struct MetadataBuilder {
    inner: ExtractedMetadata,
}

impl MetadataBuilder {
    /// Starts a record for `basename`, with the release group set to the
    /// sentinel until a stage supplies a better one.
    #[must_use]
    pub fn new(basename: impl Into<String>, default_group: impl Into<String>) -> Self {
        Self {
            inner: ExtractedMetadata {
                basename: basename.into(),
                resolution: None,
                video_format: None,
                video_codec: None,
                compressor: None,
                source: None,
                release_type: None,
                audio: None,
                audio_languages: Vec::new(),
                hdr_info: Vec::new(),
                service: None,
                release_group: default_group.into(),
                season: None,
                episode: None,
                title: None,
                year: None,
            },
        }
    }

    #[must_use]
    pub fn resolution(mut self, resolution: Option<Resolution>) -> Self {
        self.inner.resolution = resolution;
        self
    }

    #[must_use]
    pub fn video(
        mut self,
        format: Option<String>,
        codec: Option<String>,
        compressor: Option<String>,
    ) -> Self {
        self.inner.video_format = format;
        self.inner.video_codec = codec;
        self.inner.compressor = compressor;
        self
    }

    #[must_use]
    pub fn classification(mut self, source: Option<Source>, release_type: Option<ReleaseType>) -> Self {
        self.inner.source = source;
        self.inner.release_type = release_type;
        self
    }

    #[must_use]
    pub fn audio(mut self, audio: Option<String>, languages: Vec<String>) -> Self {
        self.inner.audio = audio;
        self.inner.audio_languages = languages;
        self
    }

    #[must_use]
    pub fn hdr(mut self, tags: Vec<String>) -> Self {
        self.inner.hdr_info = tags;
        self
    }

    #[must_use]
    pub fn service(mut self, service: Option<String>) -> Self {
        self.inner.service = service;
        self
    }

    #[must_use]
    pub fn release_group(mut self, group: impl Into<String>) -> Self {
        self.inner.release_group = group.into();
        self
    }

    #[must_use]
    pub fn episode(mut self, season: Option<u32>, episode: Option<u32>) -> Self {
        self.inner.season = season;
        self.inner.episode = episode;
        self
    }

    #[must_use]
    pub fn title(mut self, title: Option<String>, year: Option<u16>) -> Self {
        self.inner.title = title;
        self.inner.year = year;
        self
    }

    #[must_use]
    pub fn build(self) -> ExtractedMetadata {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ExtractedMetadata {
        MetadataBuilder::new("Dying for Sex S01E01", "NoGroup")
            .resolution(Some(Resolution::UHD2160))
            .video(Some("HEVC".into()), Some("H.265".into()), None)
            .classification(Some(Source::Web), Some(ReleaseType::WebDl))
            .audio(Some("DD5.1".into()), vec!["ITALIAN".into()])
            .hdr(vec!["DV".into(), "HDR10".into()])
            .episode(Some(1), Some(1))
            .title(Some("Dying for Sex".into()), None)
            .build()
    }

    #[test]
    fn builder_starts_with_sentinel_group() {
        let meta = MetadataBuilder::new("x", "NoGroup").build();
        assert_eq!(meta.release_group, "NoGroup");
        assert!(meta.release_type.is_none());
        assert!(meta.hdr_info.is_empty());
    }

    #[test]
    fn series_marker_is_zero_padded() {
        assert_eq!(sample().series_marker().as_deref(), Some("S01E01"));

        let mut meta = sample();
        meta.episode = None;
        assert_eq!(meta.series_marker(), None);
    }

    #[test]
    fn report_lists_extracted_fields() {
        let report = sample().to_string();
        assert!(report.contains("Resolution:      2160p"));
        assert!(report.contains("Format:          HEVC"));
        assert!(report.contains("Compressor:      not applicable"));
        assert!(report.contains("Release type:    WEBDL"));
        assert!(report.contains("HDR:             DV, HDR10"));
        assert!(report.contains("Service:         n/a"));
        assert!(report.ends_with("REMUX:           no"));
    }
}
