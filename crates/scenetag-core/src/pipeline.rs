//! # Classification and Naming Pipeline
//!
//! Composes the per-stage components into the single entry point callers
//! use: filename plus track set (plus an optional lookup result) in, release
//! type, metadata and synthesized names out.

use serde::Serialize;
use tracing::debug;

use crate::classify::{EncodingEvidence, ReleaseClassifier, ReleaseSignals, video_resolution};
use crate::config::NamingConfig;
use crate::error::Result;
use crate::extract::{GroupExtractor, QueryNormalizer, SearchQuery, TitleExtractor, strip_extension};
use crate::naming::NameSynthesizer;
use crate::normalize::{
    HdrDetector, audio_languages, audio_token, detect_service, encoder_name, map_codec,
    video_format,
};
use crate::types::{
    ExtractedMetadata, LookupCandidate, MetadataBuilder, ReleaseType, TrackSet,
};

/// Everything produced for one file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamingOutcome {
    /// `None` when the video resolution was unknown and classification was
    /// skipped.
    pub release_type: Option<ReleaseType>,
    pub metadata: ExtractedMetadata,
    /// Scene-style filename, extension included.
    pub filename: String,
    pub tracker_title: String,
}

/// The classification and naming engine.
///
/// Holds only configuration and compiled patterns, so one engine can be
/// shared across threads and reused for any number of files.
pub struct Engine {
    config: NamingConfig,
    classifier: ReleaseClassifier,
    hdr: HdrDetector,
    groups: GroupExtractor,
    titles: TitleExtractor,
    queries: QueryNormalizer,
    names: NameSynthesizer,
}

impl Engine {
    /// Validates `config` and compiles every pattern the stages need.
    ///
    /// # Errors
    ///
    /// Returns `ScenetagError::InvalidConfig` for an unusable configuration
    /// and `ScenetagError::RegexError` if a configured marker cannot be
    /// compiled.
    pub fn new(config: NamingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            classifier: ReleaseClassifier::new(&config)?,
            hdr: HdrDetector::new()?,
            groups: GroupExtractor::new(&config)?,
            titles: TitleExtractor::new()?,
            queries: QueryNormalizer::new()?,
            names: NameSynthesizer::new(&config)?,
            config,
        })
    }

    /// Engine with the built-in configuration.
    pub fn with_defaults() -> Result<Self> {
        Self::new(NamingConfig::default())
    }

    #[must_use]
    pub fn config(&self) -> &NamingConfig {
        &self.config
    }

    /// Classifies the release and synthesizes its names.
    ///
    /// Missing metadata never fails the call; each stage falls back to its
    /// documented default instead. When `filename` is blank the general
    /// track's file name is used.
    ///
    /// # Examples
    ///
    /// ```
    /// use scenetag_core::{Engine, TrackSet};
    ///
    /// let engine = Engine::with_defaults().unwrap();
    /// let outcome = engine.classify_and_name("Movie.Without.Tag.mkv", &TrackSet::default(), None);
    ///
    /// assert_eq!(outcome.metadata.release_group, "NoGroup");
    /// assert_eq!(outcome.filename, "Movie.mkv");
    /// ```
    #[must_use]
    pub fn classify_and_name(
        &self,
        filename: &str,
        tracks: &TrackSet,
        candidate: Option<&LookupCandidate>,
    ) -> NamingOutcome {
        let metadata = self.extract(filename, tracks, candidate);
        NamingOutcome {
            release_type: metadata.release_type,
            filename: self.names.scene_name(&metadata),
            tracker_title: self.names.tracker_title(&metadata),
            metadata,
        }
    }

    /// Runs every extraction stage and assembles the metadata record.
    #[must_use]
    pub fn extract(
        &self,
        filename: &str,
        tracks: &TrackSet,
        candidate: Option<&LookupCandidate>,
    ) -> ExtractedMetadata {
        let filename = if filename.trim().is_empty() {
            tracks
                .general()
                .and_then(|g| g.file_name.as_deref())
                .unwrap_or(filename)
        } else {
            filename
        };
        let basename = strip_extension(filename);

        let video = tracks.video();
        let resolution = video_resolution(video);
        let service = detect_service(basename, &self.config);

        let classification = if resolution.is_some() {
            self.classifier.classify(&ReleaseSignals {
                basename,
                resolution,
                evidence: EncodingEvidence::detect(video),
                bitrate: video.and_then(|v| v.bit_rate),
                has_service: service.is_some(),
            })
        } else {
            debug!(basename, "resolution unknown, classification skipped");
            None
        };
        let source = classification.map(|c| c.source);
        let release_type = classification.map(|c| c.release_type);

        let format = video
            .and_then(|v| v.format.as_deref())
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .map(video_format);
        let codec = format.as_deref().map(|f| {
            map_codec(f, release_type.unwrap_or(ReleaseType::Encode), &self.config)
        });
        let compressor = format
            .as_deref()
            .filter(|_| release_type.is_none_or(ReleaseType::is_compressed))
            .map(|f| encoder_name(f, &self.config));

        let audio = tracks.audio().map(|a| audio_token(a, &self.config));
        let languages = audio_languages(tracks.audio_tracks(), &self.config);

        let mut info = self.titles.extract(basename);
        if let Some(candidate) = candidate {
            info = info.with_candidate(candidate);
        }

        MetadataBuilder::new(basename, self.config.default_release_group.as_str())
            .resolution(resolution)
            .video(format, codec, compressor)
            .classification(source, release_type)
            .audio(audio, languages)
            .hdr(self.hdr.detect(video, basename))
            .service(service)
            .release_group(self.groups.extract(basename))
            .episode(info.season, info.episode)
            .title(info.title, info.year)
            .build()
    }

    /// Title search query and content kind for the optional lookup.
    #[must_use]
    pub fn search_query(&self, filename: &str) -> SearchQuery {
        self.queries.normalize(filename)
    }
}
