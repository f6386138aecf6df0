//! # Scenetag Core
//!
//! Release classification and scene-name synthesis for video files. Takes
//! the track metadata a media inspector reports plus the existing filename,
//! decides how the release was produced (REMUX, ENCODE, WEB-DL, WEBRip,
//! DVDRip), and assembles a scene-style filename and a tracker title.
//!
//! ## Quick Start
//!
//! ```rust
//! use scenetag_core::{AudioAttributes, Engine, ReleaseType, Track, TrackSet, VideoAttributes};
//!
//! let engine = Engine::with_defaults().unwrap();
//! let tracks = TrackSet::new(vec![
//!     Track::Video(VideoAttributes {
//!         width: Some(1920),
//!         height: Some(1080),
//!         format: Some("AVC".into()),
//!         writing_library: Some("x264 core 164 r3095".into()),
//!         ..Default::default()
//!     }),
//!     Track::Audio(AudioAttributes {
//!         format: Some("AC-3".into()),
//!         channels: Some(6),
//!         ..Default::default()
//!     }),
//! ]);
//!
//! let outcome = engine.classify_and_name(
//!     "Black.Dog.2024.1080p.BluRay.DD5.1.x264-iSlaNd.mkv",
//!     &tracks,
//!     None,
//! );
//!
//! assert_eq!(outcome.release_type, Some(ReleaseType::Encode));
//! assert_eq!(outcome.filename, "Black.Dog.2024.1080p.BluRay.DD5.1.x264-iSlaNd.mkv");
//! ```
pub mod classify;
pub mod config;
pub mod error;
pub mod extract;
pub mod naming;
pub mod normalize;
pub mod pipeline;
pub mod types;

// Re-export primary API
pub use config::NamingConfig;
pub use error::{Result, ScenetagError};
pub use extract::{SearchQuery, strip_extension};
pub use pipeline::{Engine, NamingOutcome};
pub use types::{
    AudioAttributes, ContentKind, ExtractedMetadata, GeneralAttributes, LookupCandidate,
    ReleaseType, Resolution, Source, TextAttributes, Track, TrackSet, VideoAttributes,
};
