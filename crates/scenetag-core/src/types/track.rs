use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Container-level facts about the file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralAttributes {
    pub file_name: Option<String>,
    pub file_size: Option<u64>,
    /// Duration in milliseconds.
    pub duration: Option<u64>,
    pub overall_bit_rate: Option<u64>,
}

/// Attributes of a video stream as reported by the media inspector.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoAttributes {
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// Codec family, e.g. "HEVC" or "AVC".
    pub format: Option<String>,
    pub writing_library: Option<String>,
    pub encoded_library_settings: Option<String>,
    pub format_settings: Option<String>,
    /// Stream bitrate in bits per second.
    pub bit_rate: Option<u64>,
    pub hdr_format: Option<String>,
    pub hdr_format_profile: Option<String>,
    pub hdr_format_compatibility: Option<String>,
    pub hdr_format_settings: Option<String>,
    pub color_primaries: Option<String>,
    pub transfer_characteristics: Option<String>,
}

/// Attributes of one audio stream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioAttributes {
    pub format: Option<String>,
    #[serde(alias = "channel_s")]
    pub channels: Option<u32>,
    pub language: Option<String>,
    #[serde(alias = "format_additionalfeatures")]
    pub additional_features: Option<String>,
    #[serde(alias = "format_commercial_ifany")]
    pub commercial_name: Option<String>,
}

/// Attributes of one subtitle stream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextAttributes {
    pub format: Option<String>,
    pub language: Option<String>,
    pub title: Option<String>,
}

/// A single track, tagged with its kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "track_type")]
pub enum Track {
    General(GeneralAttributes),
    Video(VideoAttributes),
    Audio(AudioAttributes),
    Text(TextAttributes),
}

/// Ordered collection of tracks for one file.
///
/// The engine only reads from it; accessors project the first track of each
/// kind the way the classification rules expect.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackSet {
    pub tracks: Vec<Track>,
}

impl TrackSet {
    /// Creates a track set from a list of tracks.
    #[must_use]
    pub fn new(tracks: Vec<Track>) -> Self {
        Self { tracks }
    }

    /// Decodes a track set from its JSON form.
    ///
    /// # Errors
    ///
    /// Returns `ScenetagError::MalformedTracks` if the JSON does not describe
    /// a track set.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The general (container) track, if present.
    #[must_use]
    pub fn general(&self) -> Option<&GeneralAttributes> {
        self.tracks.iter().find_map(|t| match t {
            Track::General(g) => Some(g),
            _ => None,
        })
    }

    /// The first video track.
    #[must_use]
    pub fn video(&self) -> Option<&VideoAttributes> {
        self.tracks.iter().find_map(|t| match t {
            Track::Video(v) => Some(v),
            _ => None,
        })
    }

    /// The first audio track.
    #[must_use]
    pub fn audio(&self) -> Option<&AudioAttributes> {
        self.audio_tracks().next()
    }

    /// All audio tracks, in container order.
    pub fn audio_tracks(&self) -> impl Iterator<Item = &AudioAttributes> {
        self.tracks.iter().filter_map(|t| match t {
            Track::Audio(a) => Some(a),
            _ => None,
        })
    }

    /// All subtitle tracks, in container order.
    pub fn text_tracks(&self) -> impl Iterator<Item = &TextAttributes> {
        self.tracks.iter().filter_map(|t| match t {
            Track::Text(s) => Some(s),
            _ => None,
        })
    }
}
