use std::fmt;

use serde::{Deserialize, Serialize};

/// Resolution bucket derived from the video frame size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resolution {
    /// 2160p: Ultra HD / 4K
    UHD2160,
    /// 1080p: Full HD
    FHD1080,
    /// 720p: High Definition
    HD720,
    /// 576p: PAL SD
    SD576,
    /// 480p: NTSC SD
    SD480,
    /// Anything smaller, labelled by its height.
    Other(u32),
}

impl Resolution {
    /// Returns `true` for the two buckets eligible for BluRay classification.
    #[must_use]
    pub fn is_high_definition_disc(self) -> bool {
        matches!(self, Self::UHD2160 | Self::FHD1080)
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UHD2160 => write!(f, "2160p"),
            Self::FHD1080 => write!(f, "1080p"),
            Self::HD720 => write!(f, "720p"),
            Self::SD576 => write!(f, "576p"),
            Self::SD480 => write!(f, "480p"),
            Self::Other(height) => write!(f, "{height}p"),
        }
    }
}

/// Coarse origin of the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Source {
    BluRay,
    Web,
    Dvd,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BluRay => write!(f, "BluRay"),
            Self::Web => write!(f, "WEB"),
            Self::Dvd => write!(f, "DVD"),
        }
    }
}

/// How the release was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReleaseType {
    /// Video re-compressed from a disc source.
    Encode,
    /// Disc streams repackaged without re-encoding.
    Remux,
    /// Streaming-service download, untouched.
    WebDl,
    /// Streaming-service content that was re-encoded.
    WebRip,
    /// Standard-definition disc rip.
    DvdRip,
}

impl ReleaseType {
    /// Whether the video stream of this release type has been re-compressed,
    /// i.e. whether a compressor tag applies.
    #[must_use]
    pub fn is_compressed(self) -> bool {
        !matches!(self, Self::Remux | Self::WebDl)
    }

    /// Whether the release came from a streaming service.
    #[must_use]
    pub fn is_web(self) -> bool {
        matches!(self, Self::WebDl | Self::WebRip)
    }

    /// The label used inside scene names for web releases.
    #[must_use]
    pub fn scene_label(self) -> &'static str {
        match self {
            Self::Encode => "ENCODE",
            Self::Remux => "REMUX",
            Self::WebDl => "WEB-DL",
            Self::WebRip => "WEBRip",
            Self::DvdRip => "DVDRip",
        }
    }
}

impl fmt::Display for ReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encode => write!(f, "ENCODE"),
            Self::Remux => write!(f, "REMUX"),
            Self::WebDl => write!(f, "WEBDL"),
            Self::WebRip => write!(f, "WEBRIP"),
            Self::DvdRip => write!(f, "DVDRIP"),
        }
    }
}
