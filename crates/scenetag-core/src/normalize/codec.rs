use crate::config::{NamingConfig, lookup};
use crate::types::ReleaseType;

const HEVC_NAMES: &[&str] = &["HEVC", "H.265", "H265", "X265", "HVEC"];
const AVC_NAMES: &[&str] = &["AVC", "H.264", "H264", "X264"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Family {
    Hevc,
    Avc,
}

fn family(codec: &str) -> Option<Family> {
    let upper = codec.trim().to_uppercase();
    if HEVC_NAMES.contains(&upper.as_str()) {
        Some(Family::Hevc)
    } else if AVC_NAMES.contains(&upper.as_str()) {
        Some(Family::Avc)
    } else {
        None
    }
}

/// Codec family as reported by the inspector: `HEVC`, `AVC`, or the raw
/// format uppercased.
#[must_use]
pub fn video_format(format: &str) -> String {
    let upper = format.trim().to_uppercase();
    if upper.contains("HEVC") || upper.contains("H.265") {
        "HEVC".to_string()
    } else if upper.contains("AVC") || upper.contains("H.264") {
        "AVC".to_string()
    } else {
        upper
    }
}

/// Maps a codec name into the vocabulary of `release_type`.
///
/// REMUX names keep the community's `HVEC` spelling. Unknown names pass
/// through unchanged, and mapping an already-mapped name is a no-op.
#[must_use]
pub fn map_codec(codec: &str, release_type: ReleaseType, config: &NamingConfig) -> String {
    match (release_type, family(codec)) {
        (ReleaseType::Remux, Some(Family::Hevc)) => "HVEC".to_string(),
        (ReleaseType::Remux, Some(Family::Avc)) => "AVC".to_string(),
        (ReleaseType::WebDl, Some(Family::Hevc)) => "H.265".to_string(),
        (ReleaseType::WebDl, Some(Family::Avc)) => "H.264".to_string(),
        (ReleaseType::Remux | ReleaseType::WebDl, None) => codec.to_string(),
        _ => encoder_name(codec, config),
    }
}

/// Encoder-family name (`x264`, `x265`, `XviD`, ...) for re-compressed video.
#[must_use]
pub fn encoder_name(codec: &str, config: &NamingConfig) -> String {
    match family(codec) {
        Some(Family::Hevc) => "x265".to_string(),
        Some(Family::Avc) => "x264".to_string(),
        None => lookup(&config.video_codec_mapping, codec.trim())
            .map_or_else(|| codec.to_string(), str::to_string),
    }
}
