use crate::types::{Resolution, VideoAttributes};

/// Buckets a frame size by its larger relevant dimension, so cropped
/// widescreen (1920×804) and pillarboxed (1440×1080) frames still land in
/// the class their mastering targets.
#[must_use]
pub fn classify_resolution(width: u32, height: u32) -> Resolution {
    if width >= 3840 || height >= 2160 {
        Resolution::UHD2160
    } else if width >= 1920 || height >= 1080 {
        Resolution::FHD1080
    } else if width >= 1280 || height >= 720 {
        Resolution::HD720
    } else if height >= 576 {
        Resolution::SD576
    } else if height >= 480 {
        Resolution::SD480
    } else {
        Resolution::Other(height)
    }
}

/// Resolution of the first video track, when both dimensions are known.
#[must_use]
pub fn video_resolution(video: Option<&VideoAttributes>) -> Option<Resolution> {
    let video = video?;
    Some(classify_resolution(video.width?, video.height?))
}
