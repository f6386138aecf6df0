//! Filename-derived fields: release group, title/year/episode, search query.

pub mod group;
pub mod query;
pub mod title;

pub use group::GroupExtractor;
pub use query::{QueryNormalizer, SearchQuery};
pub use title::{TitleExtractor, TitleInfo};
pub(crate) use title::tidy_title;

/// Container suffixes removed before a filename is parsed.
pub const VIDEO_EXTENSIONS: &[&str] = &[
    "mkv", "mp4", "avi", "m2ts", "ts", "mov", "wmv", "webm", "m4v",
];

/// Final path component with a known video extension removed.
///
/// Unknown dotted suffixes are part of the name: `Movie.x264-Group` keeps
/// its last segment.
#[must_use]
pub fn strip_extension(filename: &str) -> &str {
    let name = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename);
    match name.rsplit_once('.') {
        Some((stem, ext))
            if !stem.is_empty()
                && VIDEO_EXTENSIONS
                    .iter()
                    .any(|known| known.eq_ignore_ascii_case(ext)) =>
        {
            stem
        }
        _ => name,
    }
}
