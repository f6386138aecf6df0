use regex::Regex;
use serde::{Deserialize, Serialize};

use super::strip_extension;
use crate::error::Result;
use crate::types::ContentKind;

/// Short words kept even though they are a single letter.
const SHORT_WORDS: &[&str] = &["a", "i", "o", "e", "y"];

/// A cleaned title query plus the kind of title it should be searched as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub query: String,
    pub kind: ContentKind,
}

/// Strips release noise from a filename to leave something a title search
/// engine can match.
pub struct QueryNormalizer {
    re_series: Regex,
    re_episode_marker: Regex,
    /// Noise patterns, applied in order.
    re_noise: Vec<Regex>,
    re_trailing_group: Regex,
    re_separators: Regex,
    re_whitespace: Regex,
}

impl QueryNormalizer {
    /// Compiles the episode marker and noise patterns.
    ///
    /// # Errors
    ///
    /// Returns `ScenetagError::RegexError` if a pattern fails to compile.
    pub fn new() -> Result<Self> {
        let noise = [
            // channel layouts, with or without a codec prefix
            r"(?i)\b(?:ddp|dd|aac|dts|truehd|flac|opus|lpcm|pcm)?[1-9]\.[0-2]\b",
            // audio codecs
            r"(?i)\b(?:dts(?:[-.]?hd)?(?:[ .]?ma)?|truehd|atmos|ddp|dd|e?ac3|aac|flac|opus|lpcm|pcm|dolby|mp3)\b",
            // resolution and video codec
            r"(?i)\b(?:2160p|1080[pi]|720p|576p|540p|480p|4k|8k|uhd|[hx][ .]?26[45]|avc|hevc|av1|xvid|10bit|8bit)\b",
            // HDR and color
            r"(?i)\b(?:hdr10(?:plus)?|hdr|dv|dovi|dolby[ .]?vision|hlg|sdr)\b",
            // release type and edition
            r"(?i)\b(?:bdrip|brrip|bdremux|bdmux|blu[ .-]?ray|hdrip|dvdrip|dvd|webrip|web[ .-]?dl|web|dlmux|webmux|remux|untouched|proper|repack|hdtv|extended|unrated|remastered)\b",
            // languages and subtitles
            r"(?i)\b(?:ita|eng|italian|english|multi|dual|subs?|subbed|spa|fre|fra|ger|deu|jpn)\b",
            // streaming services
            r"(?i)\b(?:amzn|amazon|nf|netflix|dsnp|disney|hulu|hmax|atvp|pmtp)\b",
            // year
            r"\b(?:19|20)\d{2}\b",
        ];

        Ok(Self {
            re_series: Regex::new(r"(?i)(?:^|[^a-z0-9])S\d{1,3}E\d{1,4}")?,
            re_episode_marker: Regex::new(
                r"(?i)\b(?:S\d{1,2}E\d{1,2}|\d{1,2}x\d{2}|Season\s?\d+|S\d{1,2}\b|Ep?\d{1,3}\b)",
            )?,
            re_noise: noise
                .iter()
                .map(|p| Regex::new(p))
                .collect::<std::result::Result<_, _>>()?,
            re_trailing_group: Regex::new(r"-[^\s.\-]+\s*$")?,
            re_separators: Regex::new(r"[._\-]+")?,
            re_whitespace: Regex::new(r"\s+")?,
        })
    }

    #[must_use]
    pub fn kind(&self, basename: &str) -> ContentKind {
        if self.re_series.is_match(basename) {
            ContentKind::Series
        } else {
            ContentKind::Movie
        }
    }

    fn separators_to_spaces(&self, text: &str) -> String {
        let spaced = self.re_separators.replace_all(text, " ");
        self.re_whitespace.replace_all(&spaced, " ").trim().to_string()
    }

    #[must_use]
    pub fn normalize(&self, filename: &str) -> SearchQuery {
        let basename = strip_extension(filename);
        let kind = self.kind(basename);

        let mut text = basename.replace('_', " ");
        if kind == ContentKind::Series {
            if let Some(start) = self.re_episode_marker.find(&text).map(|m| m.start()) {
                text.truncate(start);
            }
        }

        for re in &self.re_noise {
            text = re.replace_all(&text, " ").into_owned();
        }
        text = self.re_trailing_group.replace(&text, "").into_owned();

        let query = tidy_words(&self.separators_to_spaces(&text));
        let query = if query.chars().count() < 3 {
            self.separators_to_spaces(basename)
        } else {
            query
        };

        SearchQuery { query, kind }
    }
}

fn is_word(token: &str) -> bool {
    token.chars().all(char::is_alphabetic)
}

/// Drops stray single letters and numbers that are not part of a title.
fn tidy_words(text: &str) -> String {
    let tokens: Vec<&str> = text
        .split_whitespace()
        .filter(|t| t.chars().any(char::is_alphanumeric))
        .collect();

    tokens
        .iter()
        .enumerate()
        .filter(|&(i, token)| {
            if token.chars().all(|c| c.is_ascii_digit()) {
                let before = i.checked_sub(1).and_then(|j| tokens.get(j));
                let after = tokens.get(i + 1);
                return before.is_some_and(|t| is_word(t)) && after.is_some_and(|t| is_word(t));
            }
            token.chars().count() > 1
                || !token.chars().all(char::is_alphabetic)
                || SHORT_WORDS.contains(&token.to_lowercase().as_str())
        })
        .map(|(_, token)| *token)
        .collect::<Vec<_>>()
        .join(" ")
}
