use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::LookupCandidate;

/// Characters that cannot appear in a filename on common filesystems.
const RESERVED: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Title as it may appear in a name: separators, dots and reserved
/// characters become spaces, space runs collapse, edge punctuation goes.
pub(crate) fn tidy_title(raw: &str) -> Option<String> {
    let spaced: String = raw
        .chars()
        .map(|c| {
            if c == '.' || c == '_' || RESERVED.contains(&c) {
                ' '
            } else {
                c
            }
        })
        .collect();
    let collapsed = spaced.split_whitespace().collect::<Vec<_>>().join(" ");
    let title = collapsed.trim_matches(|c: char| c.is_whitespace() || "-([".contains(c));
    (!title.is_empty()).then(|| title.to_string())
}

/// Title, year and episode numbers recovered from a basename.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleInfo {
    pub title: Option<String>,
    pub year: Option<u16>,
    pub season: Option<u32>,
    pub episode: Option<u32>,
}

impl TitleInfo {
    /// Replaces title and year with a lookup result. Season and episode are
    /// always taken from the filename.
    #[must_use]
    pub fn with_candidate(mut self, candidate: &LookupCandidate) -> Self {
        if let Some(title) = tidy_title(&candidate.title) {
            self.title = Some(title);
            self.year = candidate.year();
        }
        self
    }
}

pub struct TitleExtractor {
    re_series: Regex,
    re_film: [Regex; 3],
    re_leading: Regex,
}

impl TitleExtractor {
    /// Compiles the series and film patterns.
    ///
    /// # Errors
    ///
    /// Returns `ScenetagError::RegexError` if a pattern fails to compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            re_series: Regex::new(r"(?i)^(.*?)[\s._]+S(\d+)E(\d+)")?,
            re_film: [
                // Title.2020.rest
                Regex::new(r"^(.*?)\.((?:19|20)\d{2})(?:\.|$)")?,
                // Title 2020 rest
                Regex::new(r"^(.*?)[.\s]((?:19|20)\d{2})(?:[.\s]|$)")?,
                // Title (2020) rest
                Regex::new(r"^(.*?)[\[(]((?:19|20)\d{2})[\])]")?,
            ],
            re_leading: Regex::new(r"^([^.]+)")?,
        })
    }

    #[must_use]
    pub fn extract(&self, basename: &str) -> TitleInfo {
        if let Some(caps) = self.re_series.captures(basename) {
            return TitleInfo {
                title: tidy_title(&caps[1]),
                year: None,
                season: caps[2].parse().ok(),
                episode: caps[3].parse().ok(),
            };
        }

        for re in &self.re_film {
            let Some(caps) = re.captures(basename) else {
                continue;
            };
            let Some(title) = tidy_title(&caps[1]) else {
                continue;
            };
            return TitleInfo {
                title: Some(title),
                year: caps[2].parse().ok(),
                ..TitleInfo::default()
            };
        }

        TitleInfo {
            title: self
                .re_leading
                .captures(basename)
                .and_then(|caps| tidy_title(&caps[1])),
            ..TitleInfo::default()
        }
    }
}
