use std::fmt;

use serde::{Deserialize, Serialize};

/// What kind of title a search query is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Movie,
    Series,
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Movie => write!(f, "movie"),
            Self::Series => write!(f, "series"),
        }
    }
}

/// A title resolved by an external lookup service.
///
/// The engine only consumes the candidate the caller settled on; it never
/// performs the lookup itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupCandidate {
    pub title: String,
    /// Release date (movies) or first-air date (series), `YYYY-MM-DD`.
    pub date: Option<String>,
}

impl LookupCandidate {
    #[must_use]
    pub fn new(title: impl Into<String>, date: Option<String>) -> Self {
        Self {
            title: title.into(),
            date,
        }
    }

    /// The four-digit year of the date, if it has one.
    #[must_use]
    pub fn year(&self) -> Option<u16> {
        let date = self.date.as_deref()?;
        let head = date.get(..4)?;
        if head.chars().all(|c| c.is_ascii_digit()) {
            head.parse().ok()
        } else {
            None
        }
    }
}
