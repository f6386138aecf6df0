//! Blocking TMDb search client.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::debug;

use crate::error::{LookupError, Result};
use scenetag_core::{ContentKind, LookupCandidate};

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = concat!("scenetag/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
}

/// One search hit. Movies carry `title`/`release_date`, series carry
/// `name`/`first_air_date`.
#[derive(Debug, Deserialize)]
struct SearchResult {
    title: Option<String>,
    name: Option<String>,
    release_date: Option<String>,
    first_air_date: Option<String>,
}

impl SearchResult {
    fn into_candidate(self, kind: ContentKind) -> Option<LookupCandidate> {
        let (title, date) = match kind {
            ContentKind::Movie => (self.title.or(self.name), self.release_date),
            ContentKind::Series => (self.name.or(self.title), self.first_air_date),
        };
        let title = title.filter(|t| !t.trim().is_empty())?;
        let date = date.filter(|d| !d.trim().is_empty());
        Some(LookupCandidate::new(title, date))
    }
}

/// Decodes a `/search/movie` or `/search/tv` body into candidates, in the
/// order the service returned them. Hits without a title are skipped.
pub fn parse_search_response(body: &str, kind: ContentKind) -> Result<Vec<LookupCandidate>> {
    let response: SearchResponse = serde_json::from_str(body)?;
    Ok(response
        .results
        .into_iter()
        .filter_map(|r| r.into_candidate(kind))
        .collect())
}

/// TMDb v3 search client.
pub struct TmdbClient {
    http: Client,
    api_key: String,
    base_url: String,
    language: Option<String>,
}

impl TmdbClient {
    /// Creates a client whose requests give up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::MissingApiKey` for a blank key, or
    /// `LookupError::Http` if the HTTP client cannot be built.
    pub fn new(api_key: impl Into<String>, timeout: Duration) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(LookupError::MissingApiKey);
        }
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            http,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            language: None,
        })
    }

    /// Point the client at another API root (trailing slash tolerated).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Ask for localized titles, e.g. `it-IT`.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    fn search_url(&self, kind: ContentKind) -> String {
        let path = match kind {
            ContentKind::Movie => "search/movie",
            ContentKind::Series => "search/tv",
        };
        format!("{}/{path}", self.base_url)
    }

    /// Searches for `query`, returning candidates in service order.
    pub fn search(&self, query: &str, kind: ContentKind) -> Result<Vec<LookupCandidate>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let mut params = vec![
            ("api_key", self.api_key.as_str()),
            ("query", query),
            ("include_adult", "false"),
        ];
        if let Some(language) = &self.language {
            params.push(("language", language.as_str()));
        }

        debug!(query, %kind, "searching TMDb");
        let response = self.http.get(self.search_url(kind)).query(&params).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status {
                status: status.as_u16(),
                message: response.text().unwrap_or_default(),
            });
        }

        let candidates = parse_search_response(&response.text()?, kind)?;
        debug!(count = candidates.len(), "TMDb candidates");
        Ok(candidates)
    }
}
