//! # Scenetag Lookup
//!
//! Optional title lookup for scenetag. Searches TMDb for the query the core
//! derives from a filename, then ranks the hits by title similarity so the
//! caller can hand the best one back to the engine as a
//! [`LookupCandidate`](scenetag_core::LookupCandidate).
//!
//! ```no_run
//! use std::time::Duration;
//! use scenetag_core::Engine;
//! use scenetag_lookup::{TmdbClient, best_match};
//!
//! let engine = Engine::with_defaults().unwrap();
//! let query = engine.search_query("Black.Dog.2024.1080p.BluRay.DD5.1.x264-iSlaNd.mkv");
//!
//! let client = TmdbClient::new("api-key", Duration::from_secs(10)).unwrap();
//! let hits = client.search(&query.query, query.kind).unwrap();
//! let candidate = best_match(&query.query, hits, 0.6);
//! ```
pub mod error;
pub mod rank;
pub mod tmdb;

pub use error::{LookupError, Result};
pub use rank::{best_match, rank_candidates, title_similarity};
pub use tmdb::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, TmdbClient, parse_search_response};
