use regex::Regex;
use tracing::debug;

use super::evidence::EncodingEvidence;
use crate::config::NamingConfig;
use crate::error::Result;
use crate::types::{ReleaseType, Resolution, Source};

const WEBDL_MARKERS: &[&str] = &["WEB-DL", "WEBDL", "WEB.DL", "DLMUX", "WEBMUX"];
const WEBRIP_MARKERS: &[&str] = &["WEBRIP", "WEB.RIP", "WEB-RIP"];

/// Everything the release-type decision looks at.
#[derive(Debug, Clone, Copy)]
pub struct ReleaseSignals<'a> {
    pub basename: &'a str,
    pub resolution: Option<Resolution>,
    pub evidence: EncodingEvidence,
    /// Video bitrate in bits per second.
    pub bitrate: Option<u64>,
    /// Whether a streaming service was recognized in the basename.
    pub has_service: bool,
}

/// Outcome of the release-type decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub source: Source,
    pub release_type: ReleaseType,
}

impl Classification {
    fn new(source: Source, release_type: ReleaseType) -> Self {
        Self {
            source,
            release_type,
        }
    }
}

/// Priority-ordered release-type decision tree.
///
/// Series detection wins over every other signal: episodes are nearly always
/// web releases, and their high bitrates must never trip the REMUX heuristic.
pub struct ReleaseClassifier {
    re_series: Regex,
    re_marker: Option<Regex>,
    bitrate_threshold: u64,
}

impl ReleaseClassifier {
    /// Compiles the series and untouched-marker patterns.
    ///
    /// # Errors
    ///
    /// Returns `ScenetagError::RegexError` if a configured marker produces an
    /// invalid pattern.
    pub fn new(config: &NamingConfig) -> Result<Self> {
        Ok(Self {
            re_series: Regex::new(r"(?i)(?:^|[^a-z0-9])S\d{1,3}E\d{1,4}")?,
            re_marker: marker_pattern(&config.remux_markers)?,
            bitrate_threshold: config.remux_bitrate_threshold,
        })
    }

    /// Whether the basename carries a season/episode marker.
    #[must_use]
    pub fn is_series(&self, basename: &str) -> bool {
        self.re_series.is_match(basename)
    }

    /// Whether the basename carries one of the untouched-content markers.
    #[must_use]
    pub fn has_remux_marker(&self, basename: &str) -> bool {
        self.remux_marker(basename).is_some()
    }

    /// The untouched-content marker as written in the basename.
    #[must_use]
    pub fn remux_marker<'a>(&self, basename: &'a str) -> Option<&'a str> {
        self.re_marker
            .as_ref()
            .and_then(|re| re.find(basename))
            .map(|m| m.as_str())
    }

    /// Classifies the release. Returns `None` only when the decision falls
    /// through to the resolution branches and no resolution is known.
    #[must_use]
    pub fn classify(&self, signals: &ReleaseSignals<'_>) -> Option<Classification> {
        let upper = signals.basename.to_uppercase();
        let has_any = |markers: &[&str]| markers.iter().any(|m| upper.contains(m));
        let reencoded = signals.evidence.is_reencoded();

        if self.is_series(signals.basename) {
            let release_type = if has_any(WEBRIP_MARKERS) || reencoded {
                ReleaseType::WebRip
            } else {
                ReleaseType::WebDl
            };
            debug!(basename = signals.basename, %release_type, "series episode, forcing WEB source");
            return Some(Classification::new(Source::Web, release_type));
        }

        if has_any(WEBDL_MARKERS) {
            let release_type = if reencoded {
                ReleaseType::WebRip
            } else {
                ReleaseType::WebDl
            };
            debug!(%release_type, "WEB-DL family marker");
            return Some(Classification::new(Source::Web, release_type));
        }

        if has_any(WEBRIP_MARKERS) {
            debug!("WEBRip family marker");
            return Some(Classification::new(Source::Web, ReleaseType::WebRip));
        }

        if signals.has_service {
            debug!("streaming service named, assuming WEB-DL");
            return Some(Classification::new(Source::Web, ReleaseType::WebDl));
        }

        match signals.resolution? {
            r if r.is_high_definition_disc() => {
                let release_type = if self.is_remux(signals) {
                    ReleaseType::Remux
                } else {
                    ReleaseType::Encode
                };
                Some(Classification::new(Source::BluRay, release_type))
            }
            Resolution::HD720 => Some(Classification::new(Source::BluRay, ReleaseType::Encode)),
            _ => Some(Classification::new(Source::Dvd, ReleaseType::DvdRip)),
        }
    }

    /// REMUX sub-decision for high-definition disc content.
    ///
    /// Explicit markers win, then any encoding evidence rules a REMUX out,
    /// and finally a bitrate above the threshold is taken as a REMUX. The
    /// bitrate step is a heuristic: low-bitrate remuxes and very generous
    /// encodes near the threshold will be misjudged.
    #[must_use]
    pub fn is_remux(&self, signals: &ReleaseSignals<'_>) -> bool {
        if signals.basename.to_uppercase().contains("REMUX") {
            debug!("REMUX token in filename");
            return true;
        }
        if let Some(marker) = self.remux_marker(signals.basename) {
            debug!(marker, "untouched marker in filename");
            return true;
        }
        if signals.evidence.disproves_remux() {
            debug!(evidence = ?signals.evidence, "encoding evidence, not a REMUX");
            return false;
        }
        let remux = signals
            .bitrate
            .is_some_and(|bps| bps > self.bitrate_threshold);
        debug!(bitrate = ?signals.bitrate, remux, "bitrate heuristic");
        remux
    }
}

/// Word-bounded alternation over the configured markers, or `None` when no
/// markers are configured.
pub(crate) fn marker_pattern(markers: &[String]) -> Result<Option<Regex>> {
    if markers.is_empty() {
        return Ok(None);
    }
    let alternation = markers
        .iter()
        .map(|m| regex::escape(m.trim()))
        .collect::<Vec<_>>()
        .join("|");
    Ok(Some(Regex::new(&format!(r"(?i)\b(?:{alternation})\b"))?))
}
