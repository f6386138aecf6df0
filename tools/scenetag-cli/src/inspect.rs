//! MediaInfo adapter: runs `mediainfo --Output=JSON` or reads a saved report
//! and converts it into a [`TrackSet`].

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use scenetag_core::{
    AudioAttributes, GeneralAttributes, TextAttributes, Track, TrackSet, VideoAttributes,
};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Deserialize)]
struct Report {
    media: Option<Media>,
}

#[derive(Debug, Deserialize)]
struct Media {
    #[serde(default)]
    track: Vec<RawTrack>,
}

#[derive(Debug, Deserialize)]
struct RawTrack {
    #[serde(rename = "@type")]
    kind: String,
    #[serde(flatten)]
    fields: HashMap<String, Value>,
}

impl RawTrack {
    fn text(&self, key: &str) -> Option<String> {
        let value = match self.fields.get(key)? {
            Value::String(s) => s.trim().to_string(),
            Value::Number(n) => n.to_string(),
            _ => return None,
        };
        (!value.is_empty()).then_some(value)
    }

    /// Leading integer of a field: `"8 / 6"` is 8, `"5400.123"` is 5400.
    fn number(&self, key: &str) -> Option<u64> {
        let text = self.text(key)?;
        let digits: String = text
            .chars()
            .skip_while(|c| c.is_whitespace())
            .take_while(char::is_ascii_digit)
            .collect();
        digits.parse().ok()
    }

    fn first_text(&self, keys: &[&str]) -> Option<String> {
        keys.iter().find_map(|k| self.text(k))
    }

    fn into_track(self) -> Option<Track> {
        let track = match self.kind.as_str() {
            "General" => Track::General(GeneralAttributes {
                file_name: self
                    .text("CompleteName")
                    .and_then(|p| {
                        Path::new(&p)
                            .file_name()
                            .map(|n| n.to_string_lossy().into_owned())
                    })
                    .or_else(|| self.file_name_from_parts()),
                file_size: self.number("FileSize"),
                duration: self.duration_ms(),
                overall_bit_rate: self.number("OverallBitRate"),
            }),
            "Video" => Track::Video(VideoAttributes {
                width: self.number("Width").and_then(|w| u32::try_from(w).ok()),
                height: self.number("Height").and_then(|h| u32::try_from(h).ok()),
                format: self.text("Format"),
                writing_library: self.first_text(&["Encoded_Library", "Encoded_Library_Name"]),
                encoded_library_settings: self.text("Encoded_Library_Settings"),
                format_settings: self.first_text(&["Format_Settings", "Format_Settings_CABAC"]),
                bit_rate: self.number("BitRate").or_else(|| self.number("BitRate_Nominal")),
                hdr_format: self.text("HDR_Format"),
                hdr_format_profile: self.text("HDR_Format_Profile"),
                hdr_format_compatibility: self.text("HDR_Format_Compatibility"),
                hdr_format_settings: self.text("HDR_Format_Settings"),
                color_primaries: self.text("colour_primaries"),
                transfer_characteristics: self.text("transfer_characteristics"),
            }),
            "Audio" => Track::Audio(AudioAttributes {
                format: self.text("Format"),
                channels: self.number("Channels").and_then(|c| u32::try_from(c).ok()),
                language: self.text("Language"),
                additional_features: self.text("Format_AdditionalFeatures"),
                commercial_name: self.text("Format_Commercial_IfAny"),
            }),
            "Text" => Track::Text(TextAttributes {
                format: self.text("Format"),
                language: self.text("Language"),
                title: self.text("Title"),
            }),
            other => {
                debug!(kind = other, "skipping track");
                return None;
            }
        };
        Some(track)
    }

    fn file_name_from_parts(&self) -> Option<String> {
        let name = self.text("FileName")?;
        Some(match self.text("FileExtension") {
            Some(ext) => format!("{name}.{ext}"),
            None => name,
        })
    }

    fn duration_ms(&self) -> Option<u64> {
        let seconds: f64 = self.text("Duration")?.parse().ok()?;
        (seconds.is_finite() && seconds >= 0.0).then(|| (seconds * 1000.0).round() as u64)
    }
}

/// Converts a MediaInfo JSON report into a track set.
pub fn parse_mediainfo_json(json: &str) -> Result<TrackSet> {
    let report: Report = serde_json::from_str(json).context("not a MediaInfo JSON report")?;
    let media = report.media.context("MediaInfo report has no media section")?;
    Ok(TrackSet::new(
        media.track.into_iter().filter_map(RawTrack::into_track).collect(),
    ))
}

/// Reads a saved report: either MediaInfo JSON or a serialized track set.
pub fn load_tracks_file(path: &Path) -> Result<TrackSet> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let value: Value = serde_json::from_str(&json)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;
    if value.get("media").is_some() {
        parse_mediainfo_json(&json)
    } else {
        Ok(TrackSet::from_json(&json)?)
    }
}

/// Runs `mediainfo --Output=JSON` on `file`, killing it after `timeout`.
pub fn run_mediainfo(file: &Path, timeout: Duration) -> Result<TrackSet> {
    let mut child = Command::new("mediainfo")
        .arg("--Output=JSON")
        .arg(file)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .context("failed to start mediainfo (is it installed and on PATH?)")?;

    let mut stdout = child.stdout.take().context("mediainfo stdout unavailable")?;
    let reader = thread::spawn(move || {
        let mut out = String::new();
        stdout.read_to_string(&mut out).map(|_| out)
    });

    let deadline = Instant::now() + timeout;
    let status = loop {
        if let Some(status) = child.try_wait().context("failed to wait for mediainfo")? {
            break status;
        }
        if Instant::now() >= deadline {
            let _ = child.kill();
            let _ = child.wait();
            bail!("mediainfo timed out after {:?} on {}", timeout, file.display());
        }
        thread::sleep(POLL_INTERVAL);
    };

    let output = match reader.join() {
        Ok(read) => read.context("failed to read mediainfo output")?,
        Err(_) => bail!("mediainfo reader thread panicked"),
    };
    if !status.success() {
        bail!("mediainfo failed with exit code: {:?}", status.code());
    }
    debug!(bytes = output.len(), "mediainfo report");
    parse_mediainfo_json(&output)
}
