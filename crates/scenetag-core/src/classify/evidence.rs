use crate::types::VideoAttributes;

/// Writing-library substrings left behind by encoders and transcoders.
const ENCODER_FINGERPRINTS: &[&str] = &[
    "x264", "x265", "handbrake", "ffmpeg", "mencoder", "staxrip", "megui", "xvid", "divx",
    "encoder",
];

/// Encoder option names that only appear in re-encoded streams.
const ENCODER_SETTINGS: &[&str] = &["crf=", "bitrate=", "preset=", "tune="];

/// Low-level format options written by encoders.
const FORMAT_SETTINGS: &[&str] = &["cabac", "bframes"];

/// Signs that a video stream was re-encoded rather than copied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodingEvidence {
    /// Writing library names a known encoder.
    pub library_fingerprint: bool,
    /// Encoder settings carry encoder-only parameters.
    pub encoder_settings: bool,
    /// Format settings mention CABAC or B-frame options.
    pub format_settings: bool,
}

impl EncodingEvidence {
    /// Inspects the raw metadata strings. Missing fields contribute nothing.
    #[must_use]
    pub fn from_fields(
        writing_library: Option<&str>,
        encoder_settings: Option<&str>,
        format_settings: Option<&str>,
    ) -> Self {
        let contains_any = |field: Option<&str>, needles: &[&str]| {
            field.is_some_and(|value| {
                let value = value.to_lowercase();
                needles.iter().any(|n| value.contains(n))
            })
        };

        Self {
            library_fingerprint: contains_any(writing_library, ENCODER_FINGERPRINTS),
            encoder_settings: contains_any(encoder_settings, ENCODER_SETTINGS),
            format_settings: contains_any(format_settings, FORMAT_SETTINGS),
        }
    }

    /// Evidence for the first video track; no track means no evidence.
    #[must_use]
    pub fn detect(video: Option<&VideoAttributes>) -> Self {
        video.map_or_else(Self::default, |v| {
            Self::from_fields(
                v.writing_library.as_deref(),
                v.encoded_library_settings.as_deref(),
                v.format_settings.as_deref(),
            )
        })
    }

    /// Evidence used to tell WEBRip from WEB-DL.
    #[must_use]
    pub fn is_reencoded(&self) -> bool {
        self.library_fingerprint || self.encoder_settings
    }

    /// Evidence used to rule out a REMUX: the web signals plus format options.
    #[must_use]
    pub fn disproves_remux(&self) -> bool {
        self.is_reencoded() || self.format_settings
    }
}
