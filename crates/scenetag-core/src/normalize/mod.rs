//! Vocabulary normalizers: codec, audio, HDR and streaming service tokens.

pub mod audio;
pub mod codec;
pub mod hdr;
pub mod service;

pub use audio::{audio_languages, audio_token, channel_suffix, normalize_language};
pub use codec::{encoder_name, map_codec, video_format};
pub use hdr::HdrDetector;
pub use service::detect_service;
