//! Resolution bucketing and release-type classification.

pub mod evidence;
pub mod release;
pub mod resolution;

pub use evidence::EncodingEvidence;
pub use release::{Classification, ReleaseClassifier, ReleaseSignals};
pub use resolution::{classify_resolution, video_resolution};
