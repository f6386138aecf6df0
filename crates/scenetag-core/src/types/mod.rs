pub mod lookup;
pub mod metadata;
pub mod release;
pub mod track;

pub use lookup::{ContentKind, LookupCandidate};
pub use metadata::{ExtractedMetadata, MetadataBuilder};
pub use release::{ReleaseType, Resolution, Source};
pub use track::{
    AudioAttributes, GeneralAttributes, TextAttributes, Track, TrackSet, VideoAttributes,
};
