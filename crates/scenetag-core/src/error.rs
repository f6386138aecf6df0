use thiserror::Error;

/// Errors that can occur while setting up the scenetag engine.
///
/// Classification and name synthesis never fail; these variants only cover
/// engine construction and decoding of caller-supplied input.
#[derive(Debug, Error)]
pub enum ScenetagError {
    /// A regex pattern failed to compile (should not happen with static patterns).
    #[error("regex compilation error: {0}")]
    RegexError(#[from] regex::Error),

    /// The naming configuration is unusable.
    #[error("invalid configuration field `{field}`: {reason}")]
    InvalidConfig {
        /// Name of the offending configuration field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// A track set could not be decoded from JSON.
    #[error("malformed track set: {0}")]
    MalformedTracks(#[from] serde_json::Error),
}

/// Result type alias for scenetag operations.
pub type Result<T> = std::result::Result<T, ScenetagError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = ScenetagError::InvalidConfig {
            field: "output_extension",
            reason: "must not be empty".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid configuration field `output_extension`: must not be empty"
        );
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ScenetagError>();
    }
}
