use thiserror::Error;

/// Errors raised while looking a title up.
#[derive(Debug, Error)]
pub enum LookupError {
    /// No API key was supplied.
    #[error("TMDb API key is missing")]
    MissingApiKey,

    /// The request could not be sent or the connection failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("TMDb returned status {status}: {message}")]
    Status {
        status: u16,
        message: String,
    },

    /// The response body was not the expected JSON.
    #[error("malformed TMDb response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

/// Result type alias for lookup operations.
pub type Result<T> = std::result::Result<T, LookupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message() {
        let err = LookupError::Status {
            status: 401,
            message: "Invalid API key".into(),
        };
        assert_eq!(err.to_string(), "TMDb returned status 401: Invalid API key");
        assert_eq!(LookupError::MissingApiKey.to_string(), "TMDb API key is missing");
    }
}
