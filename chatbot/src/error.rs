//! Error types for the chatbot crate.

/// Result type alias for chatbot operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the chatbot crate.
///
/// Covers the full taxonomy of a single completion round trip: the missing
/// credential, transport failures, provider-side rejections, and responses
/// without a usable choice. The CLI-facing layer in [`crate::chat`] absorbs
/// all of these; library callers get the distinction.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The `OPENAI_API_KEY` environment variable is absent or empty.
    #[error("OpenAI API key not found. Please set the OPENAI_API_KEY environment variable")]
    MissingApiKey,

    /// HTTP transport error (connection, timeout, decode).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The provider answered with a non-success status.
    #[error("OpenAI API error ({status}): {body}")]
    Api {
        /// HTTP status code returned by the provider.
        status: reqwest::StatusCode,
        /// Raw error body, as returned by the provider.
        body: String,
    },

    /// The response carried no choice with message content.
    #[error("no valid response from the model")]
    EmptyResponse,
}

impl Error {
    /// Create an API error from a status code and error body.
    #[must_use]
    pub fn api(status: reqwest::StatusCode, body: impl Into<String>) -> Self {
        Self::Api {
            status,
            body: body.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = Error::api(reqwest::StatusCode::UNAUTHORIZED, "bad key");
        assert_eq!(
            err.to_string(),
            "OpenAI API error (401 Unauthorized): bad key"
        );
    }

    #[test]
    fn test_missing_key_display() {
        assert!(Error::MissingApiKey.to_string().contains("OPENAI_API_KEY"));
    }
}
