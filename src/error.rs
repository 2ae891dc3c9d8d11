/// Error types shared by the API client and the command handlers
use thiserror::Error;

/// Errors that can occur while running a command
#[derive(Debug, Error)]
pub enum CliError {
    /// No API key was found in the environment or on the command line
    #[error("API key is not configured; set VULTR_API_KEY or pass --api-key")]
    MissingApiKey,

    /// Network-related errors (connection refused, TLS, timeouts)
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status code
    #[error("API error (HTTP {status}): {message}")]
    Api {
        /// HTTP status code returned by the API
        status: u16,
        /// Response body, trimmed
        message: String,
    },

    /// The response body could not be decoded
    #[error("Failed to decode API response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The response was valid JSON but not in the expected shape
    #[error("Unexpected API response: {0}")]
    UnexpectedResponse(String),
}

impl CliError {
    /// Builds an `Api` error from a status code and raw body text.
    pub fn api(status: u16, body: &str) -> Self {
        let message = body.trim();
        CliError::Api {
            status,
            message: if message.is_empty() {
                "(empty response)".to_string()
            } else {
                message.to_string()
            },
        }
    }
}
