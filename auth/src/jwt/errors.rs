use thiserror::Error;

/// Error type for token operations.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    /// The configured secret is not valid base64. Startup-time fault.
    #[error("Signing secret is not valid base64: {0}")]
    InvalidKey(String),

    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    /// Structural or signature failure. No claim from such a token is ever
    /// exposed to the caller.
    #[error("Token is invalid: {0}")]
    InvalidToken(String),
}
