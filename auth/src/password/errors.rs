use thiserror::Error;

/// Error type for password operations.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// The stored hash could not be parsed as a PHC string. This is a
    /// configuration fault (corrupt credential record), never a wrong
    /// password: a non-matching password verifies to `Ok(false)`.
    #[error("Stored password hash is malformed: {0}")]
    MalformedHash(String),
}
