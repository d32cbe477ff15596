use auth::PasswordError;
use auth::TokenError;
use thiserror::Error;

use crate::domain::user::errors::RepositoryError;

/// Top-level error for authentication operations.
///
/// The verification sub-kinds (`MalformedHeader`, `InvalidToken`, `Expired`,
/// `IdentityNotFound`) all collapse to a rejection for the caller but stay
/// distinguished for logging and status mapping.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Login failure. Deliberately undifferentiated: unknown email and
    /// wrong password produce the same message.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("The authorization header is invalid. Expected 'Bearer <token>'")]
    MalformedHeader,

    #[error("Token is invalid: {0}")]
    InvalidToken(String),

    #[error("Token has expired")]
    Expired,

    #[error("No identity matches the token's email claim")]
    IdentityNotFound,

    // Infrastructure errors
    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    #[error("Credential store error: {0}")]
    Repository(#[from] RepositoryError),
}
