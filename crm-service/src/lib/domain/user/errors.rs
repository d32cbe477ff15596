use thiserror::Error;

/// Error for UserId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("The ID cannot be empty")]
    Empty,

    #[error("The ID must be a 24-character hexadecimal string")]
    InvalidFormat,
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("The email is not valid")]
    InvalidFormat,
}

/// Error for unknown role names
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RoleError {
    #[error("Unknown role: {0}")]
    Unknown(String),
}

/// Error for credential store operations
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(String),

    /// A stored record that no longer satisfies the domain invariants
    /// (unparsable role, broken id encoding).
    #[error("Corrupt user record: {0}")]
    Corrupt(String),
}
