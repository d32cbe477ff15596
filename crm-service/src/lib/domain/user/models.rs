use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::user::errors::EmailError;
use crate::domain::user::errors::RoleError;
use crate::domain::user::errors::UserIdError;
use crate::domain::validation::rules;

/// User aggregate entity.
///
/// Represents an authenticated principal. The password hash is write-only
/// from the API surface: every outward path goes through [`User::sanitized`].
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub lastname: String,
    pub email: EmailAddress,
    pub password_hash: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Copy of the user with the password hash blanked.
    pub fn sanitized(mut self) -> Self {
        self.password_hash = String::new();
        self
    }
}

/// User unique identifier: the document store's native key encoding,
/// a 24-character lowercase hexadecimal string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    /// Parse a user ID, rejecting structurally invalid keys before any
    /// store access.
    ///
    /// # Errors
    /// * `Empty` - the string is empty
    /// * `InvalidFormat` - not a 24-character lowercase-hex string
    pub fn new(id: impl Into<String>) -> Result<Self, UserIdError> {
        let id = id.into();
        if id.is_empty() {
            return Err(UserIdError::Empty);
        }
        if !rules::is_valid_object_id(&id) {
            return Err(UserIdError::InvalidFormat);
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address value type.
///
/// Validated against the same pattern the field validators use, so an
/// address accepted here always passes entity validation too.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn new(email: impl Into<String>) -> Result<Self, EmailError> {
        let email = email.into();
        if rules::is_valid_email(&email) {
            Ok(Self(email))
        } else {
            Err(EmailError::InvalidFormat)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Closed role enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Admin,
    Editor,
    Viewer,
}

impl UserRole {
    pub const ALL: [UserRole; 3] = [UserRole::Admin, UserRole::Editor, UserRole::Viewer];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "ADMIN",
            UserRole::Editor => "EDITOR",
            UserRole::Viewer => "VIEWER",
        }
    }

    pub fn parse(role: &str) -> Result<Self, RoleError> {
        match role {
            "ADMIN" => Ok(UserRole::Admin),
            "EDITOR" => Ok(UserRole::Editor),
            "VIEWER" => Ok(UserRole::Viewer),
            other => Err(RoleError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
