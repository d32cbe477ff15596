use async_trait::async_trait;

use crate::domain::user::errors::RepositoryError;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;

/// Credential store accessor.
///
/// The store enforces email uniqueness; both lookups are point reads by a
/// unique key.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Retrieve a user by email address.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `Database` - store operation failed
    /// * `Corrupt` - a stored record violates domain invariants
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;

    /// Retrieve a user by identifier.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `Database` - store operation failed
    /// * `Corrupt` - a stored record violates domain invariants
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError>;
}
