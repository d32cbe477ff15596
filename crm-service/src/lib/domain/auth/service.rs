use std::sync::Arc;
use std::time::Duration;

use auth::PasswordHasher;
use auth::TokenCodec;
use chrono::Utc;

use crate::domain::auth::errors::AuthError;
use crate::domain::user::errors::RepositoryError;
use crate::domain::user::models::User;
use crate::domain::user::ports::UserRepository;

/// Upper bound on a credential store point lookup. Any slower lookup
/// terminates the auth attempt; nothing here is retried.
const LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Authentication orchestrator.
///
/// Owns the token codec (process-wide, read-only after startup) and the
/// password hasher, and reaches the credential store through the injected
/// repository port. One pass runs synchronously per request; there is no
/// internal parallelism or shared mutable state.
pub struct AuthService<R>
where
    R: UserRepository,
{
    repository: Arc<R>,
    password_hasher: PasswordHasher,
    codec: TokenCodec,
}

impl<R> AuthService<R>
where
    R: UserRepository,
{
    pub fn new(repository: Arc<R>, codec: TokenCodec) -> Self {
        Self {
            repository,
            password_hasher: PasswordHasher::new(),
            codec,
        }
    }

    /// Verify credentials and issue a bearer token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - unknown email or non-matching password,
    ///   indistinguishable by design
    /// * `Password` - the stored hash is malformed (configuration fault)
    /// * `Token` - token encoding failed
    /// * `Repository` - store lookup failed or timed out
    pub async fn login(&self, email: &str, password: &str) -> Result<String, AuthError> {
        let Some(user) = self.lookup_by_email(email).await? else {
            // Unknown emails skip the hash comparison entirely.
            tracing::debug!("Login attempt for unknown email");
            return Err(AuthError::InvalidCredentials);
        };

        if !self
            .password_hasher
            .verify(password, &user.password_hash)?
        {
            tracing::debug!(user_id = %user.id, "Login attempt with wrong password");
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.codec.issue(user.id.as_str(), user.email.as_str())?;
        tracing::info!(user_id = %user.id, "User logged in");

        Ok(token)
    }

    /// Validate a bearer authorization header and resolve the identity it
    /// asserts.
    ///
    /// Steps, in order: scheme prefix check, signature verification,
    /// identity lookup by the embedded email claim, strict expiry check,
    /// subject cross-check against the stored email. The returned user has
    /// its password hash cleared.
    ///
    /// # Errors
    /// * `MalformedHeader` - header missing, wrong scheme, or empty token;
    ///   token parsing is never reached
    /// * `InvalidToken` - signature/structural failure, or subject mismatch
    /// * `IdentityNotFound` - no user matches the email claim
    /// * `Expired` - expiry is not strictly in the future
    /// * `Repository` - store lookup failed or timed out
    pub async fn validate_auth_header(&self, header: Option<&str>) -> Result<User, AuthError> {
        let token = header
            .and_then(|h| h.strip_prefix("Bearer "))
            .filter(|t| !t.is_empty())
            .ok_or(AuthError::MalformedHeader)?;

        let claims = self
            .codec
            .parse(token)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        let Some(user) = self.lookup_by_email(&claims.email).await? else {
            tracing::warn!("Verified token carries an unknown email claim");
            return Err(AuthError::IdentityNotFound);
        };

        if claims.is_expired_at(Utc::now()) {
            return Err(AuthError::Expired);
        }

        if claims.subject() != user.email.as_str() {
            tracing::warn!(user_id = %user.id, "Token subject does not match the stored identity");
            return Err(AuthError::InvalidToken(
                "subject does not match the stored identity".to_string(),
            ));
        }

        Ok(user.sanitized())
    }

    async fn lookup_by_email(&self, email: &str) -> Result<Option<User>, AuthError> {
        match tokio::time::timeout(LOOKUP_TIMEOUT, self.repository.find_by_email(email)).await {
            Ok(result) => Ok(result?),
            Err(_) => Err(AuthError::Repository(RepositoryError::Database(
                "credential store lookup timed out".to_string(),
            ))),
        }
    }
}
