use chrono::DateTime;
use chrono::TimeZone;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Token payload carried by every issued bearer token.
///
/// The subject duplicates the email claim: identity lookups key off the
/// email and the verifier cross-checks it against the subject.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Identity document key
    pub id: String,

    /// Identity email
    pub email: String,

    /// Subject, always equal to the email at issuance
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Build claims for an identity, stamping `iat = now` and
    /// `exp = now + ttl`.
    pub fn for_identity(id: impl Into<String>, email: impl Into<String>, ttl: chrono::Duration) -> Self {
        let now = Utc::now();
        let email = email.into();

        Self {
            id: id.into(),
            sub: email.clone(),
            email,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }

    pub fn subject(&self) -> &str {
        &self.sub
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(self.iat, 0).single().unwrap_or_default()
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(self.exp, 0).single().unwrap_or_default()
    }

    /// True when the expiry is at or before the given instant. Expiry must
    /// be strictly in the future for a token to remain usable.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.exp <= now.timestamp()
    }
}
