//! Authentication infrastructure library
//!
//! Provides the reusable authentication building blocks for the CRM backend:
//! - Password hashing and verification (Argon2id)
//! - JWT token issuance and verification with a fixed time-to-live
//!
//! The service layer owns the authentication flow (credential lookup, expiry
//! policy, identity cross-checks); this crate only signs, verifies, and
//! compares. The signing key is decoded once from a base64 secret at
//! construction time and is immutable afterwards.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Tokens
//! ```
//! use auth::TokenCodec;
//! use chrono::Duration;
//!
//! let codec = TokenCodec::from_base64_secret(
//!     "c2VjcmV0X2tleV9hdF9sZWFzdF8zMl9ieXRlc19sb25nISE=",
//!     Duration::hours(24),
//! )
//! .unwrap();
//! let token = codec.issue("665f1d2c9b3e4a0012a4b7c8", "maria@crm.com").unwrap();
//! let claims = codec.parse(&token).unwrap();
//! assert_eq!(claims.subject(), "maria@crm.com");
//! ```

pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use jwt::Claims;
pub use jwt::TokenCodec;
pub use jwt::TokenError;
pub use password::PasswordError;
pub use password::PasswordHasher;
