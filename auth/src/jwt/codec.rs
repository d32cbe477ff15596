use chrono::Duration;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Token codec issuing and verifying compact signed tokens.
///
/// Signs with HS256 using a symmetric key decoded once from a base64
/// secret. The codec is read-only after construction and safe for
/// unsynchronized concurrent use.
///
/// Verification here covers structure and signature only. Expiry is a
/// service-level policy checked after identity lookup, so `parse` accepts
/// expired tokens and leaves the strict expiry comparison to the caller.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    ttl: Duration,
}

impl TokenCodec {
    /// Build a codec from a base64-encoded secret and a token time-to-live.
    ///
    /// # Errors
    /// * `InvalidKey` - the secret is not valid base64 (startup fault)
    pub fn from_base64_secret(secret: &str, ttl: Duration) -> Result<Self, TokenError> {
        let encoding_key = EncodingKey::from_base64_secret(secret)
            .map_err(|e| TokenError::InvalidKey(e.to_string()))?;
        let decoding_key = DecodingKey::from_base64_secret(secret)
            .map_err(|e| TokenError::InvalidKey(e.to_string()))?;

        Ok(Self {
            encoding_key,
            decoding_key,
            algorithm: Algorithm::HS256,
            ttl,
        })
    }

    /// Issue a signed token for an identity.
    ///
    /// Embeds `{id, email, sub: email, iat: now, exp: now + ttl}`.
    ///
    /// # Errors
    /// * `EncodingFailed` - token encoding failed
    pub fn issue(&self, id: &str, email: &str) -> Result<String, TokenError> {
        let claims = Claims::for_identity(id, email, self.ttl);
        self.encode(&claims)
    }

    /// Encode prepared claims into a compact token.
    pub fn encode(&self, claims: &Claims) -> Result<String, TokenError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Verify a token's signature and structure, then return its claims.
    ///
    /// The signature is checked before any claim is read; a forged or
    /// malformed token never yields claims. Expired tokens parse
    /// successfully, see the type-level notes.
    ///
    /// # Errors
    /// * `InvalidToken` - signature mismatch or structural failure
    pub fn parse(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        // Expiry policy lives in the auth service, after identity lookup.
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| TokenError::InvalidToken(e.to_string()))?;

        Ok(token_data.claims)
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}
