use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use uuid::Uuid;

use super::claims::AccessClaims;
use super::errors::TokenError;

/// Issuer label stamped into every token this codec signs.
const ISSUER: &str = "post-service";

/// Signed access-token codec (HS256).
///
/// Access tokens are stateless: validity is derived entirely from the
/// signature and the embedded expiry at verification time, so there is no
/// server-side revocation for them. The secret is supplied once at
/// construction; the codec holds no other state.
pub struct AccessTokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl AccessTokenCodec {
    /// Create a codec keyed by a shared symmetric secret.
    ///
    /// The secret should be at least 32 bytes and come from process
    /// configuration, never from source code.
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Issue a signed token asserting `subject` for the next `ttl`.
    ///
    /// Issued-at and expiry are taken from the current UTC wall clock.
    ///
    /// # Errors
    /// * `SigningFailed` - Internal signing failure; does not occur under
    ///   valid input
    pub fn issue(&self, subject: Uuid, ttl: Duration) -> Result<String, TokenError> {
        let claims = AccessClaims::new(subject, ISSUER, ttl);
        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::SigningFailed(e.to_string()))
    }

    /// Verify a token and extract its subject.
    ///
    /// Signature integrity is checked first, then expiry against the current
    /// time with zero leeway: a token is valid strictly up to its expiry
    /// instant. The subject claim must parse as a UUID.
    ///
    /// # Errors
    /// * `Expired` - Correctly signed but past its expiry
    /// * `InvalidSignature` - Signature does not match the secret
    /// * `Malformed` - Undecodable token, missing claims, or a subject that
    ///   is not a valid user reference
    pub fn verify(&self, token: &str) -> Result<Uuid, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        // No clock-skew tolerance: expiry is an exact boundary
        validation.leeway = 0;

        let token_data = decode::<AccessClaims>(token, &self.decoding_key, &validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::Malformed(e.to_string()),
            })?;

        // The library only rejects tokens strictly past their expiry; a token
        // whose expiry equals the current second is already invalid here
        if token_data.claims.exp <= Utc::now().timestamp() {
            return Err(TokenError::Expired);
        }

        token_data
            .claims
            .subject()
            .ok_or_else(|| TokenError::Malformed("subject is not a valid user ID".to_string()))
    }
}
