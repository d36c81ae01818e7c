use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::LoginOutcome;
use crate::domain::auth::models::RefreshToken;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::UserId;

/// Port for the authentication orchestrator.
///
/// Each operation is stateless between calls; the only durable state is the
/// refresh-token records behind [`RefreshTokenRepository`].
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Verify a password and issue an access/refresh token pair.
    ///
    /// Exactly one refresh-token record is created per successful login and
    /// none on failure.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password; the two are
    ///   indistinguishable to the caller
    /// * `Internal` - Signing or entropy failure
    /// * `DatabaseError` - Store operation failed
    async fn login(&self, email: &EmailAddress, password: &str)
        -> Result<LoginOutcome, AuthError>;

    /// Exchange an active refresh token for a new access token.
    ///
    /// The refresh token itself is not rotated; it stays usable until expiry
    /// or explicit revocation.
    ///
    /// # Errors
    /// * `InvalidCredentials` - No record with this value
    /// * `RefreshTokenExpired` - Record past its expiry instant
    /// * `RefreshTokenRevoked` - Record explicitly revoked
    /// * `Internal` - Signing failure
    /// * `DatabaseError` - Store operation failed
    async fn refresh(&self, token_value: &str) -> Result<String, AuthError>;

    /// Revoke a refresh token. Idempotent: revoking an unknown or
    /// already-revoked value succeeds identically, so callers cannot probe
    /// which values exist.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn revoke(&self, token_value: &str) -> Result<(), AuthError>;

    /// Verify a signed access token and return its subject.
    ///
    /// Capability check for protected endpoints; callers must reject the
    /// request before touching any resource when this fails.
    ///
    /// # Errors
    /// * `AccessTokenExpired` - Correctly signed but past expiry
    /// * `AccessTokenInvalid` - Bad signature or malformed token/subject
    async fn verify_access_token(&self, token: &str) -> Result<UserId, AuthError>;

    /// List all refresh-token records. Administrative/debug use.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn list_refresh_tokens(&self) -> Result<Vec<RefreshToken>, AuthError>;
}

/// Persistence operations for refresh-token records.
///
/// The store is the only serialization point for concurrent refresh/revoke
/// operations on the same value; a single-row update keeps revocation
/// last-write-wins and therefore idempotent.
#[async_trait]
pub trait RefreshTokenRepository: Send + Sync + 'static {
    /// Persist a new refresh-token record.
    ///
    /// # Errors
    /// * `DuplicateRefreshToken` - Value collides with an existing record
    ///   (expired and revoked rows included; history is retained)
    /// * `DatabaseError` - Store operation failed
    async fn create(&self, token: RefreshToken) -> Result<RefreshToken, AuthError>;

    /// Look up a record by exact token value.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn find_by_value(&self, token_value: &str) -> Result<Option<RefreshToken>, AuthError>;

    /// Set `revoked_at` on the matching record. A missing record is a no-op
    /// success.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn revoke(&self, token_value: &str, revoked_at: DateTime<Utc>)
        -> Result<(), AuthError>;

    /// Retrieve all records, newest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn list_all(&self) -> Result<Vec<RefreshToken>, AuthError>;
}
