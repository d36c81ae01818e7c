use thiserror::Error;

/// Top-level error for authentication and token operations.
///
/// The first six variants all surface as the same generic unauthorized
/// response at the HTTP boundary; they stay distinct here so the real cause
/// can be logged without being echoed to the caller.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Missing or malformed credential: {0}")]
    MissingCredential(#[from] auth::CredentialError),

    /// Unknown login name, wrong password, or unknown refresh token.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Access token correctly signed but past its expiry.
    #[error("Access token expired")]
    AccessTokenExpired,

    /// Access token tampered with, signed with another secret, or malformed.
    #[error("Access token invalid: {0}")]
    AccessTokenInvalid(String),

    /// Refresh token past its expiry instant; terminal state.
    #[error("Refresh token expired")]
    RefreshTokenExpired,

    /// Refresh token explicitly revoked; terminal state.
    #[error("Refresh token revoked")]
    RefreshTokenRevoked,

    // Infrastructure errors
    /// A generated refresh-token value collided with an existing record.
    #[error("Refresh token value already exists")]
    DuplicateRefreshToken,

    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Signing failure, entropy exhaustion, or hashing machinery failure.
    #[error("Internal authentication failure: {0}")]
    Internal(String),
}
