use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// Fixed claim set carried by an access token.
///
/// Every field is required. A token missing any of them fails
/// deserialization and is rejected as malformed, rather than being admitted
/// with partial claims.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessClaims {
    /// Subject: the authenticated user's ID, serialized as a UUID string
    pub sub: String,

    /// Issuer label
    pub iss: String,

    /// Issued at (Unix timestamp, UTC)
    pub iat: i64,

    /// Expiration time (Unix timestamp, UTC)
    pub exp: i64,
}

impl AccessClaims {
    /// Build claims for a subject, valid from now until now + ttl.
    pub fn new(subject: Uuid, issuer: &str, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            sub: subject.to_string(),
            iss: issuer.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }

    /// Parse the subject claim as a user ID.
    ///
    /// Returns `None` when the stored subject is not a valid UUID.
    pub fn subject(&self) -> Option<Uuid> {
        Uuid::parse_str(&self.sub).ok()
    }

    /// Expiry instant of this token.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}
