use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::post::errors::PostBodyError;
use crate::domain::post::errors::PostIdError;
use crate::domain::user::models::UserId;

/// Post aggregate entity.
#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub body: PostBody,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Post unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PostId(pub Uuid);

impl PostId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a post ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, PostIdError> {
        Uuid::parse_str(s)
            .map(PostId)
            .map_err(|e| PostIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for PostId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Post body value type.
///
/// Enforces the length limit and masks the blocked word list on
/// construction, so only cleaned bodies exist past this point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostBody(String);

impl PostBody {
    const MAX_LENGTH: usize = 140;

    const BLOCKED_WORDS: [&'static str; 3] = ["kerfuffle", "sharbert", "fornax"];

    /// Create a validated, cleaned post body.
    ///
    /// # Errors
    /// * `TooLong` - Body exceeds 140 characters
    pub fn new(body: String) -> Result<Self, PostBodyError> {
        let length = body.len();
        if length > Self::MAX_LENGTH {
            return Err(PostBodyError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        Ok(Self(Self::cleaned(body)))
    }

    /// Wrap a body that was already validated and cleaned (storage reads).
    pub fn from_trusted(body: String) -> Self {
        Self(body)
    }

    fn cleaned(body: String) -> String {
        body.split(' ')
            .map(|word| {
                if Self::BLOCKED_WORDS.contains(&word.to_lowercase().as_str()) {
                    "****"
                } else {
                    word
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create a new post with domain types
#[derive(Debug)]
pub struct CreatePostCommand {
    pub body: PostBody,
    pub author_id: UserId,
}

/// Sort order for post listings, by creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}
