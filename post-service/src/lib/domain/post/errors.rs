use thiserror::Error;

use crate::domain::user::errors::UserIdError;

/// Error for PostId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PostIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for PostBody validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PostBodyError {
    #[error("Post body too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for all post-related operations
#[derive(Debug, Clone, Error)]
pub enum PostError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid post ID: {0}")]
    InvalidPostId(#[from] PostIdError),

    #[error("Invalid post body: {0}")]
    InvalidBody(#[from] PostBodyError),

    #[error("Invalid author ID: {0}")]
    InvalidAuthorId(#[from] UserIdError),

    // Domain-level errors
    #[error("Post not found: {0}")]
    NotFound(String),

    #[error("Requester is not the author of the post")]
    NotAuthor,

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}
