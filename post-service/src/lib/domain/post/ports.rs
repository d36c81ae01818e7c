use async_trait::async_trait;

use crate::domain::post::errors::PostError;
use crate::domain::post::models::CreatePostCommand;
use crate::domain::post::models::Post;
use crate::domain::post::models::PostId;
use crate::domain::post::models::SortOrder;
use crate::domain::user::models::UserId;

/// Port for post domain service operations.
#[async_trait]
pub trait PostServicePort: Send + Sync + 'static {
    /// Create a new post authored by the given user.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_post(&self, command: CreatePostCommand) -> Result<Post, PostError>;

    /// Retrieve a post by identifier.
    ///
    /// # Errors
    /// * `NotFound` - Post does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_post(&self, id: &PostId) -> Result<Post, PostError>;

    /// List posts, optionally restricted to one author, ordered by creation
    /// time.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_posts(
        &self,
        author_id: Option<UserId>,
        sort: SortOrder,
    ) -> Result<Vec<Post>, PostError>;

    /// Delete a post on behalf of `requester`.
    ///
    /// The requester must be the post's author; the post is untouched
    /// otherwise.
    ///
    /// # Errors
    /// * `NotFound` - Post does not exist
    /// * `NotAuthor` - Requester does not own the post
    /// * `DatabaseError` - Database operation failed
    async fn delete_post(&self, id: &PostId, requester: &UserId) -> Result<(), PostError>;

    /// Remove every post. Development reset only.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn delete_all_posts(&self) -> Result<(), PostError>;
}

/// Persistence operations for the post aggregate.
#[async_trait]
pub trait PostRepository: Send + Sync + 'static {
    /// Persist new post to storage.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, post: Post) -> Result<Post, PostError>;

    /// Retrieve post by identifier.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, PostError>;

    /// Retrieve posts ordered by creation time, optionally by one author.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list(
        &self,
        author_id: Option<UserId>,
        sort: SortOrder,
    ) -> Result<Vec<Post>, PostError>;

    /// Remove post from storage.
    ///
    /// # Errors
    /// * `NotFound` - Post does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &PostId) -> Result<(), PostError>;

    /// Remove all posts from storage.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn delete_all(&self) -> Result<(), PostError>;
}
