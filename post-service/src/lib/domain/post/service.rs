use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::post::errors::PostError;
use crate::domain::post::models::CreatePostCommand;
use crate::domain::post::models::Post;
use crate::domain::post::models::PostId;
use crate::domain::post::models::SortOrder;
use crate::domain::post::ports::PostRepository;
use crate::domain::post::ports::PostServicePort;
use crate::domain::user::models::UserId;

/// Domain service implementation for post operations.
///
/// Thin by design: body validation lives in the `PostBody` value type and
/// the only rule enforced here is author-only deletion.
pub struct PostService<PR>
where
    PR: PostRepository,
{
    repository: Arc<PR>,
}

impl<PR> PostService<PR>
where
    PR: PostRepository,
{
    pub fn new(repository: Arc<PR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<PR> PostServicePort for PostService<PR>
where
    PR: PostRepository,
{
    async fn create_post(&self, command: CreatePostCommand) -> Result<Post, PostError> {
        let now = Utc::now();
        let post = Post {
            id: PostId::new(),
            body: command.body,
            author_id: command.author_id,
            created_at: now,
            updated_at: now,
        };

        self.repository.create(post).await
    }

    async fn get_post(&self, id: &PostId) -> Result<Post, PostError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(PostError::NotFound(id.to_string()))
    }

    async fn list_posts(
        &self,
        author_id: Option<UserId>,
        sort: SortOrder,
    ) -> Result<Vec<Post>, PostError> {
        self.repository.list(author_id, sort).await
    }

    async fn delete_post(&self, id: &PostId, requester: &UserId) -> Result<(), PostError> {
        let post = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(PostError::NotFound(id.to_string()))?;

        // Ownership check before any mutation
        if post.author_id != *requester {
            return Err(PostError::NotAuthor);
        }

        self.repository.delete(id).await
    }

    async fn delete_all_posts(&self) -> Result<(), PostError> {
        self.repository.delete_all().await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::domain::post::models::PostBody;

    mock! {
        pub TestPostRepository {}

        #[async_trait]
        impl PostRepository for TestPostRepository {
            async fn create(&self, post: Post) -> Result<Post, PostError>;
            async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, PostError>;
            async fn list(&self, author_id: Option<UserId>, sort: SortOrder) -> Result<Vec<Post>, PostError>;
            async fn delete(&self, id: &PostId) -> Result<(), PostError>;
            async fn delete_all(&self) -> Result<(), PostError>;
        }
    }

    fn post_by(author_id: UserId) -> Post {
        Post {
            id: PostId::new(),
            body: PostBody::new("hello".to_string()).unwrap(),
            author_id,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_post() {
        let mut repository = MockTestPostRepository::new();

        let author_id = UserId::new();
        repository
            .expect_create()
            .withf(move |post| post.author_id == author_id && post.body.as_str() == "hello")
            .times(1)
            .returning(Ok);

        let service = PostService::new(Arc::new(repository));

        let command = CreatePostCommand {
            body: PostBody::new("hello".to_string()).unwrap(),
            author_id,
        };

        let post = service.create_post(command).await.unwrap();
        assert_eq!(post.author_id, author_id);
    }

    #[tokio::test]
    async fn test_delete_post_by_author() {
        let mut repository = MockTestPostRepository::new();

        let author_id = UserId::new();
        let post = post_by(author_id);
        let post_id = post.id;

        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(post.clone())));
        repository
            .expect_delete()
            .withf(move |id| *id == post_id)
            .times(1)
            .returning(|_| Ok(()));

        let service = PostService::new(Arc::new(repository));

        let result = service.delete_post(&post_id, &author_id).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_delete_post_by_other_user_is_rejected() {
        let mut repository = MockTestPostRepository::new();

        let post = post_by(UserId::new());
        let post_id = post.id;

        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(post.clone())));
        // The post must remain untouched
        repository.expect_delete().times(0);

        let service = PostService::new(Arc::new(repository));

        let result = service.delete_post(&post_id, &UserId::new()).await;
        assert!(matches!(result, Err(PostError::NotAuthor)));
    }

    #[tokio::test]
    async fn test_delete_post_not_found() {
        let mut repository = MockTestPostRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));
        repository.expect_delete().times(0);

        let service = PostService::new(Arc::new(repository));

        let result = service.delete_post(&PostId::new(), &UserId::new()).await;
        assert!(matches!(result, Err(PostError::NotFound(_))));
    }
}
