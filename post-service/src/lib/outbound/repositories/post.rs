use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::post::errors::PostError;
use crate::domain::post::models::Post;
use crate::domain::post::models::PostBody;
use crate::domain::post::models::PostId;
use crate::domain::post::models::SortOrder;
use crate::domain::post::ports::PostRepository;
use crate::domain::user::models::UserId;

pub struct PostgresPostRepository {
    pool: PgPool,
}

impl PostgresPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: Uuid,
    body: String,
    user_id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        Self {
            id: PostId(row.id),
            // Bodies are validated and cleaned before they are written
            body: PostBody::from_trusted(row.body),
            author_id: UserId(row.user_id),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create(&self, post: Post) -> Result<Post, PostError> {
        sqlx::query(
            r#"
            INSERT INTO posts (id, body, user_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(post.id.0)
        .bind(post.body.as_str())
        .bind(post.author_id.0)
        .bind(post.created_at)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        Ok(post)
    }

    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, PostError> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, body, user_id, created_at, updated_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        Ok(row.map(Post::from))
    }

    async fn list(
        &self,
        author_id: Option<UserId>,
        sort: SortOrder,
    ) -> Result<Vec<Post>, PostError> {
        let order = match sort {
            SortOrder::Ascending => "ASC",
            SortOrder::Descending => "DESC",
        };

        let rows = match author_id {
            Some(author) => {
                sqlx::query_as::<_, PostRow>(&format!(
                    r#"
                    SELECT id, body, user_id, created_at, updated_at
                    FROM posts
                    WHERE user_id = $1
                    ORDER BY created_at {order}
                    "#,
                ))
                .bind(author.0)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, PostRow>(&format!(
                    r#"
                    SELECT id, body, user_id, created_at, updated_at
                    FROM posts
                    ORDER BY created_at {order}
                    "#,
                ))
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Post::from).collect())
    }

    async fn delete(&self, id: &PostId) -> Result<(), PostError> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(PostError::NotFound(id.to_string()));
        }

        Ok(())
    }

    async fn delete_all(&self) -> Result<(), PostError> {
        sqlx::query("DELETE FROM posts")
            .execute(&self.pool)
            .await
            .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
