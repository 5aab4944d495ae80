use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    entities::post::{Post, PostInsert},
    errors::AppError,
    repositories::sqlx_repo::SqlxPostRepo,
};

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn create_post(&self, post: &PostInsert) -> Result<i64, AppError>;

    /// All posts, newest (highest id) first
    async fn list_posts(&self) -> Result<Vec<Post>, AppError>;
}

impl SqlxPostRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxPostRepo { pool }
    }
}

#[async_trait]
impl PostRepository for SqlxPostRepo {
    async fn create_post(&self, post: &PostInsert) -> Result<i64, AppError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO posts (title, date, content, description)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#
        )
        .bind(&post.title)
        .bind(post.date)
        .bind(&post.content)
        .bind(&post.description)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn list_posts(&self) -> Result<Vec<Post>, AppError> {
        let posts = sqlx::query_as::<_, Post>(
            r#"SELECT id, title, date, content, description FROM posts ORDER BY id DESC"#
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }
}
