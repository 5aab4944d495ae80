use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    entities::resource::{NewResourceRequest, Resource},
    errors::AppError,
    repositories::sqlx_repo::SqlxResourceRepo,
};

#[async_trait]
pub trait ResourceRepository: Send + Sync {
    async fn create_resource(&self, resource: &NewResourceRequest) -> Result<i64, AppError>;
    async fn list_resources(&self) -> Result<Vec<Resource>, AppError>;
}

impl SqlxResourceRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxResourceRepo { pool }
    }
}

#[async_trait]
impl ResourceRepository for SqlxResourceRepo {
    async fn create_resource(&self, resource: &NewResourceRequest) -> Result<i64, AppError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO resources (title, description, link, image_url)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#
        )
        .bind(&resource.title)
        .bind(&resource.description)
        .bind(&resource.link)
        .bind(&resource.image_url)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn list_resources(&self) -> Result<Vec<Resource>, AppError> {
        let resources = sqlx::query_as::<_, Resource>(
            r#"SELECT id, title, description, link, image_url FROM resources ORDER BY id"#
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(resources)
    }
}
