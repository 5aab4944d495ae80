use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    entities::project::{NewProjectRequest, ProjectRow, StackEntry},
    errors::AppError,
    repositories::sqlx_repo::SqlxProjectRepo,
};

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Inserts the project and its stack entries as one unit of work
    async fn create_project(&self, project: &NewProjectRequest) -> Result<i64, AppError>;

    async fn list_projects(&self) -> Result<Vec<ProjectRow>, AppError>;

    /// Every stack entry, in insertion order
    async fn list_stack_entries(&self) -> Result<Vec<StackEntry>, AppError>;
}

impl SqlxProjectRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxProjectRepo { pool }
    }
}

#[async_trait]
impl ProjectRepository for SqlxProjectRepo {
    async fn create_project(&self, project: &NewProjectRequest) -> Result<i64, AppError> {
        // Dropping `tx` without commit rolls everything back
        let mut tx = self.pool.begin().await?;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO projects (
                title, short_description, description, link,
                source_code, image_url, youtube_url
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#
        )
        .bind(&project.title)
        .bind(&project.short_description)
        .bind(&project.description)
        .bind(&project.link)
        .bind(&project.source_code)
        .bind(&project.image_url)
        .bind(&project.youtube_url)
        .fetch_one(&mut *tx)
        .await?;

        for technology in &project.stack {
            sqlx::query(
                r#"
                INSERT INTO project_stack (project_id, technology)
                VALUES ($1, $2)
                "#
            )
            .bind(id)
            .bind(technology)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                tracing::warn!(project_id = id, %technology, "Stack entry insert failed, rolling back");
                AppError::from(e)
            })?;
        }

        tx.commit().await?;

        Ok(id)
    }

    async fn list_projects(&self) -> Result<Vec<ProjectRow>, AppError> {
        let rows = sqlx::query_as::<_, ProjectRow>(
            r#"
            SELECT id, title, short_description, description, link,
                   source_code, image_url, youtube_url
            FROM projects
            ORDER BY id
            "#
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn list_stack_entries(&self) -> Result<Vec<StackEntry>, AppError> {
        let entries = sqlx::query_as::<_, StackEntry>(
            r#"SELECT project_id, technology FROM project_stack ORDER BY id"#
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }
}
