use std::sync::Arc;

use crate::{
    cache::listing_cache::{Collection, ResponseCache},
    entities::{
        project::{merge_stacks, NewProjectRequest, Project},
        CreatedResponse,
    },
    errors::AppError,
    repositories::project::ProjectRepository,
};

pub struct ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub project_repo: R,
    pub cache: Arc<ResponseCache>,
}

impl<R> ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repo: R, cache: Arc<ResponseCache>) -> Self {
        ProjectHandler { project_repo, cache }
    }

    /// Creates a project together with its stack. The cache is only
    /// invalidated once the whole write has committed.
    pub async fn create_project(&self, request: NewProjectRequest) -> Result<CreatedResponse, AppError> {
        let id = self.project_repo.create_project(&request).await?;

        self.cache.invalidate(Collection::Projects);
        tracing::info!(project_id = id, stack_len = request.stack.len(), "Project created");

        Ok(CreatedResponse::new("Project created", id))
    }

    /// Lists every project with its stack merged in
    pub async fn list_projects(&self) -> Result<Arc<Vec<Project>>, AppError> {
        self.cache.projects
            .get_or_load(|| async {
                let rows = self.project_repo.list_projects().await?;
                let entries = self.project_repo.list_stack_entries().await?;
                Ok::<_, AppError>(merge_stacks(rows, entries))
            })
            .await
    }
}
