use std::sync::Arc;

use crate::{
    cache::listing_cache::{Collection, ResponseCache},
    entities::{
        resource::{NewResourceRequest, Resource},
        CreatedResponse,
    },
    errors::AppError,
    repositories::resource::ResourceRepository,
};

pub struct ResourceHandler<R>
where
    R: ResourceRepository,
{
    pub resource_repo: R,
    pub cache: Arc<ResponseCache>,
}

impl<R> ResourceHandler<R>
where
    R: ResourceRepository,
{
    pub fn new(resource_repo: R, cache: Arc<ResponseCache>) -> Self {
        ResourceHandler { resource_repo, cache }
    }

    pub async fn create_resource(&self, request: NewResourceRequest) -> Result<CreatedResponse, AppError> {
        let id = self.resource_repo.create_resource(&request).await?;

        self.cache.invalidate(Collection::Resources);
        tracing::info!(resource_id = id, "Resource created");

        Ok(CreatedResponse::new("Resource created", id))
    }

    pub async fn list_resources(&self) -> Result<Arc<Vec<Resource>>, AppError> {
        self.cache.resources
            .get_or_load(|| self.resource_repo.list_resources())
            .await
    }
}
