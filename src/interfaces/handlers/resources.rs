use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{entities::resource::NewResourceRequest, errors::AppError, use_cases::extractors::WriteAccess, AppState};

#[instrument(skip(_access, state, data))]
pub async fn create_resource(
    _access: WriteAccess,
    state: web::Data<AppState>,
    data: web::Json<NewResourceRequest>,
) -> Result<impl Responder, AppError> {
    let response = state.resource_handler
        .create_resource(data.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(response))
}

#[instrument(skip(state))]
pub async fn list_resources(
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let resources = state.resource_handler.list_resources().await?;

    Ok(HttpResponse::Ok().json(resources.as_slice()))
}
