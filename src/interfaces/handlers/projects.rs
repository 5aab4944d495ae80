use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{entities::project::NewProjectRequest, errors::AppError, use_cases::extractors::WriteAccess, AppState};

#[instrument(skip(_access, state, data))]
pub async fn create_project(
    _access: WriteAccess,
    state: web::Data<AppState>,
    data: web::Json<NewProjectRequest>,
) -> Result<impl Responder, AppError> {
    let response = state.project_handler
        .create_project(data.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(response))
}

#[instrument(skip(state))]
pub async fn list_projects(
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let projects = state.project_handler.list_projects().await?;

    Ok(HttpResponse::Ok().json(projects.as_slice()))
}
