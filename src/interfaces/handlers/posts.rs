use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{entities::post::NewPostRequest, errors::AppError, use_cases::extractors::WriteAccess, AppState};

#[instrument(skip(_access, state, data))]
pub async fn create_post(
    _access: WriteAccess,
    state: web::Data<AppState>,
    data: web::Json<NewPostRequest>,
) -> Result<impl Responder, AppError> {
    let response = state.post_handler
        .create_post(data.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(response))
}

#[instrument(skip(state))]
pub async fn list_posts(
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let posts = state.post_handler.list_posts().await?;

    Ok(HttpResponse::Ok().json(posts.as_slice()))
}
