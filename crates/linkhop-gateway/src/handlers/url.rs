use crate::error::{AppError, Operation, Result};
use crate::model::{CreateUrlRequest, CreateUrlResponse, ListUrlsResponse};
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use tracing::debug;

pub async fn list_urls_handler(State(state): State<AppState>) -> Result<Json<ListUrlsResponse>> {
    let links = state
        .shortener()
        .list()
        .await
        .map_err(|e| AppError::shortener(Operation::List, e))?;

    Ok(Json(ListUrlsResponse::new(links)))
}

pub async fn create_url_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateUrlRequest>, JsonRejection>,
) -> Result<Json<CreateUrlResponse>> {
    let Json(request) = payload.map_err(|rejection| {
        debug!(%rejection, "rejected create request body");
        AppError::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
    })?;

    let Some(url) = request.url else {
        return Err(AppError::BadRequest("URL is required".to_string()));
    };

    let link = state
        .shortener()
        .shorten(&url)
        .await
        .map_err(|e| AppError::shortener(Operation::Create, e))?;

    Ok(Json(CreateUrlResponse::new(link, state.base_url())))
}
