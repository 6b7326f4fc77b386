//! Static page handlers. The four legal pages can be read and edited,
//! never created or removed.

use actix_web::{HttpResponse, web};
use textify_core::domain::PagePatch;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/pages
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let pages = state.pages.fetch_all().await?;
    Ok(HttpResponse::Ok().json(pages))
}

/// GET /api/pages/{id}
pub async fn fetch(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let page = state
        .pages
        .fetch_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("page with id {} not found", id)))?;

    Ok(HttpResponse::Ok().json(page))
}

/// PUT /api/pages/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<PagePatch>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let patch = body.into_inner();
    patch.validate()?;

    let page = state
        .pages
        .update(&id, patch)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("page with id {} not found", id)))?;

    Ok(HttpResponse::Ok().json(page))
}
