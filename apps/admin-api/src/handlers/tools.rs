//! Tools catalog handlers.

use actix_web::{HttpResponse, web};
use textify_core::domain::{NewTool, ToolPatch, ToolType, slugify};
use textify_shared::dto::ToolTypeOption;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/tools
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let tools = state.tools.fetch_all().await?;
    Ok(HttpResponse::Ok().json(tools))
}

/// GET /api/tools/types
pub async fn type_options() -> HttpResponse {
    let options: Vec<ToolTypeOption> = ToolType::ALL
        .into_iter()
        .map(|kind| ToolTypeOption {
            value: kind.as_str().to_string(),
            label: kind.label().to_string(),
        })
        .collect();

    HttpResponse::Ok().json(options)
}

/// POST /api/tools
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<NewTool>,
) -> AppResult<HttpResponse> {
    let mut draft = body.into_inner();
    draft.validate()?;

    // SEO defaults the admin form used to fill in
    if draft.seo.meta_title.is_empty() {
        draft.seo.meta_title = draft.name.clone();
    }
    if draft.seo.canonical.is_empty() {
        let slug = match &draft.slug {
            Some(s) if !s.is_empty() => s.clone(),
            _ => slugify(&draft.name),
        };
        draft.seo.canonical = format!("{}/tools/{}", state.site_base_url, slug);
    }

    let tool = state.tools.create(draft).await?;
    Ok(HttpResponse::Created().json(tool))
}

/// GET /api/tools/{id}
pub async fn fetch(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let tool = state
        .tools
        .fetch_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("tool with id {} not found", id)))?;

    Ok(HttpResponse::Ok().json(tool))
}

/// PUT /api/tools/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<ToolPatch>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let patch = body.into_inner();
    patch.validate()?;

    let tool = state
        .tools
        .update(&id, patch)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("tool with id {} not found", id)))?;

    Ok(HttpResponse::Ok().json(tool))
}

/// DELETE /api/tools/{id}
pub async fn delete(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    if state.tools.delete(&id).await? {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(AppError::NotFound(format!("tool with id {} not found", id)))
    }
}
