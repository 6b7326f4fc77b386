//! Blog post handlers.

use actix_web::{HttpResponse, web};
use textify_core::domain::{BlogPostPatch, NewBlogPost, slugify};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/blogs
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.blog_posts.fetch_all().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// POST /api/blogs
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<NewBlogPost>,
) -> AppResult<HttpResponse> {
    let mut draft = body.into_inner();
    draft.validate()?;

    // SEO defaults the admin form used to fill in
    if draft.seo.meta_title.is_empty() {
        draft.seo.meta_title = draft.title.clone();
    }
    if draft.seo.canonical.is_empty() {
        let slug = match &draft.slug {
            Some(s) if !s.is_empty() => s.clone(),
            _ => slugify(&draft.title),
        };
        draft.seo.canonical = format!("{}/blog/{}", state.site_base_url, slug);
    }

    let post = state.blog_posts.create(draft).await?;
    Ok(HttpResponse::Created().json(post))
}

/// GET /api/blogs/{id}
pub async fn fetch(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let post = state
        .blog_posts
        .fetch_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("blog post with id {} not found", id)))?;

    Ok(HttpResponse::Ok().json(post))
}

/// PUT /api/blogs/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<BlogPostPatch>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let patch = body.into_inner();
    patch.validate()?;

    let post = state
        .blog_posts
        .update(&id, patch)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("blog post with id {} not found", id)))?;

    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /api/blogs/{id}
pub async fn delete(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    if state.blog_posts.delete(&id).await? {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(AppError::NotFound(format!("blog post with id {} not found", id)))
    }
}
