//! Admin dashboard endpoint.

use actix_web::{HttpResponse, web};
use textify_shared::dto::DashboardCounts;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// Entity counts for the dashboard cards.
///
/// GET /api/dashboard
pub async fn counts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let (tools, blog_posts, pages) = futures::try_join!(
        state.tools.fetch_all(),
        state.blog_posts.fetch_all(),
        state.pages.fetch_all(),
    )?;

    Ok(HttpResponse::Ok().json(DashboardCounts {
        tools: tools.len(),
        blog_posts: blog_posts.len(),
        pages: pages.len(),
    }))
}
