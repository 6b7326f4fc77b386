//! HTTP handlers and route configuration.

mod blogs;
mod dashboard;
mod health;
mod pages;
mod tools;

use actix_web::{HttpMessage, HttpResponse, web};
use textify_shared::ErrorResponse;

use crate::observability::RequestId;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Malformed or unknown-field JSON bodies get a problem-details 400
    // instead of the default plain-text error
    let json_config = web::JsonConfig::default().error_handler(|err, req| {
        let mut problem = ErrorResponse::bad_request(err.to_string());
        if let Some(id) = req.extensions().get::<RequestId>() {
            problem = problem.with_request_id(id.0.clone());
        }
        actix_web::error::InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(problem),
        )
        .into()
    });

    cfg.service(
        web::scope("/api")
            .app_data(json_config)
            .route("/health", web::get().to(health::health_check))
            .route("/dashboard", web::get().to(dashboard::counts))
            .service(
                web::scope("/tools")
                    .route("", web::get().to(tools::list))
                    .route("", web::post().to(tools::create))
                    // Literal route must come before the id match
                    .route("/types", web::get().to(tools::type_options))
                    .route("/{id}", web::get().to(tools::fetch))
                    .route("/{id}", web::put().to(tools::update))
                    .route("/{id}", web::delete().to(tools::delete)),
            )
            .service(
                web::scope("/blogs")
                    .route("", web::get().to(blogs::list))
                    .route("", web::post().to(blogs::create))
                    .route("/{id}", web::get().to(blogs::fetch))
                    .route("/{id}", web::put().to(blogs::update))
                    .route("/{id}", web::delete().to(blogs::delete)),
            )
            // Pages are a fixed set: no create, no delete
            .service(
                web::scope("/pages")
                    .route("", web::get().to(pages::list))
                    .route("/{id}", web::get().to(pages::fetch))
                    .route("/{id}", web::put().to(pages::update)),
            ),
    );
}
