//! Service-level endpoints: health, dashboard counts, request tagging.

mod common;

use actix_web::{App, http::StatusCode, test, web};
use admin_api::handlers;
use admin_api::observability::RequestIdMiddleware;

#[actix_web::test]
async fn test_health_reports_ok() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(common::seeded_state()))
            .configure(handlers::configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
    assert!(body["timestamp"].is_string());
}

#[actix_web::test]
async fn test_dashboard_counts_match_seeded_catalog() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(common::seeded_state()))
            .configure(handlers::configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/dashboard").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["tools"], 2);
    assert_eq!(body["blog_posts"], 1);
    assert_eq!(body["pages"], 4);
}

#[actix_web::test]
async fn test_response_carries_a_request_id() {
    let app = test::init_service(
        App::new()
            .wrap(RequestIdMiddleware)
            .app_data(web::Data::new(common::seeded_state()))
            .configure(handlers::configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let resp = test::call_service(&app, req).await;

    let header = resp.headers().get("x-request-id");
    assert!(header.is_some());
    assert!(!header.unwrap().to_str().unwrap().is_empty());
}

#[actix_web::test]
async fn test_inbound_request_id_is_echoed() {
    let app = test::init_service(
        App::new()
            .wrap(RequestIdMiddleware)
            .app_data(web::Data::new(common::seeded_state()))
            .configure(handlers::configure_routes),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/health")
        .insert_header(("X-Request-ID", "abc-123"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    let header = resp.headers().get("x-request-id").unwrap();
    assert_eq!(header.to_str().unwrap(), "abc-123");
}
