//! HTTP surface tests for the fixed legal pages.

mod common;

use actix_web::{App, http::StatusCode, test, web};
use admin_api::handlers;
use chrono::{DateTime, Utc};
use serde_json::json;

macro_rules! seeded_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(common::seeded_state()))
                .configure(handlers::configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn test_list_is_always_the_four_pages() {
    let app = seeded_app!();

    let req = test::TestRequest::get().uri("/api/pages").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let slugs: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|page| page["slug"].as_str().unwrap())
        .collect();
    assert_eq!(
        slugs,
        vec!["privacy-policy", "terms-conditions", "dmca-policy", "disclaimer"]
    );
}

#[actix_web::test]
async fn test_fetch_uses_slug_as_id() {
    let app = seeded_app!();

    let req = test::TestRequest::get()
        .uri("/api/pages/privacy-policy")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let page: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(page["title"], "Privacy Policy");
    assert_eq!(page["id"], page["slug"]);
}

#[actix_web::test]
async fn test_update_content_refreshes_last_updated() {
    let app = seeded_app!();

    let req = test::TestRequest::get().uri("/api/pages/disclaimer").to_request();
    let page: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;
    let before: DateTime<Utc> = serde_json::from_value(page["last_updated"].clone()).unwrap();

    let req = test::TestRequest::put()
        .uri("/api/pages/disclaimer")
        .set_json(json!({"content": "<h1>Disclaimer</h1><p>Revised.</p>"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let updated: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(updated["content"], "<h1>Disclaimer</h1><p>Revised.</p>");
    assert_eq!(updated["title"], "Disclaimer");

    let after: DateTime<Utc> =
        serde_json::from_value(updated["last_updated"].clone()).unwrap();
    assert!(after > before);
}

#[actix_web::test]
async fn test_update_unknown_page_is_404() {
    let app = seeded_app!();

    let req = test::TestRequest::put()
        .uri("/api/pages/about-us")
        .set_json(json!({"content": "<p>New page?</p>"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_update_cannot_move_the_slug() {
    let app = seeded_app!();

    let req = test::TestRequest::put()
        .uri("/api/pages/disclaimer")
        .set_json(json!({"slug": "somewhere-else"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_update_rejects_blank_content() {
    let app = seeded_app!();

    let req = test::TestRequest::put()
        .uri("/api/pages/disclaimer")
        .set_json(json!({"content": "   "}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_pages_cannot_be_created_or_deleted() {
    let app = seeded_app!();

    let req = test::TestRequest::post()
        .uri("/api/pages")
        .set_json(json!({"title": "About", "content": "<p>Hi</p>"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::delete()
        .uri("/api/pages/disclaimer")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
