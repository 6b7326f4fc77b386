//! HTTP surface tests for blog posts, publication flow included.

mod common;

use actix_web::{App, http::StatusCode, test, web};
use admin_api::handlers;
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
async fn test_list_returns_seeded_post() {
    let app = seeded_app!();

    let req = test::TestRequest::get().uri("/api/blogs").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let posts = body.as_array().unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0]["slug"], "how-to-extract-text-from-images");
    assert_eq!(posts[0]["is_published"], true);
    assert!(posts[0]["published_at"].is_string());
}

#[actix_web::test]
async fn test_create_draft_fills_defaults() {
    let app = seeded_app!();

    let req = test::TestRequest::post()
        .uri("/api/blogs")
        .set_json(json!({"title": "My First Guide", "content": "<p>Hello</p>"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let post: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(post["slug"], "my-first-guide");
    assert_eq!(post["is_published"], false);
    assert!(post["published_at"].is_null());
    assert_eq!(post["seo"]["meta_title"], "My First Guide");
    assert_eq!(
        post["seo"]["canonical"],
        format!("{}/blog/my-first-guide", common::BASE_URL)
    );
}

#[actix_web::test]
async fn test_create_requires_title_and_content() {
    let app = seeded_app!();

    let req = test::TestRequest::post()
        .uri("/api/blogs")
        .set_json(json!({"title": "", "content": "<p>Body</p>"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/blogs")
        .set_json(json!({"title": "Draft", "content": "   "}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_publish_stamps_then_unpublish_retains() {
    let app = seeded_app!();

    let req = test::TestRequest::post()
        .uri("/api/blogs")
        .set_json(json!({"title": "Going Live", "content": "<p>Soon</p>"}))
        .to_request();
    let post: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;
    let id = post["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::put()
        .uri(&format!("/api/blogs/{}", id))
        .set_json(json!({"is_published": true}))
        .to_request();
    let published: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(published["is_published"], true);
    let stamped = published["published_at"].as_str().unwrap().to_string();

    let req = test::TestRequest::put()
        .uri(&format!("/api/blogs/{}", id))
        .set_json(json!({"is_published": false}))
        .to_request();
    let unpublished: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(unpublished["is_published"], false);
    // The publication stamp survives unpublishing
    assert_eq!(unpublished["published_at"].as_str().unwrap(), stamped);
}

#[actix_web::test]
async fn test_update_cannot_blank_required_fields() {
    let app = seeded_app!();

    let req = test::TestRequest::put()
        .uri("/api/blogs/1")
        .set_json(json!({"title": "   "}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::put()
        .uri("/api/blogs/1")
        .set_json(json!({"content": ""}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // The stored post is untouched
    let req = test::TestRequest::get().uri("/api/blogs/1").to_request();
    let post: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(post["title"], "How to Extract Text from Images");
}

#[actix_web::test]
async fn test_update_absent_is_404() {
    let app = seeded_app!();

    let req = test::TestRequest::put()
        .uri("/api/blogs/missing")
        .set_json(json!({"title": "Renamed"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_delete_removes_post() {
    let app = seeded_app!();

    let req = test::TestRequest::delete().uri("/api/blogs/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get().uri("/api/blogs").to_request();
    let body: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;
    assert!(body.as_array().unwrap().is_empty());
}
