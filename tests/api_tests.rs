
use actix_web::{http::StatusCode, test, web::Bytes};
use serde_json::{json, Value};
use test_utils::*;

#[actix_rt::test]
async fn root_reports_liveness_as_plain_text() {
    let app = init_app(unreachable_store_state()).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await, Bytes::from_static(b"Backend is running"));
}

#[actix_rt::test]
async fn writes_without_credentials_are_rejected() {
    let app = init_app(unreachable_store_state()).await;

    for path in ["/projects", "/resources", "/posts"] {
        let req = test::TestRequest::post()
            .uri(path)
            .set_json(json!({ "title": "t", "content": "c" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "path {path}");
        assert_eq!(test::read_body(resp).await, Bytes::from_static(b"Authentication required"));
    }
}

#[actix_rt::test]
async fn writes_with_wrong_credentials_are_rejected() {
    let app = init_app(unreachable_store_state()).await;

    for path in ["/projects", "/resources", "/posts"] {
        let req = test::TestRequest::post()
            .uri(path)
            .insert_header(("Authorization", basic_auth(TEST_USER, "wrong")))
            .set_json(json!({ "title": "t", "content": "c" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "path {path}");
        assert_eq!(test::read_body(resp).await, Bytes::from_static(b"Invalid credentials"));
    }
}

#[actix_rt::test]
async fn malformed_authorization_header_counts_as_missing() {
    let app = init_app(unreachable_store_state()).await;

    let req = test::TestRequest::post()
        .uri("/posts")
        .insert_header(("Authorization", "Bearer some-token"))
        .set_json(json!({ "content": "c" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(test::read_body(resp).await, Bytes::from_static(b"Authentication required"));
}

#[actix_rt::test]
async fn post_without_content_returns_400() {
    let app = init_app(unreachable_store_state()).await;

    for body in [json!({ "title": "Hello" }), json!({ "title": "Hello", "content": "" })] {
        let req = test::TestRequest::post()
            .uri("/posts")
            .insert_header(("Authorization", valid_auth()))
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Validation failed");
        assert_eq!(body["details"][0]["field"], "content");
    }
}

#[actix_rt::test]
async fn malformed_json_returns_400_json() {
    let app = init_app(unreachable_store_state()).await;

    let req = test::TestRequest::post()
        .uri("/projects")
        .insert_header(("Authorization", valid_auth()))
        .insert_header(("Content-Type", "application/json"))
        .set_payload(r#"{"title": "x", "stack": "not-a-list"}"#)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().starts_with("JSON payload error"));
}

#[actix_rt::test]
async fn store_failures_surface_as_generic_500() {
    let app = init_app(unreachable_store_state()).await;

    let req = test::TestRequest::get().uri("/resources").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "error": "Internal server error" }));

    let req = test::TestRequest::post()
        .uri("/posts")
        .insert_header(("Authorization", valid_auth()))
        .set_json(json!({ "title": "Hello", "content": "world" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[actix_rt::test]
async fn trailing_slash_is_normalised() {
    let app = init_app(unreachable_store_state()).await;

    let req = test::TestRequest::post()
        .uri("/posts/")
        .set_json(json!({ "content": "c" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
