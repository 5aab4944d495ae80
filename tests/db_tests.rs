//! Round trips against a real Postgres. Run with
//! `TEST_DATABASE_URL=postgres://... cargo test --test db_tests -- --ignored --test-threads=1`.


use reqwest::StatusCode;
use serde_json::json;
use showcase_backend::cache::listing_cache::Collection;
use test_utils::*;

#[actix_rt::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn created_post_is_listed_first() {
    let app = TestApp::spawn().await;

    app.post_json("/posts", &json!({ "title": "Older", "content": "first" })).await;
    let response = app
        .post_json(
            "/posts",
            &json!({ "title": "Hello", "date": "2024-01-01", "content": "world", "description": "d" }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let created: serde_json::Value = response.json().await.unwrap();
    assert_eq!(created["message"], "Post created");

    let posts = app.get_json("/posts").await;
    assert_eq!(posts[0]["id"], created["id"]);
    assert_eq!(posts[0]["content"], "world");
    assert_eq!(posts[0]["date"], "2024-01-01");
}

#[actix_rt::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn post_without_content_persists_nothing() {
    let app = TestApp::spawn().await;

    let response = app.post_json("/posts", &json!({ "title": "Empty" })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(app.count_rows("posts").await, 0);
}

#[actix_rt::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn project_stack_round_trips_in_submission_order() {
    let app = TestApp::spawn().await;

    let response = app
        .post_json(
            "/projects",
            &json!({
                "title": "Showcase",
                "short_description": "Portfolio backend",
                "stack": ["Rust", "Actix", "Postgres"],
                "link": "https://example.com"
            }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let projects = app.get_json("/projects").await;
    assert_eq!(projects[0]["title"], "Showcase");
    assert_eq!(projects[0]["stack"], json!(["Rust", "Actix", "Postgres"]));
}

#[actix_rt::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn failing_stack_insert_rolls_back_the_project() {
    let app = TestApp::spawn().await;
    let too_long = "x".repeat(200);

    let response = app
        .post_json("/projects", &json!({ "title": "Broken", "stack": ["Rust", too_long] }))
        .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(app.count_rows("projects").await, 0);
    assert_eq!(app.count_rows("project_stack").await, 0);
}

#[actix_rt::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn resource_listing_is_fresh_after_create() {
    let app = TestApp::spawn().await;

    assert_eq!(app.get_json("/resources").await, json!([]));
    assert!(app.state.cache.is_cached(Collection::Resources));

    let response = app
        .post_json("/resources", &json!({ "title": "Rust Book", "link": "https://doc.rust-lang.org/book/" }))
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let resources = app.get_json("/resources").await;
    assert_eq!(resources[0]["title"], "Rust Book");
}

#[actix_rt::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn correct_credentials_are_required_end_to_end() {
    let app = TestApp::spawn().await;
    let body = json!({ "title": "t", "description": "d" });

    let anonymous = app.client.post(app.url("/resources")).json(&body).send().await.unwrap();
    assert_eq!(anonymous.status(), StatusCode::UNAUTHORIZED);

    let wrong = app
        .client
        .post(app.url("/resources"))
        .basic_auth(TEST_USER, Some("nope"))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);

    let right = app.post_json("/resources", &body).await;
    assert_eq!(right.status(), StatusCode::CREATED);
    assert_eq!(app.count_rows("resources").await, 1);
}
