use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tabforge::application::OutputRepository;
use tabforge::infrastructure::SqliteOutputRepository;
use tabforge::ports::{router, AppState};
use tower::ServiceExt;

fn test_app() -> axum::Router {
    let repo = SqliteOutputRepository::in_memory().expect("Failed to open in-memory store");
    router(AppState::new(repo))
}

async fn read_json(response: Response<Body>) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("Body should be JSON")
}

async fn read_text(response: Response<Body>) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("Body should be UTF-8")
}

async fn post_output(app: &axum::Router, body: Value) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/outputs")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .expect("Failed to build request"),
        )
        .await
        .expect("Request should complete")
}

async fn get(app: &axum::Router, uri: &str) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("Failed to build request"),
        )
        .await
        .expect("Request should complete")
}

async fn delete(app: &axum::Router, uri: &str) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(uri)
                .body(Body::empty())
                .expect("Failed to build request"),
        )
        .await
        .expect("Request should complete")
}

#[tokio::test]
async fn given_script_in_html_when_posting_then_stores_sanitized_record() {
    // Arrange
    let app = test_app();

    // Act
    let response = post_output(
        &app,
        json!({"title": "T", "html": "<p>hi</p><script>evil()</script>"}),
    )
    .await;

    // Assert
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = read_json(response).await;
    assert_eq!(body["title"], "T");
    assert_eq!(body["html"], "<p>hi</p>");
    assert!(body["id"].as_str().is_some_and(|id| !id.is_empty()));
    assert!(body["createdAt"].is_string());
}

#[tokio::test]
async fn given_created_output_when_getting_deleting_and_getting_then_full_lifecycle_holds() {
    // Arrange
    let app = test_app();
    let created = read_json(post_output(&app, json!({"title": "T", "html": "<p>hi</p>"})).await).await;
    let id = created["id"].as_str().expect("id should be a string");

    // Act & Assert: fetch returns identical fields
    let response = get(&app, &format!("/outputs/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = read_json(response).await;
    assert_eq!(fetched, created);

    // Act & Assert: delete reports ok
    let response = delete(&app, &format!("/outputs/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await, json!({"ok": true}));

    // Act & Assert: subsequent fetch is a 404
    let response = get(&app, &format!("/outputs/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(read_json(response).await, json!({"error": "Not found"}));
}

#[tokio::test]
async fn given_missing_title_when_posting_then_returns_400_naming_field() {
    // Arrange
    let app = test_app();

    // Act
    let response = post_output(&app, json!({"html": "<p>hi</p>"})).await;

    // Assert
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(read_json(response).await, json!({"error": "title required"}));
}

#[tokio::test]
async fn given_blank_html_when_posting_then_returns_400_naming_field() {
    // Arrange
    let app = test_app();

    // Act
    let response = post_output(&app, json!({"title": "T", "html": "   "})).await;

    // Assert
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(read_json(response).await, json!({"error": "html required"}));
}

#[tokio::test]
async fn given_three_outputs_when_listing_then_returns_newest_first() {
    // Arrange
    let app = test_app();
    for title in ["First", "Second", "Third"] {
        let response = post_output(&app, json!({"title": title, "html": "<p>x</p>"})).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    // Act
    let response = get(&app, "/outputs").await;

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    let listed = read_json(response).await;
    let listed = listed.as_array().expect("Listing should be an array");
    assert_eq!(listed.len(), 3);
    assert_eq!(listed[0]["title"], "Third");
    assert_eq!(listed[2]["title"], "First");
}

#[tokio::test]
async fn given_more_than_hundred_outputs_when_listing_then_caps_at_hundred_newest_first() {
    // Arrange: seed through the repository directly, then serve it.
    let mut repo = SqliteOutputRepository::in_memory().expect("Failed to open in-memory store");
    for i in 0..101 {
        repo.create(&format!("Doc {i}"), "<p>x</p>")
            .expect("Seed create should succeed");
    }
    let app = router(AppState::new(repo));

    // Act
    let response = get(&app, "/outputs").await;

    // Assert: exactly 100 entries, newest first, oldest record truncated
    assert_eq!(response.status(), StatusCode::OK);
    let listed = read_json(response).await;
    let listed = listed.as_array().expect("Listing should be an array");
    assert_eq!(listed.len(), 100);
    assert_eq!(listed[0]["title"], "Doc 100");
    assert_eq!(listed[99]["title"], "Doc 1");
}

#[tokio::test]
async fn given_unknown_id_when_deleting_then_still_returns_ok() {
    // Arrange
    let app = test_app();

    // Act
    let response = delete(&app, "/outputs/never-existed").await;

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await, json!({"ok": true}));
}

#[tokio::test]
async fn given_stored_output_when_sharing_then_renders_isolated_iframe() {
    // Arrange
    let app = test_app();
    let created = read_json(
        post_output(
            &app,
            json!({"title": "My <Doc>", "html": "<p>\"quoted\" body</p>"}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_str().expect("id should be a string");

    // Act
    let response = get(&app, &format!("/share/{id}")).await;

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    let page = read_text(response).await;
    assert!(page.contains("Shared Output: My &lt;Doc&gt;"));
    assert!(page.contains("srcdoc="));
    // Stored html lands attribute-escaped inside srcdoc, not verbatim in the page.
    assert!(page.contains("&quot;quoted&quot;"));
    assert!(!page.contains(r#"<p>"quoted" body</p>"#));
}

#[tokio::test]
async fn given_unknown_id_when_sharing_then_returns_404() {
    // Arrange
    let app = test_app();

    // Act
    let response = get(&app, "/share/never-existed").await;

    // Assert
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
