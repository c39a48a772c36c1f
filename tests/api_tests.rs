//! API integration tests over the in-memory store

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use catalog_server::{api, config::AppConfig, repository::MemoryStore, AppState};

fn app() -> Router {
    let state = AppState::new(AppConfig::default(), Arc::new(MemoryStore::new()));
    api::router(state)
}

struct TestResponse {
    status: StatusCode,
    location: Option<String>,
    raw: Vec<u8>,
    body: Value,
}

async fn send(app: &Router, method: Method, path: &str, body: Option<Value>) -> TestResponse {
    let mut builder = Request::builder()
        .method(method)
        .uri(format!("/api/v1{}", path));
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .expect("Failed to send request");

    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .map(|value| value.to_str().unwrap().to_string());
    let raw = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body")
        .to_vec();
    let body = serde_json::from_slice(&raw).unwrap_or(Value::Null);

    TestResponse { status, location, raw, body }
}

async fn create_author(app: &Router, name: &str) -> i64 {
    let response = send(app, Method::POST, "/authors", Some(json!({ "name": name }))).await;
    assert_eq!(response.status, StatusCode::CREATED);
    response.body["data"]["id"].as_i64().expect("No author ID")
}

async fn create_genre(app: &Router, description: &str) -> i64 {
    let response = send(app, Method::POST, "/genres", Some(json!({ "description": description }))).await;
    assert_eq!(response.status, StatusCode::CREATED);
    response.body["data"]["id"].as_i64().expect("No genre ID")
}

async fn create_book(app: &Router, title: &str, author_id: i64, genre_id: i64) -> TestResponse {
    send(
        app,
        Method::POST,
        "/books",
        Some(json!({ "title": title, "authorId": author_id, "genreId": genre_id })),
    )
    .await
}

#[tokio::test]
async fn test_health_check() {
    let app = app();
    let response = send(&app, Method::GET, "/health", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "healthy");

    let response = send(&app, Method::GET, "/ready", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ready");
}

#[tokio::test]
async fn test_catalog_scenario() {
    let app = app();

    let response = send(&app, Method::POST, "/genres", Some(json!({ "description": "Fiction" }))).await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["data"]["id"], 1);

    let response = send(&app, Method::POST, "/authors", Some(json!({ "name": "Jane Doe" }))).await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["data"]["id"], 1);
    assert_eq!(response.body["data"]["totalBooks"], 0);

    let response = create_book(&app, "Dune", 1, 1).await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["data"]["id"], 1);
    assert_eq!(response.body["data"]["authorName"], "Jane Doe");
    assert_eq!(response.body["data"]["genreDescription"], "Fiction");

    let response = send(&app, Method::GET, "/authors/1", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["totalBooks"], 1);

    let response = send(&app, Method::DELETE, "/authors/1", None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["success"], false);
    assert_eq!(response.body["message"], "Cannot delete author with associated books");

    let response = send(&app, Method::DELETE, "/books/1", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"], true);

    let response = send(&app, Method::DELETE, "/authors/1", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["data"], true);
}

#[tokio::test]
async fn test_create_sets_location_and_matches_get() {
    let app = app();
    let response = send(&app, Method::POST, "/authors", Some(json!({ "name": "Ursula" }))).await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.location.as_deref(), Some("/api/v1/authors/1"));

    let fetched = send(&app, Method::GET, "/authors/1", None).await;
    assert_eq!(fetched.body["data"], response.body["data"]);

    let second = create_author(&app, "Frank").await;
    assert_eq!(second, 2);
}

#[tokio::test]
async fn test_validation_failures() {
    let app = app();

    let response = send(&app, Method::POST, "/authors", Some(json!({}))).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["success"], false);
    assert_eq!(response.body["message"], "Invalid data");
    assert_eq!(response.body["errors"], json!(["Author name is required"]));
    assert!(response.body.get("data").is_none());

    let long_name = "x".repeat(201);
    let response = send(&app, Method::POST, "/authors", Some(json!({ "name": long_name }))).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["errors"], json!(["Author name cannot exceed 200 characters"]));

    let response = send(
        &app,
        Method::POST,
        "/books",
        Some(json!({ "title": " ", "authorId": 0, "genreId": -1 })),
    )
    .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["errors"],
        json!([
            "Author ID must be greater than zero",
            "Genre ID must be greater than zero",
            "Book title is required"
        ])
    );

    let response = send(&app, Method::GET, "/authors", None).await;
    assert_eq!(response.body["data"], json!([]));
}

#[tokio::test]
async fn test_malformed_body_is_invalid_data() {
    let app = app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/genres")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let raw = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&raw).unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Invalid data");
    assert_eq!(body["errors"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_null_fields_report_each_rule() {
    let app = app();

    let response = send(&app, Method::POST, "/authors", Some(json!({ "name": null }))).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Invalid data");
    assert_eq!(response.body["errors"], json!(["Author name is required"]));

    let response = send(&app, Method::POST, "/genres", Some(json!({ "description": null }))).await;
    assert_eq!(response.body["errors"], json!(["Genre description is required"]));

    let response = send(
        &app,
        Method::POST,
        "/books",
        Some(json!({ "title": null, "authorId": null, "genreId": 0 })),
    )
    .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["errors"],
        json!([
            "Author ID must be greater than zero",
            "Genre ID must be greater than zero",
            "Book title is required"
        ])
    );
}

#[tokio::test]
async fn test_book_title_length_bound() {
    let app = app();
    let author_id = create_author(&app, "Jane Doe").await;
    let genre_id = create_genre(&app, "Fiction").await;

    let response = create_book(&app, &"t".repeat(301), author_id, genre_id).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["errors"], json!(["Book title cannot exceed 300 characters"]));

    let response = create_book(&app, &"t".repeat(300), author_id, genre_id).await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["data"]["title"].as_str().unwrap().len(), 300);
}

#[tokio::test]
async fn test_bad_path_id_is_invalid_data() {
    let app = app();
    for path in ["/authors/abc", "/genres/99999999999", "/books/1.5"] {
        let response = send(&app, Method::GET, path, None).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "GET {}", path);
        assert_eq!(response.body["success"], false);
        assert_eq!(response.body["message"], "Invalid data");
        assert_eq!(response.body["errors"].as_array().unwrap().len(), 1);
    }

    let response = send(&app, Method::DELETE, "/books/abc", None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Invalid data");
}

#[tokio::test]
async fn test_genre_with_books_cannot_be_deleted() {
    let app = app();
    let author_id = create_author(&app, "Jane Doe").await;
    let genre_id = create_genre(&app, "Fiction").await;
    let book = create_book(&app, "Dune", author_id, genre_id).await;
    let book_id = book.body["data"]["id"].as_i64().unwrap();

    let path = format!("/genres/{}", genre_id);
    let response = send(&app, Method::DELETE, &path, None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Cannot delete genre with associated books");
    assert_eq!(
        response.body["errors"],
        json!(["The genre has associated books. Remove the books before deleting the genre."])
    );

    let response = send(&app, Method::GET, &path, None).await;
    assert_eq!(response.body["data"]["totalBooks"], 1);

    send(&app, Method::DELETE, &format!("/books/{}", book_id), None).await;
    let response = send(&app, Method::DELETE, &path, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"], true);
}

#[tokio::test]
async fn test_missing_entities_are_404() {
    let app = app();
    for path in ["/authors/42", "/genres/42", "/books/42"] {
        let response = send(&app, Method::GET, path, None).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "GET {}", path);
        assert_eq!(response.body["success"], false);
    }

    let response = send(&app, Method::PUT, "/genres/42", Some(json!({ "description": "Drama" }))).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["errors"], json!(["Genre with ID 42 was not found"]));
}

#[tokio::test]
async fn test_repeated_delete_of_absent_id() {
    let app = app();
    let id = create_genre(&app, "Poetry").await;
    let path = format!("/genres/{}", id);

    let response = send(&app, Method::DELETE, &path, None).await;
    assert_eq!(response.status, StatusCode::OK);

    let first = send(&app, Method::DELETE, &path, None).await;
    let second = send(&app, Method::DELETE, &path, None).await;
    assert_eq!(first.status, StatusCode::NOT_FOUND);
    assert_eq!(second.status, StatusCode::NOT_FOUND);
    assert_eq!(first.raw, second.raw);
}

#[tokio::test]
async fn test_repeated_get_is_byte_identical() {
    let app = app();
    let author_id = create_author(&app, "Jane Doe").await;
    let genre_id = create_genre(&app, "Fiction").await;
    create_book(&app, "Dune", author_id, genre_id).await;

    let first = send(&app, Method::GET, "/books/1", None).await;
    let second = send(&app, Method::GET, "/books/1", None).await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.raw, second.raw);
}

#[tokio::test]
async fn test_book_with_unknown_references() {
    let app = app();
    let author_id = create_author(&app, "Jane Doe").await;
    let genre_id = create_genre(&app, "Fiction").await;

    let response = create_book(&app, "Dune", 99, genre_id).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Author not found");

    let response = create_book(&app, "Dune", author_id, 99).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Genre not found");

    // Author is reported when both are wrong
    let response = create_book(&app, "Dune", 98, 99).await;
    assert_eq!(response.body["message"], "Author not found");
    assert_eq!(response.body["errors"], json!(["Author with ID 98 does not exist"]));

    let response = send(&app, Method::GET, "/books", None).await;
    assert_eq!(response.body["data"], json!([]));
}

#[tokio::test]
async fn test_failed_book_update_leaves_row_unchanged() {
    let app = app();
    let author_id = create_author(&app, "Jane Doe").await;
    let genre_id = create_genre(&app, "Fiction").await;
    let created = create_book(&app, "Dune", author_id, genre_id).await;
    let book_id = created.body["data"]["id"].as_i64().unwrap();
    let path = format!("/books/{}", book_id);

    let response = send(
        &app,
        Method::PUT,
        &path,
        Some(json!({ "title": "Dune Messiah", "authorId": author_id, "genreId": 77 })),
    )
    .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let fetched = send(&app, Method::GET, &path, None).await;
    assert_eq!(fetched.body["data"], created.body["data"]);
}

#[tokio::test]
async fn test_total_books_tracks_references() {
    let app = app();
    let first_author = create_author(&app, "Jane Doe").await;
    let second_author = create_author(&app, "John Roe").await;
    let genre_id = create_genre(&app, "Fiction").await;

    let book = create_book(&app, "Dune", first_author, genre_id).await;
    let book_id = book.body["data"]["id"].as_i64().unwrap();
    create_book(&app, "Emma", first_author, genre_id).await;

    let response = send(&app, Method::GET, "/genres", None).await;
    assert_eq!(response.body["data"][0]["totalBooks"], 2);

    let response = send(
        &app,
        Method::PUT,
        &format!("/books/{}", book_id),
        Some(json!({ "title": "Dune", "authorId": second_author, "genreId": genre_id })),
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["authorName"], "John Roe");

    let response = send(&app, Method::GET, "/authors", None).await;
    assert_eq!(response.body["data"][0]["totalBooks"], 1);
    assert_eq!(response.body["data"][1]["totalBooks"], 1);

    let response = send(
        &app,
        Method::PUT,
        &format!("/authors/{}", second_author),
        Some(json!({ "name": "Johnny Roe" })),
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["totalBooks"], 1);

    send(&app, Method::DELETE, &format!("/books/{}", book_id), None).await;
    let response = send(&app, Method::GET, &format!("/authors/{}", second_author), None).await;
    assert_eq!(response.body["data"]["totalBooks"], 0);
}

#[tokio::test]
async fn test_openapi_document_served() {
    let app = app();
    let request = Request::builder()
        .uri("/api-docs/openapi.json")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let raw = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let doc: Value = serde_json::from_slice(&raw).unwrap();
    assert!(doc["paths"]["/authors/{id}"].is_object());
    assert!(doc["paths"]["/books"].is_object());
}
