mod common;

use axum::{Router, http::StatusCode, routing::get};
use axum_test::TestServer;
use bookshelf::api::handlers::{create_book_handler, list_books_handler};
use bookshelf::domain::repositories::BookRepository;
use bookshelf::infrastructure::persistence::MemoryBookRepository;
use serde_json::{Value, json};
use std::sync::Arc;

/// Build a test server with the collection routes.
fn make_server() -> (TestServer, Arc<MemoryBookRepository>) {
    let (state, repo) = common::create_test_state();
    let app = Router::new()
        .route("/book", get(list_books_handler).post(create_book_handler))
        .with_state(state);
    (TestServer::new(app).unwrap(), repo)
}

// ─── GET /book ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_empty_catalog_is_http_400_with_body_404() {
    let (server, _repo) = make_server();

    let response = server.get("/book").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["error"], 404);
    assert!(body["datetime"].is_string());
}

#[tokio::test]
async fn test_list_returns_urls_only() {
    // The collection listing intentionally serializes nothing but the url
    // per book. This test pins that behavior; widening the payload is a
    // breaking change for existing clients.
    let (server, repo) = make_server();
    common::seed_book(&repo, "b1", "one").await;
    common::seed_book(&repo, "b2", "two").await;

    let response = server
        .get("/book")
        .add_header("Host", "shop.example.com")
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["url"], "http://shop.example.com/book/b1");
    assert_eq!(items[1]["url"], "http://shop.example.com/book/b2");

    // Only the url field, no title or price.
    assert_eq!(items[0].as_object().unwrap().len(), 1);
}

#[tokio::test]
async fn test_list_is_pretty_printed_json() {
    let (server, repo) = make_server();
    common::seed_book(&repo, "b1", "one").await;

    let response = server.get("/book").await;

    response.assert_status_ok();
    assert!(
        response
            .header("content-type")
            .to_str()
            .unwrap()
            .starts_with("application/json")
    );
    // 2-space indentation from the pretty renderer.
    assert!(response.text().contains("\n  {"));
}

// ─── POST /book ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_without_id_is_400() {
    let (server, _repo) = make_server();

    let response = server
        .post("/book")
        .json(&json!({ "title": "no id" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["error"], 400);
    assert!(body["msg"].as_str().unwrap().contains("'id'"));
}

#[tokio::test]
async fn test_create_returns_201_with_location_and_url() {
    let (server, repo) = make_server();

    let response = server
        .post("/book")
        .add_header("Host", "shop.example.com")
        .json(&json!({
            "id": "b1",
            "title": "Dom Casmurro",
            "autors": ["Machado de Assis"],
            "description": "a classic",
            "imageUrl": "https://covers.example.com/b1.jpg",
            "price": 29.9
        }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<Value>();
    assert_eq!(body["title"], "Dom Casmurro");
    assert_eq!(body["url"], "http://shop.example.com/book/b1");

    assert_eq!(
        response.header("location").to_str().unwrap(),
        "http://shop.example.com/book/b1"
    );

    // The document was persisted.
    let stored = repo.find_by_id("b1").await.unwrap().unwrap();
    assert_eq!(stored.title, "Dom Casmurro");
    assert!(stored.comments.is_empty());
}

#[tokio::test]
async fn test_create_applies_description_default() {
    let (server, repo) = make_server();

    server
        .post("/book")
        .json(&json!({ "id": "b1" }))
        .await
        .assert_status(StatusCode::CREATED);

    let stored = repo.find_by_id("b1").await.unwrap().unwrap();
    assert_eq!(stored.description, "no description.");
}

#[tokio::test]
async fn test_create_malformed_body_is_400_envelope() {
    let (server, _repo) = make_server();

    let response = server.post("/book").text("{ definitely not json").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["error"], 400);
}
