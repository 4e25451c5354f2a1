use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::header::{CONTENT_TYPE, LOCATION};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use linkhop_core::repository::Result as RepoResult;
use linkhop_core::{ReadRepository, Repository, ShortLink, Slug, StorageError};
use linkhop_gateway::{App, AppState};
use linkhop_generator::{Generator, RandomGenerator};
use linkhop_shortener::ShortenerSettings;
use linkhop_storage::InMemoryRepository;
use serde_json::{json, Value};
use tower::ServiceExt;

const BASE_URL: &str = "https://lnk.hop";

struct TestApp {
    router: Router,
    repo: Arc<InMemoryRepository>,
}

impl TestApp {
    fn new() -> Self {
        Self::with_generator(RandomGenerator::default())
    }

    fn with_generator<G: Generator>(generator: G) -> Self {
        let repo = Arc::new(InMemoryRepository::new());
        let state = AppState::with_repository(
            Arc::clone(&repo),
            generator,
            ShortenerSettings::default(),
            BASE_URL,
        );
        Self {
            router: App::router(state),
            repo,
        }
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, headers, body.to_vec())
    }

    async fn get(&self, uri: &str) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
        self.send(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }

    async fn post_json(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.post_raw(uri, body.to_string()).await
    }

    async fn post_raw(&self, uri: &str, body: String) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap();
        let (status, _, body) = self.send(request).await;
        (status, serde_json::from_slice(&body).unwrap())
    }
}

/// Always returns the same slug.
struct ConstantGenerator(&'static str);

impl Generator for ConstantGenerator {
    type Output = Slug;

    fn generate(&self) -> Slug {
        Slug::new_unchecked(self.0)
    }
}

/// Every call fails as if the database were unreachable.
struct BrokenRepository;

#[async_trait]
impl ReadRepository for BrokenRepository {
    async fn find_by_slug(&self, _: &Slug) -> RepoResult<Option<ShortLink>> {
        Err(StorageError::Unavailable("connection refused".to_string()))
    }

    async fn list(&self) -> RepoResult<Vec<ShortLink>> {
        Err(StorageError::Unavailable("connection refused".to_string()))
    }
}

#[async_trait]
impl Repository for BrokenRepository {
    async fn insert(&self, _: &ShortLink) -> RepoResult<()> {
        Err(StorageError::Unavailable("connection refused".to_string()))
    }
}

fn broken_router() -> Router {
    let state = AppState::with_repository(
        Arc::new(BrokenRepository),
        RandomGenerator::default(),
        ShortenerSettings::default(),
        BASE_URL,
    );
    App::router(state)
}

#[tokio::test]
async fn create_then_redirect() {
    let app = TestApp::new();

    let (status, body) = app
        .post_json("/url", json!({ "url": "https://example.com/a/b" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["url"], "https://example.com/a/b");
    assert_eq!(body["message"], "URL created successfully");

    let slug = body["slug"].as_str().unwrap().to_string();
    assert_eq!(slug.len(), 10);
    assert_eq!(body["shortUrl"], format!("{BASE_URL}/u/{slug}"));

    let (status, headers, body) = app.get(&format!("/u/{slug}")).await;
    assert_eq!(status, StatusCode::FOUND);
    assert_eq!(headers[LOCATION], "https://example.com/a/b");
    assert!(body.is_empty());
}

#[tokio::test]
async fn unknown_slug_is_404_without_redirect() {
    let app = TestApp::new();

    let (status, headers, body) = app.get("/u/doesnotexist").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(headers.get(LOCATION).is_none());

    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body, json!({ "error": "URL not found" }));
}

#[tokio::test]
async fn slug_lookup_is_case_sensitive() {
    let app = TestApp::with_generator(ConstantGenerator("MiXeDcAsE1"));

    let (status, _) = app
        .post_json("/url", json!({ "url": "https://example.com" }))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _, _) = app.get("/u/MiXeDcAsE1").await;
    assert_eq!(status, StatusCode::FOUND);
    let (status, _, _) = app.get("/u/mixedcase1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn missing_url_is_400() {
    let app = TestApp::new();

    let (status, body) = app.post_json("/url", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "URL is required" }));
    assert!(app.repo.is_empty());
}

#[tokio::test]
async fn null_and_blank_urls_are_400() {
    let app = TestApp::new();

    for payload in [json!({ "url": null }), json!({ "url": "" }), json!({ "url": "   " })] {
        let (status, body) = app.post_json("/url", payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "URL is required");
    }
    assert!(app.repo.is_empty());
}

#[tokio::test]
async fn invalid_url_is_400() {
    let app = TestApp::new();

    for url in ["example.com", "ftp://example.com", "javascript:alert(1)"] {
        let (status, body) = app.post_json("/url", json!({ "url": url })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{url}");
        assert!(body["error"].is_string());
    }
    assert!(app.repo.is_empty());
}

#[tokio::test]
async fn url_with_inner_whitespace_is_400() {
    let app = TestApp::new();

    for url in [
        "https://exa\nmple.com/x",
        "https://example.com/a b",
        "https://example.com/a\tb",
    ] {
        let (status, body) = app.post_json("/url", json!({ "url": url })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{url:?}");
        assert!(body["error"]
            .as_str()
            .unwrap()
            .starts_with("URL is invalid:"));
    }
    assert!(app.repo.is_empty());
}

#[tokio::test]
async fn malformed_body_is_400() {
    let app = TestApp::new();

    let (status, body) = app.post_raw("/url", "{ not json".to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Invalid request body"));

    let (status, _) = app.post_json("/url", json!({ "url": 42 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(app.repo.is_empty());
}

#[tokio::test]
async fn list_is_empty_initially() {
    let app = TestApp::new();

    let (status, _, body) = app.get("/url").await;
    assert_eq!(status, StatusCode::OK);

    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["urls"], json!([]));
    assert_eq!(body["message"], "URLs fetched successfully");
}

#[tokio::test]
async fn list_returns_every_link_newest_first() {
    let app = TestApp::new();

    let mut slugs = Vec::new();
    for i in 0..4 {
        let (status, body) = app
            .post_json("/url", json!({ "url": format!("https://example.com/{i}") }))
            .await;
        assert_eq!(status, StatusCode::OK);
        slugs.push(body["slug"].as_str().unwrap().to_string());
    }

    let (status, _, body) = app.get("/url").await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&body).unwrap();
    let urls = body["urls"].as_array().unwrap();
    assert_eq!(urls.len(), 4);

    let listed: Vec<&str> = urls.iter().map(|u| u["slug"].as_str().unwrap()).collect();
    slugs.reverse();
    assert_eq!(listed, slugs);

    let first = &urls[0];
    assert_eq!(first["url"], "https://example.com/3");
    assert!(first["id"].is_string());
    assert!(first["createdAt"].is_string());
    assert_eq!(first["createdAt"], first["updatedAt"]);
}

#[tokio::test]
async fn exhausted_collisions_are_500() {
    let app = TestApp::with_generator(ConstantGenerator("always-same"));

    let (status, _) = app
        .post_json("/url", json!({ "url": "https://one.example" }))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app
        .post_json("/url", json!({ "url": "https://two.example" }))
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to create URL" }));
    assert_eq!(app.repo.len(), 1);
}

#[tokio::test]
async fn storage_failures_are_500_on_every_path() {
    let router = broken_router();

    let response = router
        .clone()
        .oneshot(Request::get("/url").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body, json!({ "error": "Failed to fetch URLs" }));

    let response = router
        .clone()
        .oneshot(
            Request::post("/url")
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(json!({ "url": "https://example.com" }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let response = router
        .oneshot(Request::get("/u/abc").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn health_is_ok() {
    let app = TestApp::new();

    let (status, _, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body, json!({ "status": "ok" }));
}
