// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header::CONTENT_TYPE};
use serde_json::Value;

use linklite::application::services::ApplicationServices;
use linklite::infrastructure::{
    repositories::InMemoryBlacklistedSlugRepository, util::DefaultSlugNormalizer,
};
use linklite::presentation::http::{routes::build_router, state::HttpState};

use super::fixtures::reserved_entries;

pub fn build_services(repo: Arc<InMemoryBlacklistedSlugRepository>) -> ApplicationServices {
    ApplicationServices::new(repo.clone(), repo, Arc::new(DefaultSlugNormalizer))
}

pub fn seeded_repo() -> Arc<InMemoryBlacklistedSlugRepository> {
    Arc::new(InMemoryBlacklistedSlugRepository::with_entries(
        reserved_entries(),
    ))
}

pub fn make_test_router_with_repo(repo: Arc<InMemoryBlacklistedSlugRepository>) -> axum::Router {
    let state = HttpState {
        services: Arc::new(build_services(repo)),
    };
    build_router(state, &[])
}

pub fn make_test_router() -> axum::Router {
    make_test_router_with_repo(seeded_repo())
}

pub fn json_request(method: &str, uri: &str, payload: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("valid json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = read_json(resp).await;
    let err_field = json.get("error").and_then(Value::as_str).unwrap_or("");
    let msg_field = json.get("message").and_then(Value::as_str).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
