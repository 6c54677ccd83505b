// tests/e2e_blacklisted_slugs.rs
use std::sync::Arc;

use axum::http::StatusCode;
use linklite::infrastructure::{
    repositories::InMemoryBlacklistedSlugRepository, util::DefaultSlugNormalizer,
};
use serde_json::{Value, json};
use tower::util::ServiceExt as _;

mod support;

#[tokio::test]
async fn health_returns_ok() {
    let app = support::make_test_router();
    let resp = app
        .oneshot(support::empty_request("GET", "/health"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(support::read_json(resp).await, json!({ "status": "ok" }));
}

#[tokio::test]
async fn add_normalizes_and_returns_created() {
    let repo = support::seeded_repo();
    let app = support::make_test_router_with_repo(repo.clone());

    let resp = app
        .oneshot(support::json_request(
            "POST",
            "/api/v1/blacklisted-slugs",
            json!({ "slug": "Admin Panel" }),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(
        support::read_json(resp).await,
        json!({ "slug": "admin-panel" })
    );
    assert_eq!(repo.len().await, support::RESERVED.len() + 1);
}

#[tokio::test]
async fn add_existing_slug_conflicts() {
    let app = support::make_test_router();
    let resp = app
        .oneshot(support::json_request(
            "POST",
            "/api/v1/blacklisted-slugs",
            json!({ "slug": "LOGIN" }),
        ))
        .await
        .unwrap();
    support::assert_error_response(resp, StatusCode::CONFLICT, "Conflict").await;
}

#[tokio::test]
async fn add_unusable_slug_is_bad_request() {
    let app = support::make_test_router();
    let resp = app
        .oneshot(support::json_request(
            "POST",
            "/api/v1/blacklisted-slugs",
            json!({ "slug": "???" }),
        ))
        .await
        .unwrap();
    support::assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
}

#[tokio::test]
async fn get_returns_record_or_404() {
    let app = support::make_test_router();

    let resp = app
        .clone()
        .oneshot(support::empty_request("GET", "/api/v1/blacklisted-slugs/api"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(support::read_json(resp).await, json!({ "slug": "api" }));

    let resp = app
        .oneshot(support::empty_request(
            "GET",
            "/api/v1/blacklisted-slugs/shop",
        ))
        .await
        .unwrap();
    support::assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}

#[tokio::test]
async fn rename_moves_slug() {
    let app = support::make_test_router();

    let resp = app
        .clone()
        .oneshot(support::json_request(
            "PUT",
            "/api/v1/blacklisted-slugs/app",
            json!({ "slug": "apps" }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(support::read_json(resp).await, json!({ "slug": "apps" }));

    let resp = app
        .oneshot(support::empty_request("GET", "/api/v1/slug-checks/app"))
        .await
        .unwrap();
    let body = support::read_json(resp).await;
    assert_eq!(body["blacklisted"], Value::Bool(false));
}

#[tokio::test]
async fn rename_onto_existing_slug_conflicts() {
    let app = support::make_test_router();
    let resp = app
        .oneshot(support::json_request(
            "PUT",
            "/api/v1/blacklisted-slugs/login",
            json!({ "slug": "logout" }),
        ))
        .await
        .unwrap();
    support::assert_error_response(resp, StatusCode::CONFLICT, "Conflict").await;
}

#[tokio::test]
async fn delete_removes_then_reports_missing() {
    let repo = support::seeded_repo();
    let app = support::make_test_router_with_repo(repo.clone());

    let resp = app
        .clone()
        .oneshot(support::empty_request(
            "DELETE",
            "/api/v1/blacklisted-slugs/logout",
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert_eq!(repo.len().await, support::RESERVED.len() - 1);

    let resp = app
        .oneshot(support::empty_request(
            "DELETE",
            "/api/v1/blacklisted-slugs/logout",
        ))
        .await
        .unwrap();
    support::assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}

#[tokio::test]
async fn slug_check_normalizes_candidate() {
    let app = support::make_test_router();
    let resp = app
        .oneshot(support::empty_request("GET", "/api/v1/slug-checks/ADMIN"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        support::read_json(resp).await,
        json!({ "input": "ADMIN", "slug": "admin", "blacklisted": true })
    );
}

#[tokio::test]
async fn list_pages_through_all_slugs_in_order() {
    let app = support::make_test_router();

    let mut seen = Vec::new();
    let mut uri = "/api/v1/blacklisted-slugs?limit=2".to_string();
    loop {
        let resp = app
            .clone()
            .oneshot(support::empty_request("GET", &uri))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = support::read_json(resp).await;
        for item in body["items"].as_array().unwrap() {
            seen.push(item["slug"].as_str().unwrap().to_string());
        }
        match body.get("next_cursor").and_then(Value::as_str) {
            Some(cursor) => {
                assert_eq!(body["has_more"], Value::Bool(true));
                uri = format!("/api/v1/blacklisted-slugs?limit=2&cursor={cursor}");
            }
            None => {
                assert_eq!(body["has_more"], Value::Bool(false));
                break;
            }
        }
    }

    assert_eq!(seen, support::RESERVED.clone());
}

#[tokio::test]
async fn list_filters_by_prefix() {
    let app = support::make_test_router();
    let resp = app
        .oneshot(support::empty_request(
            "GET",
            "/api/v1/blacklisted-slugs?prefix=LOG",
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = support::read_json(resp).await;
    assert_eq!(
        body["items"],
        json!([{ "slug": "login" }, { "slug": "logout" }])
    );
}

#[tokio::test]
async fn list_rejects_malformed_cursor() {
    let app = support::make_test_router();
    let resp = app
        .oneshot(support::empty_request(
            "GET",
            "/api/v1/blacklisted-slugs?cursor=%25%25",
        ))
        .await
        .unwrap();
    support::assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
}

#[tokio::test]
async fn list_prefix_keeps_trailing_separator() {
    let repo = Arc::new(InMemoryBlacklistedSlugRepository::with_entries(
        ["admin", "admin-panel", "administrator"]
            .into_iter()
            .map(support::entry),
    ));
    let app = support::make_test_router_with_repo(repo);
    let resp = app
        .oneshot(support::empty_request(
            "GET",
            "/api/v1/blacklisted-slugs?prefix=Admin-",
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = support::read_json(resp).await;
    assert_eq!(body["items"], json!([{ "slug": "admin-panel" }]));
}

#[tokio::test]
async fn list_rejects_unusable_prefix() {
    let app = support::make_test_router();
    let resp = app
        .oneshot(support::empty_request(
            "GET",
            "/api/v1/blacklisted-slugs?prefix=%21%21%21",
        ))
        .await
        .unwrap();
    support::assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
}

#[tokio::test]
async fn list_rejects_negative_limit_with_error_body() {
    let app = support::make_test_router();
    let resp = app
        .oneshot(support::empty_request(
            "GET",
            "/api/v1/blacklisted-slugs?limit=-1",
        ))
        .await
        .unwrap();
    support::assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
}

#[tokio::test]
async fn add_without_slug_field_is_bad_request() {
    let app = support::make_test_router();
    let resp = app
        .oneshot(support::json_request(
            "POST",
            "/api/v1/blacklisted-slugs",
            json!({ "nope": 1 }),
        ))
        .await
        .unwrap();
    support::assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
}

#[tokio::test]
async fn rename_with_malformed_body_is_bad_request() {
    let app = support::make_test_router();
    let resp = app
        .oneshot(support::json_request(
            "PUT",
            "/api/v1/blacklisted-slugs/admin",
            json!({ "slug": 42 }),
        ))
        .await
        .unwrap();
    support::assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
}

#[tokio::test]
async fn list_page_size_is_capped_at_one_hundred() {
    let seed: Vec<String> = (0..150).map(|n| format!("Reserved {n:03}")).collect();
    let repo = Arc::new(InMemoryBlacklistedSlugRepository::seeded(
        &DefaultSlugNormalizer,
        &seed,
    ));
    assert_eq!(repo.len().await, 150);

    let app = support::make_test_router_with_repo(repo);
    let resp = app
        .oneshot(support::empty_request(
            "GET",
            "/api/v1/blacklisted-slugs?limit=500",
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = support::read_json(resp).await;
    assert_eq!(body["items"].as_array().map(Vec::len), Some(100));
    assert_eq!(body["items"][0], json!({ "slug": "reserved-000" }));
    assert_eq!(body["has_more"], json!(true));
    assert!(body["next_cursor"].is_string());
}
