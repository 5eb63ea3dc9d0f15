//! HTTP Route Tests
//!
//! Drives the full router in-process with `tower::ServiceExt::oneshot`:
//! - Form page GET and POST
//! - Health and metrics
//! - JSON catalog lookups and explanations

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use doubtdesk::http_server::{HttpServer, HttpServerConfig};

// =============================================================================
// Helper Functions
// =============================================================================

fn app() -> Router {
    HttpServer::new().router()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

async fn post_form(app: Router, body: &'static str) -> (StatusCode, String) {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let (status, text) = send(app, request).await;
    (status, serde_json::from_str(&text).unwrap())
}

// =============================================================================
// Form Page
// =============================================================================

#[tokio::test]
async fn test_index_renders_empty_form() {
    let (status, body) = get(app(), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(body.contains("<option value=\"Data Structures\" selected>"));
    assert!(body.contains("data-doubt=\"How does a linked list work?\""));
    assert!(!body.contains("<section class=\"response\">"));
}

#[tokio::test]
async fn test_index_uses_configured_defaults() {
    let config = HttpServerConfig {
        default_subject: "Compiler Design".to_string(),
        ..Default::default()
    };
    let (_, body) = get(HttpServer::with_config(config).router(), "/").await;

    assert!(body.contains("<option value=\"Compiler Design\" selected>"));
}

#[tokio::test]
async fn test_submit_embeds_explanation() {
    let (status, body) = post_form(
        app(),
        "branch=Computer+Science&subject=Data+Structures&doubt=stack+and+queue",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<section class=\"response\">"));
    assert!(body.contains("<strong>Q:</strong> stack and queue</p>"));
    assert!(body.contains("<li>LIFO</li>"));
}

#[tokio::test]
async fn test_submit_keeps_selected_subject() {
    let (_, body) = post_form(
        app(),
        "branch=Computer+Science&subject=Algorithms&doubt=backtracking",
    )
    .await;

    assert!(body.contains("<option value=\"Algorithms\" selected>"));
    assert!(body.contains("<li>pruning</li>"));
}

#[tokio::test]
async fn test_submit_missing_fields_use_defaults() {
    let (status, body) = post_form(app(), "").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<strong>Q:</strong> </p>"));
    assert!(body.contains("<strong>Data Structures</strong> in <strong>Computer Science</strong>"));
}

#[tokio::test]
async fn test_submit_unknown_subject_renders_generic() {
    let (status, body) = post_form(
        app(),
        "branch=Computer+Science&subject=Thermodynamics&doubt=entropy",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(doubtdesk::catalog::GENERIC_SUMMARY));
}

// =============================================================================
// Health and Metrics
// =============================================================================

#[tokio::test]
async fn test_health() {
    let (status, body) = get(app(), "/health").await;
    let value: Value = serde_json::from_str(&body).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["status"], "ok");
    assert_eq!(value["version"], env!("CARGO_PKG_VERSION"));
    assert!(value["started_at"].is_string());
}

#[tokio::test]
async fn test_metrics_count_selections() {
    let server = HttpServer::new();
    let state = server.state();
    let app = server.router();

    post_form(app.clone(), "subject=Algorithms&doubt=backtracking").await;
    post_form(app.clone(), "subject=Algorithms&doubt=nothing+relevant").await;
    post_form(app.clone(), "subject=Unknown&doubt=x").await;

    let snapshot = state.metrics.snapshot();
    assert_eq!(snapshot.page_views, 3);
    assert_eq!(snapshot.explanations, 3);
    assert_eq!(snapshot.rule_hits, 1);
    assert_eq!(snapshot.subject_fallbacks, 1);
    assert_eq!(snapshot.generic_fallbacks, 1);

    let (status, body) = get(app, "/observability/metrics").await;
    let value: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["rule_hits"], 1);
}

// =============================================================================
// JSON API
// =============================================================================

#[tokio::test]
async fn test_catalog_tables() {
    let (status, body) = get(app(), "/api/catalog").await;
    let value: Value = serde_json::from_str(&body).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["branches"]["Computer Science"].as_array().unwrap().len(), 10);
    assert_eq!(value["branches"]["Computer Science"][0], "Data Structures");
    assert_eq!(value["sample_doubts"]["Algorithms"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn test_branch_subjects() {
    let (status, body) = get(app(), "/api/branches/Computer%20Science/subjects").await;
    let value: Value = serde_json::from_str(&body).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["branch"], "Computer Science");
    assert_eq!(value["subjects"][9], "Discrete Mathematics");
}

#[tokio::test]
async fn test_unknown_branch_is_404() {
    let (status, body) = get(app(), "/api/branches/Mechanical/subjects").await;
    let value: Value = serde_json::from_str(&body).unwrap();

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(value["code"], 404);
    assert_eq!(value["error"], "Branch not found: Mechanical");
}

#[tokio::test]
async fn test_subject_samples() {
    let (status, body) = get(app(), "/api/subjects/Operating%20Systems/samples").await;
    let value: Value = serde_json::from_str(&body).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["subject"], "Operating Systems");
    assert_eq!(value["samples"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn test_unknown_subject_samples_is_404() {
    let (status, body) = get(app(), "/api/subjects/Thermodynamics/samples").await;
    let value: Value = serde_json::from_str(&body).unwrap();

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(value["code"], 404);
    assert_eq!(value["error"], "Subject not found: Thermodynamics");
}

#[tokio::test]
async fn test_api_explain() {
    let (status, value) = post_json(
        app(),
        "/api/explain",
        json!({
            "branch": "Computer Science",
            "subject": "Database Management Systems",
            "question": "How does a JOIN work?"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["selection"]["kind"], "rule");
    assert_eq!(value["selection"]["index"], 3);
    assert_eq!(value["template"]["keywords"][1], "inner join");
    assert!(value["html"]
        .as_str()
        .unwrap()
        .contains("<strong>Q:</strong> How does a JOIN work?</p>"));
}

#[tokio::test]
async fn test_api_explain_defaults_and_generic() {
    let (status, value) = post_json(app(), "/api/explain", json!({"question": "zzz"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["selection"]["kind"], "subject_fallback");

    let (status, value) = post_json(
        app(),
        "/api/explain",
        json!({"branch": "Mechanical", "subject": "Gears", "question": "torque"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["selection"]["kind"], "generic");
}
