// ABOUTME: Integration tests for the report route handlers
// ABOUTME: Submission, snapshots, nearby lookups, chat, and the error envelope

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::json;

use helpers::axum_test::AxumTestRequest;
use helpers::fake_llm::FakeLlmProvider;
use helpers::{test_manager, test_profile};
use solstice_core::errors::ErrorResponse;
use solstice_life_server::config::ServerConfig;
use solstice_life_server::routes;
use solstice_life_server::routes::health::HealthResponse;
use solstice_life_server::routes::reports::{
    ChatCompletionResponse, NearbyResponse, SubmitReportResponse,
};

fn test_router(provider: FakeLlmProvider) -> axum::Router {
    routes::router(test_manager(Arc::new(provider)), &ServerConfig::default())
}

fn submit_body() -> serde_json::Value {
    serde_json::to_value(test_profile()).unwrap()
}

#[tokio::test]
async fn submit_returns_created_with_snapshot() {
    let app = test_router(FakeLlmProvider::succeeding());

    let response = AxumTestRequest::post("/api/v1/reports")
        .json(&submit_body())
        .send(app)
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);

    let body: SubmitReportResponse = response.json();
    assert!(body.report.metrics.days_lived > 0);
    assert_eq!(body.report.life_distribution.len(), 5);
    assert!(!body.report.enrichment_complete);
}

#[tokio::test]
async fn snapshot_round_trips_through_the_wire_format() {
    let app = test_router(FakeLlmProvider::succeeding());

    let submit = AxumTestRequest::post("/api/v1/reports")
        .json(&submit_body())
        .send(app.clone())
        .await;
    let created: SubmitReportResponse = submit.json();

    let response = AxumTestRequest::get(&format!("/api/v1/reports/{}", created.session_id))
        .send(app)
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    // Pending narrative fields serialize as null; metrics use camelCase keys
    let raw: serde_json::Value = response.json();
    assert!(raw["metrics"]["daysLived"].is_u64());
    assert!(raw["metrics"]["breathsTaken"].is_u64());
    assert_eq!(raw["submissionId"], json!(created.report.submission_id));
    assert!(raw["carbonTrend"].is_array());
}

#[tokio::test]
async fn unknown_session_maps_to_not_found_envelope() {
    let app = test_router(FakeLlmProvider::succeeding());

    let response = AxumTestRequest::get(&format!("/api/v1/reports/{}", uuid::Uuid::new_v4()))
        .send(app)
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let body: ErrorResponse = response.json();
    assert_eq!(
        body.error.code,
        solstice_core::errors::ErrorCode::ResourceNotFound
    );
}

#[tokio::test]
async fn invalid_profile_maps_to_bad_request() {
    let app = test_router(FakeLlmProvider::succeeding());

    let mut body = submit_body();
    body["heightCm"] = json!(-10.0);

    let response = AxumTestRequest::post("/api/v1/reports")
        .json(&body)
        .send(app)
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let envelope: ErrorResponse = response.json();
    assert_eq!(
        envelope.error.code,
        solstice_core::errors::ErrorCode::ValueOutOfRange
    );
}

#[tokio::test]
async fn nearby_lookup_returns_sites() {
    let provider = FakeLlmProvider::succeeding().with_grounding(vec![
        FakeLlmProvider::maps_source("Banff National Park", "https://maps.example.org/banff"),
    ]);
    let app = test_router(provider);

    let submit = AxumTestRequest::post("/api/v1/reports")
        .json(&submit_body())
        .send(app.clone())
        .await;
    let created: SubmitReportResponse = submit.json();

    let response = AxumTestRequest::post(&format!(
        "/api/v1/reports/{}/nearby",
        created.session_id
    ))
    .json(&json!({ "latitude": 51.18, "longitude": -115.57 }))
    .send(app)
    .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: NearbyResponse = response.json();
    assert_eq!(body.sites.len(), 1);
    assert_eq!(body.sites[0].title, "Banff National Park");
}

#[tokio::test]
async fn reported_geolocation_failure_maps_to_canonical_message() {
    let app = test_router(FakeLlmProvider::succeeding());

    let submit = AxumTestRequest::post("/api/v1/reports")
        .json(&submit_body())
        .send(app.clone())
        .await;
    let created: SubmitReportResponse = submit.json();

    let response = AxumTestRequest::post(&format!(
        "/api/v1/reports/{}/nearby",
        created.session_id
    ))
    .json(&json!({ "error": "permission_denied" }))
    .send(app)
    .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let envelope: ErrorResponse = response.json();
    assert!(envelope
        .error
        .message
        .contains("Please grant permission to access your location"));
}

#[tokio::test]
async fn chat_returns_reply_and_rejects_empty_message() {
    let app = test_router(FakeLlmProvider::succeeding());

    let submit = AxumTestRequest::post("/api/v1/reports")
        .json(&submit_body())
        .send(app.clone())
        .await;
    let created: SubmitReportResponse = submit.json();

    let uri = format!("/api/v1/reports/{}/chat", created.session_id);

    let response = AxumTestRequest::post(&uri)
        .json(&json!({
            "message": "How far have I traveled?",
            "history": [
                { "role": "user", "content": "Hello" },
                { "role": "assistant", "content": "Hi there" },
            ],
        }))
        .send(app.clone())
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: ChatCompletionResponse = response.json();
    assert!(body.reply.starts_with("fake reply"));

    let response = AxumTestRequest::post(&uri)
        .json(&json!({ "message": "   " }))
        .send(app)
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn chat_provider_failure_surfaces_as_bad_gateway() {
    let app = test_router(FakeLlmProvider::failing());

    let submit = AxumTestRequest::post("/api/v1/reports")
        .json(&submit_body())
        .send(app.clone())
        .await;
    let created: SubmitReportResponse = submit.json();

    let response = AxumTestRequest::post(&format!(
        "/api/v1/reports/{}/chat",
        created.session_id
    ))
    .json(&json!({ "message": "hello" }))
    .send(app)
    .await;
    assert_eq!(response.status_code(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn health_reports_service_identity() {
    let app = test_router(FakeLlmProvider::succeeding());

    let response = AxumTestRequest::get("/health").send(app).await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: HealthResponse = response.json();
    assert_eq!(body.status, "ok");
    assert_eq!(body.service, "solstice-life-server");
}
