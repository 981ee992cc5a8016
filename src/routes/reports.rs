// ABOUTME: Report route handlers for submission, snapshots, nearby sites, and chat
// ABOUTME: REST surface over the session manager; enrichment fills snapshots asynchronously
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Solstice Life Stats

//! Report routes
//!
//! - `POST /api/v1/reports`: submit a profile, returns the session id and the
//!   immediately-displayable snapshot (narrative fields pending)
//! - `GET /api/v1/reports/{id}`: current snapshot
//! - `POST /api/v1/reports/{id}/nearby`: nearby-sites lookup (replaces the
//!   previous list), or a reported client-side geolocation failure
//! - `POST /api/v1/reports/{id}/chat`: single chat completion over the
//!   report's context; transcript state stays with the client

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use solstice_core::errors::AppError;
use solstice_core::geo::{GeoError, GeoPosition};
use solstice_core::models::{NearbySite, UserProfile};

use crate::llm::{ChatMessage, MessageRole};
use crate::session::{LifeReport, SessionManager};

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request to submit a profile
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitReportRequest {
    /// The profile to compute a report for
    #[serde(flatten)]
    pub profile: UserProfile,
    /// Existing session to replace; omitted for a new session
    #[serde(default)]
    pub session_id: Option<Uuid>,
}

/// Response for a submitted profile
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitReportResponse {
    /// Session owning the report
    pub session_id: Uuid,
    /// Initial snapshot; narrative fields resolve afterwards
    pub report: LifeReport,
}

/// Body of a nearby-sites request: coordinates, or the geolocation failure
/// the client environment reported instead
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum NearbyRequest {
    /// A resolved position
    Position(GeoPosition),
    /// The environment failed to yield a position
    Failure {
        /// The reported failure kind
        error: GeoError,
    },
}

/// Response for a nearby-sites lookup
#[derive(Debug, Serialize, Deserialize)]
pub struct NearbyResponse {
    /// The refreshed site list
    pub sites: Vec<NearbySite>,
}

/// One transcript message supplied by the client
#[derive(Debug, Deserialize)]
pub struct ChatHistoryMessage {
    /// "user" or "assistant"
    pub role: String,
    /// Message text
    pub content: String,
}

/// Request for a chat completion
#[derive(Debug, Deserialize)]
pub struct ChatCompletionRequest {
    /// The new user message
    pub message: String,
    /// Prior transcript, oldest first; client-owned
    #[serde(default)]
    pub history: Vec<ChatHistoryMessage>,
}

/// Response for a chat completion
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatCompletionResponse {
    /// Assistant reply text
    pub reply: String,
}

// ============================================================================
// Routes
// ============================================================================

/// Report route registration
pub struct ReportRoutes;

impl ReportRoutes {
    /// Build the report router
    #[must_use]
    pub fn routes(manager: Arc<SessionManager>) -> Router {
        Router::new()
            .route("/api/v1/reports", post(submit_report))
            .route("/api/v1/reports/:session_id", get(get_report))
            .route("/api/v1/reports/:session_id/nearby", post(find_nearby))
            .route("/api/v1/reports/:session_id/chat", post(chat))
            .with_state(manager)
    }
}

/// Submit a profile and start the enrichment batch
async fn submit_report(
    State(manager): State<Arc<SessionManager>>,
    Json(request): Json<SubmitReportRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (session_id, report) = manager.submit(request.session_id, request.profile).await?;

    Ok((
        StatusCode::CREATED,
        Json(SubmitReportResponse { session_id, report }),
    ))
}

/// Current snapshot for a session
async fn get_report(
    State(manager): State<Arc<SessionManager>>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<LifeReport>, AppError> {
    let report = manager.snapshot(session_id).await?;
    Ok(Json(report))
}

/// Nearby-sites lookup, or the canonical message for a reported geolocation
/// failure
async fn find_nearby(
    State(manager): State<Arc<SessionManager>>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<NearbyRequest>,
) -> Result<Json<NearbyResponse>, AppError> {
    let position = match request {
        NearbyRequest::Position(position) => position,
        NearbyRequest::Failure { error } => {
            return Err(AppError::invalid_input(error.user_message()));
        }
    };

    let sites = manager.find_nearby(session_id, position).await?;
    Ok(Json(NearbyResponse { sites }))
}

/// Single chat completion over the report context
async fn chat(
    State(manager): State<Arc<SessionManager>>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<ChatCompletionRequest>,
) -> Result<Json<ChatCompletionResponse>, AppError> {
    if request.message.trim().is_empty() {
        return Err(AppError::missing_field("message"));
    }

    let history = request
        .history
        .into_iter()
        .filter_map(|message| match message.role.as_str() {
            "user" => Some(ChatMessage::new(MessageRole::User, message.content)),
            "assistant" => Some(ChatMessage::new(MessageRole::Assistant, message.content)),
            // The system prompt is owned by the server; client-supplied system
            // messages are dropped.
            _ => None,
        })
        .collect();

    let reply = manager.chat(session_id, history, request.message).await?;
    Ok(Json(ChatCompletionResponse { reply }))
}
