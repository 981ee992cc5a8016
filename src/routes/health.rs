// ABOUTME: Health probe route reporting service identity and live session count
// ABOUTME: Used by deployment orchestration and uptime monitoring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Solstice Life Stats

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::session::SessionManager;

/// Health probe response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "ok" when the service can answer
    pub status: String,
    /// Service name
    pub service: String,
    /// Crate version
    pub version: String,
    /// Number of live sessions
    pub sessions: usize,
}

/// Build the health route
#[must_use]
pub fn routes(manager: Arc<SessionManager>) -> Router {
    Router::new()
        .route("/health", get(health))
        .with_state(manager)
}

async fn health(State(manager): State<Arc<SessionManager>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_owned(),
        service: "solstice-life-server".to_owned(),
        version: env!("CARGO_PKG_VERSION").to_owned(),
        sessions: manager.session_count(),
    })
}
