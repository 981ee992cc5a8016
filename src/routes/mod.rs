// ABOUTME: HTTP route assembly for the Solstice service
// ABOUTME: Mounts report routes, the health probe, and the tracing/CORS layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Solstice Life Stats

//! Axum route assembly.

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::config::ServerConfig;
use crate::session::SessionManager;

/// Report submission, snapshot, nearby, and chat routes
pub mod reports;

/// Health probe route
pub mod health;

pub use reports::ReportRoutes;

/// Build the full application router with observability layers
#[must_use]
pub fn router(manager: Arc<SessionManager>, config: &ServerConfig) -> Router {
    Router::new()
        .merge(ReportRoutes::routes(Arc::clone(&manager)))
        .merge(health::routes(manager))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.cors_origins))
}

/// CORS layer from the configured origins, `*` meaning any
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|origin| origin == "*") {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(parsed))
        .allow_methods(Any)
        .allow_headers(Any)
}
