// ABOUTME: Solstice Life Stats API server binary
// ABOUTME: Loads configuration, wires the Gemini provider, and serves the REST surface
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Solstice Life Stats

//! # Solstice Life Stats API Server Binary
//!
//! Starts the life statistics service: environment-driven configuration,
//! structured logging, a Gemini-backed enrichment client, and the axum REST
//! surface with graceful shutdown.

use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use solstice_life_server::config::ServerConfig;
use solstice_life_server::enrichment::EnrichmentService;
use solstice_life_server::llm::{GeminiProvider, LlmProvider};
use solstice_life_server::routes;
use solstice_life_server::session::SessionManager;
use solstice_life_server::{intelligence, logging};

#[derive(Parser)]
#[command(name = "solstice-server")]
#[command(about = "Solstice Life Stats API - personal life statistics with AI narrative enrichment")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_from_env()?;

    info!("Starting Solstice Life Stats API");
    info!("{}", config.summary());
    info!(
        "Metrics engine: BMR via {}",
        intelligence::algorithms::BmrEstimate::name()
    );

    let provider = GeminiProvider::from_env()
        .context("Gemini provider initialization failed; is GEMINI_API_KEY set?")?;
    info!(
        provider = provider.display_name(),
        model = provider.default_model(),
        "LLM provider initialized"
    );

    let mut enrichment =
        EnrichmentService::new(Arc::new(provider), config.enrichment.timeout());
    if let Some(model) = &config.enrichment.model {
        enrichment = enrichment.with_model(model.clone());
    }

    let manager = Arc::new(SessionManager::new(Arc::new(enrichment)));
    let app = routes::router(manager, &config);

    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, config.http_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(%addr, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server terminated unexpectedly")?;

    info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::error!("failed to install ctrl-c handler; shutting down");
    } else {
        info!("ctrl-c received, shutting down");
    }
}
