// ABOUTME: Shared test helpers for the Solstice integration suite
// ABOUTME: Axum oneshot request helper and the scripted fake LLM provider

#![allow(dead_code)]

pub mod axum_test;
pub mod fake_llm;

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;

use solstice_core::models::{ActivityLevel, Diet, Gender, UserProfile};
use solstice_life_server::enrichment::EnrichmentService;
use solstice_life_server::llm::LlmProvider;
use solstice_life_server::session::SessionManager;

/// A valid baseline profile for tests
pub fn test_profile() -> UserProfile {
    UserProfile {
        birthdate: NaiveDate::from_ymd_opt(1990, 6, 15).unwrap(),
        country: "Canada".to_owned(),
        height_cm: 175.0,
        weight_kg: 70.0,
        gender: Gender::Female,
        activity_level: ActivityLevel::Moderate,
        diet: Diet::Vegetarian,
    }
}

/// Build a session manager over the given provider with a test timeout
pub fn test_manager(provider: Arc<dyn LlmProvider>) -> Arc<SessionManager> {
    let enrichment = EnrichmentService::new(provider, Duration::from_secs(5));
    Arc::new(SessionManager::new(Arc::new(enrichment)))
}

/// Build a session manager with a custom enrichment timeout
pub fn test_manager_with_timeout(
    provider: Arc<dyn LlmProvider>,
    timeout: Duration,
) -> Arc<SessionManager> {
    let enrichment = EnrichmentService::new(provider, timeout);
    Arc::new(SessionManager::new(Arc::new(enrichment)))
}

/// Poll a session until the primary enrichment batch completes
pub async fn wait_for_enrichment(
    manager: &SessionManager,
    session_id: uuid::Uuid,
) -> solstice_life_server::session::LifeReport {
    for _ in 0..100 {
        let report = manager.snapshot(session_id).await.unwrap();
        if report.enrichment_complete {
            return report;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("enrichment batch did not complete in time");
}
