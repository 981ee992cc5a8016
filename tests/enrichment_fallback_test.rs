// ABOUTME: Tests for the enrichment producers' fallback-on-failure contract
// ABOUTME: Provider failures, parse paths, and timeouts all yield fixed fallbacks

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;

use helpers::fake_llm::FakeLlmProvider;
use solstice_core::geo::GeoPosition;
use solstice_core::models::Diet;
use solstice_life_server::enrichment::EnrichmentService;

const TIMEOUT: Duration = Duration::from_secs(5);

fn position() -> GeoPosition {
    GeoPosition {
        latitude: 45.5,
        longitude: -73.6,
    }
}

// ============================================================================
// Success paths
// ============================================================================

#[tokio::test]
async fn earth_changes_success_carries_text_and_sources() {
    let provider = Arc::new(
        FakeLlmProvider::succeeding().with_grounding(vec![FakeLlmProvider::web_source(
            "World Events Digest",
            "https://example.org/digest",
        )]),
    );
    let service = EnrichmentService::new(provider, TIMEOUT);

    let result = service.earth_changes(1990).await;
    assert_eq!(result.summary, "grounded text 1");
    assert_eq!(result.sources.len(), 1);
    assert_eq!(
        result.sources[0].web.as_ref().unwrap().title,
        "World Events Digest"
    );
}

#[tokio::test]
async fn environmental_impact_success_parses_schema_payload() {
    let service = EnrichmentService::new(Arc::new(FakeLlmProvider::succeeding()), TIMEOUT);

    let result = service
        .environmental_impact("Canada", 34.5, Diet::Vegetarian)
        .await;
    assert!(result.carbon_footprint.contains("tonnes"));
    assert_eq!(result.water_consumption, "about 30 million liters");
}

#[tokio::test]
async fn fun_facts_success_parses_list() {
    let service = EnrichmentService::new(Arc::new(FakeLlmProvider::succeeding()), TIMEOUT);

    let facts = service.fun_facts(34.5, "Canada").await;
    assert_eq!(facts.len(), 2);
    assert_eq!(facts[0].label, "Skin Shed");
}

#[tokio::test]
async fn nearby_sites_maps_chunks_become_sites() {
    let provider = Arc::new(FakeLlmProvider::succeeding().with_grounding(vec![
        FakeLlmProvider::maps_source("Mont-Royal Park", "https://maps.example.org/mont-royal"),
        // Web chunks are ignored by the nearby producer
        FakeLlmProvider::web_source("Unrelated", "https://example.org"),
    ]));
    let service = EnrichmentService::new(provider, TIMEOUT);

    let sites = service.nearby_sites(position()).await;
    assert_eq!(sites.len(), 1);
    assert_eq!(sites[0].title, "Mont-Royal Park");
    assert_eq!(
        sites[0].description,
        "Learn more about Mont-Royal Park and plan your visit."
    );
    assert_eq!(sites[0].uri, "https://maps.example.org/mont-royal");
}

#[tokio::test]
async fn nearby_sites_without_places_returns_narrative_site() {
    let service = EnrichmentService::new(Arc::new(FakeLlmProvider::succeeding()), TIMEOUT);

    let sites = service.nearby_sites(position()).await;
    assert_eq!(sites.len(), 1);
    assert_eq!(sites[0].title, "No Specific Sites Found");
    assert_eq!(sites[0].description, "grounded text 1");
    assert_eq!(sites[0].uri, "#");
}

// ============================================================================
// Failure paths
// ============================================================================

#[tokio::test]
async fn earth_changes_failure_yields_fallback_summary() {
    let service = EnrichmentService::new(Arc::new(FakeLlmProvider::failing()), TIMEOUT);

    let result = service.earth_changes(1990).await;
    assert_eq!(
        result.summary,
        "Could not retrieve information about world changes. The AI model may be temporarily unavailable."
    );
    assert!(result.sources.is_empty());
}

#[tokio::test]
async fn environmental_impact_failure_yields_fallback_pair() {
    let service = EnrichmentService::new(Arc::new(FakeLlmProvider::failing()), TIMEOUT);

    let result = service
        .environmental_impact("Canada", 34.5, Diet::Omnivore)
        .await;
    assert_eq!(result.carbon_footprint, "Could not calculate carbon footprint.");
    assert_eq!(
        result.water_consumption,
        "Could not calculate water consumption."
    );
}

#[tokio::test]
async fn cosmic_perspective_failure_yields_fallback_text() {
    let service = EnrichmentService::new(Arc::new(FakeLlmProvider::failing()), TIMEOUT);

    let result = service
        .cosmic_perspective(NaiveDate::from_ymd_opt(1990, 6, 15).unwrap())
        .await;
    assert_eq!(
        result.text,
        "Could not retrieve your cosmic perspective. The universe is vast, and so is your potential."
    );
}

#[tokio::test]
async fn fun_facts_failure_yields_empty_list() {
    let service = EnrichmentService::new(Arc::new(FakeLlmProvider::failing()), TIMEOUT);

    let facts = service.fun_facts(34.5, "Canada").await;
    assert!(facts.is_empty());
}

#[tokio::test]
async fn nearby_sites_failure_yields_error_site() {
    let service = EnrichmentService::new(Arc::new(FakeLlmProvider::failing()), TIMEOUT);

    let sites = service.nearby_sites(position()).await;
    assert_eq!(sites.len(), 1);
    assert_eq!(sites[0].title, "Error");
    assert_eq!(
        sites[0].description,
        "Could not retrieve information about nearby sites."
    );
    assert_eq!(sites[0].uri, "#");
}

// ============================================================================
// Timeout path
// ============================================================================

#[tokio::test]
async fn timeout_is_treated_like_failure() {
    let provider = Arc::new(FakeLlmProvider::delayed(Duration::from_secs(30)));
    let service = EnrichmentService::new(provider, Duration::from_millis(50));

    let result = service.earth_changes(1990).await;
    assert_eq!(
        result.summary,
        "Could not retrieve information about world changes. The AI model may be temporarily unavailable."
    );

    let facts = service.fun_facts(34.5, "Canada").await;
    assert!(facts.is_empty());
}
