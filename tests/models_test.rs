// ABOUTME: Tests for core model parsing, validation, and wire serialization
// ABOUTME: Enum round-trips, enrichment field lifecycle, and geolocation messages

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use std::str::FromStr;

use chrono::Utc;
use serde_json::json;

use helpers::test_profile;
use solstice_core::geo::GeoError;
use solstice_core::models::{
    ActivityLevel, CosmicPerspective, Diet, EnrichmentField, Gender,
};

#[test]
fn enums_parse_case_insensitively_and_reject_unknowns() {
    assert_eq!(Gender::from_str("Male").unwrap(), Gender::Male);
    assert_eq!(Gender::from_str("OTHER").unwrap(), Gender::Other);
    assert!(Gender::from_str("unknown").is_err());

    assert_eq!(
        ActivityLevel::from_str("Moderate").unwrap(),
        ActivityLevel::Moderate
    );
    assert!(ActivityLevel::from_str("athletic").is_err());

    assert_eq!(Diet::from_str("vegan").unwrap(), Diet::Vegan);
    let error = Diet::from_str("carnivore").unwrap_err();
    assert!(error.message.contains("omnivore, vegetarian, vegan"));
}

#[test]
fn enums_serialize_lowercase() {
    assert_eq!(json!(Gender::Other), json!("other"));
    assert_eq!(json!(ActivityLevel::Sedentary), json!("sedentary"));
    assert_eq!(json!(Diet::Vegetarian), json!("vegetarian"));
}

#[test]
fn profile_serializes_with_camel_case_keys() {
    let value = serde_json::to_value(test_profile()).unwrap();
    assert_eq!(value["heightCm"], json!(175.0));
    assert_eq!(value["activityLevel"], json!("moderate"));
    assert_eq!(value["birthdate"], json!("1990-06-15"));
}

#[test]
fn birthdate_today_is_valid_but_tomorrow_is_not() {
    let now = Utc::now();

    let mut profile = test_profile();
    profile.birthdate = now.date_naive();
    assert!(profile.validate(now).is_ok());

    profile.birthdate = now.date_naive() + chrono::Duration::days(1);
    assert!(profile.validate(now).is_err());
}

#[test]
fn enrichment_field_serializes_null_until_resolved() {
    let pending: EnrichmentField<CosmicPerspective> = EnrichmentField::Pending;
    assert_eq!(serde_json::to_value(&pending).unwrap(), json!(null));
    assert!(!pending.is_resolved());

    let mut field = pending;
    field.resolve(CosmicPerspective {
        text: "a brief reflection".to_owned(),
    });
    assert!(field.is_resolved());
    assert_eq!(
        serde_json::to_value(&field).unwrap(),
        json!({ "text": "a brief reflection" })
    );

    // Round-trip: null deserializes back to pending
    let parsed: EnrichmentField<CosmicPerspective> = serde_json::from_value(json!(null)).unwrap();
    assert_eq!(parsed, EnrichmentField::Pending);
}

#[test]
fn geo_errors_carry_distinct_canonical_messages() {
    let messages = [
        GeoError::NotSupported.user_message(),
        GeoError::PermissionDenied.user_message(),
        GeoError::PositionUnavailable.user_message(),
    ];
    assert!(messages.iter().all(|m| !m.is_empty()));
    assert_ne!(messages[0], messages[1]);
    assert_ne!(messages[1], messages[2]);

    // Wire form is snake_case
    assert_eq!(json!(GeoError::PermissionDenied), json!("permission_denied"));
}
