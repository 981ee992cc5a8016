// ABOUTME: Unit tests for the chart data generator
// ABOUTME: Exact-sum bucket allocation and carbon-trend sampling semantics

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use solstice_core::models::Diet;
use solstice_life_server::intelligence::{generate_carbon_trend, generate_life_distribution};

// ============================================================================
// Life Distribution
// ============================================================================

#[test]
fn distribution_buckets_sum_exactly_to_lifetime_hours() {
    for days_lived in [0_u64, 1, 7, 365, 10_000, 36_525] {
        let dataset = generate_life_distribution(days_lived);
        assert_eq!(dataset.len(), 5);

        let total: f64 = dataset.iter().map(|p| p.value).sum();
        let hours_lived = (days_lived * 24) as f64;
        assert!(
            (total - hours_lived).abs() < f64::EPSILON,
            "bucket sum {total} != {hours_lived} hours for {days_lived} days"
        );
    }
}

#[test]
fn distribution_bucket_order_and_identity_are_stable() {
    let dataset = generate_life_distribution(10_000);
    let labels: Vec<&str> = dataset.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["Sleeping", "Work/School", "Digital/Screens", "Eating", "Other"]
    );

    // Each bucket carries a distinct stable color tag
    let colors: Vec<&str> = dataset
        .iter()
        .map(|p| p.color.as_deref().unwrap())
        .collect();
    let mut deduped = colors.clone();
    deduped.dedup();
    assert_eq!(colors.len(), deduped.len());
}

#[test]
fn distribution_floor_loss_lands_in_other_bucket() {
    // 7 days = 168 hours: 55 + 42 + 33 + 13 leaves 25 for Other
    let dataset = generate_life_distribution(7);
    let values: Vec<f64> = dataset.iter().map(|p| p.value).collect();
    assert_eq!(values, vec![55.0, 42.0, 33.0, 13.0, 25.0]);
}

#[test]
fn distribution_zero_days_is_all_zero() {
    let dataset = generate_life_distribution(0);
    assert!(dataset.iter().all(|p| p.value.abs() < f64::EPSILON));
}

// ============================================================================
// Carbon Trend
// ============================================================================

fn ages(dataset: &[solstice_core::models::ChartPoint]) -> Vec<u32> {
    dataset
        .iter()
        .map(|p| {
            p.label
                .strip_prefix("Age ")
                .and_then(|s| s.parse().ok())
                .unwrap()
        })
        .collect()
}

#[test]
fn vegan_age_four_trend_single_year_steps() {
    // 1461 days = exactly age 4; vegan annual emission 4.5 x 0.5 = 2.25,
    // child multiplier 0.6 throughout: cumulative 1.35 per year
    let dataset = generate_carbon_trend(1461, Diet::Vegan);

    assert_eq!(ages(&dataset), vec![0, 1, 2, 3, 4]);

    let values: Vec<f64> = dataset.iter().map(|p| p.value).collect();
    assert_eq!(values, vec![1.0, 3.0, 4.0, 5.0, 7.0]);
}

#[test]
fn trend_appends_corrective_point_when_walk_overshoots() {
    // 8401 days = age 23; step max(1, 23/5) = 4 walks 0,4,8,12,16,20 and
    // must close with a fresh flat-rate point at age 23
    let dataset = generate_carbon_trend(8401, Diet::Vegan);

    assert_eq!(ages(&dataset), vec![0, 4, 8, 12, 16, 20, 23]);

    // Accumulated: five child steps of 5.4 then one adult step of 9
    let values: Vec<f64> = dataset.iter().map(|p| p.value).collect();
    assert_eq!(values[..6], [5.0, 11.0, 16.0, 22.0, 27.0, 36.0]);

    // Final point is round(age_years x annual), not the running total
    let age_years: f64 = 8401.0 / 365.25;
    assert!((values[6] - (age_years * 2.25).round()).abs() < f64::EPSILON);
}

#[test]
fn trend_ages_strictly_increase_and_values_never_decrease() {
    for days in [0_u64, 400, 1461, 8401, 20_000, 36_525] {
        for diet in [Diet::Omnivore, Diet::Vegetarian, Diet::Vegan] {
            let dataset = generate_carbon_trend(days, diet);
            let ages = ages(&dataset);

            assert_eq!(*ages.first().unwrap(), 0);
            assert_eq!(
                *ages.last().unwrap(),
                (days as f64 / 365.25).floor() as u32
            );
            assert!(ages.windows(2).all(|w| w[1] > w[0]), "ages {ages:?}");

            let values: Vec<f64> = dataset.iter().map(|p| p.value).collect();
            assert!(
                values.windows(2).all(|w| w[1] >= w[0]),
                "values {values:?} for {days} days {diet}"
            );
        }
    }
}

#[test]
fn trend_at_age_zero_is_single_child_point() {
    let dataset = generate_carbon_trend(100, Diet::Vegan);
    assert_eq!(dataset.len(), 1);
    assert_eq!(dataset[0].label, "Age 0");
    // One child-rate step: round(2.25 x 0.6) = 1
    assert!((dataset[0].value - 1.0).abs() < f64::EPSILON);
}

#[test]
fn diet_multiplier_scales_the_whole_trend() {
    let vegan = generate_carbon_trend(1461, Diet::Vegan);
    let omnivore = generate_carbon_trend(1461, Diet::Omnivore);

    // Same sampling, larger values: 1.2/0.5 ratio before rounding
    assert_eq!(vegan.len(), omnivore.len());
    let last_vegan = vegan.last().unwrap().value;
    let last_omnivore = omnivore.last().unwrap().value;
    assert!(last_omnivore > last_vegan);
    // Unrounded cumulative at age 4 omnivore: 5.4 x 0.6 x 5 = 16.2 -> 16
    assert!((last_omnivore - 16.0).abs() < f64::EPSILON);
}
