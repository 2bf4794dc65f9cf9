//! Cost, emission and offset figures derived from the week's records.
//!
//! Aggregates only look at the travel subset (records with `traveled`
//! set). Min, max and mean have no value on an empty subset and return
//! `None` rather than a zero.

use crate::errors::TrackerError;
use crate::models::{
    AnalyticsPoint, AnalyticsResponse, EmissionStats, EnvironmentalImpact, TravelRecord,
    WeeklySummary,
};

pub const COST_PER_KM: f64 = 75.0;
pub const EMISSION_GRAMS_PER_KM: f64 = 125.0;
pub const MAX_DISTANCE_KM: f64 = 1000.0;
pub const DAYS_PER_WEEK: u32 = 7;
/// Grams of CO2 one tree absorbs in a year.
pub const TREE_GRAMS_PER_YEAR: f64 = 21_000.0;
pub const FUEL_LITERS_PER_IDLE_DAY: u32 = 2;

pub fn derive_cost_and_emission(distance_km: f64) -> (f64, f64) {
    (distance_km * COST_PER_KM, distance_km * EMISSION_GRAMS_PER_KM)
}

pub fn travel_subset(records: &[TravelRecord]) -> impl Iterator<Item = &TravelRecord> {
    records.iter().filter(|record| record.traveled())
}

// Folds from +0.0 so an empty week reports 0 rather than -0.
fn sum(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(0.0, |total, value| total + value)
}

pub fn total_distance(records: &[TravelRecord]) -> f64 {
    sum(travel_subset(records).map(TravelRecord::distance_km))
}

pub fn total_cost(records: &[TravelRecord]) -> f64 {
    sum(travel_subset(records).map(TravelRecord::cost_units))
}

pub fn total_emission(records: &[TravelRecord]) -> f64 {
    sum(travel_subset(records).map(TravelRecord::emission_grams))
}

pub fn travel_day_count(records: &[TravelRecord]) -> u32 {
    travel_subset(records).count() as u32
}

pub fn max_emission(records: &[TravelRecord]) -> Option<f64> {
    travel_subset(records)
        .map(TravelRecord::emission_grams)
        .reduce(f64::max)
}

pub fn min_emission(records: &[TravelRecord]) -> Option<f64> {
    travel_subset(records)
        .map(TravelRecord::emission_grams)
        .reduce(f64::min)
}

pub fn average_emission(records: &[TravelRecord]) -> Option<f64> {
    let count = travel_day_count(records);
    if count == 0 {
        return None;
    }
    Some(total_emission(records) / f64::from(count))
}

pub fn trees_to_offset(total_emission_grams: f64) -> f64 {
    total_emission_grams / TREE_GRAMS_PER_YEAR
}

/// Days without a travel record count as idle, whether or not they were
/// entered at all.
pub fn fuel_saved_liters(travel_day_count: u32) -> u32 {
    DAYS_PER_WEEK.saturating_sub(travel_day_count) * FUEL_LITERS_PER_IDLE_DAY
}

pub fn compute_summary(records: &[TravelRecord]) -> WeeklySummary {
    WeeklySummary {
        total_distance_km: total_distance(records),
        total_cost: total_cost(records),
        total_emission_grams: total_emission(records),
        travel_days: travel_day_count(records),
        days_in_week: DAYS_PER_WEEK,
    }
}

pub fn compute_emission_stats(records: &[TravelRecord]) -> Result<EmissionStats, TrackerError> {
    match (
        max_emission(records),
        min_emission(records),
        average_emission(records),
    ) {
        (Some(max), Some(min), Some(average)) => Ok(EmissionStats { max, min, average }),
        _ => Err(TrackerError::EmptyTravelSubset),
    }
}

pub fn compute_environmental_impact(
    total_emission_grams: f64,
    travel_day_count: u32,
) -> EnvironmentalImpact {
    EnvironmentalImpact {
        co2_kg: total_emission_grams / 1000.0,
        trees_to_offset: trees_to_offset(total_emission_grams),
        fuel_saved_liters: fuel_saved_liters(travel_day_count),
    }
}

/// Per-day series behind the distance, emission-share and cost charts.
pub fn build_analytics(records: &[TravelRecord]) -> AnalyticsResponse {
    let total = total_emission(records);
    let points = travel_subset(records)
        .map(|record| AnalyticsPoint {
            day: record.day(),
            distance_km: record.distance_km(),
            cost_units: record.cost_units(),
            emission_grams: record.emission_grams(),
            emission_share_pct: if total > 0.0 {
                record.emission_grams() / total * 100.0
            } else {
                0.0
            },
        })
        .collect();

    AnalyticsResponse { points }
}
