use crate::errors::TrackerError;
use crate::metrics::{derive_cost_and_emission, MAX_DISTANCE_KM};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

pub const NO_TRAVEL_DESTINATION: &str = "No travel";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match on the English day name.
impl FromStr for Weekday {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Weekday::ALL
            .into_iter()
            .find(|day| day.as_str() == s)
            .ok_or_else(|| TrackerError::InvalidDay(s.to_string()))
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        Weekday::ALL[day.num_days_from_monday() as usize]
    }
}

/// One weekday's entry. Cost and emission are always derived from the
/// stored distance, so the fields are only reachable through accessors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TravelRecord {
    day: Weekday,
    traveled: bool,
    destination: String,
    distance_km: f64,
    cost_units: f64,
    emission_grams: f64,
}

impl TravelRecord {
    pub fn new(
        day: Weekday,
        traveled: bool,
        destination: &str,
        distance_km: f64,
    ) -> Result<Self, TrackerError> {
        if !traveled {
            return Ok(Self {
                day,
                traveled,
                destination: NO_TRAVEL_DESTINATION.to_string(),
                distance_km: 0.0,
                cost_units: 0.0,
                emission_grams: 0.0,
            });
        }

        if !distance_km.is_finite() || !(0.0..=MAX_DISTANCE_KM).contains(&distance_km) {
            return Err(TrackerError::OutOfRangeDistance(distance_km));
        }

        let (cost_units, emission_grams) = derive_cost_and_emission(distance_km);
        Ok(Self {
            day,
            traveled,
            destination: destination.trim().to_string(),
            distance_km,
            cost_units,
            emission_grams,
        })
    }

    pub fn day(&self) -> Weekday {
        self.day
    }

    pub fn traveled(&self) -> bool {
        self.traveled
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn cost_units(&self) -> f64 {
        self.cost_units
    }

    pub fn emission_grams(&self) -> f64 {
        self.emission_grams
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserProfile {
    pub name: String,
    pub age: u32,
    pub vehicle: String,
    pub city: String,
}

impl UserProfile {
    pub fn new(name: &str, age: u32, vehicle: &str, city: &str) -> Result<Self, TrackerError> {
        if !(1..=120).contains(&age) {
            return Err(TrackerError::InvalidAge(age));
        }
        Ok(Self {
            name: name.trim().to_string(),
            age,
            vehicle: vehicle.trim().to_string(),
            city: city.trim().to_string(),
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct ProfileRequest {
    #[serde(default)]
    pub name: String,
    pub age: u32,
    #[serde(default)]
    pub vehicle: String,
    #[serde(default)]
    pub city: String,
}

#[derive(Debug, Deserialize)]
pub struct DayEntryRequest {
    pub traveled: bool,
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub distance_km: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklySummary {
    pub total_distance_km: f64,
    pub total_cost: f64,
    pub total_emission_grams: f64,
    pub travel_days: u32,
    pub days_in_week: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmissionStats {
    pub max: f64,
    pub min: f64,
    pub average: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnvironmentalImpact {
    pub co2_kg: f64,
    pub trees_to_offset: f64,
    pub fuel_saved_liters: u32,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub records: Vec<TravelRecord>,
    pub summary: WeeklySummary,
    pub emissions: Option<EmissionStats>,
    pub impact: EnvironmentalImpact,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsPoint {
    pub day: Weekday,
    pub distance_km: f64,
    pub cost_units: f64,
    pub emission_grams: f64,
    pub emission_share_pct: f64,
}

#[derive(Debug, Serialize)]
pub struct AnalyticsResponse {
    pub points: Vec<AnalyticsPoint>,
}
