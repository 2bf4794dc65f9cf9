use crate::errors::TrackerError;
use crate::models::{TravelRecord, Weekday};
use std::collections::BTreeMap;

/// At most one record per weekday, listed Monday first.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: BTreeMap<Weekday, TravelRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces whatever was stored for `day` with a freshly derived record.
    pub fn upsert(
        &mut self,
        day: Weekday,
        traveled: bool,
        destination: &str,
        distance_km: f64,
    ) -> Result<TravelRecord, TrackerError> {
        let record = TravelRecord::new(day, traveled, destination, distance_km)?;
        self.records.insert(day, record.clone());
        Ok(record)
    }

    pub fn clear_all(&mut self) {
        self.records.clear();
    }

    pub fn list_all(&self) -> Vec<TravelRecord> {
        self.records.values().cloned().collect()
    }

    pub fn find(&self, day: Weekday) -> Option<TravelRecord> {
        self.records.get(&day).cloned()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NO_TRAVEL_DESTINATION;

    #[test]
    fn upsert_replaces_instead_of_merging() {
        let mut store = RecordStore::new();
        store.upsert(Weekday::Monday, true, "Work", 10.0).unwrap();
        store
            .upsert(Weekday::Monday, false, NO_TRAVEL_DESTINATION, 0.0)
            .unwrap();

        let record = store.find(Weekday::Monday).expect("missing Monday");
        assert!(!record.traveled());
        assert_eq!(record.destination(), NO_TRAVEL_DESTINATION);
        assert_eq!(record.distance_km(), 0.0);
        assert_eq!(record.emission_grams(), 0.0);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn upsert_is_idempotent() {
        let mut once = RecordStore::new();
        once.upsert(Weekday::Tuesday, true, "Gym", 4.0).unwrap();

        let mut twice = RecordStore::new();
        twice.upsert(Weekday::Tuesday, true, "Gym", 4.0).unwrap();
        twice.upsert(Weekday::Tuesday, true, "Gym", 4.0).unwrap();

        assert_eq!(once.list_all(), twice.list_all());
    }

    #[test]
    fn rejected_upsert_leaves_existing_record() {
        let mut store = RecordStore::new();
        store.upsert(Weekday::Sunday, true, "Beach", 30.0).unwrap();
        let err = store.upsert(Weekday::Sunday, true, "Moon", 1001.0);

        assert_eq!(err, Err(TrackerError::OutOfRangeDistance(1001.0)));
        assert_eq!(store.find(Weekday::Sunday).unwrap().distance_km(), 30.0);
    }

    #[test]
    fn zero_distance_travel_day_is_stored() {
        let mut store = RecordStore::new();
        let record = store.upsert(Weekday::Thursday, true, "", 0.0).unwrap();
        assert!(record.traveled());
        assert_eq!(record.cost_units(), 0.0);
    }

    #[test]
    fn list_is_in_weekday_order() {
        let mut store = RecordStore::new();
        store.upsert(Weekday::Friday, false, "", 0.0).unwrap();
        store.upsert(Weekday::Monday, true, "Work", 3.0).unwrap();
        store.upsert(Weekday::Wednesday, true, "Work", 3.0).unwrap();

        let days: Vec<Weekday> = store.list_all().iter().map(TravelRecord::day).collect();
        assert_eq!(days, vec![Weekday::Monday, Weekday::Wednesday, Weekday::Friday]);
    }

    #[test]
    fn clear_all_empties_the_store() {
        let mut store = RecordStore::new();
        store.upsert(Weekday::Monday, true, "Work", 10.0).unwrap();
        store.upsert(Weekday::Saturday, false, "", 0.0).unwrap();

        store.clear_all();
        assert!(store.list_all().is_empty());
        assert!(store.find(Weekday::Monday).is_none());

        store.clear_all();
        assert!(store.is_empty());
    }
}
