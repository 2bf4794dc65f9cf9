use crate::errors::TrackerError;
use crate::models::{TravelRecord, UserProfile, Weekday};
use crate::store::RecordStore;

/// Everything one dashboard user has entered since the process started.
#[derive(Debug, Clone, Default)]
pub struct Session {
    profile: Option<UserProfile>,
    records: RecordStore,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save_profile(
        &mut self,
        name: &str,
        age: u32,
        vehicle: &str,
        city: &str,
    ) -> Result<UserProfile, TrackerError> {
        let profile = UserProfile::new(name, age, vehicle, city)?;
        self.profile = Some(profile.clone());
        Ok(profile)
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn upsert_day(
        &mut self,
        day: Weekday,
        traveled: bool,
        destination: &str,
        distance_km: f64,
    ) -> Result<TravelRecord, TrackerError> {
        self.records.upsert(day, traveled, destination, distance_km)
    }

    pub fn clear_all_days(&mut self) {
        self.records.clear_all();
    }

    pub fn list_days(&self) -> Vec<TravelRecord> {
        self.records.list_all()
    }

    pub fn find_day(&self, day: Weekday) -> Option<TravelRecord> {
        self.records.find(day)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_save_replaces_wholesale() {
        let mut session = Session::new();
        assert!(session.profile().is_none());

        session.save_profile("Ravi", 30, "Atlas", "Chennai").unwrap();
        session.save_profile("Meera", 41, "", "Kochi").unwrap();

        let profile = session.profile().unwrap();
        assert_eq!(profile.name, "Meera");
        assert_eq!(profile.vehicle, "");
        assert_eq!(profile.city, "Kochi");
    }

    #[test]
    fn invalid_profile_keeps_previous_one() {
        let mut session = Session::new();
        session.save_profile("Ravi", 30, "Atlas", "Chennai").unwrap();
        assert!(session.save_profile("Ravi", 0, "Atlas", "Chennai").is_err());
        assert_eq!(session.profile().unwrap().age, 30);
    }

    #[test]
    fn reset_drops_profile_and_days() {
        let mut session = Session::new();
        session.save_profile("Ravi", 30, "Atlas", "Chennai").unwrap();
        session.upsert_day(Weekday::Monday, true, "Work", 8.0).unwrap();

        session.reset();
        assert!(session.profile().is_none());
        assert!(session.list_days().is_empty());
    }

    #[test]
    fn clearing_days_keeps_profile() {
        let mut session = Session::new();
        session.save_profile("Ravi", 30, "Atlas", "Chennai").unwrap();
        session.upsert_day(Weekday::Monday, true, "Work", 8.0).unwrap();

        session.clear_all_days();
        assert!(session.find_day(Weekday::Monday).is_none());
        assert!(session.profile().is_some());
    }
}
