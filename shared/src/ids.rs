use chrono::NaiveDate;
use std::cell::Cell;

use crate::models::RecordId;

/// Source of "now" for id assignment and default dates
pub trait Clock {
    fn now_millis(&self) -> u64;
    fn today(&self) -> NaiveDate;
}

/// Wall clock. On wasm32 chrono reads the time through `js_sys::Date`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        chrono::Utc::now().timestamp_millis().max(0) as u64
    }

    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// Manually driven clock for tests
#[derive(Debug, Clone)]
pub struct FixedClock {
    millis: Cell<u64>,
    today: NaiveDate,
}

impl FixedClock {
    pub fn new(millis: u64, today: NaiveDate) -> Self {
        Self { millis: Cell::new(millis), today }
    }

    pub fn advance(&self, millis: u64) {
        self.millis.set(self.millis.get() + millis);
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> u64 {
        self.millis.get()
    }

    fn today(&self) -> NaiveDate {
        self.today
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_millis(&self) -> u64 {
        (**self).now_millis()
    }

    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

/// Hands out timestamp ids that are strictly increasing, even when two
/// records are created within the same millisecond.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    /// Start above every id already present in a loaded list
    pub fn seeded_from(existing: impl IntoIterator<Item = RecordId>) -> Self {
        let last = existing.into_iter().map(|id| id.0).max().unwrap_or(0);
        Self { last }
    }

    pub fn next_id(&mut self, now_millis: u64) -> RecordId {
        let id = now_millis.max(self.last.saturating_add(1));
        self.last = id;
        RecordId(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_follow_clock() {
        let mut ids = IdGenerator::default();
        assert_eq!(ids.next_id(1_000), RecordId(1_000));
        assert_eq!(ids.next_id(2_000), RecordId(2_000));
    }

    #[test]
    fn test_ids_unique_within_same_millisecond() {
        let mut ids = IdGenerator::default();
        let first = ids.next_id(5_000);
        let second = ids.next_id(5_000);
        let third = ids.next_id(4_000);
        assert!(first < second && second < third);
    }

    #[test]
    fn test_seeded_generator_skips_existing_ids() {
        let mut ids = IdGenerator::seeded_from([RecordId(10), RecordId(90_000), RecordId(7)]);
        assert_eq!(ids.next_id(100), RecordId(90_001));
    }

    #[test]
    fn test_fixed_clock_advances() {
        let clock = FixedClock::new(1_000, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        clock.advance(500);
        assert_eq!(clock.now_millis(), 1_500);
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
    }
}
