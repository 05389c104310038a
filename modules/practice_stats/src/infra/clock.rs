use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, Utc};
use parking_lot::Mutex;

use crate::domain::ports::Clock;

/// Wall clock. With an offset configured, "local" means that fixed UTC offset
/// instead of the host time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    offset: Option<FixedOffset>,
}

impl SystemClock {
    pub fn new(offset: Option<FixedOffset>) -> Self {
        Self { offset }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        match self.offset {
            Some(offset) => Utc::now().with_timezone(&offset).naive_local(),
            None => Local::now().naive_local(),
        }
    }

    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a settable instant. The stored time is read as UTC.
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<NaiveDateTime>,
}

impl FixedClock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn set(&self, now: NaiveDateTime) {
        *self.now.lock() = now;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        *self.now.lock()
    }

    fn now_utc(&self) -> DateTime<Utc> {
        self.now.lock().and_utc()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn fixed_clock_returns_what_was_set() {
        let t0 = NaiveDate::from_ymd_opt(2024, 5, 15)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        let clock = FixedClock::new(t0);
        assert_eq!(clock.now(), t0);
        assert_eq!(clock.now_utc(), t0.and_utc());

        let t1 = t0 + chrono::Duration::days(1);
        clock.set(t1);
        assert_eq!(clock.now(), t1);
    }

    #[test]
    fn offset_clock_tracks_utc_plus_offset() {
        let offset = FixedOffset::east_opt(5 * 3600).unwrap();
        let clock = SystemClock::new(Some(offset));
        let expected = Utc::now().naive_utc() + chrono::Duration::hours(5);
        let drift = (clock.now() - expected).num_seconds().abs();
        assert!(drift <= 5, "drift {drift}s");
    }
}
