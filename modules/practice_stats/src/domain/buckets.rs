use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

use crate::contract::model::{PracticeLog, PracticeTimeBuckets};
use crate::domain::duration::normalize_minutes;

/// Stored date form of `log_date`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Bucket boundaries derived from one clock reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketBounds {
    pub today_key: String,
    /// Monday of the current week.
    pub week_start: NaiveDate,
    pub month_start: NaiveDate,
}

impl BucketBounds {
    pub fn at(now: NaiveDateTime) -> Self {
        let today = now.date();
        let week_start = today - Duration::days(i64::from(today.weekday().num_days_from_monday()));
        let month_start = today.with_day(1).unwrap_or(today);
        Self {
            today_key: today.format(DATE_FORMAT).to_string(),
            week_start,
            month_start,
        }
    }
}

pub fn parse_log_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()
}

/// Sum practice minutes into today / this week / this month / total.
///
/// Logs whose duration normalizes to zero are skipped entirely. `today`
/// compares the stored date text; week and month compare parsed dates against
/// inclusive lower bounds, so an unparseable date only reaches `total`.
pub fn aggregate(logs: &[PracticeLog], now: NaiveDateTime) -> PracticeTimeBuckets {
    let bounds = BucketBounds::at(now);
    let mut out = PracticeTimeBuckets::default();

    for log in logs {
        let minutes = normalize_minutes(log.total_time.as_deref());
        if minutes == 0 {
            continue;
        }

        out.total = out.total.saturating_add(minutes);
        if log.log_date == bounds.today_key {
            out.today = out.today.saturating_add(minutes);
        }
        if let Some(date) = parse_log_date(&log.log_date) {
            if date >= bounds.week_start {
                out.this_week = out.this_week.saturating_add(minutes);
            }
            if date >= bounds.month_start {
                out.this_month = out.this_month.saturating_add(minutes);
            }
        }
    }

    out
}
