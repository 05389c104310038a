use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::contract::model::{CalendarDay, MonthCalendar, PracticeLog};
use crate::domain::buckets::parse_log_date;
use crate::domain::duration::normalize_minutes;

/// Minutes per parsed date, ignoring rows with no usable duration.
fn minutes_by_date(logs: &[PracticeLog]) -> BTreeMap<NaiveDate, u64> {
    let mut out = BTreeMap::new();
    for log in logs {
        let minutes = normalize_minutes(log.total_time.as_deref());
        if minutes == 0 {
            continue;
        }
        if let Some(date) = parse_log_date(&log.log_date) {
            let slot: &mut u64 = out.entry(date).or_default();
            *slot = slot.saturating_add(minutes);
        }
    }
    out
}

/// Distinct dates with practice recorded, ascending.
pub fn practiced_dates(logs: &[PracticeLog]) -> Vec<NaiveDate> {
    minutes_by_date(logs).into_keys().collect()
}

/// Lay out one month on a Monday-first grid. `None` for an invalid year/month.
pub fn month_calendar(logs: &[PracticeLog], year: i32, month: u32) -> Option<MonthCalendar> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };

    let minutes = minutes_by_date(logs);
    let days: Vec<CalendarDay> = first
        .iter_days()
        .take_while(|d| *d < next_first)
        .map(|date| {
            let m = minutes.get(&date).copied().unwrap_or(0);
            CalendarDay {
                date,
                minutes: m,
                practiced: m > 0,
            }
        })
        .collect();

    Some(MonthCalendar {
        year,
        month,
        leading_blanks: first.weekday().num_days_from_monday(),
        total_minutes: days.iter().map(|d| d.minutes).sum(),
        practiced_days: days.iter().filter(|d| d.practiced).count() as u32,
        days,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn log(date: &str, raw: &str) -> PracticeLog {
        PracticeLog {
            user_id: Uuid::nil(),
            log_date: date.into(),
            total_time: Some(raw.into()),
            notes: None,
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn february_leap_year_grid() {
        let logs = vec![
            log("2024-02-01", "0:30:00"),
            log("2024-02-29", "1:00:00"),
            log("2024-03-01", "2:00:00"),
            log("2024-02-10", "bad"),
        ];
        let cal = month_calendar(&logs, 2024, 2).unwrap();

        assert_eq!(cal.days.len(), 29);
        // 2024-02-01 is a Thursday.
        assert_eq!(cal.leading_blanks, 3);
        assert_eq!(cal.total_minutes, 90);
        assert_eq!(cal.practiced_days, 2);
        assert!(cal.days[0].practiced);
        assert!(!cal.days[9].practiced);
        assert_eq!(cal.days[28].minutes, 60);
    }

    #[test]
    fn december_rolls_into_next_year() {
        let cal = month_calendar(&[], 2023, 12).unwrap();
        assert_eq!(cal.days.len(), 31);
        assert_eq!(cal.days.last().unwrap().date.to_string(), "2023-12-31");
        assert_eq!(cal.practiced_days, 0);
    }

    #[test]
    fn invalid_month_is_rejected() {
        assert!(month_calendar(&[], 2024, 0).is_none());
        assert!(month_calendar(&[], 2024, 13).is_none());
    }

    #[test]
    fn practiced_dates_are_sorted_distinct_and_skip_zero() {
        let logs = vec![
            log("2024-05-03", "0:10:00"),
            log("2024-05-01", "0:20:00"),
            log("2024-05-02", "0:00:30"),
            log("garbage", "1:00:00"),
        ];
        let dates: Vec<String> = practiced_dates(&logs).iter().map(|d| d.to_string()).collect();
        assert_eq!(dates, vec!["2024-05-01", "2024-05-03"]);
    }
}
