use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// One practice-log row as stored: unique per (user, date).
///
/// `log_date` keeps the stored `YYYY-MM-DD` text and `total_time` the raw
/// interval text; both may be malformed and are interpreted leniently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PracticeLog {
    pub user_id: Uuid,
    pub log_date: String,
    pub total_time: Option<String>,
    pub notes: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Data for the save action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPracticeLog {
    pub user_id: Uuid,
    pub log_date: NaiveDate,
    pub minutes: u32,
    pub notes: Option<String>,
}

/// Minutes practiced per time bucket, relative to one reading of the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PracticeTimeBuckets {
    pub today: u64,
    pub this_week: u64,
    pub this_month: u64,
    pub total: u64,
}

/// Streak badges, in ascending threshold order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BadgeType {
    Streak10,
    Streak30,
    Streak50,
    Streak100,
}

impl BadgeType {
    pub const ALL: [BadgeType; 4] = [
        BadgeType::Streak10,
        BadgeType::Streak30,
        BadgeType::Streak50,
        BadgeType::Streak100,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BadgeType::Streak10 => "streak_10",
            BadgeType::Streak30 => "streak_30",
            BadgeType::Streak50 => "streak_50",
            BadgeType::Streak100 => "streak_100",
        }
    }

    /// Minimum streak length (days) that earns this badge.
    pub fn minimum_streak(self) -> u32 {
        match self {
            BadgeType::Streak10 => 10,
            BadgeType::Streak30 => 30,
            BadgeType::Streak50 => 50,
            BadgeType::Streak100 => 100,
        }
    }
}

impl fmt::Display for BadgeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown badge type: {0}")]
pub struct UnknownBadgeType(pub String);

impl FromStr for BadgeType {
    type Err = UnknownBadgeType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BadgeType::ALL
            .into_iter()
            .find(|b| b.as_str() == s)
            .ok_or_else(|| UnknownBadgeType(s.to_string()))
    }
}

/// An earned badge. Created once per (user, badge type), never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeRecord {
    pub user_id: Uuid,
    pub badge_type: BadgeType,
    pub earned_at: DateTime<Utc>,
}

/// Outcome of one evaluator pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeEvaluation {
    pub streak: u32,
    /// Badges inserted by this pass, in threshold order.
    pub awarded: Vec<BadgeType>,
    /// Earned set as re-read from the store after the inserts.
    pub badges: Vec<BadgeRecord>,
}

/// Everything the dashboard shows, computed from one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSnapshot {
    pub user_id: Uuid,
    pub generated_at: NaiveDateTime,
    pub practiced_dates: Vec<NaiveDate>,
    pub streak: u32,
    pub practice_time: PracticeTimeBuckets,
    pub badges: Vec<BadgeRecord>,
    pub newly_awarded: Vec<BadgeType>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub minutes: u64,
    pub practiced: bool,
}

/// One month laid out on a Monday-first week grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthCalendar {
    pub year: i32,
    pub month: u32,
    /// Empty cells before day 1 (0 when the month starts on a Monday).
    pub leading_blanks: u32,
    pub days: Vec<CalendarDay>,
    pub total_minutes: u64,
    pub practiced_days: u32,
}
