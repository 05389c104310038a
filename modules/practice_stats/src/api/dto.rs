use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::contract::model::{
    BadgeEvaluation, BadgeRecord, CalendarDay, DashboardSnapshot, MonthCalendar, NewPracticeLog,
    PracticeLog, PracticeTimeBuckets,
};
use crate::domain::events::PracticeDomainEvent;

/// Serializable practice-time buckets (minutes)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PracticeTimeDto {
    pub today: u64,
    pub this_week: u64,
    pub this_month: u64,
    pub total: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BadgeDto {
    pub badge_type: String,
    pub earned_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardDto {
    pub user_id: Uuid,
    pub generated_at: NaiveDateTime,
    pub practiced_dates: Vec<NaiveDate>,
    pub streak: u32,
    pub practice_time: PracticeTimeDto,
    pub badges: Vec<BadgeDto>,
    pub newly_awarded: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BadgeEvaluationDto {
    pub streak: u32,
    pub awarded: Vec<String>,
    pub badges: Vec<BadgeDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PracticeLogDto {
    pub user_id: Uuid,
    pub log_date: String,
    pub total_time: Option<String>,
    pub notes: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Request body of the save action
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordPracticeReq {
    pub log_date: NaiveDate,
    pub minutes: u32,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarDayDto {
    pub date: NaiveDate,
    pub minutes: u64,
    pub practiced: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthCalendarDto {
    pub year: i32,
    pub month: u32,
    pub leading_blanks: u32,
    pub days: Vec<CalendarDayDto>,
    pub total_minutes: u64,
    pub practiced_days: u32,
}

/// Transport-level change notification payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PracticeEventDto {
    PracticeLogged {
        user_id: Uuid,
        log_date: NaiveDate,
        minutes: u32,
        at: DateTime<Utc>,
    },
    BadgeAwarded {
        user_id: Uuid,
        badge_type: String,
        at: DateTime<Utc>,
    },
}

// Conversion implementations between DTOs and contract models

impl From<PracticeTimeBuckets> for PracticeTimeDto {
    fn from(b: PracticeTimeBuckets) -> Self {
        Self {
            today: b.today,
            this_week: b.this_week,
            this_month: b.this_month,
            total: b.total,
        }
    }
}

impl From<BadgeRecord> for BadgeDto {
    fn from(b: BadgeRecord) -> Self {
        Self {
            badge_type: b.badge_type.to_string(),
            earned_at: b.earned_at,
        }
    }
}

impl From<DashboardSnapshot> for DashboardDto {
    fn from(s: DashboardSnapshot) -> Self {
        Self {
            user_id: s.user_id,
            generated_at: s.generated_at,
            practiced_dates: s.practiced_dates,
            streak: s.streak,
            practice_time: s.practice_time.into(),
            badges: s.badges.into_iter().map(Into::into).collect(),
            newly_awarded: s.newly_awarded.iter().map(ToString::to_string).collect(),
        }
    }
}

impl From<BadgeEvaluation> for BadgeEvaluationDto {
    fn from(e: BadgeEvaluation) -> Self {
        Self {
            streak: e.streak,
            awarded: e.awarded.iter().map(ToString::to_string).collect(),
            badges: e.badges.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<PracticeLog> for PracticeLogDto {
    fn from(log: PracticeLog) -> Self {
        Self {
            user_id: log.user_id,
            log_date: log.log_date,
            total_time: log.total_time,
            notes: log.notes,
            updated_at: log.updated_at,
        }
    }
}

impl RecordPracticeReq {
    pub fn into_new_log(self, user_id: Uuid) -> NewPracticeLog {
        NewPracticeLog {
            user_id,
            log_date: self.log_date,
            minutes: self.minutes,
            notes: self.notes,
        }
    }
}

impl From<CalendarDay> for CalendarDayDto {
    fn from(d: CalendarDay) -> Self {
        Self {
            date: d.date,
            minutes: d.minutes,
            practiced: d.practiced,
        }
    }
}

impl From<MonthCalendar> for MonthCalendarDto {
    fn from(c: MonthCalendar) -> Self {
        Self {
            year: c.year,
            month: c.month,
            leading_blanks: c.leading_blanks,
            days: c.days.into_iter().map(Into::into).collect(),
            total_minutes: c.total_minutes,
            practiced_days: c.practiced_days,
        }
    }
}

impl From<&PracticeDomainEvent> for PracticeEventDto {
    fn from(e: &PracticeDomainEvent) -> Self {
        match e {
            PracticeDomainEvent::PracticeLogged {
                user_id,
                log_date,
                minutes,
                at,
            } => Self::PracticeLogged {
                user_id: *user_id,
                log_date: *log_date,
                minutes: *minutes,
                at: *at,
            },
            PracticeDomainEvent::BadgeAwarded {
                user_id,
                badge_type,
                at,
            } => Self::BadgeAwarded {
                user_id: *user_id,
                badge_type: badge_type.to_string(),
                at: *at,
            },
        }
    }
}
