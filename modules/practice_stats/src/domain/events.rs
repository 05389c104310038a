use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::contract::model::BadgeType;

/// Transport-agnostic domain event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PracticeDomainEvent {
    PracticeLogged {
        user_id: Uuid,
        log_date: NaiveDate,
        minutes: u32,
        at: DateTime<Utc>,
    },
    BadgeAwarded {
        user_id: Uuid,
        badge_type: BadgeType,
        at: DateTime<Utc>,
    },
}

impl PracticeDomainEvent {
    pub fn user_id(&self) -> Uuid {
        match self {
            Self::PracticeLogged { user_id, .. } | Self::BadgeAwarded { user_id, .. } => *user_id,
        }
    }
}
