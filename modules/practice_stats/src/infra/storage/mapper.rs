use sea_orm::Set;

use crate::contract::model::{BadgeRecord, PracticeLog, UnknownBadgeType};
use crate::infra::storage::entity::{badge, practice_log};

pub fn log_from_entity(m: practice_log::Model) -> PracticeLog {
    PracticeLog {
        user_id: m.user_id,
        log_date: m.log_date,
        total_time: m.total_time,
        notes: m.notes,
        updated_at: m.updated_at,
    }
}

pub fn log_to_active(log: PracticeLog) -> practice_log::ActiveModel {
    practice_log::ActiveModel {
        user_id: Set(log.user_id),
        log_date: Set(log.log_date),
        total_time: Set(log.total_time),
        notes: Set(log.notes),
        updated_at: Set(log.updated_at),
    }
}

/// Rows carrying a badge type this build does not know are reported as errors.
pub fn badge_from_entity(m: badge::Model) -> Result<BadgeRecord, UnknownBadgeType> {
    Ok(BadgeRecord {
        user_id: m.user_id,
        badge_type: m.badge_type.parse()?,
        earned_at: m.earned_at,
    })
}

pub fn badge_to_active(b: BadgeRecord) -> badge::ActiveModel {
    badge::ActiveModel {
        user_id: Set(b.user_id),
        badge_type: Set(b.badge_type.as_str().to_string()),
        earned_at: Set(b.earned_at),
    }
}
