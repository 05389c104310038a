use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::contract::model::{BadgeRecord, PracticeLog};

/// Result of an insert guarded by a uniqueness constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    AlreadyExists,
}

/// Port for the domain layer: the record store operations the pipeline needs.
#[async_trait]
pub trait PracticeRepository: Send + Sync {
    /// All practice logs of a user, ordered by date.
    async fn list_logs(&self, user_id: Uuid) -> anyhow::Result<Vec<PracticeLog>>;
    /// Distinct dates with a non-zero practice duration, ascending.
    async fn practiced_dates(&self, user_id: Uuid) -> anyhow::Result<Vec<NaiveDate>>;
    /// Insert or overwrite the log keyed by (user, date).
    async fn upsert_log(&self, log: PracticeLog) -> anyhow::Result<()>;
    /// Earned badges of a user.
    async fn list_badges(&self, user_id: Uuid) -> anyhow::Result<Vec<BadgeRecord>>;
    /// Insert a badge unless (user, badge type) already exists.
    async fn insert_badge(&self, badge: BadgeRecord) -> anyhow::Result<InsertOutcome>;
}
