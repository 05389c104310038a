use async_trait::async_trait;
use uuid::Uuid;

use crate::contract::{
    error::PracticeStatsError,
    model::{
        BadgeEvaluation, DashboardSnapshot, MonthCalendar, NewPracticeLog, PracticeLog,
        PracticeTimeBuckets,
    },
};

/// Public API of the practice_stats module for in-process consumers (UI layer, CLI).
#[async_trait]
pub trait PracticeStatsApi: Send + Sync {
    /// Run the full dashboard pipeline: fetch, aggregate, evaluate badges.
    async fn dashboard(&self, user_id: Uuid) -> Result<DashboardSnapshot, PracticeStatsError>;

    /// Minutes practiced per bucket as of now.
    async fn practice_time(&self, user_id: Uuid)
        -> Result<PracticeTimeBuckets, PracticeStatsError>;

    /// Award any streak badges the user now qualifies for.
    async fn evaluate_badges(&self, user_id: Uuid)
        -> Result<BadgeEvaluation, PracticeStatsError>;

    /// Save (create or overwrite) the log for one day.
    async fn record_practice(&self, log: NewPracticeLog)
        -> Result<PracticeLog, PracticeStatsError>;

    /// Month view of practiced days.
    async fn practice_calendar(
        &self,
        user_id: Uuid,
        year: i32,
        month: u32,
    ) -> Result<MonthCalendar, PracticeStatsError>;
}
