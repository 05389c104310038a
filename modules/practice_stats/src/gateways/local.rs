use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::contract::{
    client::PracticeStatsApi,
    error::PracticeStatsError,
    model::{
        BadgeEvaluation, DashboardSnapshot, MonthCalendar, NewPracticeLog, PracticeLog,
        PracticeTimeBuckets,
    },
};
use crate::domain::service::Service;

/// Local implementation of the PracticeStatsApi trait that delegates to the domain service
pub struct PracticeStatsLocalClient {
    service: Arc<Service>,
}

impl PracticeStatsLocalClient {
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl PracticeStatsApi for PracticeStatsLocalClient {
    async fn dashboard(&self, user_id: Uuid) -> Result<DashboardSnapshot, PracticeStatsError> {
        self.service.dashboard(user_id).await.map_err(Into::into)
    }

    async fn practice_time(
        &self,
        user_id: Uuid,
    ) -> Result<PracticeTimeBuckets, PracticeStatsError> {
        self.service.practice_time(user_id).await.map_err(Into::into)
    }

    async fn evaluate_badges(&self, user_id: Uuid) -> Result<BadgeEvaluation, PracticeStatsError> {
        self.service.evaluate_badges(user_id).await.map_err(Into::into)
    }

    async fn record_practice(
        &self,
        log: NewPracticeLog,
    ) -> Result<PracticeLog, PracticeStatsError> {
        self.service.record_practice(log).await.map_err(Into::into)
    }

    async fn practice_calendar(
        &self,
        user_id: Uuid,
        year: i32,
        month: u32,
    ) -> Result<MonthCalendar, PracticeStatsError> {
        self.service
            .practice_calendar(user_id, year, month)
            .await
            .map_err(Into::into)
    }
}
