use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

use crate::contract::model::{
    BadgeEvaluation, BadgeRecord, BadgeType, DashboardSnapshot, MonthCalendar, NewPracticeLog,
    PracticeLog, PracticeTimeBuckets,
};
use crate::domain::buckets::{self, DATE_FORMAT};
use crate::domain::error::DomainError;
use crate::domain::events::PracticeDomainEvent;
use crate::domain::ports::{Clock, EventPublisher, StreakOracle};
use crate::domain::repo::{InsertOutcome, PracticeRepository};
use crate::domain::{badges, calendar, duration};

/// Domain service running the practice pipeline.
/// Depends only on ports, not on infra types.
#[derive(Clone)]
pub struct Service {
    repo: Arc<dyn PracticeRepository>,
    streaks: Arc<dyn StreakOracle>,
    clock: Arc<dyn Clock>,
    events: Arc<dyn EventPublisher<PracticeDomainEvent>>,
    config: ServiceConfig,
}

/// Configuration for the domain service
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub max_minutes_per_log: u32,
    pub max_notes_length: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            max_minutes_per_log: 24 * 60,
            max_notes_length: 2000,
        }
    }
}

impl Service {
    pub fn new(
        repo: Arc<dyn PracticeRepository>,
        streaks: Arc<dyn StreakOracle>,
        clock: Arc<dyn Clock>,
        events: Arc<dyn EventPublisher<PracticeDomainEvent>>,
        config: ServiceConfig,
    ) -> Self {
        Self {
            repo,
            streaks,
            clock,
            events,
            config,
        }
    }

    /// Fetch everything concurrently, then aggregate and evaluate badges.
    /// Any failed fetch fails the whole run; no partial snapshot is produced.
    #[instrument(name = "practice_stats.service.dashboard", skip(self), fields(user_id = %user_id))]
    pub async fn dashboard(&self, user_id: Uuid) -> Result<DashboardSnapshot, DomainError> {
        debug!("Running dashboard pipeline");
        let now = self.clock.now();

        let (practiced_dates, streak, earned, logs) = tokio::try_join!(
            self.fetch_practiced_dates(user_id),
            self.fetch_streak(user_id),
            self.fetch_badges(user_id),
            self.fetch_logs(user_id),
        )
        .inspect_err(|e| error!("Dashboard fetch failed: {}", e))?;

        let practice_time = buckets::aggregate(&logs, now);
        let (newly_awarded, badges) = self.award_badges(user_id, streak, earned).await?;

        debug!(
            streak,
            total_minutes = practice_time.total,
            awarded = newly_awarded.len(),
            "Dashboard pipeline finished"
        );
        Ok(DashboardSnapshot {
            user_id,
            generated_at: now,
            practiced_dates,
            streak,
            practice_time,
            badges,
            newly_awarded,
        })
    }

    #[instrument(name = "practice_stats.service.practice_time", skip(self), fields(user_id = %user_id))]
    pub async fn practice_time(&self, user_id: Uuid) -> Result<PracticeTimeBuckets, DomainError> {
        let now = self.clock.now();
        let logs = self
            .fetch_logs(user_id)
            .await
            .inspect_err(|e| error!("Practice log fetch failed: {}", e))?;
        Ok(buckets::aggregate(&logs, now))
    }

    #[instrument(name = "practice_stats.service.evaluate_badges", skip(self), fields(user_id = %user_id))]
    pub async fn evaluate_badges(&self, user_id: Uuid) -> Result<BadgeEvaluation, DomainError> {
        let (streak, earned) =
            tokio::try_join!(self.fetch_streak(user_id), self.fetch_badges(user_id))
                .inspect_err(|e| error!("Badge evaluation fetch failed: {}", e))?;

        let (awarded, badges) = self.award_badges(user_id, streak, earned).await?;
        Ok(BadgeEvaluation {
            streak,
            awarded,
            badges,
        })
    }

    /// The save action: create or overwrite the log for (user, date).
    #[instrument(
        name = "practice_stats.service.record_practice",
        skip(self, new_log),
        fields(user_id = %new_log.user_id, log_date = %new_log.log_date, minutes = new_log.minutes)
    )]
    pub async fn record_practice(&self, new_log: NewPracticeLog) -> Result<PracticeLog, DomainError> {
        info!("Recording practice");
        self.validate_new_log(&new_log)?;

        let log = PracticeLog {
            user_id: new_log.user_id,
            log_date: new_log.log_date.format(DATE_FORMAT).to_string(),
            total_time: Some(duration::format_interval(new_log.minutes)),
            notes: new_log
                .notes
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty()),
            updated_at: self.clock.now_utc(),
        };

        self.repo
            .upsert_log(log.clone())
            .await
            .map_err(|e| DomainError::store(format!("{e:#}")))?;

        self.events.publish(&PracticeDomainEvent::PracticeLogged {
            user_id: log.user_id,
            log_date: new_log.log_date,
            minutes: new_log.minutes,
            at: log.updated_at,
        });

        info!("Practice recorded");
        Ok(log)
    }

    #[instrument(name = "practice_stats.service.practice_calendar", skip(self), fields(user_id = %user_id))]
    pub async fn practice_calendar(
        &self,
        user_id: Uuid,
        year: i32,
        month: u32,
    ) -> Result<MonthCalendar, DomainError> {
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(DomainError::invalid_month(year, month));
        }
        let logs = self
            .fetch_logs(user_id)
            .await
            .inspect_err(|e| error!("Practice log fetch failed: {}", e))?;
        calendar::month_calendar(&logs, year, month)
            .ok_or_else(|| DomainError::invalid_month(year, month))
    }

    // --- badge award protocol ---

    /// Phase one issues an insert per qualifying badge; a failed insert is
    /// logged and the rest still run. Phase two re-reads the earned set so the
    /// caller sees what the store actually holds.
    async fn award_badges(
        &self,
        user_id: Uuid,
        streak: u32,
        earned: Vec<BadgeRecord>,
    ) -> Result<(Vec<BadgeType>, Vec<BadgeRecord>), DomainError> {
        let earned_set: HashSet<BadgeType> = earned.iter().map(|b| b.badge_type).collect();
        let candidates = badges::badges_to_award(streak, &earned_set);
        if candidates.is_empty() {
            return Ok((Vec::new(), earned));
        }

        let mut awarded = Vec::with_capacity(candidates.len());
        for badge_type in candidates {
            let earned_at = self.clock.now_utc();
            let record = BadgeRecord {
                user_id,
                badge_type,
                earned_at,
            };
            match self.repo.insert_badge(record).await {
                Ok(InsertOutcome::Inserted) => {
                    info!(badge = %badge_type, streak, "Badge awarded");
                    self.events.publish(&PracticeDomainEvent::BadgeAwarded {
                        user_id,
                        badge_type,
                        at: earned_at,
                    });
                    awarded.push(badge_type);
                }
                Ok(InsertOutcome::AlreadyExists) => {
                    debug!(badge = %badge_type, "Badge already recorded");
                }
                Err(e) => {
                    warn!(badge = %badge_type, "Badge insert failed (continuing): {:#}", e);
                }
            }
        }

        let badges = self.fetch_badges(user_id).await?;
        Ok((awarded, badges))
    }

    // --- fetch helpers ---

    async fn fetch_logs(&self, user_id: Uuid) -> Result<Vec<PracticeLog>, DomainError> {
        self.repo
            .list_logs(user_id)
            .await
            .map_err(|e| DomainError::store(format!("{e:#}")))
    }

    async fn fetch_practiced_dates(&self, user_id: Uuid) -> Result<Vec<NaiveDate>, DomainError> {
        self.repo
            .practiced_dates(user_id)
            .await
            .map_err(|e| DomainError::store(format!("{e:#}")))
    }

    async fn fetch_badges(&self, user_id: Uuid) -> Result<Vec<BadgeRecord>, DomainError> {
        self.repo
            .list_badges(user_id)
            .await
            .map_err(|e| DomainError::store(format!("{e:#}")))
    }

    async fn fetch_streak(&self, user_id: Uuid) -> Result<u32, DomainError> {
        self.streaks.current_streak(user_id).await
    }

    // --- validation helpers ---

    fn validate_new_log(&self, new_log: &NewPracticeLog) -> Result<(), DomainError> {
        let max = self.config.max_minutes_per_log;
        if new_log.minutes == 0 || new_log.minutes > max {
            return Err(DomainError::invalid_minutes(new_log.minutes, max));
        }
        if let Some(notes) = &new_log.notes {
            if notes.chars().count() > self.config.max_notes_length {
                return Err(DomainError::validation(
                    "notes",
                    format!("longer than {} characters", self.config.max_notes_length),
                ));
            }
        }
        Ok(())
    }
}
