#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::{bail, Result};
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime, Utc};
use parking_lot::Mutex;
use uuid::Uuid;

use practice_stats::contract::model::{BadgeRecord, BadgeType, PracticeLog};
use practice_stats::domain::error::DomainError;
use practice_stats::domain::events::PracticeDomainEvent;
use practice_stats::domain::ports::{EventPublisher, StreakOracle};
use practice_stats::domain::repo::{InsertOutcome, PracticeRepository};
use practice_stats::infra::storage::InMemoryPracticeRepository;

pub fn at(date: &str, hour: u32) -> NaiveDateTime {
    date.parse::<NaiveDate>()
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

pub fn log(user_id: Uuid, date: &str, raw: Option<&str>) -> PracticeLog {
    PracticeLog {
        user_id,
        log_date: date.to_string(),
        total_time: raw.map(str::to_string),
        notes: None,
        updated_at: Utc::now(),
    }
}

pub fn badge(user_id: Uuid, badge_type: BadgeType) -> BadgeRecord {
    BadgeRecord {
        user_id,
        badge_type,
        earned_at: Utc::now(),
    }
}

/// Streak oracle returning a settable value.
pub struct FixedStreak(pub Mutex<u32>);

impl FixedStreak {
    pub fn new(streak: u32) -> Arc<Self> {
        Arc::new(Self(Mutex::new(streak)))
    }
}

#[async_trait]
impl StreakOracle for FixedStreak {
    async fn current_streak(&self, _user_id: Uuid) -> Result<u32, DomainError> {
        Ok(*self.0.lock())
    }
}

/// Collects published events.
#[derive(Default)]
pub struct RecordingPublisher(pub Mutex<Vec<PracticeDomainEvent>>);

impl EventPublisher<PracticeDomainEvent> for RecordingPublisher {
    fn publish(&self, event: &PracticeDomainEvent) {
        self.0.lock().push(event.clone());
    }
}

/// In-memory store that counts badge inserts and can be told to fail some
/// operations.
#[derive(Default)]
pub struct InstrumentedRepo {
    pub inner: InMemoryPracticeRepository,
    pub insert_attempts: AtomicUsize,
    pub failing_badges: Mutex<HashSet<BadgeType>>,
    /// Badges another evaluator stores between our read and our insert.
    pub race_on_insert: Mutex<HashSet<BadgeType>>,
    pub fail_log_fetch: Mutex<bool>,
    pub badge_reads: AtomicUsize,
}

impl InstrumentedRepo {
    pub fn attempts(&self) -> usize {
        self.insert_attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PracticeRepository for InstrumentedRepo {
    async fn list_logs(&self, user_id: Uuid) -> Result<Vec<PracticeLog>> {
        if *self.fail_log_fetch.lock() {
            bail!("connection reset");
        }
        self.inner.list_logs(user_id).await
    }

    async fn practiced_dates(&self, user_id: Uuid) -> Result<Vec<NaiveDate>> {
        self.inner.practiced_dates(user_id).await
    }

    async fn upsert_log(&self, log: PracticeLog) -> Result<()> {
        self.inner.upsert_log(log).await
    }

    async fn list_badges(&self, user_id: Uuid) -> Result<Vec<BadgeRecord>> {
        self.badge_reads.fetch_add(1, Ordering::SeqCst);
        self.inner.list_badges(user_id).await
    }

    async fn insert_badge(&self, badge: BadgeRecord) -> Result<InsertOutcome> {
        self.insert_attempts.fetch_add(1, Ordering::SeqCst);
        if self.failing_badges.lock().contains(&badge.badge_type) {
            bail!("insert rejected for {}", badge.badge_type);
        }
        if self.race_on_insert.lock().contains(&badge.badge_type) {
            self.inner.insert_badge(badge).await?;
            return Ok(InsertOutcome::AlreadyExists);
        }
        self.inner.insert_badge(badge).await
    }
}
