//! In-process record store, used by `--mock` runs and tests.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::contract::model::{BadgeRecord, BadgeType, PracticeLog};
use crate::domain::calendar;
use crate::domain::repo::{InsertOutcome, PracticeRepository};

#[derive(Default)]
pub struct InMemoryPracticeRepository {
    logs: RwLock<BTreeMap<(Uuid, String), PracticeLog>>,
    badges: RwLock<BTreeMap<(Uuid, BadgeType), BadgeRecord>>,
}

impl InMemoryPracticeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn user_logs(&self, user_id: Uuid) -> Vec<PracticeLog> {
        self.logs
            .read()
            .range((user_id, String::new())..)
            .take_while(|((uid, _), _)| *uid == user_id)
            .map(|(_, log)| log.clone())
            .collect()
    }
}

#[async_trait]
impl PracticeRepository for InMemoryPracticeRepository {
    async fn list_logs(&self, user_id: Uuid) -> anyhow::Result<Vec<PracticeLog>> {
        Ok(self.user_logs(user_id))
    }

    async fn practiced_dates(&self, user_id: Uuid) -> anyhow::Result<Vec<NaiveDate>> {
        Ok(calendar::practiced_dates(&self.user_logs(user_id)))
    }

    async fn upsert_log(&self, log: PracticeLog) -> anyhow::Result<()> {
        self.logs
            .write()
            .insert((log.user_id, log.log_date.clone()), log);
        Ok(())
    }

    async fn list_badges(&self, user_id: Uuid) -> anyhow::Result<Vec<BadgeRecord>> {
        let mut out: Vec<BadgeRecord> = self
            .badges
            .read()
            .values()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect();
        out.sort_by_key(|b| b.earned_at);
        Ok(out)
    }

    async fn insert_badge(&self, badge: BadgeRecord) -> anyhow::Result<InsertOutcome> {
        let mut badges = self.badges.write();
        let key = (badge.user_id, badge.badge_type);
        if badges.contains_key(&key) {
            return Ok(InsertOutcome::AlreadyExists);
        }
        badges.insert(key, badge);
        Ok(InsertOutcome::Inserted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn log(user_id: Uuid, date: &str, raw: &str) -> PracticeLog {
        PracticeLog {
            user_id,
            log_date: date.into(),
            total_time: Some(raw.into()),
            notes: None,
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn logs_are_scoped_per_user_and_overwritten_per_date() {
        let repo = InMemoryPracticeRepository::new();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        repo.upsert_log(log(alice, "2024-05-02", "0:10:00")).await.unwrap();
        repo.upsert_log(log(alice, "2024-05-01", "0:20:00")).await.unwrap();
        repo.upsert_log(log(alice, "2024-05-02", "0:40:00")).await.unwrap();
        repo.upsert_log(log(bob, "2024-05-01", "1:00:00")).await.unwrap();

        let logs = repo.list_logs(alice).await.unwrap();
        assert_eq!(logs.len(), 2);
        assert_eq!(logs[0].log_date, "2024-05-01");
        assert_eq!(logs[1].total_time.as_deref(), Some("0:40:00"));
        assert_eq!(repo.list_logs(bob).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn duplicate_badge_is_reported_not_replaced() {
        let repo = InMemoryPracticeRepository::new();
        let user = Uuid::new_v4();
        let first = BadgeRecord {
            user_id: user,
            badge_type: BadgeType::Streak10,
            earned_at: Utc::now(),
        };
        let again = BadgeRecord {
            earned_at: Utc::now() + chrono::Duration::days(1),
            ..first.clone()
        };

        assert_eq!(repo.insert_badge(first.clone()).await.unwrap(), InsertOutcome::Inserted);
        assert_eq!(repo.insert_badge(again).await.unwrap(), InsertOutcome::AlreadyExists);
        assert_eq!(repo.list_badges(user).await.unwrap(), vec![first]);
    }
}
