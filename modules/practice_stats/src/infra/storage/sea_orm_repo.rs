//! SeaORM-backed implementation of the record store port.
//!
//! Generic over `C: ConnectionTrait`, so it works with a `DatabaseConnection`
//! or a transaction handle.

use anyhow::Context;
use chrono::NaiveDate;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use tracing::warn;
use uuid::Uuid;

use crate::contract::model::{BadgeRecord, PracticeLog};
use crate::domain::calendar;
use crate::domain::repo::{InsertOutcome, PracticeRepository};
use crate::infra::storage::entity::{badge, practice_log};
use crate::infra::storage::mapper;

pub struct SeaOrmPracticeRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    conn: C,
}

impl<C> SeaOrmPracticeRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    pub fn new(conn: C) -> Self {
        Self { conn }
    }
}

#[async_trait::async_trait]
impl<C> PracticeRepository for SeaOrmPracticeRepository<C>
where
    C: ConnectionTrait + Send + Sync + 'static,
{
    async fn list_logs(&self, user_id: Uuid) -> anyhow::Result<Vec<PracticeLog>> {
        let rows = practice_log::Entity::find()
            .filter(practice_log::Column::UserId.eq(user_id))
            .order_by_asc(practice_log::Column::LogDate)
            .all(&self.conn)
            .await
            .context("list_logs failed")?;
        Ok(rows.into_iter().map(mapper::log_from_entity).collect())
    }

    async fn practiced_dates(&self, user_id: Uuid) -> anyhow::Result<Vec<NaiveDate>> {
        let rows = practice_log::Entity::find()
            .filter(practice_log::Column::UserId.eq(user_id))
            .filter(practice_log::Column::TotalTime.is_not_null())
            .all(&self.conn)
            .await
            .context("practiced_dates failed")?;
        let logs: Vec<PracticeLog> = rows.into_iter().map(mapper::log_from_entity).collect();
        Ok(calendar::practiced_dates(&logs))
    }

    async fn upsert_log(&self, log: PracticeLog) -> anyhow::Result<()> {
        practice_log::Entity::insert(mapper::log_to_active(log))
            .on_conflict(
                OnConflict::columns([
                    practice_log::Column::UserId,
                    practice_log::Column::LogDate,
                ])
                .update_columns([
                    practice_log::Column::TotalTime,
                    practice_log::Column::Notes,
                    practice_log::Column::UpdatedAt,
                ])
                .to_owned(),
            )
            .exec_without_returning(&self.conn)
            .await
            .context("upsert_log failed")?;
        Ok(())
    }

    async fn list_badges(&self, user_id: Uuid) -> anyhow::Result<Vec<BadgeRecord>> {
        let rows = badge::Entity::find()
            .filter(badge::Column::UserId.eq(user_id))
            .order_by_asc(badge::Column::EarnedAt)
            .all(&self.conn)
            .await
            .context("list_badges failed")?;

        Ok(rows
            .into_iter()
            .filter_map(|m| {
                mapper::badge_from_entity(m)
                    .inspect_err(|e| warn!(user_id = %user_id, "Skipping badge row: {}", e))
                    .ok()
            })
            .collect())
    }

    async fn insert_badge(&self, b: BadgeRecord) -> anyhow::Result<InsertOutcome> {
        let res = badge::Entity::insert(mapper::badge_to_active(b))
            .on_conflict(
                OnConflict::columns([badge::Column::UserId, badge::Column::BadgeType])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.conn)
            .await;

        match res {
            Ok(0) | Err(DbErr::RecordNotInserted) => Ok(InsertOutcome::AlreadyExists),
            Ok(_) => Ok(InsertOutcome::Inserted),
            Err(e) => Err(anyhow::Error::new(e).context("insert_badge failed")),
        }
    }
}
