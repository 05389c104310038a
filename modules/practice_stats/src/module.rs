use std::sync::Arc;

use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tokio::sync::broadcast;
use tracing::{debug, info};

use crate::config::PracticeStatsConfig;
use crate::contract::client::PracticeStatsApi;
use crate::domain::events::PracticeDomainEvent;
use crate::domain::ports::Clock;
use crate::domain::repo::PracticeRepository;
use crate::domain::service::Service;
use crate::gateways::local::PracticeStatsLocalClient;
use crate::infra::clock::SystemClock;
use crate::infra::events::BroadcastEventPublisher;
use crate::infra::storage::migrations::Migrator;
use crate::infra::storage::{InMemoryPracticeRepository, SeaOrmPracticeRepository};
use crate::infra::streak::StoredStreakOracle;

/// Wired practice_stats module: repository, streak oracle, clock and event
/// fan-out behind one domain service.
#[derive(Clone)]
pub struct PracticeStats {
    service: Arc<Service>,
    events: Arc<BroadcastEventPublisher>,
}

impl PracticeStats {
    /// Run migrations on `conn` and wire the SeaORM-backed module.
    pub async fn with_database(
        cfg: &PracticeStatsConfig,
        conn: DatabaseConnection,
    ) -> anyhow::Result<Self> {
        info!("Running practice_stats database migrations");
        Migrator::up(&conn, None).await?;
        info!("Practice database migrations completed successfully");

        Self::build(cfg, Arc::new(SeaOrmPracticeRepository::new(conn)))
    }

    /// Module backed by the in-process store (nothing persists past the process).
    pub fn in_memory(cfg: &PracticeStatsConfig) -> anyhow::Result<Self> {
        Self::build(cfg, Arc::new(InMemoryPracticeRepository::new()))
    }

    /// Wire the module over any repository, using the configured wall clock.
    pub fn build(
        cfg: &PracticeStatsConfig,
        repo: Arc<dyn PracticeRepository>,
    ) -> anyhow::Result<Self> {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock::new(cfg.clock_offset()?));
        Ok(Self::build_with_clock(cfg, repo, clock))
    }

    pub fn build_with_clock(
        cfg: &PracticeStatsConfig,
        repo: Arc<dyn PracticeRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        debug!(
            "Wiring practice_stats: utc_offset_minutes={:?}, max_minutes_per_log={}",
            cfg.utc_offset_minutes, cfg.max_minutes_per_log
        );

        let events = Arc::new(BroadcastEventPublisher::new(cfg.event_channel_capacity));
        let streaks = Arc::new(StoredStreakOracle::new(repo.clone(), clock.clone()));
        let service = Service::new(
            repo,
            streaks,
            clock,
            events.clone(),
            cfg.service_config(),
        );

        Self {
            service: Arc::new(service),
            events,
        }
    }

    pub fn service(&self) -> Arc<Service> {
        self.service.clone()
    }

    /// In-process client for consumers that should only see the contract.
    pub fn client(&self) -> Arc<dyn PracticeStatsApi> {
        Arc::new(PracticeStatsLocalClient::new(self.service.clone()))
    }

    /// Change notifications; subscribers re-run the pipeline on demand.
    pub fn subscribe(&self) -> broadcast::Receiver<PracticeDomainEvent> {
        self.events.subscribe()
    }
}
