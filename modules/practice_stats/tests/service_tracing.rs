//! Tests to verify that the service layer emits expected tracing output

mod common;

use std::sync::Arc;

use chrono::NaiveDate;
use tracing_test::traced_test;
use uuid::Uuid;

use common::{at, log, FixedStreak, InstrumentedRepo, RecordingPublisher};
use practice_stats::contract::model::{BadgeType, NewPracticeLog};
use practice_stats::domain::repo::PracticeRepository;
use practice_stats::domain::service::{Service, ServiceConfig};
use practice_stats::infra::clock::FixedClock;

fn service(repo: Arc<InstrumentedRepo>, streak: u32) -> Service {
    Service::new(
        repo,
        FixedStreak::new(streak),
        Arc::new(FixedClock::new(at("2024-05-15", 9))),
        Arc::new(RecordingPublisher::default()),
        ServiceConfig::default(),
    )
}

#[traced_test]
#[tokio::test]
async fn dashboard_emits_spans() {
    let repo = Arc::new(InstrumentedRepo::default());
    let user = Uuid::new_v4();
    repo.upsert_log(log(user, "2024-05-15", Some("0:30:00")))
        .await
        .unwrap();

    let result = service(repo, 12).dashboard(user).await;

    assert!(result.is_ok());
    assert!(logs_contain("practice_stats.service.dashboard"));
    assert!(logs_contain("Dashboard pipeline finished"));
    assert!(logs_contain("Badge awarded"));
}

#[traced_test]
#[tokio::test]
async fn failed_badge_insert_is_logged_and_skipped() {
    let repo = Arc::new(InstrumentedRepo::default());
    repo.failing_badges.lock().insert(BadgeType::Streak10);

    let result = service(repo, 10).evaluate_badges(Uuid::new_v4()).await;

    assert!(result.unwrap().awarded.is_empty());
    assert!(logs_contain("practice_stats.service.evaluate_badges"));
    assert!(logs_contain("Badge insert failed (continuing)"));
    assert!(logs_contain("insert rejected for streak_10"));
}

#[traced_test]
#[tokio::test]
async fn fetch_failure_is_logged() {
    let repo = Arc::new(InstrumentedRepo::default());
    *repo.fail_log_fetch.lock() = true;

    let result = service(repo, 0).dashboard(Uuid::new_v4()).await;

    assert!(result.is_err());
    assert!(logs_contain("Dashboard fetch failed"));
    assert!(logs_contain("connection reset"));
}

#[traced_test]
#[tokio::test]
async fn record_practice_emits_spans() {
    let repo = Arc::new(InstrumentedRepo::default());

    let result = service(repo, 0)
        .record_practice(NewPracticeLog {
            user_id: Uuid::new_v4(),
            log_date: NaiveDate::from_ymd_opt(2024, 5, 15).unwrap(),
            minutes: 25,
            notes: None,
        })
        .await;

    assert!(result.is_ok());
    assert!(logs_contain("practice_stats.service.record_practice"));
    assert!(logs_contain("Practice recorded"));
}

#[traced_test]
#[tokio::test]
async fn calendar_fetch_failure_is_logged() {
    let repo = Arc::new(InstrumentedRepo::default());
    *repo.fail_log_fetch.lock() = true;

    let result = service(repo, 0)
        .practice_calendar(Uuid::new_v4(), 2024, 5)
        .await;

    assert!(result.is_err());
    assert!(logs_contain("practice_stats.service.practice_calendar"));
    assert!(logs_contain("Practice log fetch failed"));
}
