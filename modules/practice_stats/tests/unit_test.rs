use chrono::{NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use practice_stats::api::dto::{
    DashboardDto, PracticeEventDto, PracticeTimeDto, RecordPracticeReq,
};
use practice_stats::config::PracticeStatsConfig;
use practice_stats::contract::{error::PracticeStatsError, model::*};
use practice_stats::domain::error::DomainError;
use practice_stats::domain::events::PracticeDomainEvent;
// Note: These internal module imports are only for testing
// External consumers should only use the `contract` module

#[test]
fn test_badge_type_names() {
    let names: Vec<&str> = BadgeType::ALL.iter().map(|b| b.as_str()).collect();
    assert_eq!(names, ["streak_10", "streak_30", "streak_50", "streak_100"]);

    for b in BadgeType::ALL {
        assert_eq!(b.to_string().parse::<BadgeType>(), Ok(b));
    }

    let err = "streak_7".parse::<BadgeType>().unwrap_err();
    assert_eq!(err.to_string(), "unknown badge type: streak_7");
}

#[test]
fn test_contract_errors() {
    let error = PracticeStatsError::validation("bad input");
    match error {
        PracticeStatsError::Validation { message } => assert_eq!(message, "bad input"),
        _ => panic!("Expected Validation error"),
    }

    assert_eq!(PracticeStatsError::unavailable(), PracticeStatsError::Unavailable);
}

#[test]
fn test_domain_error_conversion() {
    let err: PracticeStatsError = DomainError::invalid_minutes(0, 1440).into();
    assert_eq!(
        err,
        PracticeStatsError::validation("Practice minutes must be between 1 and 1440 (got 0)")
    );

    let err: PracticeStatsError = DomainError::invalid_month(2024, 13).into();
    assert_eq!(err, PracticeStatsError::validation("Invalid calendar month: 2024-13"));

    let err: PracticeStatsError = DomainError::validation("notes", "too long").into();
    assert_eq!(err, PracticeStatsError::validation("notes: too long"));

    // Store details stay inside the module.
    let err: PracticeStatsError = DomainError::store("password=hunter2").into();
    assert_eq!(err, PracticeStatsError::Unavailable);
    assert!(!err.to_string().contains("hunter2"));

    let err: PracticeStatsError = DomainError::streak_unavailable("timeout").into();
    assert_eq!(err, PracticeStatsError::Unavailable);
}

#[test]
fn test_config_defaults_and_overrides() {
    let cfg = PracticeStatsConfig::default();
    assert_eq!(cfg.max_minutes_per_log, 1440);
    assert_eq!(cfg.max_notes_length, 2000);
    assert_eq!(cfg.event_channel_capacity, 64);
    assert!(cfg.clock_offset().unwrap().is_none());

    let cfg: PracticeStatsConfig =
        serde_json::from_value(serde_json::json!({ "utc_offset_minutes": -300 })).unwrap();
    assert_eq!(cfg.max_minutes_per_log, 1440);
    assert_eq!(
        cfg.clock_offset().unwrap().map(|o| o.local_minus_utc()),
        Some(-300 * 60)
    );

    let svc = cfg.service_config();
    assert_eq!(svc.max_minutes_per_log, 1440);
    assert_eq!(svc.max_notes_length, 2000);
}

#[test]
fn test_config_rejects_bad_values() {
    let unknown = serde_json::from_value::<PracticeStatsConfig>(
        serde_json::json!({ "max_minutes": 10 }),
    );
    assert!(unknown.is_err());

    let cfg = PracticeStatsConfig {
        utc_offset_minutes: Some(24 * 60),
        ..Default::default()
    };
    assert!(cfg.clock_offset().is_err());
}

#[test]
fn test_dashboard_dto_serialization() {
    let user_id = Uuid::new_v4();
    let earned_at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    let snapshot = DashboardSnapshot {
        user_id,
        generated_at: NaiveDate::from_ymd_opt(2024, 5, 15)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap(),
        practiced_dates: vec![NaiveDate::from_ymd_opt(2024, 5, 15).unwrap()],
        streak: 31,
        practice_time: PracticeTimeBuckets {
            today: 45,
            this_week: 45,
            this_month: 135,
            total: 135,
        },
        badges: vec![BadgeRecord {
            user_id,
            badge_type: BadgeType::Streak30,
            earned_at,
        }],
        newly_awarded: vec![BadgeType::Streak30],
    };

    let dto = DashboardDto::from(snapshot);
    assert_eq!(
        dto.practice_time,
        PracticeTimeDto {
            today: 45,
            this_week: 45,
            this_month: 135,
            total: 135,
        }
    );

    let json = serde_json::to_value(&dto).unwrap();
    assert_eq!(json["generated_at"], "2024-05-15T09:30:00");
    assert_eq!(json["practiced_dates"][0], "2024-05-15");
    assert_eq!(json["badges"][0]["badge_type"], "streak_30");
    assert_eq!(json["newly_awarded"][0], "streak_30");
}

#[test]
fn test_record_request_and_event_dto() {
    let user_id = Uuid::new_v4();
    let req: RecordPracticeReq =
        serde_json::from_str(r#"{"log_date":"2024-05-15","minutes":40}"#).unwrap();
    let new_log = req.into_new_log(user_id);
    assert_eq!(new_log.user_id, user_id);
    assert_eq!(new_log.minutes, 40);
    assert_eq!(new_log.notes, None);

    let at = Utc.with_ymd_and_hms(2024, 5, 15, 8, 0, 0).unwrap();
    let event = PracticeDomainEvent::BadgeAwarded {
        user_id,
        badge_type: BadgeType::Streak50,
        at,
    };
    assert_eq!(event.user_id(), user_id);

    let json = serde_json::to_value(PracticeEventDto::from(&event)).unwrap();
    assert_eq!(json["kind"], "badge_awarded");
    assert_eq!(json["badge_type"], "streak_50");
}
