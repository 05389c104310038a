use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::ports::{Clock, StreakOracle};
use crate::domain::repo::PracticeRepository;

/// Streak oracle backed by the record store's practiced dates.
pub struct StoredStreakOracle {
    repo: Arc<dyn PracticeRepository>,
    clock: Arc<dyn Clock>,
}

impl StoredStreakOracle {
    pub fn new(repo: Arc<dyn PracticeRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }
}

#[async_trait]
impl StreakOracle for StoredStreakOracle {
    async fn current_streak(&self, user_id: Uuid) -> Result<u32, DomainError> {
        let today = self.clock.now().date();
        let dates = self
            .repo
            .practiced_dates(user_id)
            .await
            .map_err(|e| DomainError::streak_unavailable(format!("{e:#}")))?;
        Ok(consecutive_days(&dates, today))
    }
}

/// Length of the run of consecutive days ending today, or ending yesterday
/// when today has no practice yet. Dates after `today` are ignored.
/// `dates` must be ascending.
pub fn consecutive_days(dates: &[NaiveDate], today: NaiveDate) -> u32 {
    let mut past = dates.iter().rev().filter(|d| **d <= today).peekable();

    let mut expected = match past.peek() {
        Some(&&d) if d == today => today,
        Some(&&d) if Some(d) == today.pred_opt() => d,
        _ => return 0,
    };

    let mut streak = 0;
    for &d in past {
        if d == expected {
            streak += 1;
            expected -= Duration::days(1);
        } else if d < expected {
            break;
        }
    }
    streak
}
