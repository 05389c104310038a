use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::error::DomainError;

/// Supplies the user's current consecutive-practice-day count.
#[async_trait]
pub trait StreakOracle: Send + Sync {
    async fn current_streak(&self, user_id: Uuid) -> Result<u32, DomainError>;
}
