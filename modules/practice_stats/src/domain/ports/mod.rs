pub mod clock;
pub mod streak;

pub use clock::Clock;
pub use streak::StreakOracle;

/// Output port: publish domain events (no knowledge of transport).
pub trait EventPublisher<E>: Send + Sync + 'static {
    fn publish(&self, event: &E);
}
