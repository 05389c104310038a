use tokio::sync::broadcast;
use tracing::trace;

use crate::domain::events::PracticeDomainEvent;
use crate::domain::ports::EventPublisher;

/// Fans domain events out to in-process subscribers (e.g. a view that
/// re-runs the dashboard when its user's data changes). Slow subscribers
/// lag and lose old events; publishing never blocks.
pub struct BroadcastEventPublisher {
    tx: broadcast::Sender<PracticeDomainEvent>,
}

impl BroadcastEventPublisher {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<PracticeDomainEvent> {
        self.tx.subscribe()
    }
}

impl EventPublisher<PracticeDomainEvent> for BroadcastEventPublisher {
    fn publish(&self, event: &PracticeDomainEvent) {
        if self.tx.send(event.clone()).is_err() {
            trace!("No subscribers for practice event");
        }
    }
}
