use chrono::{DateTime, NaiveDateTime, Utc};

/// Source of "now". Injected so bucket boundaries and stored timestamps are
/// deterministic under test.
pub trait Clock: Send + Sync {
    /// Local wall-clock time, used for bucket and streak boundaries.
    fn now(&self) -> NaiveDateTime;

    /// The same instant in UTC, used for stored timestamps.
    fn now_utc(&self) -> DateTime<Utc>;
}
