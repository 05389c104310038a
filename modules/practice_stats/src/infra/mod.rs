pub mod clock;
pub mod events;
pub mod storage;
pub mod streak;
