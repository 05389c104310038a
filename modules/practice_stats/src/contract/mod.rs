pub mod client;
pub mod error;
pub mod model;

pub use client::PracticeStatsApi;
pub use error::PracticeStatsError;
pub use model::*;
