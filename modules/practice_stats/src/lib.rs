// === PUBLIC CONTRACT ===
pub mod contract;

pub use contract::{client, error, model};

// === MODULE DEFINITION ===
pub mod module;
pub use module::PracticeStats;

pub mod config;

// === INTERNAL MODULES ===
// Exposed for wiring alternative adapters and for tests.
// Consumers should stick to `contract` and `PracticeStats`.
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod gateways;
#[doc(hidden)]
pub mod infra;
