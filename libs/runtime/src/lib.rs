//! Shared runtime plumbing for the practice-stats binaries: layered
//! configuration and logging initialisation.

pub mod config;
pub mod logging;
pub mod paths;

pub use config::{
    default_logging_config, AppConfig, CliArgs, DatabaseConfig, LoggingConfig, Section,
};
