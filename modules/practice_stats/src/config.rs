use anyhow::{anyhow, Result};
use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

use crate::domain::service::ServiceConfig;

/// Configuration for the practice_stats module
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PracticeStatsConfig {
    /// Fixed UTC offset for "local" dates; host time zone when absent.
    #[serde(default)]
    pub utc_offset_minutes: Option<i32>,
    #[serde(default = "default_max_minutes_per_log")]
    pub max_minutes_per_log: u32,
    #[serde(default = "default_max_notes_length")]
    pub max_notes_length: usize,
    #[serde(default = "default_event_channel_capacity")]
    pub event_channel_capacity: usize,
}

impl Default for PracticeStatsConfig {
    fn default() -> Self {
        Self {
            utc_offset_minutes: None,
            max_minutes_per_log: default_max_minutes_per_log(),
            max_notes_length: default_max_notes_length(),
            event_channel_capacity: default_event_channel_capacity(),
        }
    }
}

impl PracticeStatsConfig {
    pub fn clock_offset(&self) -> Result<Option<FixedOffset>> {
        self.utc_offset_minutes
            .map(|m| {
                m.checked_mul(60)
                    .and_then(FixedOffset::east_opt)
                    .ok_or_else(|| anyhow!("utc_offset_minutes out of range: {m}"))
            })
            .transpose()
    }

    pub fn service_config(&self) -> ServiceConfig {
        ServiceConfig {
            max_minutes_per_log: self.max_minutes_per_log,
            max_notes_length: self.max_notes_length,
        }
    }
}

fn default_max_minutes_per_log() -> u32 {
    24 * 60
}

fn default_max_notes_length() -> usize {
    2000
}

fn default_event_channel_capacity() -> usize {
    64
}
