//! Captcha challenge configuration

use serde::{Deserialize, Serialize};

/// Configuration for the ephemeral captcha challenge store
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CaptchaConfig {
    /// Time-to-live of an issued challenge, in minutes
    #[serde(default = "default_ttl_minutes")]
    pub ttl_minutes: i64,

    /// Number of characters in the rendered challenge text
    #[serde(default = "default_challenge_length")]
    pub challenge_length: usize,

    /// Interval between background sweeps of expired entries, in seconds
    #[serde(default = "default_sweep_interval_secs")]
    pub sweep_interval_secs: u64,
}

impl Default for CaptchaConfig {
    fn default() -> Self {
        Self {
            ttl_minutes: default_ttl_minutes(),
            challenge_length: default_challenge_length(),
            sweep_interval_secs: default_sweep_interval_secs(),
        }
    }
}

fn default_ttl_minutes() -> i64 {
    5
}

fn default_challenge_length() -> usize {
    4
}

fn default_sweep_interval_secs() -> u64 {
    300
}
