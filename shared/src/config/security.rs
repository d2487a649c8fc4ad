//! Password hashing and login lockout configuration

use serde::{Deserialize, Serialize};

/// Security configuration covering credential hashing and the login
/// attempt lockout policy.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SecurityConfig {
    /// bcrypt work factor used when hashing passwords
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,

    /// Consecutive failed attempts before an account is disabled
    #[serde(default = "default_failure_threshold")]
    pub failure_threshold: u32,

    /// Duration of a manual timed lock, in minutes
    #[serde(default = "default_lock_minutes")]
    pub default_lock_minutes: i64,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: default_bcrypt_cost(),
            failure_threshold: default_failure_threshold(),
            default_lock_minutes: default_lock_minutes(),
        }
    }
}

impl SecurityConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let bcrypt_cost = std::env::var("SECURITY_BCRYPT_COST")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_bcrypt_cost);
        let failure_threshold = std::env::var("SECURITY_FAILURE_THRESHOLD")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_failure_threshold);
        let default_lock_minutes = std::env::var("SECURITY_LOCK_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_lock_minutes);

        Self {
            bcrypt_cost,
            failure_threshold,
            default_lock_minutes,
        }
    }
}

fn default_bcrypt_cost() -> u32 {
    10
}

fn default_failure_threshold() -> u32 {
    5
}

fn default_lock_minutes() -> i64 {
    30
}
