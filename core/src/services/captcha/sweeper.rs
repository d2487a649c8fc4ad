//! Background sweeper for abandoned captcha challenges.
//!
//! Expired entries are already deleted lazily on verify; this task
//! reclaims the ones that are issued and then never verified.

use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::info;

use super::store::CaptchaStore;

/// Periodic cleanup task over a shared captcha store
pub struct CaptchaSweeper {
    store: Arc<CaptchaStore>,
    interval: Duration,
}

impl CaptchaSweeper {
    /// Create a sweeper for the given store
    pub fn new(store: Arc<CaptchaStore>, interval_secs: u64) -> Self {
        Self {
            store,
            interval: Duration::from_secs(interval_secs),
        }
    }

    /// Spawn the sweep loop on the current runtime
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.interval);
            // the first tick fires immediately; skip it
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let removed = self.store.sweep().await;
                if removed > 0 {
                    info!(removed, "swept expired captcha challenges");
                }
            }
        })
    }
}
