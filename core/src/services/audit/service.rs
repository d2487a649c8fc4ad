//! Audit emission over the login-audit repository.
//!
//! Each attempt produces exactly one persisted entry plus a structured
//! tracing event. A failed audit write is not retried; it surfaces to the
//! caller as a storage error.

use std::sync::Arc;
use tracing::{error, info, warn};

use crate::domain::entities::LoginAudit;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::LoginAuditRepository;

/// Service for recording and querying login audit entries
pub struct AuditService<R>
where
    R: LoginAuditRepository,
{
    repository: Arc<R>,
}

impl<R> AuditService<R>
where
    R: LoginAuditRepository,
{
    /// Create a new audit service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Persist one audit entry, emitting a matching tracing event
    pub async fn record(&self, entry: LoginAudit) -> DomainResult<()> {
        if entry.success {
            info!(
                account_id = ?entry.account_id,
                ip = %entry.ip_address,
                "login attempt succeeded"
            );
        } else {
            warn!(
                account_id = ?entry.account_id,
                ip = %entry.ip_address,
                reason = entry.failure_reason.as_deref().unwrap_or("unknown"),
                "login attempt failed"
            );
        }

        self.repository.create(&entry).await.map_err(|e| {
            error!(error = %e, "failed to write login audit entry");
            DomainError::Storage {
                message: format!("audit write failed: {}", e),
            }
        })
    }

    /// Recent entries for an account, newest first
    pub async fn recent_for_account(
        &self,
        account_id: i64,
        limit: usize,
    ) -> DomainResult<Vec<LoginAudit>> {
        self.repository.find_by_account(account_id, limit).await
    }
}
