//! Login audit repository trait defining the interface for audit persistence.

use async_trait::async_trait;

use crate::domain::entities::LoginAudit;
use crate::errors::DomainError;

/// Repository trait for LoginAudit persistence operations
///
/// Audit entries are append-only; there is no update or delete operation.
#[async_trait]
pub trait LoginAuditRepository: Send + Sync {
    /// Append a new audit entry
    ///
    /// # Returns
    /// * `Ok(())` on successful creation
    /// * `Err(DomainError)` if the write fails
    async fn create(&self, entry: &LoginAudit) -> Result<(), DomainError>;

    /// Find recent audit entries for an account, newest first
    async fn find_by_account(
        &self,
        account_id: i64,
        limit: usize,
    ) -> Result<Vec<LoginAudit>, DomainError>;
}
