//! Mock implementation of LoginAuditRepository for testing

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::LoginAudit;
use crate::errors::DomainError;

use super::LoginAuditRepository;

/// Mock audit repository keeping entries in memory, append order preserved
pub struct MockLoginAuditRepository {
    entries: Arc<RwLock<Vec<LoginAudit>>>,
}

impl MockLoginAuditRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// All recorded entries, in append order (test assertions)
    pub async fn entries(&self) -> Vec<LoginAudit> {
        self.entries.read().await.clone()
    }
}

impl Default for MockLoginAuditRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LoginAuditRepository for MockLoginAuditRepository {
    async fn create(&self, entry: &LoginAudit) -> Result<(), DomainError> {
        let mut entries = self.entries.write().await;
        entries.push(entry.clone());
        Ok(())
    }

    async fn find_by_account(
        &self,
        account_id: i64,
        limit: usize,
    ) -> Result<Vec<LoginAudit>, DomainError> {
        let entries = self.entries.read().await;
        Ok(entries
            .iter()
            .rev()
            .filter(|e| e.account_id == Some(account_id))
            .take(limit)
            .cloned()
            .collect())
    }
}
