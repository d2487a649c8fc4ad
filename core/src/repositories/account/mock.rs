//! Mock implementation of AccountRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::Account;
use crate::errors::DomainError;

use super::AccountRepository;

/// Mock account repository backed by an in-memory map
pub struct MockAccountRepository {
    accounts: Arc<RwLock<HashMap<i64, Account>>>,
    next_id: AtomicI64,
}

impl MockAccountRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicI64::new(1),
        }
    }

    /// Insert an account directly, bypassing uniqueness checks (test setup)
    pub async fn seed(&self, mut account: Account) -> Account {
        if account.id == 0 {
            account.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        }
        let mut accounts = self.accounts.write().await;
        accounts.insert(account.id, account.clone());
        account
    }
}

impl Default for MockAccountRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountRepository for MockAccountRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .values()
            .find(|a| !a.deleted && a.username == username)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .values()
            .find(|a| !a.deleted && a.email.as_deref() == Some(email))
            .cloned())
    }

    async fn find_by_phone(&self, phone: &str) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .values()
            .find(|a| !a.deleted && a.phone.as_deref() == Some(phone))
            .cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(&id).filter(|a| !a.deleted).cloned())
    }

    async fn find_by_id_any(&self, id: i64) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(&id).cloned())
    }

    async fn create(&self, mut account: Account) -> Result<Account, DomainError> {
        let mut accounts = self.accounts.write().await;

        if accounts
            .values()
            .any(|a| !a.deleted && a.username == account.username)
        {
            return Err(DomainError::Validation {
                message: "Username already registered".to_string(),
            });
        }

        account.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        accounts.insert(account.id, account.clone());
        Ok(account)
    }

    async fn update(&self, account: Account) -> Result<Account, DomainError> {
        let mut accounts = self.accounts.write().await;

        if !accounts.contains_key(&account.id) {
            return Err(DomainError::NotFound {
                resource: "Account".to_string(),
            });
        }

        accounts.insert(account.id, account.clone());
        Ok(account)
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError> {
        Ok(self.find_by_username(username).await?.is_some())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        Ok(self.find_by_email(email).await?.is_some())
    }

    async fn exists_by_phone(&self, phone: &str) -> Result<bool, DomainError> {
        Ok(self.find_by_phone(phone).await?.is_some())
    }
}
