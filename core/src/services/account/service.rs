//! Explicit admin actions over accounts: registration, enable/disable,
//! lock/unlock, password reset, soft delete and restore.
//!
//! None of these physically remove a row; deletion is the soft-delete
//! flag, and restore is its inverse.

use std::sync::Arc;
use tracing::info;

use crate::domain::entities::Account;
use crate::domain::value_objects::AccountView;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::AccountRepository;
use crate::services::password::PasswordHasher;

/// Registration input for a new account
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub username: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub password: String,
    pub role_id: Option<i64>,
}

/// Administrative account operations
pub struct AccountAdminService<A>
where
    A: AccountRepository,
{
    accounts: Arc<A>,
    hasher: PasswordHasher,
    default_lock_minutes: i64,
}

impl<A> AccountAdminService<A>
where
    A: AccountRepository,
{
    /// Create a new admin service
    pub fn new(accounts: Arc<A>, hasher: PasswordHasher, default_lock_minutes: i64) -> Self {
        Self {
            accounts,
            hasher,
            default_lock_minutes,
        }
    }

    /// Register a new account with hashed credentials.
    ///
    /// Username, e-mail, and phone must each be unique among non-deleted
    /// accounts.
    pub async fn register(&self, new_account: NewAccount) -> DomainResult<AccountView> {
        if self.accounts.exists_by_username(&new_account.username).await? {
            return Err(DomainError::Validation {
                message: format!("Username already taken: {}", new_account.username),
            });
        }
        if let Some(email) = &new_account.email {
            if self.accounts.exists_by_email(email).await? {
                return Err(DomainError::Validation {
                    message: format!("E-mail already registered: {}", email),
                });
            }
        }
        if let Some(phone) = &new_account.phone {
            if self.accounts.exists_by_phone(phone).await? {
                return Err(DomainError::Validation {
                    message: format!("Phone already registered: {}", phone),
                });
            }
        }

        let salt = PasswordHasher::generate_salt();
        let hash = self.hasher.hash(&new_account.password, &salt)?;

        let mut account = Account::new(new_account.username, hash, salt);
        account.email = new_account.email;
        account.phone = new_account.phone;
        account.role_id = new_account.role_id;

        let account = self.accounts.create(account).await?;
        info!(account_id = account.id, username = %account.username, "account registered");

        Ok(AccountView::from(&account))
    }

    /// Enable or disable an account
    pub async fn set_enabled(&self, id: i64, enabled: bool) -> DomainResult<()> {
        let mut account = self.load(id).await?;
        if enabled {
            account.enable();
        } else {
            account.disable();
        }
        self.accounts.update(account).await?;
        info!(account_id = id, enabled, "account enablement changed");
        Ok(())
    }

    /// Apply a manual timed lock; `minutes` defaults to the configured
    /// lock duration
    pub async fn lock(&self, id: i64, minutes: Option<i64>) -> DomainResult<()> {
        let minutes = minutes.unwrap_or(self.default_lock_minutes);
        let mut account = self.load(id).await?;
        account.lock_for(minutes);
        self.accounts.update(account).await?;
        info!(account_id = id, minutes, "account locked");
        Ok(())
    }

    /// Clear the manual lock and the failure counter.
    ///
    /// This is the only operation that removes an expired lock; the
    /// verifier never clears it on its own.
    pub async fn unlock(&self, id: i64) -> DomainResult<()> {
        let mut account = self.load(id).await?;
        account.unlock();
        self.accounts.update(account).await?;
        info!(account_id = id, "account unlocked");
        Ok(())
    }

    /// Replace the password with a fresh salt and digest
    pub async fn reset_password(&self, id: i64, new_password: &str) -> DomainResult<()> {
        let mut account = self.load(id).await?;

        let salt = PasswordHasher::generate_salt();
        let hash = self.hasher.hash(new_password, &salt)?;
        account.set_password(hash, salt);

        self.accounts.update(account).await?;
        info!(account_id = id, "password reset");
        Ok(())
    }

    /// Soft-delete an account; it disappears from every lookup
    pub async fn soft_delete(&self, id: i64) -> DomainResult<()> {
        let mut account = self.load(id).await?;
        account.mark_deleted();
        self.accounts.update(account).await?;
        info!(account_id = id, "account soft-deleted");
        Ok(())
    }

    /// Restore a soft-deleted account
    pub async fn restore(&self, id: i64) -> DomainResult<()> {
        let mut account = self
            .accounts
            .find_by_id_any(id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: format!("Account {}", id),
            })?;
        account.restore();
        self.accounts.update(account).await?;
        info!(account_id = id, "account restored");
        Ok(())
    }

    async fn load(&self, id: i64) -> DomainResult<Account> {
        self.accounts
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: format!("Account {}", id),
            })
    }
}
