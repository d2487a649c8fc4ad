//! Account repository trait defining the interface for account persistence.
//!
//! Every lookup excludes soft-deleted rows; `find_by_id_any` is the one
//! exception, used by the restore admin action.

use async_trait::async_trait;

use crate::domain::entities::Account;
use crate::errors::DomainError;

/// Repository trait for Account entity persistence operations
///
/// Implementations handle the actual database operations while maintaining
/// the abstraction boundary between domain and infrastructure layers.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find a non-deleted account by username
    ///
    /// # Returns
    /// * `Ok(Some(Account))` - Account found
    /// * `Ok(None)` - No account with this username
    /// * `Err(DomainError)` - Storage error occurred
    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, DomainError>;

    /// Find a non-deleted account by e-mail address
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError>;

    /// Find a non-deleted account by phone number
    async fn find_by_phone(&self, phone: &str) -> Result<Option<Account>, DomainError>;

    /// Find a non-deleted account by its identifier
    async fn find_by_id(&self, id: i64) -> Result<Option<Account>, DomainError>;

    /// Find an account by its identifier including soft-deleted rows
    async fn find_by_id_any(&self, id: i64) -> Result<Option<Account>, DomainError>;

    /// Create a new account
    ///
    /// # Returns
    /// * `Ok(Account)` - The created account with its storage-assigned id
    /// * `Err(DomainError)` - Creation failed (e.g. duplicate username)
    async fn create(&self, account: Account) -> Result<Account, DomainError>;

    /// Persist an updated account
    ///
    /// # Returns
    /// * `Ok(Account)` - The updated account
    /// * `Err(DomainError)` - Account not found or storage error
    async fn update(&self, account: Account) -> Result<Account, DomainError>;

    /// Check whether a non-deleted account exists with the given username
    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError>;

    /// Check whether a non-deleted account exists with the given e-mail
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;

    /// Check whether a non-deleted account exists with the given phone
    async fn exists_by_phone(&self, phone: &str) -> Result<bool, DomainError>;
}
