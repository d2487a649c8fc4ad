//! Account entity representing an authenticatable user of the CMS.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Account entity holding credentials and lockout state.
///
/// Secret fields (`password_hash`, `password_salt`) never leave the core
/// layer; callers receive an [`AccountView`](crate::domain::value_objects::AccountView)
/// instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Unique numeric identifier, assigned by storage (0 until persisted)
    pub id: i64,

    /// Login name, unique among non-deleted accounts
    pub username: String,

    /// E-mail address, unique among non-deleted accounts
    pub email: Option<String>,

    /// Phone number, unique among non-deleted accounts
    pub phone: Option<String>,

    /// Salted password digest
    pub password_hash: String,

    /// Per-credential random salt, hex encoded
    pub password_salt: String,

    /// Whether the account may authenticate at all
    pub enabled: bool,

    /// Soft-delete flag; deleted accounts are invisible to every lookup
    pub deleted: bool,

    /// Consecutive failed login attempts since the last success
    pub failed_attempts: u32,

    /// Manual timed lock; blocks login while set to a future instant.
    /// Cleared only by an explicit unlock, never on expiry.
    pub locked_until: Option<DateTime<Utc>>,

    /// Timestamp of the last successful login
    pub last_login_at: Option<DateTime<Utc>>,

    /// Source address of the last successful login
    pub last_login_ip: Option<String>,

    /// Total number of successful logins
    pub login_count: u64,

    /// Role reference for permission resolution
    pub role_id: Option<i64>,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the account was last updated
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Creates a new Account with freshly hashed credentials
    pub fn new(username: String, password_hash: String, password_salt: String) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            username,
            email: None,
            phone: None,
            password_hash,
            password_salt,
            enabled: true,
            deleted: false,
            failed_attempts: 0,
            locked_until: None,
            last_login_at: None,
            last_login_ip: None,
            login_count: 0,
            role_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the e-mail address
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the phone number
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Sets the role reference
    pub fn with_role(mut self, role_id: i64) -> Self {
        self.role_id = Some(role_id);
        self
    }

    /// Records a successful login: resets the failure counter and stamps
    /// the login bookkeeping fields
    pub fn record_login(&mut self, ip: impl Into<String>) {
        let now = Utc::now();
        self.failed_attempts = 0;
        self.last_login_at = Some(now);
        self.last_login_ip = Some(ip.into());
        self.login_count += 1;
        self.updated_at = now;
    }

    /// Enables the account
    pub fn enable(&mut self) {
        self.enabled = true;
        self.updated_at = Utc::now();
    }

    /// Disables the account
    pub fn disable(&mut self) {
        self.enabled = false;
        self.updated_at = Utc::now();
    }

    /// Applies a manual timed lock for the given duration
    pub fn lock_for(&mut self, minutes: i64) {
        let now = Utc::now();
        self.locked_until = Some(now + Duration::minutes(minutes));
        self.updated_at = now;
    }

    /// Clears the manual lock and the failure counter
    pub fn unlock(&mut self) {
        self.locked_until = None;
        self.failed_attempts = 0;
        self.updated_at = Utc::now();
    }

    /// Replaces the credentials; the salt must be freshly generated
    pub fn set_password(&mut self, password_hash: String, password_salt: String) {
        self.password_hash = password_hash;
        self.password_salt = password_salt;
        self.failed_attempts = 0;
        self.updated_at = Utc::now();
    }

    /// Marks the account as soft-deleted
    pub fn mark_deleted(&mut self) {
        self.deleted = true;
        self.updated_at = Utc::now();
    }

    /// Restores a soft-deleted account
    pub fn restore(&mut self) {
        self.deleted = false;
        self.updated_at = Utc::now();
    }

    /// Whether the manual lock is currently in effect
    pub fn is_locked(&self, now: DateTime<Utc>) -> bool {
        matches!(self.locked_until, Some(until) if until > now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account() -> Account {
        Account::new(
            "editor".to_string(),
            "$2b$10$hash".to_string(),
            "aabbccdd".to_string(),
        )
    }

    #[test]
    fn test_new_account_defaults() {
        let account = account();
        assert!(account.enabled);
        assert!(!account.deleted);
        assert_eq!(account.failed_attempts, 0);
        assert_eq!(account.login_count, 0);
        assert!(account.locked_until.is_none());
        assert!(account.last_login_at.is_none());
    }

    #[test]
    fn test_record_login_resets_failures() {
        let mut account = account();
        account.failed_attempts = 3;

        account.record_login("203.0.113.9");

        assert_eq!(account.failed_attempts, 0);
        assert_eq!(account.login_count, 1);
        assert_eq!(account.last_login_ip.as_deref(), Some("203.0.113.9"));
        assert!(account.last_login_at.is_some());
    }

    #[test]
    fn test_lock_and_unlock() {
        let mut account = account();
        account.failed_attempts = 2;

        account.lock_for(30);
        assert!(account.is_locked(Utc::now()));

        account.unlock();
        assert!(account.locked_until.is_none());
        assert_eq!(account.failed_attempts, 0);
    }

    #[test]
    fn test_expired_lock_is_not_in_effect_but_stays_set() {
        let mut account = account();
        account.locked_until = Some(Utc::now() - Duration::minutes(1));

        assert!(!account.is_locked(Utc::now()));
        assert!(account.locked_until.is_some());
    }

    #[test]
    fn test_set_password_clears_counter() {
        let mut account = account();
        account.failed_attempts = 4;

        account.set_password("$2b$10$other".to_string(), "eeff0011".to_string());

        assert_eq!(account.failed_attempts, 0);
        assert_eq!(account.password_salt, "eeff0011");
    }

    #[test]
    fn test_soft_delete_and_restore() {
        let mut account = account();
        account.mark_deleted();
        assert!(account.deleted);
        account.restore();
        assert!(!account.deleted);
    }
}
