//! Credential verifier orchestrating a single login attempt.
//!
//! Flow per attempt: resolve identifier, admissibility check, hash
//! comparison, policy transition, persistence, audit emission. Every
//! branch writes exactly one audit entry; account mutations are persisted
//! before the audit write, which is the last observable side effect.

use std::sync::Arc;
use chrono::Utc;
use tracing::debug;

use crate::domain::entities::{reasons, Account, LoginAudit};
use crate::domain::value_objects::AccountView;
use crate::errors::{AuthError, DomainResult};
use crate::repositories::{AccountRepository, LoginAuditRepository};
use crate::services::audit::AuditService;
use crate::services::password::PasswordHasher;

use super::policy::{Admissibility, DenialReason, LoginAttemptState, LoginPolicy};

/// Authentication service verifying credentials against stored accounts
pub struct AuthService<A, L>
where
    A: AccountRepository,
    L: LoginAuditRepository,
{
    accounts: Arc<A>,
    audit: AuditService<L>,
    hasher: PasswordHasher,
    policy: LoginPolicy,
}

impl<A, L> AuthService<A, L>
where
    A: AccountRepository,
    L: LoginAuditRepository,
{
    /// Create a new authentication service
    pub fn new(accounts: Arc<A>, audits: Arc<L>, hasher: PasswordHasher, policy: LoginPolicy) -> Self {
        Self {
            accounts,
            audit: AuditService::new(audits),
            hasher,
            policy,
        }
    }

    /// Verify a login attempt.
    ///
    /// # Arguments
    /// * `identifier` - Username, e-mail, or phone; resolution tries them
    ///   in that order and the first hit wins
    /// * `password` - Plaintext password to verify
    /// * `ip` - Source address, recorded in the audit entry
    ///
    /// # Returns
    /// * `Ok(AccountView)` - Verification succeeded; secrets are stripped
    /// * `Err(DomainError::Auth(_))` - Terminal failure (not found,
    ///   disabled, locked, bad password)
    /// * `Err(DomainError::Storage { .. })` - Backing store failed
    pub async fn login(
        &self,
        identifier: &str,
        password: &str,
        ip: &str,
    ) -> DomainResult<AccountView> {
        let Some(mut account) = self.resolve(identifier).await? else {
            self.audit
                .record(LoginAudit::failure(None, ip, reasons::ACCOUNT_NOT_FOUND))
                .await?;
            return Err(AuthError::AccountNotFound.into());
        };

        let state = LoginAttemptState::from(&account);
        match self.policy.admissible(&state, Utc::now()) {
            Admissibility::Denied(DenialReason::Disabled) => {
                // no hash comparison for an inadmissible account
                self.audit
                    .record(LoginAudit::failure(
                        Some(account.id),
                        ip,
                        reasons::ACCOUNT_DISABLED,
                    ))
                    .await?;
                return Err(AuthError::AccountDisabled.into());
            }
            Admissibility::Denied(DenialReason::Locked) => {
                self.audit
                    .record(LoginAudit::failure(
                        Some(account.id),
                        ip,
                        reasons::ACCOUNT_LOCKED,
                    ))
                    .await?;
                return Err(AuthError::AccountLocked.into());
            }
            Admissibility::Allowed => {}
        }

        let matches = self
            .hasher
            .verify(password, &account.password_salt, &account.password_hash)?;

        if matches {
            let next = self.policy.on_success(&state);
            account.failed_attempts = next.failed_attempts;
            account.record_login(ip);

            let account = self.accounts.update(account).await?;
            self.audit
                .record(LoginAudit::success(account.id, ip))
                .await?;

            Ok(AccountView::from(&account))
        } else {
            let next = self.policy.on_failure(&state);
            debug!(
                account_id = account.id,
                failed_attempts = next.failed_attempts,
                "password mismatch"
            );
            account.failed_attempts = next.failed_attempts;
            account.enabled = next.enabled;
            account.updated_at = Utc::now();

            let account = self.accounts.update(account).await?;
            self.audit
                .record(LoginAudit::failure(
                    Some(account.id),
                    ip,
                    reasons::BAD_PASSWORD,
                ))
                .await?;

            Err(AuthError::InvalidCredential.into())
        }
    }

    /// Recent audit entries for an account, newest first
    pub async fn login_history(
        &self,
        account_id: i64,
        limit: usize,
    ) -> DomainResult<Vec<LoginAudit>> {
        self.audit.recent_for_account(account_id, limit).await
    }

    /// Resolve an identifier against username, then e-mail, then phone.
    ///
    /// The ordering is significant: an identifier colliding across fields
    /// resolves deterministically to the username match.
    async fn resolve(&self, identifier: &str) -> DomainResult<Option<Account>> {
        if let Some(account) = self.accounts.find_by_username(identifier).await? {
            return Ok(Some(account));
        }
        if let Some(account) = self.accounts.find_by_email(identifier).await? {
            return Ok(Some(account));
        }
        self.accounts.find_by_phone(identifier).await
    }
}
