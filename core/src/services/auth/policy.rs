//! Login-attempt policy: a pure decision component over lockout state.
//!
//! Given the current failure count and lock state, the policy decides
//! whether an attempt is admissible and computes the state after an
//! attempt. It performs no I/O; the verifier loads a snapshot, applies
//! the transition, and persists the result.

use chrono::{DateTime, Utc};

use crate::domain::entities::Account;

/// Configuration constants for the lockout policy
#[derive(Debug, Clone)]
pub struct LoginPolicyConfig {
    /// Consecutive failures at which the account is disabled
    pub failure_threshold: u32,

    /// Duration of a manual timed lock, in minutes
    pub default_lock_minutes: i64,
}

impl Default for LoginPolicyConfig {
    fn default() -> Self {
        Self {
            failure_threshold: 5,
            default_lock_minutes: 30,
        }
    }
}

/// Snapshot of the lockout-relevant fields of an account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginAttemptState {
    pub failed_attempts: u32,
    pub locked_until: Option<DateTime<Utc>>,
    pub enabled: bool,
}

impl From<&Account> for LoginAttemptState {
    fn from(account: &Account) -> Self {
        Self {
            failed_attempts: account.failed_attempts,
            locked_until: account.locked_until,
            enabled: account.enabled,
        }
    }
}

/// Outcome of an admissibility check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admissibility {
    Allowed,
    Denied(DenialReason),
}

/// Why an attempt was denied before any credential comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenialReason {
    /// The enabled flag is false (manual disable or threshold breach)
    Disabled,
    /// A manual timed lock is still in the future
    Locked,
}

/// Pure login-attempt policy
#[derive(Debug, Clone, Default)]
pub struct LoginPolicy {
    config: LoginPolicyConfig,
}

impl LoginPolicy {
    /// Create a policy with the given configuration
    pub fn new(config: LoginPolicyConfig) -> Self {
        Self { config }
    }

    /// Access the configured constants
    pub fn config(&self) -> &LoginPolicyConfig {
        &self.config
    }

    /// Whether a login attempt is permitted at all.
    ///
    /// An expired manual lock does not block the attempt, but it is not
    /// cleared here either; only an explicit unlock removes the field.
    pub fn admissible(&self, state: &LoginAttemptState, now: DateTime<Utc>) -> Admissibility {
        if !state.enabled {
            return Admissibility::Denied(DenialReason::Disabled);
        }
        if matches!(state.locked_until, Some(until) if until > now) {
            return Admissibility::Denied(DenialReason::Locked);
        }
        Admissibility::Allowed
    }

    /// State after a failed attempt: the counter increments, and reaching
    /// the threshold disables the account. This is the automatic lockout
    /// mechanism; the timed lock is a separate, manual one.
    pub fn on_failure(&self, state: &LoginAttemptState) -> LoginAttemptState {
        let failed_attempts = state.failed_attempts + 1;
        LoginAttemptState {
            failed_attempts,
            locked_until: state.locked_until,
            enabled: state.enabled && failed_attempts < self.config.failure_threshold,
        }
    }

    /// State after a successful attempt: the counter resets
    pub fn on_success(&self, state: &LoginAttemptState) -> LoginAttemptState {
        LoginAttemptState {
            failed_attempts: 0,
            locked_until: state.locked_until,
            enabled: state.enabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn state(failed: u32, enabled: bool) -> LoginAttemptState {
        LoginAttemptState {
            failed_attempts: failed,
            locked_until: None,
            enabled,
        }
    }

    #[test]
    fn test_disabled_account_is_inadmissible() {
        let policy = LoginPolicy::default();
        assert_eq!(
            policy.admissible(&state(0, false), Utc::now()),
            Admissibility::Denied(DenialReason::Disabled)
        );
    }

    #[test]
    fn test_future_lock_is_inadmissible() {
        let policy = LoginPolicy::default();
        let mut s = state(0, true);
        s.locked_until = Some(Utc::now() + Duration::minutes(10));

        assert_eq!(
            policy.admissible(&s, Utc::now()),
            Admissibility::Denied(DenialReason::Locked)
        );
    }

    #[test]
    fn test_expired_lock_is_admissible_but_not_cleared() {
        let policy = LoginPolicy::default();
        let mut s = state(0, true);
        s.locked_until = Some(Utc::now() - Duration::minutes(1));

        assert_eq!(policy.admissible(&s, Utc::now()), Admissibility::Allowed);
        // the policy never mutates the state it inspects
        assert!(s.locked_until.is_some());
    }

    #[test]
    fn test_failure_below_threshold_keeps_account_enabled() {
        let policy = LoginPolicy::default();
        let next = policy.on_failure(&state(2, true));

        assert_eq!(next.failed_attempts, 3);
        assert!(next.enabled);
    }

    #[test]
    fn test_fifth_failure_disables_account() {
        let policy = LoginPolicy::default();
        let next = policy.on_failure(&state(4, true));

        assert_eq!(next.failed_attempts, 5);
        assert!(!next.enabled);
    }

    #[test]
    fn test_success_resets_counter() {
        let policy = LoginPolicy::default();
        let next = policy.on_success(&state(4, true));

        assert_eq!(next.failed_attempts, 0);
        assert!(next.enabled);
    }

    #[test]
    fn test_custom_threshold() {
        let policy = LoginPolicy::new(LoginPolicyConfig {
            failure_threshold: 3,
            default_lock_minutes: 30,
        });

        let next = policy.on_failure(&state(2, true));
        assert!(!next.enabled);
    }
}
