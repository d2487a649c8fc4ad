//! Login audit entity recording every authentication attempt.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Immutable record of one authentication attempt.
///
/// Created for every verification attempt, including attempts against
/// unknown identifiers (`account_id == None`). Never mutated or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginAudit {
    /// Unique identifier for the entry
    pub id: Uuid,

    /// Resolved account, if the identifier matched one
    pub account_id: Option<i64>,

    /// Source address of the attempt
    pub ip_address: String,

    /// Whether the attempt succeeded
    pub success: bool,

    /// Failure reason for failed attempts
    pub failure_reason: Option<String>,

    /// Timestamp when the attempt occurred
    pub created_at: DateTime<Utc>,
}

impl LoginAudit {
    /// Create a success entry
    pub fn success(account_id: i64, ip_address: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            account_id: Some(account_id),
            ip_address: ip_address.into(),
            success: true,
            failure_reason: None,
            created_at: Utc::now(),
        }
    }

    /// Create a failure entry
    pub fn failure(
        account_id: Option<i64>,
        ip_address: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            account_id,
            ip_address: ip_address.into(),
            success: false,
            failure_reason: Some(reason.into()),
            created_at: Utc::now(),
        }
    }
}

/// Failure reasons recorded in audit entries
pub mod reasons {
    /// No account matched the identifier
    pub const ACCOUNT_NOT_FOUND: &str = "account not found";
    /// Account exists but is disabled
    pub const ACCOUNT_DISABLED: &str = "account disabled";
    /// Account is under a manual timed lock
    pub const ACCOUNT_LOCKED: &str = "account locked";
    /// Password digest mismatch
    pub const BAD_PASSWORD: &str = "bad password";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_entry() {
        let entry = LoginAudit::success(7, "198.51.100.4");
        assert_eq!(entry.account_id, Some(7));
        assert!(entry.success);
        assert!(entry.failure_reason.is_none());
    }

    #[test]
    fn test_failure_entry_without_account() {
        let entry = LoginAudit::failure(None, "198.51.100.4", reasons::ACCOUNT_NOT_FOUND);
        assert_eq!(entry.account_id, None);
        assert!(!entry.success);
        assert_eq!(entry.failure_reason.as_deref(), Some("account not found"));
    }
}
