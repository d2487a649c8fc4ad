//! Sanitized account view returned by authentication operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Account;

/// Account projection with every secret field stripped.
///
/// This is the only account shape that crosses the core boundary on a
/// successful login; it carries neither hash nor salt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountView {
    pub id: i64,
    pub username: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub enabled: bool,
    pub role_id: Option<i64>,
    pub last_login_at: Option<DateTime<Utc>>,
    pub last_login_ip: Option<String>,
    pub login_count: u64,
    pub created_at: DateTime<Utc>,
}

impl From<&Account> for AccountView {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            username: account.username.clone(),
            email: account.email.clone(),
            phone: account.phone.clone(),
            enabled: account.enabled,
            role_id: account.role_id,
            last_login_at: account.last_login_at,
            last_login_ip: account.last_login_ip.clone(),
            login_count: account.login_count,
            created_at: account.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_strips_secrets() {
        let account = Account::new(
            "editor".to_string(),
            "$2b$10$digest".to_string(),
            "a1b2c3d4".to_string(),
        );

        let view = AccountView::from(&account);
        let json = serde_json::to_string(&view).unwrap();

        assert!(!json.contains("digest"));
        assert!(!json.contains("a1b2c3d4"));
        assert!(json.contains("editor"));
    }
}
