//! Role entity mapping a named role to its authorized operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Permission-set entry granting every operation
pub const WILDCARD_PERMISSION: &str = "*";

/// A role owned independently of accounts; accounts reference it by id.
///
/// Permissions are persisted as an ordered list but membership tests are
/// order-independent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    /// Unique numeric identifier
    pub id: i64,

    /// Unique role name
    pub name: String,

    /// Authorized operation strings, or the single wildcard `"*"`
    pub permissions: Vec<String>,

    /// Optional human-readable description
    pub description: Option<String>,

    /// Timestamp when the role was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the role was last updated
    pub updated_at: DateTime<Utc>,
}

impl Role {
    /// Creates a new Role
    pub fn new(name: String, permissions: Vec<String>) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            name,
            permissions,
            description: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Whether the role carries the wildcard grant
    pub fn has_wildcard(&self) -> bool {
        self.permissions.iter().any(|p| p == WILDCARD_PERMISSION)
    }

    /// Whether the role authorizes the given operation.
    ///
    /// Fails closed on an empty permission set; the wildcard authorizes
    /// every operation.
    pub fn grants(&self, permission: &str) -> bool {
        self.has_wildcard() || self.permissions.iter().any(|p| p == permission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grants_listed_permission() {
        let role = Role::new(
            "editor".to_string(),
            vec!["article.edit".to_string(), "article.view".to_string()],
        );

        assert!(role.grants("article.view"));
        assert!(!role.grants("article.delete"));
    }

    #[test]
    fn test_wildcard_grants_everything() {
        let role = Role::new("admin".to_string(), vec![WILDCARD_PERMISSION.to_string()]);

        assert!(role.grants("article.delete"));
        assert!(role.grants("anything.at.all"));
    }

    #[test]
    fn test_empty_permission_set_fails_closed() {
        let role = Role::new("ghost".to_string(), vec![]);
        assert!(!role.grants("article.view"));
    }
}
