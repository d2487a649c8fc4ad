//! Role-to-permission resolution.
//!
//! Resolution is a direct in-process call against the role repository; no
//! network hop is involved. Missing roles and empty permission sets fail
//! closed.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::domain::entities::WILDCARD_PERMISSION;
use crate::errors::DomainResult;
use crate::repositories::RoleRepository;

/// Service answering "is operation X permitted for role R"
pub struct PermissionService<R>
where
    R: RoleRepository,
{
    roles: Arc<R>,
}

impl<R> PermissionService<R>
where
    R: RoleRepository,
{
    /// Create a new permission service
    pub fn new(roles: Arc<R>) -> Self {
        Self { roles }
    }

    /// Whether the role authorizes the given operation.
    ///
    /// Fails closed (false) when the role does not exist or has no stored
    /// permissions; the wildcard `"*"` authorizes every operation.
    pub async fn has_permission(&self, role_id: i64, permission: &str) -> DomainResult<bool> {
        match self.roles.find_by_id(role_id).await? {
            Some(role) => Ok(role.grants(permission)),
            None => Ok(false),
        }
    }

    /// Distinct known permissions across all roles, sorted.
    ///
    /// The wildcard marker itself is excluded from the enumeration.
    pub async fn list_permissions(&self) -> DomainResult<Vec<String>> {
        let roles = self.roles.list_all().await?;
        let distinct: BTreeSet<String> = roles
            .into_iter()
            .flat_map(|role| role.permissions)
            .filter(|p| p != WILDCARD_PERMISSION)
            .collect();
        Ok(distinct.into_iter().collect())
    }
}
