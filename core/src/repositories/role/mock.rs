//! Mock implementation of RoleRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::Role;
use crate::errors::DomainError;

use super::RoleRepository;

/// Mock role repository backed by an in-memory map
pub struct MockRoleRepository {
    roles: Arc<RwLock<HashMap<i64, Role>>>,
    next_id: AtomicI64,
}

impl MockRoleRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            roles: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MockRoleRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RoleRepository for MockRoleRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Role>, DomainError> {
        let roles = self.roles.read().await;
        Ok(roles.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Role>, DomainError> {
        let roles = self.roles.read().await;
        Ok(roles.values().find(|r| r.name == name).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Role>, DomainError> {
        let roles = self.roles.read().await;
        let mut all: Vec<Role> = roles.values().cloned().collect();
        all.sort_by_key(|r| r.id);
        Ok(all)
    }

    async fn create(&self, mut role: Role) -> Result<Role, DomainError> {
        let mut roles = self.roles.write().await;

        if roles.values().any(|r| r.name == role.name) {
            return Err(DomainError::Validation {
                message: "Role name already exists".to_string(),
            });
        }

        role.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        roles.insert(role.id, role.clone());
        Ok(role)
    }

    async fn update(&self, role: Role) -> Result<Role, DomainError> {
        let mut roles = self.roles.write().await;

        if !roles.contains_key(&role.id) {
            return Err(DomainError::NotFound {
                resource: "Role".to_string(),
            });
        }

        roles.insert(role.id, role.clone());
        Ok(role)
    }
}
