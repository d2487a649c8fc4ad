//! Role repository trait defining the interface for role persistence.

use async_trait::async_trait;

use crate::domain::entities::Role;
use crate::errors::DomainError;

/// Repository trait for Role entity persistence operations
#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// Find a role by its identifier
    async fn find_by_id(&self, id: i64) -> Result<Option<Role>, DomainError>;

    /// Find a role by its unique name
    async fn find_by_name(&self, name: &str) -> Result<Option<Role>, DomainError>;

    /// List every role
    async fn list_all(&self) -> Result<Vec<Role>, DomainError>;

    /// Create a new role
    async fn create(&self, role: Role) -> Result<Role, DomainError>;

    /// Persist an updated role
    async fn update(&self, role: Role) -> Result<Role, DomainError>;
}
