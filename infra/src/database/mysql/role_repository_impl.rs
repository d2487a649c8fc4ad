//! MySQL implementation of the RoleRepository trait.
//!
//! Role permission sets are stored as a JSON array in the `permissions`
//! column and deserialized with serde_json on read.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use gz_core::domain::entities::Role;
use gz_core::errors::DomainError;
use gz_core::repositories::RoleRepository;

/// MySQL implementation of RoleRepository
pub struct MySqlRoleRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlRoleRepository {
    /// Create a new MySQL role repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a Role entity
    fn row_to_role(row: &sqlx::mysql::MySqlRow) -> Result<Role, DomainError> {
        let permissions_json: String = row
            .try_get("permissions")
            .map_err(|e| DomainError::Storage {
                message: format!("Failed to read column permissions: {}", e),
            })?;

        let permissions: Vec<String> =
            serde_json::from_str(&permissions_json).map_err(|e| DomainError::Storage {
                message: format!("Invalid permissions JSON: {}", e),
            })?;

        Ok(Role {
            id: row.try_get("id").map_err(|e| DomainError::Storage {
                message: format!("Failed to read column id: {}", e),
            })?,
            name: row.try_get("name").map_err(|e| DomainError::Storage {
                message: format!("Failed to read column name: {}", e),
            })?,
            permissions,
            description: row
                .try_get("description")
                .map_err(|e| DomainError::Storage {
                    message: format!("Failed to read column description: {}", e),
                })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Storage {
                    message: format!("Failed to read column created_at: {}", e),
                })?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::Storage {
                    message: format!("Failed to read column updated_at: {}", e),
                })?,
        })
    }

    fn serialize_permissions(role: &Role) -> Result<String, DomainError> {
        serde_json::to_string(&role.permissions).map_err(|e| DomainError::Internal {
            message: format!("Failed to serialize permissions: {}", e),
        })
    }
}

#[async_trait]
impl RoleRepository for MySqlRoleRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Role>, DomainError> {
        let query = r#"
            SELECT id, name, permissions, description, created_at, updated_at
            FROM roles
            WHERE id = ?
        "#;

        let row = sqlx::query(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Storage {
                message: format!("Failed to query role by id: {}", e),
            })?;

        row.as_ref().map(Self::row_to_role).transpose()
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Role>, DomainError> {
        let query = r#"
            SELECT id, name, permissions, description, created_at, updated_at
            FROM roles
            WHERE name = ?
        "#;

        let row = sqlx::query(query)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Storage {
                message: format!("Failed to query role by name: {}", e),
            })?;

        row.as_ref().map(Self::row_to_role).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Role>, DomainError> {
        let query = r#"
            SELECT id, name, permissions, description, created_at, updated_at
            FROM roles
            ORDER BY id
        "#;

        let rows = sqlx::query(query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Storage {
                message: format!("Failed to list roles: {}", e),
            })?;

        rows.iter()
            .map(Self::row_to_role)
            .collect::<Result<Vec<_>, _>>()
    }

    async fn create(&self, role: Role) -> Result<Role, DomainError> {
        let query = r#"
            INSERT INTO roles (name, permissions, description, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
        "#;

        let permissions_json = Self::serialize_permissions(&role)?;

        let result = sqlx::query(query)
            .bind(&role.name)
            .bind(&permissions_json)
            .bind(&role.description)
            .bind(role.created_at)
            .bind(role.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Storage {
                message: format!("Failed to create role: {}", e),
            })?;

        let mut created = role;
        created.id = result.last_insert_id() as i64;
        Ok(created)
    }

    async fn update(&self, role: Role) -> Result<Role, DomainError> {
        let query = r#"
            UPDATE roles
            SET name = ?, permissions = ?, description = ?, updated_at = ?
            WHERE id = ?
        "#;

        let permissions_json = Self::serialize_permissions(&role)?;

        let result = sqlx::query(query)
            .bind(&role.name)
            .bind(&permissions_json)
            .bind(&role.description)
            .bind(role.updated_at)
            .bind(role.id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Storage {
                message: format!("Failed to update role: {}", e),
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: format!("Role {}", role.id),
            });
        }

        Ok(role)
    }
}
