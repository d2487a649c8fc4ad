//! MySQL implementation of the LoginAuditRepository trait.
//!
//! Audit entries land in the append-only `login_audit` table. There is no
//! update or delete path from application code.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use gz_core::domain::entities::LoginAudit;
use gz_core::errors::DomainError;
use gz_core::repositories::LoginAuditRepository;

/// MySQL implementation of LoginAuditRepository
pub struct MySqlLoginAuditRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlLoginAuditRepository {
    /// Create a new MySQL login audit repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a LoginAudit entity
    fn row_to_audit(row: &sqlx::mysql::MySqlRow) -> Result<LoginAudit, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Storage {
            message: format!("Failed to read column id: {}", e),
        })?;
        let id = Uuid::parse_str(&id).map_err(|e| DomainError::Storage {
            message: format!("Invalid audit entry UUID: {}", e),
        })?;

        Ok(LoginAudit {
            id,
            account_id: row
                .try_get("account_id")
                .map_err(|e| DomainError::Storage {
                    message: format!("Failed to read column account_id: {}", e),
                })?,
            ip_address: row
                .try_get("ip_address")
                .map_err(|e| DomainError::Storage {
                    message: format!("Failed to read column ip_address: {}", e),
                })?,
            success: row.try_get("success").map_err(|e| DomainError::Storage {
                message: format!("Failed to read column success: {}", e),
            })?,
            failure_reason: row
                .try_get("failure_reason")
                .map_err(|e| DomainError::Storage {
                    message: format!("Failed to read column failure_reason: {}", e),
                })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Storage {
                    message: format!("Failed to read column created_at: {}", e),
                })?,
        })
    }
}

#[async_trait]
impl LoginAuditRepository for MySqlLoginAuditRepository {
    async fn create(&self, entry: &LoginAudit) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO login_audit (
                id, account_id, ip_address, success, failure_reason, created_at
            ) VALUES (?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(entry.id.to_string())
            .bind(entry.account_id)
            .bind(&entry.ip_address)
            .bind(entry.success)
            .bind(&entry.failure_reason)
            .bind(entry.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Storage {
                message: format!("Failed to create audit entry: {}", e),
            })?;

        Ok(())
    }

    async fn find_by_account(
        &self,
        account_id: i64,
        limit: usize,
    ) -> Result<Vec<LoginAudit>, DomainError> {
        let query = r#"
            SELECT id, account_id, ip_address, success, failure_reason, created_at
            FROM login_audit
            WHERE account_id = ?
            ORDER BY created_at DESC
            LIMIT ?
        "#;

        let rows = sqlx::query(query)
            .bind(account_id)
            .bind(limit as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Storage {
                message: format!("Failed to find audit entries by account: {}", e),
            })?;

        rows.iter()
            .map(Self::row_to_audit)
            .collect::<Result<Vec<_>, _>>()
    }
}
