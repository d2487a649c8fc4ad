//! MySQL implementation of the AccountRepository trait.
//!
//! Accounts live in the `accounts` table. Soft deletion is the `deleted`
//! flag; every lookup except `find_by_id_any` filters it out.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use gz_core::domain::entities::Account;
use gz_core::errors::DomainError;
use gz_core::repositories::AccountRepository;

const SELECT_COLUMNS: &str = r#"
    SELECT id, username, email, phone, password_hash, password_salt,
           enabled, deleted, failed_attempts, locked_until,
           last_login_at, last_login_ip, login_count, role_id,
           created_at, updated_at
    FROM accounts
"#;

/// MySQL implementation of AccountRepository
pub struct MySqlAccountRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlAccountRepository {
    /// Create a new MySQL account repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to an Account entity
    fn row_to_account(row: &sqlx::mysql::MySqlRow) -> Result<Account, DomainError> {
        Ok(Account {
            id: row.try_get("id").map_err(storage_err("id"))?,
            username: row.try_get("username").map_err(storage_err("username"))?,
            email: row.try_get("email").map_err(storage_err("email"))?,
            phone: row.try_get("phone").map_err(storage_err("phone"))?,
            password_hash: row
                .try_get("password_hash")
                .map_err(storage_err("password_hash"))?,
            password_salt: row
                .try_get("password_salt")
                .map_err(storage_err("password_salt"))?,
            enabled: row.try_get("enabled").map_err(storage_err("enabled"))?,
            deleted: row.try_get("deleted").map_err(storage_err("deleted"))?,
            failed_attempts: row
                .try_get::<i64, _>("failed_attempts")
                .map_err(storage_err("failed_attempts"))? as u32,
            locked_until: row
                .try_get::<Option<DateTime<Utc>>, _>("locked_until")
                .map_err(storage_err("locked_until"))?,
            last_login_at: row
                .try_get::<Option<DateTime<Utc>>, _>("last_login_at")
                .map_err(storage_err("last_login_at"))?,
            last_login_ip: row
                .try_get("last_login_ip")
                .map_err(storage_err("last_login_ip"))?,
            login_count: row
                .try_get::<i64, _>("login_count")
                .map_err(storage_err("login_count"))? as u64,
            role_id: row.try_get("role_id").map_err(storage_err("role_id"))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(storage_err("created_at"))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(storage_err("updated_at"))?,
        })
    }

    async fn find_one(
        &self,
        column: &str,
        value: &str,
    ) -> Result<Option<Account>, DomainError> {
        let query = format!("{} WHERE {} = ? AND deleted = FALSE", SELECT_COLUMNS, column);

        let row = sqlx::query(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Storage {
                message: format!("Failed to query account by {}: {}", column, e),
            })?;

        row.as_ref().map(Self::row_to_account).transpose()
    }

    async fn exists(&self, column: &str, value: &str) -> Result<bool, DomainError> {
        let query = format!(
            "SELECT COUNT(*) as count FROM accounts WHERE {} = ? AND deleted = FALSE",
            column
        );

        let row = sqlx::query(&query)
            .bind(value)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::Storage {
                message: format!("Failed to check account existence by {}: {}", column, e),
            })?;

        let count: i64 = row.try_get("count").map_err(storage_err("count"))?;
        Ok(count > 0)
    }
}

#[async_trait]
impl AccountRepository for MySqlAccountRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, DomainError> {
        self.find_one("username", username).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        self.find_one("email", email).await
    }

    async fn find_by_phone(&self, phone: &str) -> Result<Option<Account>, DomainError> {
        self.find_one("phone", phone).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Account>, DomainError> {
        let query = format!("{} WHERE id = ? AND deleted = FALSE", SELECT_COLUMNS);

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Storage {
                message: format!("Failed to query account by id: {}", e),
            })?;

        row.as_ref().map(Self::row_to_account).transpose()
    }

    async fn find_by_id_any(&self, id: i64) -> Result<Option<Account>, DomainError> {
        let query = format!("{} WHERE id = ?", SELECT_COLUMNS);

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Storage {
                message: format!("Failed to query account by id: {}", e),
            })?;

        row.as_ref().map(Self::row_to_account).transpose()
    }

    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        let query = r#"
            INSERT INTO accounts (
                username, email, phone, password_hash, password_salt,
                enabled, deleted, failed_attempts, locked_until,
                last_login_at, last_login_ip, login_count, role_id,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(&account.username)
            .bind(&account.email)
            .bind(&account.phone)
            .bind(&account.password_hash)
            .bind(&account.password_salt)
            .bind(account.enabled)
            .bind(account.deleted)
            .bind(account.failed_attempts as i64)
            .bind(account.locked_until)
            .bind(account.last_login_at)
            .bind(&account.last_login_ip)
            .bind(account.login_count as i64)
            .bind(account.role_id)
            .bind(account.created_at)
            .bind(account.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Storage {
                message: format!("Failed to create account: {}", e),
            })?;

        let mut created = account;
        created.id = result.last_insert_id() as i64;
        Ok(created)
    }

    async fn update(&self, account: Account) -> Result<Account, DomainError> {
        let query = r#"
            UPDATE accounts
            SET username = ?, email = ?, phone = ?,
                password_hash = ?, password_salt = ?,
                enabled = ?, deleted = ?, failed_attempts = ?,
                locked_until = ?, last_login_at = ?, last_login_ip = ?,
                login_count = ?, role_id = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&account.username)
            .bind(&account.email)
            .bind(&account.phone)
            .bind(&account.password_hash)
            .bind(&account.password_salt)
            .bind(account.enabled)
            .bind(account.deleted)
            .bind(account.failed_attempts as i64)
            .bind(account.locked_until)
            .bind(account.last_login_at)
            .bind(&account.last_login_ip)
            .bind(account.login_count as i64)
            .bind(account.role_id)
            .bind(account.updated_at)
            .bind(account.id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Storage {
                message: format!("Failed to update account: {}", e),
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: format!("Account {}", account.id),
            });
        }

        Ok(account)
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError> {
        self.exists("username", username).await
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        self.exists("email", email).await
    }

    async fn exists_by_phone(&self, phone: &str) -> Result<bool, DomainError> {
        self.exists("phone", phone).await
    }
}

fn storage_err(column: &'static str) -> impl Fn(sqlx::Error) -> DomainError {
    move |e| DomainError::Storage {
        message: format!("Failed to read column {}: {}", column, e),
    }
}
