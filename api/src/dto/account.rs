use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterAccountRequest {
    #[validate(length(min = 3, max = 64))]
    pub username: String,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(min = 7, max = 20))]
    pub phone: Option<String>,

    /// Capped at 40 bytes: together with the 32-char stored salt the
    /// hashing input stays inside bcrypt's 72-byte window
    #[validate(length(min = 8, max = 40))]
    pub password: String,

    pub role_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LockAccountRequest {
    /// Lock duration; falls back to the configured default when absent
    pub minutes: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetEnabledRequest {
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResetPasswordRequest {
    #[validate(length(min = 8, max = 40))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginHistoryQuery {
    pub limit: Option<usize>,
}
