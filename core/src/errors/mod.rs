//! Domain-specific error types and error handling.

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    /// The backing store was unavailable or timed out. Always surfaced to
    /// the caller, never retried automatically.
    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to authentication-specific errors
    #[error(transparent)]
    Auth(#[from] AuthError),
}

/// Authentication and captcha failure taxonomy.
///
/// Every variant is a terminal, user-facing outcome with no automatic
/// retry.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("Account not found")]
    AccountNotFound,

    #[error("Account disabled")]
    AccountDisabled,

    #[error("Account locked")]
    AccountLocked,

    #[error("Invalid credential")]
    InvalidCredential,

    #[error("Captcha not found")]
    CaptchaNotFound,

    #[error("Captcha expired")]
    CaptchaExpired,
}

impl AuthError {
    /// Stable error code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::AccountNotFound => "ACCOUNT_NOT_FOUND",
            Self::AccountDisabled => "ACCOUNT_DISABLED",
            Self::AccountLocked => "ACCOUNT_LOCKED",
            Self::InvalidCredential => "INVALID_CREDENTIAL",
            Self::CaptchaNotFound => "CAPTCHA_NOT_FOUND",
            Self::CaptchaExpired => "CAPTCHA_EXPIRED",
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_bridges_transparently() {
        let err: DomainError = AuthError::InvalidCredential.into();
        assert_eq!(err.to_string(), "Invalid credential");
    }

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(AuthError::AccountDisabled.code(), "ACCOUNT_DISABLED");
        assert_eq!(AuthError::CaptchaExpired.code(), "CAPTCHA_EXPIRED");
    }
}
