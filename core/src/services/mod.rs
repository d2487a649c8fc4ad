//! Business services containing domain logic and use cases.

pub mod account;
pub mod audit;
pub mod auth;
pub mod captcha;
pub mod password;
pub mod permission;

// Re-export commonly used types
pub use account::{AccountAdminService, NewAccount};
pub use audit::AuditService;
pub use auth::{Admissibility, AuthService, DenialReason, LoginAttemptState, LoginPolicy, LoginPolicyConfig};
pub use captcha::{CaptchaStore, CaptchaSweeper, IssuedCaptcha};
pub use password::PasswordHasher;
pub use permission::PermissionService;
