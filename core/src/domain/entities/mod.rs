//! Domain entities representing core business objects.

pub mod account;
pub mod captcha;
pub mod login_audit;
pub mod role;

// Re-export commonly used types
pub use account::Account;
pub use captcha::CaptchaChallenge;
pub use login_audit::{reasons, LoginAudit};
pub use role::{Role, WILDCARD_PERMISSION};
