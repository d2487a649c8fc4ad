//! Login audit repository module.

mod r#trait;
pub use r#trait::LoginAuditRepository;

mod mock;
pub use mock::MockLoginAuditRepository;
