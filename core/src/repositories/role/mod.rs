//! Role repository module.

mod r#trait;
pub use r#trait::RoleRepository;

mod mock;
pub use mock::MockRoleRepository;
