pub mod account;
pub mod audit;
pub mod role;

pub use account::{AccountRepository, MockAccountRepository};
pub use audit::{LoginAuditRepository, MockLoginAuditRepository};
pub use role::{MockRoleRepository, RoleRepository};
