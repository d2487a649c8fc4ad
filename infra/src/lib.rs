//! Infrastructure layer for the Gazette backend.
//!
//! Concrete MySQL-backed implementations of the repository traits defined
//! in `gz_core`, plus connection pool management.

pub mod database;

pub use database::connection::DatabasePool;
pub use database::mysql::{
    MySqlAccountRepository, MySqlLoginAuditRepository, MySqlRoleRepository,
};
