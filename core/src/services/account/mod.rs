//! Account administration service.

pub mod service;

pub use service::{AccountAdminService, NewAccount};
