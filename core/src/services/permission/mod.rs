//! Role/permission resolution service.

pub mod service;

pub use service::PermissionService;
