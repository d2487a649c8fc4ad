//! # Gazette Core
//!
//! Core business logic and domain layer for the Gazette CMS backend.
//! This crate contains domain entities, the authentication and
//! access-control services, repository interfaces, and error types that
//! form the foundation of the application architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{Account, CaptchaChallenge, LoginAudit, Role};
pub use domain::value_objects::AccountView;
pub use errors::{AuthError, DomainError, DomainResult};
pub use repositories::{AccountRepository, LoginAuditRepository, RoleRepository};
pub use services::{
    AccountAdminService, AuditService, AuthService, CaptchaStore, CaptchaSweeper, LoginPolicy,
    PasswordHasher, PermissionService,
};
