//! Route handlers grouped by resource.

pub mod accounts;
pub mod auth;
pub mod roles;

use std::sync::Arc;

use gz_core::repositories::{AccountRepository, LoginAuditRepository, RoleRepository};
use gz_core::services::{
    AccountAdminService, AuthService, CaptchaStore, PermissionService,
};

/// Shared application state handed to every handler.
///
/// Generic over the repository traits so integration tests can run the
/// full HTTP stack against the in-memory mocks.
pub struct AppState<A, L, R>
where
    A: AccountRepository,
    L: LoginAuditRepository,
    R: RoleRepository,
{
    pub auth: AuthService<A, L>,
    pub admin: AccountAdminService<A>,
    pub permissions: PermissionService<R>,
    pub captcha: Arc<CaptchaStore>,
}
