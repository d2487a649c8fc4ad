//! Role and permission route handlers.

use actix_web::{web, HttpResponse};

use gz_core::repositories::{AccountRepository, LoginAuditRepository, RoleRepository};
use gz_shared::types::ApiResponse;

use crate::dto::auth::{PermissionCheckResponse, PermissionListResponse};
use crate::handlers::domain_error_response;
use crate::routes::AppState;

/// Handler for GET /api/v1/roles/{id}/permissions/{permission}
///
/// Missing roles answer `granted: false` rather than 404; the check fails
/// closed without leaking which role ids exist.
pub async fn check_permission<A, L, R>(
    state: web::Data<AppState<A, L, R>>,
    path: web::Path<(i64, String)>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    L: LoginAuditRepository + 'static,
    R: RoleRepository + 'static,
{
    let (role_id, permission) = path.into_inner();

    match state.permissions.has_permission(role_id, &permission).await {
        Ok(granted) => {
            HttpResponse::Ok().json(ApiResponse::success(PermissionCheckResponse { granted }))
        }
        Err(err) => domain_error_response(&err),
    }
}

/// Handler for GET /api/v1/permissions
pub async fn list_permissions<A, L, R>(state: web::Data<AppState<A, L, R>>) -> HttpResponse
where
    A: AccountRepository + 'static,
    L: LoginAuditRepository + 'static,
    R: RoleRepository + 'static,
{
    match state.permissions.list_permissions().await {
        Ok(permissions) => {
            HttpResponse::Ok().json(ApiResponse::success(PermissionListResponse { permissions }))
        }
        Err(err) => domain_error_response(&err),
    }
}
