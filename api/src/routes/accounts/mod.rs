//! Account administration route handlers.
//!
//! These mirror the admin service one-to-one; authorization for the admin
//! surface sits in front of this API at the gateway.

use actix_web::{web, HttpResponse};
use validator::Validate;

use gz_core::repositories::{AccountRepository, LoginAuditRepository, RoleRepository};
use gz_core::services::NewAccount;
use gz_shared::types::ApiResponse;

use crate::dto::account::{
    LockAccountRequest, LoginHistoryQuery, RegisterAccountRequest, ResetPasswordRequest,
    SetEnabledRequest,
};
use crate::handlers::{domain_error_response, validation_error_response};
use crate::routes::AppState;

const DEFAULT_HISTORY_LIMIT: usize = 20;

/// Handler for POST /api/v1/accounts
pub async fn register<A, L, R>(
    state: web::Data<AppState<A, L, R>>,
    request: web::Json<RegisterAccountRequest>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    L: LoginAuditRepository + 'static,
    R: RoleRepository + 'static,
{
    if let Err(errors) = request.0.validate() {
        return validation_error_response(&errors);
    }

    let request = request.into_inner();
    let new_account = NewAccount {
        username: request.username,
        email: request.email,
        phone: request.phone,
        password: request.password,
        role_id: request.role_id,
    };

    match state.admin.register(new_account).await {
        Ok(view) => HttpResponse::Created().json(ApiResponse::success(view)),
        Err(err) => domain_error_response(&err),
    }
}

/// Handler for PUT /api/v1/accounts/{id}/enabled
pub async fn set_enabled<A, L, R>(
    state: web::Data<AppState<A, L, R>>,
    path: web::Path<i64>,
    request: web::Json<SetEnabledRequest>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    L: LoginAuditRepository + 'static,
    R: RoleRepository + 'static,
{
    match state
        .admin
        .set_enabled(path.into_inner(), request.enabled)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::success(())),
        Err(err) => domain_error_response(&err),
    }
}

/// Handler for POST /api/v1/accounts/{id}/lock
pub async fn lock<A, L, R>(
    state: web::Data<AppState<A, L, R>>,
    path: web::Path<i64>,
    request: web::Json<LockAccountRequest>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    L: LoginAuditRepository + 'static,
    R: RoleRepository + 'static,
{
    match state.admin.lock(path.into_inner(), request.minutes).await {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::success(())),
        Err(err) => domain_error_response(&err),
    }
}

/// Handler for POST /api/v1/accounts/{id}/unlock
pub async fn unlock<A, L, R>(
    state: web::Data<AppState<A, L, R>>,
    path: web::Path<i64>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    L: LoginAuditRepository + 'static,
    R: RoleRepository + 'static,
{
    match state.admin.unlock(path.into_inner()).await {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::success(())),
        Err(err) => domain_error_response(&err),
    }
}

/// Handler for POST /api/v1/accounts/{id}/password
pub async fn reset_password<A, L, R>(
    state: web::Data<AppState<A, L, R>>,
    path: web::Path<i64>,
    request: web::Json<ResetPasswordRequest>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    L: LoginAuditRepository + 'static,
    R: RoleRepository + 'static,
{
    if let Err(errors) = request.0.validate() {
        return validation_error_response(&errors);
    }

    match state
        .admin
        .reset_password(path.into_inner(), &request.password)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::success(())),
        Err(err) => domain_error_response(&err),
    }
}

/// Handler for DELETE /api/v1/accounts/{id}
pub async fn soft_delete<A, L, R>(
    state: web::Data<AppState<A, L, R>>,
    path: web::Path<i64>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    L: LoginAuditRepository + 'static,
    R: RoleRepository + 'static,
{
    match state.admin.soft_delete(path.into_inner()).await {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::success(())),
        Err(err) => domain_error_response(&err),
    }
}

/// Handler for POST /api/v1/accounts/{id}/restore
pub async fn restore<A, L, R>(
    state: web::Data<AppState<A, L, R>>,
    path: web::Path<i64>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    L: LoginAuditRepository + 'static,
    R: RoleRepository + 'static,
{
    match state.admin.restore(path.into_inner()).await {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::success(())),
        Err(err) => domain_error_response(&err),
    }
}

/// Handler for GET /api/v1/accounts/{id}/logins
pub async fn login_history<A, L, R>(
    state: web::Data<AppState<A, L, R>>,
    path: web::Path<i64>,
    query: web::Query<LoginHistoryQuery>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    L: LoginAuditRepository + 'static,
    R: RoleRepository + 'static,
{
    let limit = query.limit.unwrap_or(DEFAULT_HISTORY_LIMIT);

    match state.auth.login_history(path.into_inner(), limit).await {
        Ok(entries) => HttpResponse::Ok().json(ApiResponse::success(entries)),
        Err(err) => domain_error_response(&err),
    }
}
