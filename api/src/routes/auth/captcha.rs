use actix_web::{web, HttpResponse};
use validator::Validate;

use gz_core::repositories::{AccountRepository, LoginAuditRepository, RoleRepository};
use gz_shared::types::ApiResponse;

use crate::dto::auth::{CaptchaResponse, CaptchaVerifyRequest, CaptchaVerifyResponse};
use crate::handlers::{domain_error_response, validation_error_response};
use crate::routes::AppState;

/// Handler for GET /api/v1/auth/captcha
///
/// Issues a fresh challenge; the previous one for the same client (if any)
/// simply expires on its own.
pub async fn issue<A, L, R>(state: web::Data<AppState<A, L, R>>) -> HttpResponse
where
    A: AccountRepository + 'static,
    L: LoginAuditRepository + 'static,
    R: RoleRepository + 'static,
{
    let issued = state.captcha.issue().await;
    HttpResponse::Ok().json(ApiResponse::success(CaptchaResponse {
        id: issued.id,
        challenge: issued.challenge,
    }))
}

/// Handler for POST /api/v1/auth/captcha/verify
///
/// Front-end pre-check. Consumes the challenge regardless of outcome, so
/// a client that pre-checks must fetch a new challenge before login.
pub async fn verify<A, L, R>(
    state: web::Data<AppState<A, L, R>>,
    request: web::Json<CaptchaVerifyRequest>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    L: LoginAuditRepository + 'static,
    R: RoleRepository + 'static,
{
    if let Err(errors) = request.0.validate() {
        return validation_error_response(&errors);
    }

    match state.captcha.verify(&request.id, &request.answer).await {
        Ok(valid) => HttpResponse::Ok().json(ApiResponse::success(CaptchaVerifyResponse { valid })),
        Err(err) => domain_error_response(&err),
    }
}
