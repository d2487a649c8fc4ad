use actix_web::{web, HttpRequest, HttpResponse};
use tracing::info;
use validator::Validate;

use gz_core::repositories::{AccountRepository, LoginAuditRepository, RoleRepository};
use gz_shared::types::{ApiResponse, ErrorResponse};

use crate::dto::auth::LoginRequest;
use crate::handlers::{domain_error_response, extract_client_ip, validation_error_response};
use crate::routes::AppState;

/// Handler for POST /api/v1/auth/login
///
/// The captcha gate runs before any credential work; a missing, expired,
/// or wrong captcha never reaches the verifier and never shows up in the
/// login audit trail.
pub async fn login<A, L, R>(
    req: HttpRequest,
    state: web::Data<AppState<A, L, R>>,
    request: web::Json<LoginRequest>,
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
        .captcha
        .verify(&request.captcha_id, &request.captcha_answer)
        .await
    {
        Ok(true) => {}
        Ok(false) => {
            return HttpResponse::BadRequest().json(ErrorResponse::new(
                "CAPTCHA_MISMATCH",
                "Captcha answer is incorrect",
            ));
        }
        Err(err) => return domain_error_response(&err),
    }

    let client_ip = extract_client_ip(&req);
    info!(identifier = %request.identifier, ip = %client_ip, "processing login request");

    match state
        .auth
        .login(&request.identifier, &request.password, &client_ip)
        .await
    {
        Ok(view) => HttpResponse::Ok().json(ApiResponse::success(view)),
        Err(err) => domain_error_response(&err),
    }
}
