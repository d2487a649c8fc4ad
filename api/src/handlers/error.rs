//! Mapping from domain errors to HTTP responses.
//!
//! Every error leaves the API as an [`ErrorResponse`] envelope with a
//! stable machine-readable code. Auth failures deliberately carry no
//! detail beyond their code.

use actix_web::{HttpRequest, HttpResponse};
use tracing::error;
use validator::ValidationErrors;

use gz_core::errors::{AuthError, DomainError};
use gz_shared::types::ErrorResponse;

/// Convert a domain error into the HTTP response for it
pub fn domain_error_response(err: &DomainError) -> HttpResponse {
    match err {
        DomainError::Validation { message } => {
            HttpResponse::BadRequest().json(ErrorResponse::new("VALIDATION_ERROR", message))
        }
        DomainError::NotFound { resource } => HttpResponse::NotFound().json(ErrorResponse::new(
            "NOT_FOUND",
            &format!("{} not found", resource),
        )),
        DomainError::Storage { message } => {
            error!(message = %message, "storage error surfaced to client");
            HttpResponse::ServiceUnavailable().json(ErrorResponse::new(
                "STORAGE_UNAVAILABLE",
                "The backing store is unavailable",
            ))
        }
        DomainError::Auth(auth) => auth_error_response(*auth),
        DomainError::Internal { message } => {
            error!(message = %message, "internal error surfaced to client");
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "INTERNAL_ERROR",
                "An internal error occurred",
            ))
        }
    }
}

fn auth_error_response(err: AuthError) -> HttpResponse {
    let body = ErrorResponse::new(err.code(), &err.to_string());
    match err {
        AuthError::AccountNotFound => HttpResponse::NotFound().json(body),
        AuthError::AccountDisabled | AuthError::AccountLocked => {
            HttpResponse::Forbidden().json(body)
        }
        AuthError::InvalidCredential
        | AuthError::CaptchaNotFound
        | AuthError::CaptchaExpired => HttpResponse::BadRequest().json(body),
    }
}

/// Convert validator failures into the 400 envelope, with per-field detail
pub fn validation_error_response(errors: &ValidationErrors) -> HttpResponse {
    let mut body = ErrorResponse::new("VALIDATION_ERROR", "Invalid request data");
    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<String> = field_errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        body = body.with_detail(field, serde_json::json!(messages));
    }
    HttpResponse::BadRequest().json(body)
}

/// Extract the client IP, honoring reverse-proxy headers
pub fn extract_client_ip(req: &HttpRequest) -> String {
    if let Some(forwarded_for) = req.headers().get("X-Forwarded-For") {
        if let Ok(forwarded_str) = forwarded_for.to_str() {
            if let Some(ip) = forwarded_str.split(',').next() {
                return ip.trim().to_string();
            }
        }
    }

    if let Some(real_ip) = req.headers().get("X-Real-IP") {
        if let Ok(ip_str) = real_ip.to_str() {
            return ip_str.to_string();
        }
    }

    req.connection_info()
        .peer_addr()
        .unwrap_or("unknown")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_errors_map_to_expected_status() {
        let cases = [
            (AuthError::AccountNotFound, 404),
            (AuthError::AccountDisabled, 403),
            (AuthError::AccountLocked, 403),
            (AuthError::InvalidCredential, 400),
            (AuthError::CaptchaNotFound, 400),
            (AuthError::CaptchaExpired, 400),
        ];

        for (err, status) in cases {
            let response = domain_error_response(&DomainError::Auth(err));
            assert_eq!(response.status().as_u16(), status, "{:?}", err);
        }
    }

    #[test]
    fn test_storage_error_is_service_unavailable() {
        let response = domain_error_response(&DomainError::Storage {
            message: "pool timeout".to_string(),
        });
        assert_eq!(response.status().as_u16(), 503);
    }
}
