//! Application factory.
//!
//! Builds the actix-web App with middleware and the full route table.
//! Generic over the repository traits so the same factory serves both the
//! MySQL binary and mock-backed integration tests.

use actix_web::{web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use gz_core::repositories::{AccountRepository, LoginAuditRepository, RoleRepository};
use gz_shared::config::CorsConfig;
use gz_shared::types::ErrorResponse;

use crate::middleware::cors::create_cors;
use crate::routes::{accounts, auth, roles, AppState};

/// Create and configure the application with all dependencies
pub fn create_app<A, L, R>(
    app_state: web::Data<AppState<A, L, R>>,
    cors_config: &CorsConfig,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    A: AccountRepository + 'static,
    L: LoginAuditRepository + 'static,
    R: RoleRepository + 'static,
{
    let cors = create_cors(cors_config);

    App::new()
        .app_data(app_state)
        .wrap(TracingLogger::default())
        .wrap(cors)
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/auth")
                        .route("/login", web::post().to(auth::login::login::<A, L, R>))
                        .route("/captcha", web::get().to(auth::captcha::issue::<A, L, R>))
                        .route(
                            "/captcha/verify",
                            web::post().to(auth::captcha::verify::<A, L, R>),
                        ),
                )
                .service(
                    web::scope("/accounts")
                        .route("", web::post().to(accounts::register::<A, L, R>))
                        .route(
                            "/{id}/enabled",
                            web::put().to(accounts::set_enabled::<A, L, R>),
                        )
                        .route("/{id}/lock", web::post().to(accounts::lock::<A, L, R>))
                        .route("/{id}/unlock", web::post().to(accounts::unlock::<A, L, R>))
                        .route(
                            "/{id}/password",
                            web::post().to(accounts::reset_password::<A, L, R>),
                        )
                        .route("/{id}", web::delete().to(accounts::soft_delete::<A, L, R>))
                        .route(
                            "/{id}/restore",
                            web::post().to(accounts::restore::<A, L, R>),
                        )
                        .route(
                            "/{id}/logins",
                            web::get().to(accounts::login_history::<A, L, R>),
                        ),
                )
                .route(
                    "/roles/{id}/permissions/{permission}",
                    web::get().to(roles::check_permission::<A, L, R>),
                )
                .route(
                    "/permissions",
                    web::get().to(roles::list_permissions::<A, L, R>),
                ),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "gazette-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        "NOT_FOUND",
        "The requested resource was not found",
    ))
}
