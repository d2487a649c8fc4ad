use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gz_api::app::create_app;
use gz_api::AppState;
use gz_core::services::{
    AccountAdminService, AuthService, CaptchaStore, CaptchaSweeper, LoginPolicy,
    LoginPolicyConfig, PasswordHasher, PermissionService,
};
use gz_infra::database::connection::DatabasePool;
use gz_infra::database::mysql::{
    MySqlAccountRepository, MySqlLoginAuditRepository, MySqlRoleRepository,
};
use gz_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    info!("starting Gazette API server");

    // CONFIG_FILE selects a TOML config; plain env vars otherwise
    let config = match std::env::var("CONFIG_FILE") {
        Ok(path) => AppConfig::from_file(&path)
            .with_context(|| format!("failed to load configuration from {}", path))?,
        Err(_) => AppConfig::from_env(),
    };

    let db = DatabasePool::connect(&config.database)
        .await
        .context("failed to connect to database")?;
    db.ping().await.context("database ping failed")?;

    let accounts = Arc::new(MySqlAccountRepository::new(db.pool()));
    let audits = Arc::new(MySqlLoginAuditRepository::new(db.pool()));
    let roles = Arc::new(MySqlRoleRepository::new(db.pool()));

    let hasher = PasswordHasher::new(config.security.bcrypt_cost);
    let policy = LoginPolicy::new(LoginPolicyConfig {
        failure_threshold: config.security.failure_threshold,
        default_lock_minutes: config.security.default_lock_minutes,
    });

    let captcha = Arc::new(CaptchaStore::new(config.captcha.clone()));
    CaptchaSweeper::new(captcha.clone(), config.captcha.sweep_interval_secs).spawn();

    let state = web::Data::new(AppState {
        auth: AuthService::new(accounts.clone(), audits, hasher.clone(), policy),
        admin: AccountAdminService::new(
            accounts,
            hasher,
            config.security.default_lock_minutes,
        ),
        permissions: PermissionService::new(roles),
        captcha,
    });

    let bind_address = config.server.bind_address();
    info!(address = %bind_address, "binding HTTP server");

    let cors_config = config.cors.clone();
    let mut server = HttpServer::new(move || create_app(state.clone(), &cors_config))
        .keep_alive(Duration::from_secs(config.server.keep_alive));

    // workers == 0 means "one per CPU core", which is the server default
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(&bind_address)?.run().await?;

    Ok(())
}
