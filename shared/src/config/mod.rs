//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `database` - Database connection and pool configuration
//! - `security` - Password hashing and login lockout configuration
//! - `captcha` - Captcha challenge configuration
//! - `server` - HTTP server and CORS configuration

pub mod captcha;
pub mod database;
pub mod security;
pub mod server;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use captcha::CaptchaConfig;
pub use database::DatabaseConfig;
pub use security::SecurityConfig;
pub use server::{CorsConfig, ServerConfig};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Password hashing and lockout configuration
    #[serde(default)]
    pub security: SecurityConfig,

    /// Captcha configuration
    #[serde(default)]
    pub captcha: CaptchaConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            security: SecurityConfig::default(),
            captcha: CaptchaConfig::default(),
            cors: CorsConfig::default(),
        }
    }
}

impl AppConfig {
    /// Build the full configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            security: SecurityConfig::from_env(),
            captcha: CaptchaConfig::default(),
            cors: CorsConfig::default(),
        }
    }

    /// Load configuration from a TOML file, with `GZ_`-prefixed
    /// environment variables layered on top (e.g. `GZ_SERVER__PORT`).
    pub fn from_file(path: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name(path))
            .add_source(config::Environment::with_prefix("GZ").separator("__"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_file_fills_unlisted_sections_with_defaults() {
        let path = std::env::temp_dir().join(format!("gz-config-{}.toml", std::process::id()));
        std::fs::write(
            &path,
            r#"
[server]
host = "10.0.0.5"
port = 9090

[database]
url = "mysql://cms:secret@db:3306/gazette"
"#,
        )
        .unwrap();

        let config = AppConfig::from_file(path.to_str().unwrap()).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.server.bind_address(), "10.0.0.5:9090");
        assert_eq!(config.database.url, "mysql://cms:secret@db:3306/gazette");
        // sections absent from the file come back as defaults
        assert_eq!(config.database.max_connections, 10);
        assert_eq!(config.security.failure_threshold, 5);
        assert_eq!(config.captcha.ttl_minutes, 5);
    }

    #[test]
    fn test_from_file_missing_file_is_an_error() {
        assert!(AppConfig::from_file("/nonexistent/gazette").is_err());
    }
}
