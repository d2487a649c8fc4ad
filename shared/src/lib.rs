//! Shared utilities and common types for the Gazette CMS server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Response envelope structures
//! - Common type definitions

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{AppConfig, CaptchaConfig, CorsConfig, DatabaseConfig, SecurityConfig, ServerConfig};
pub use types::{ApiResponse, ErrorResponse};
