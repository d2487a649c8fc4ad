//! HTTP API layer for the Gazette backend.
//!
//! Route handlers, request/response DTOs, domain-to-HTTP error mapping,
//! and the actix-web application factory.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use routes::AppState;
