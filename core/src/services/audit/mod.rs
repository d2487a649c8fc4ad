//! Audit service for recording authentication attempts.

pub mod service;

pub use service::AuditService;
