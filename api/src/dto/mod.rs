//! Request and response DTOs.

pub mod account;
pub mod auth;
