//! Request handling support shared across routes.

pub mod error;

pub use error::{domain_error_response, extract_client_ip, validation_error_response};
