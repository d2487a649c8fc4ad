//! Authentication services: the login-attempt policy and the credential
//! verifier built on top of it.

pub mod policy;
pub mod service;

#[cfg(test)]
mod tests;

pub use policy::{Admissibility, DenialReason, LoginAttemptState, LoginPolicy, LoginPolicyConfig};
pub use service::AuthService;
