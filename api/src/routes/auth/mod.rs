//! Authentication route handlers:
//! - Credential login (captcha-gated)
//! - Captcha issuance and pre-check verification

pub mod captcha;
pub mod login;
