//! Captcha challenge services: the ephemeral store and its background
//! sweeper.

pub mod store;
pub mod sweeper;

pub use store::{CaptchaStore, IssuedCaptcha};
pub use sweeper::CaptchaSweeper;
