use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username, e-mail address, or phone number
    #[validate(length(min = 1, max = 128))]
    pub identifier: String,

    #[validate(length(min = 1, max = 128))]
    pub password: String,

    /// Id of a previously issued captcha challenge
    #[validate(length(min = 1, max = 64))]
    pub captcha_id: String,

    #[validate(length(min = 1, max = 16))]
    pub captcha_answer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptchaResponse {
    pub id: String,
    pub challenge: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CaptchaVerifyRequest {
    #[validate(length(min = 1, max = 64))]
    pub id: String,

    #[validate(length(min = 1, max = 16))]
    pub answer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptchaVerifyResponse {
    pub valid: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PermissionCheckResponse {
    pub granted: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PermissionListResponse {
    pub permissions: Vec<String>,
}
