//! 비밀 텍스트 제출 폼
use serde::{Deserialize, Serialize};
use validator::Validate;
use super::auth_request::validate_not_blank;

/// `/submit` 폼
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmitSecretForm {
    #[validate(length(min = 1, max = 1000, message = "비밀은 1-1000자 사이여야 합니다"))]
    #[validate(custom(function = "validate_not_blank"))]
    #[serde(default)]
    pub secret: String,
}

impl SubmitSecretForm {
    pub fn secret(&self) -> &str {
        self.secret.trim()
    }
}
