//! 인증 요청관련 DTO
//!
//! 회원가입/로그인 폼과 OAuth 콜백 쿼리를 매핑합니다.
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 회원가입과 로컬 로그인에 공통으로 쓰이는 폼
///
/// 누락된 필드는 빈 문자열이 되어 검증 단계에서 거부됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CredentialsForm {
    #[validate(length(min = 1, max = 64, message = "사용자명은 1-64자 사이여야 합니다"))]
    #[validate(custom(function = "validate_not_blank"))]
    #[serde(default)]
    pub username: String,

    #[validate(length(min = 1, max = 128, message = "비밀번호는 1-128자 사이여야 합니다"))]
    #[serde(default)]
    pub password: String,
}

impl CredentialsForm {
    /// 앞뒤 공백을 제거한 사용자명
    pub fn username(&self) -> &str {
        self.username.trim()
    }
}

/// OAuth 콜백 쿼리 파라미터 구조체
///
/// 사용자가 동의를 거부하면 `code` 없이 `error`만 전달됩니다.
#[derive(Debug, Deserialize)]
pub struct OAuthCallbackQuery {
    pub code: Option<String>,
    pub state: Option<String>,
    /// 에러가 있을 경우 (사용자가 거부했거나 에러 발생)
    pub error: Option<String>,
    pub error_description: Option<String>,
}

/// 공백만으로 이루어진 값 거부
pub(crate) fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank")
            .with_message("공백만 입력할 수 없습니다".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(username: &str, password: &str) -> CredentialsForm {
        CredentialsForm {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_valid_credentials() {
        let f = form("  alice ", "pw123");
        assert!(f.validate().is_ok());
        assert_eq!(f.username(), "alice");
    }

    #[test]
    fn test_blank_username_rejected() {
        assert!(form("   ", "pw123").validate().is_err());
        assert!(form("", "pw123").validate().is_err());
    }

    #[test]
    fn test_password_bounds() {
        assert!(form("alice", "").validate().is_err());
        assert!(form("alice", &"x".repeat(129)).validate().is_err());
    }
}
