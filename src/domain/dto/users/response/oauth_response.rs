//! OAuth 응답 DTO 모듈
//!
//! Authorization Code를 액세스 토큰으로 교환할 때 공급자가 반환하는 데이터입니다.
//! GitHub은 실패 시에도 200과 함께 `error` 필드를 반환하므로 모든 필드가 선택적입니다.

use serde::Deserialize;

/// OAuth 2.0 토큰 교환 응답
#[derive(Debug, Deserialize)]
pub struct OAuthTokenResponse {
    /// 액세스 토큰
    pub access_token: Option<String>,
    /// 에러 코드
    pub error: Option<String>,
    pub error_description: Option<String>,
}

impl OAuthTokenResponse {
    /// 성공 응답이면 액세스 토큰을, 아니면 에러 설명을 반환합니다.
    pub fn into_access_token(self) -> Result<String, String> {
        if let Some(error) = self.error {
            return Err(match self.error_description {
                Some(description) => format!("{}: {}", error, description),
                None => error,
            });
        }

        self.access_token
            .filter(|token| !token.is_empty())
            .ok_or_else(|| "access_token 누락".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_github_error_payload() {
        let response: OAuthTokenResponse = serde_json::from_str(
            r#"{"error":"bad_verification_code","error_description":"The code passed is incorrect or expired."}"#,
        )
        .unwrap();
        let err = response.into_access_token().unwrap_err();
        assert!(err.starts_with("bad_verification_code"));
    }

    #[test]
    fn test_success_payload() {
        let response: OAuthTokenResponse = serde_json::from_str(
            r#"{"access_token":"ya29.token","token_type":"Bearer","expires_in":3599,"scope":"profile"}"#,
        )
        .unwrap();
        assert_eq!(response.into_access_token().unwrap(), "ya29.token");
    }
}
