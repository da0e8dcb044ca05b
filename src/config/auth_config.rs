//! # Authentication Configuration Module
//!
//! OAuth 프로바이더(Google, GitHub) 엔드포인트와 클라이언트 자격 증명을 관리합니다.
//! 값은 시작 시점에 한 번 읽혀 [`AppConfig`](super::AppConfig)에 담기며,
//! 요청 처리 중에는 환경 변수를 다시 읽지 않습니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export GOOGLE_CLIENT_ID="your-google-client-id"
//! export GOOGLE_CLIENT_SECRET="your-google-client-secret"
//! export GITHUB_CLIENT_ID="your-github-client-id"
//! export GITHUB_CLIENT_SECRET="your-github-client-secret"
//! export APP_NAME="https://secrets.example.com"
//! ```
//!
//! 콜백 URL은 `APP_NAME + "/auth/<provider>/secrets"` 형태로 구성됩니다.

use serde::{Deserialize, Serialize};

/// OAuth state 쿠키의 유효 시간 (초)
pub const OAUTH_STATE_TTL_SECONDS: i64 = 600;

/// 지원하는 외부 인증 공급자
///
/// 각 공급자는 사용자 레코드의 별도 필드(`google_id`, `github_id`)에 바인딩됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    /// Google OAuth 2.0
    Google,
    /// GitHub OAuth
    GitHub,
}

impl AuthProvider {
    /// 모든 공급자 목록
    pub const ALL: [AuthProvider; 2] = [AuthProvider::Google, AuthProvider::GitHub];

    /// 문자열에서 AuthProvider를 생성합니다. (대소문자 무관)
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "google" => Ok(AuthProvider::Google),
            "github" => Ok(AuthProvider::GitHub),
            _ => Err(format!("Unsupported auth provider: {}", s)),
        }
    }

    /// 경로와 로그에 사용되는 소문자 이름
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::Google => "google",
            AuthProvider::GitHub => "github",
        }
    }

    /// 사용자 문서에서 이 공급자의 ID가 저장되는 필드명
    pub fn id_field(&self) -> &'static str {
        match self {
            AuthProvider::Google => "google_id",
            AuthProvider::GitHub => "github_id",
        }
    }

    /// 화면에 표시할 이름
    pub fn display_name(&self) -> &'static str {
        match self {
            AuthProvider::Google => "Google",
            AuthProvider::GitHub => "GitHub",
        }
    }
}

impl std::fmt::Display for AuthProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 단일 OAuth 공급자의 엔드포인트와 자격 증명
#[derive(Debug, Clone)]
pub struct OAuthProviderConfig {
    pub provider: AuthProvider,
    pub client_id: String,
    pub client_secret: String,
    /// 동의 화면 URL
    pub auth_uri: String,
    /// authorization code 교환 URL
    pub token_uri: String,
    /// 프로필 조회 URL
    pub profile_uri: String,
    /// 요청 스코프 (공백 구분)
    pub scope: String,
    /// 우리 서버의 콜백 URL
    pub redirect_uri: String,
}

impl OAuthProviderConfig {
    /// Google 설정을 생성합니다.
    ///
    /// 프로필은 OpenID userinfo v3 엔드포인트에서 `sub` 필드로 식별됩니다.
    pub fn google(client_id: String, client_secret: String, app_base_url: &str) -> Self {
        Self {
            provider: AuthProvider::Google,
            client_id,
            client_secret,
            auth_uri: "https://accounts.google.com/o/oauth2/v2/auth".to_string(),
            token_uri: "https://oauth2.googleapis.com/token".to_string(),
            profile_uri: "https://www.googleapis.com/oauth2/v3/userinfo".to_string(),
            scope: "profile".to_string(),
            redirect_uri: Self::callback_url(app_base_url, AuthProvider::Google),
        }
    }

    /// GitHub 설정을 생성합니다.
    pub fn github(client_id: String, client_secret: String, app_base_url: &str) -> Self {
        Self {
            provider: AuthProvider::GitHub,
            client_id,
            client_secret,
            auth_uri: "https://github.com/login/oauth/authorize".to_string(),
            token_uri: "https://github.com/login/oauth/access_token".to_string(),
            profile_uri: "https://api.github.com/user".to_string(),
            scope: "profile".to_string(),
            redirect_uri: Self::callback_url(app_base_url, AuthProvider::GitHub),
        }
    }

    /// `APP_NAME` 기반 콜백 URL을 만듭니다.
    pub fn callback_url(app_base_url: &str, provider: AuthProvider) -> String {
        format!("{}/auth/{}/secrets", app_base_url.trim_end_matches('/'), provider.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_provider_from_string() {
        assert_eq!(AuthProvider::from_str("google").unwrap(), AuthProvider::Google);
        assert_eq!(AuthProvider::from_str("GitHub").unwrap(), AuthProvider::GitHub);
        assert!(AuthProvider::from_str("facebook").is_err());
    }

    #[test]
    fn test_auth_provider_fields() {
        assert_eq!(AuthProvider::Google.id_field(), "google_id");
        assert_eq!(AuthProvider::GitHub.id_field(), "github_id");
        assert_eq!(AuthProvider::GitHub.to_string(), "github");
    }

    #[test]
    fn test_auth_provider_serialization() {
        let json = serde_json::to_string(&AuthProvider::GitHub).unwrap();
        assert_eq!(json, "\"github\"");
        let parsed: AuthProvider = serde_json::from_str("\"google\"").unwrap();
        assert_eq!(parsed, AuthProvider::Google);
    }

    #[test]
    fn test_callback_url_built_from_app_name() {
        let google = OAuthProviderConfig::google("id".into(), "secret".into(), "https://app.example.com/");
        assert_eq!(google.redirect_uri, "https://app.example.com/auth/google/secrets");
        assert_eq!(google.scope, "profile");

        let github = OAuthProviderConfig::github("id".into(), "secret".into(), "http://localhost:5000");
        assert_eq!(github.redirect_uri, "http://localhost:5000/auth/github/secrets");
    }
}
