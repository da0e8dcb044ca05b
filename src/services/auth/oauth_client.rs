//! # OAuth 2.0 Authorization Code 클라이언트
//!
//! Google과 GitHub의 Authorization Code Flow를 하나의 구현으로 처리합니다.
//!
//! ```text
//! 브라우저            우리 서버                         공급자
//!    │ GET /auth/github    │                                 │
//!    ├────────────────────►│ state 생성 + 쿠키 저장           │
//!    │ 302 consent URL     │                                 │
//!    │◄────────────────────┤                                 │
//!    │ 사용자 동의 ─────────────────────────────────────────►│
//!    │ GET /auth/github/secrets?code&state ◄──────────────────┤
//!    ├────────────────────►│ state 검증                      │
//!    │                     │ code → access_token ───────────►│
//!    │                     │ access_token → profile ────────►│
//!    │                     │ find-or-create + 세션 생성       │
//!    │ 302 /secrets        │                                 │
//!    │◄────────────────────┤                                 │
//! ```
//!
//! 모든 외부 호출은 `OAUTH_TIMEOUT_SECONDS`로 제한되며,
//! 전송 오류/타임아웃/비정상 응답은 모두 `AppError::ProviderError`가 됩니다.

use std::time::Duration;
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use crate::{
    config::{AuthProvider, OAuthProviderConfig},
    domain::{dto::users::response::OAuthTokenResponse, models::oauth::ProviderIdentity},
    errors::{AppError, AppResult, ErrorContext},
};

/// 외부 신원 공급자
///
/// 핸들러는 이 trait만 알고 있으므로 테스트에서는 네트워크 없는 구현으로 교체됩니다.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    fn provider(&self) -> AuthProvider;

    /// 동의 화면 URL
    fn authorization_url(&self, state: &str) -> String;

    /// Authorization Code를 교환하여 공급자 내 사용자 ID를 얻습니다.
    async fn fetch_identity(&self, code: &str) -> AppResult<ProviderIdentity>;
}

/// reqwest 기반 OAuth 클라이언트
pub struct OAuthClient {
    config: OAuthProviderConfig,
    http: reqwest::Client,
}

impl OAuthClient {
    pub fn new(config: OAuthProviderConfig, timeout: Duration) -> AppResult<Self> {
        // GitHub API는 User-Agent 헤더가 없으면 요청을 거부합니다.
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::ConfigError(format!("HTTP 클라이언트 생성 실패: {}", e)))?;

        Ok(Self { config, http })
    }

    async fn exchange_code_for_token(&self, code: &str) -> AppResult<String> {
        let params = [
            ("code", code),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("redirect_uri", self.config.redirect_uri.as_str()),
            ("grant_type", "authorization_code"),
        ];

        let response = self
            .http
            .post(&self.config.token_uri)
            .header(ACCEPT, "application/json")
            .form(&params)
            .send()
            .await
            .provider_context(&format!("{} 토큰 요청 실패", self.config.provider.display_name()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ProviderError(format!(
                "{} 토큰 교환 실패 ({}): {}",
                self.config.provider.display_name(),
                status,
                error_text
            )));
        }

        response
            .json::<OAuthTokenResponse>()
            .await
            .provider_context("토큰 응답 파싱 실패")?
            .into_access_token()
            .map_err(|e| AppError::ProviderError(format!("토큰 교환 거부: {}", e)))
    }

    async fn fetch_profile(&self, access_token: &str) -> AppResult<ProviderIdentity> {
        let response = self
            .http
            .get(&self.config.profile_uri)
            .header(ACCEPT, "application/json")
            .bearer_auth(access_token)
            .send()
            .await
            .provider_context(&format!("{} 프로필 요청 실패", self.config.provider.display_name()))?;

        if !response.status().is_success() {
            return Err(AppError::ProviderError(format!(
                "{} 프로필 조회 실패: {}",
                self.config.provider.display_name(),
                response.status()
            )));
        }

        let body = response.text().await.provider_context("프로필 응답 수신 실패")?;

        ProviderIdentity::from_profile(self.config.provider, &body)
            .provider_context("프로필 응답 파싱 실패")
    }
}

#[async_trait]
impl IdentityProvider for OAuthClient {
    fn provider(&self) -> AuthProvider {
        self.config.provider
    }

    fn authorization_url(&self, state: &str) -> String {
        let params = [
            ("client_id", self.config.client_id.as_str()),
            ("redirect_uri", self.config.redirect_uri.as_str()),
            ("scope", self.config.scope.as_str()),
            ("response_type", "code"),
            ("state", state),
        ];

        let query_string = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{}", self.config.auth_uri, query_string)
    }

    async fn fetch_identity(&self, code: &str) -> AppResult<ProviderIdentity> {
        let access_token = self.exchange_code_for_token(code).await?;
        let identity = self.fetch_profile(&access_token).await?;

        log::debug!("{} 신원 확인 완료", self.config.provider.display_name());
        Ok(identity)
    }
}

/// 네트워크 없이 code → 공급자 ID 매핑을 돌려주는 테스트용 공급자
#[cfg(test)]
pub struct StubIdentityProvider {
    provider: AuthProvider,
    identities: std::collections::HashMap<String, String>,
}

#[cfg(test)]
impl StubIdentityProvider {
    pub fn new(provider: AuthProvider) -> Self {
        Self {
            provider,
            identities: std::collections::HashMap::new(),
        }
    }

    pub fn with_code(mut self, code: &str, provider_id: &str) -> Self {
        self.identities.insert(code.to_string(), provider_id.to_string());
        self
    }
}

#[cfg(test)]
#[async_trait]
impl IdentityProvider for StubIdentityProvider {
    fn provider(&self) -> AuthProvider {
        self.provider
    }

    fn authorization_url(&self, state: &str) -> String {
        format!("https://provider.test/{}/authorize?state={}", self.provider, state)
    }

    async fn fetch_identity(&self, code: &str) -> AppResult<ProviderIdentity> {
        self.identities
            .get(code)
            .map(|id| ProviderIdentity::new(self.provider, id.clone()))
            .ok_or_else(|| AppError::ProviderError(format!("unknown code: {}", code)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn github_client() -> OAuthClient {
        let config = OAuthProviderConfig::github(
            "client id".to_string(),
            "client-secret".to_string(),
            "https://secrets.example.com",
        );
        OAuthClient::new(config, Duration::from_secs(10)).unwrap()
    }

    #[test]
    fn test_authorization_url_contains_encoded_params() {
        let url = github_client().authorization_url("abc123");

        assert!(url.starts_with("https://github.com/login/oauth/authorize?"));
        assert!(url.contains("client_id=client%20id"));
        assert!(url.contains("redirect_uri=https%3A%2F%2Fsecrets.example.com%2Fauth%2Fgithub%2Fsecrets"));
        assert!(url.contains("scope=profile"));
        assert!(url.contains("response_type=code"));
        assert!(url.contains("state=abc123"));
        assert!(!url.contains("client-secret"));
    }

    #[actix_web::test]
    async fn test_stub_provider() {
        let stub = StubIdentityProvider::new(AuthProvider::Google).with_code("good", "g-42");

        let identity = stub.fetch_identity("good").await.unwrap();
        assert_eq!(identity, ProviderIdentity::new(AuthProvider::Google, "g-42"));
        assert!(matches!(stub.fetch_identity("bad").await, Err(AppError::ProviderError(_))));
    }

    /// 연결은 받지만 응답하지 않는 토큰 엔드포인트
    fn silent_token_endpoint() -> String {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        std::thread::spawn(move || {
            if let Ok((stream, _)) = listener.accept() {
                std::thread::sleep(Duration::from_secs(5));
                drop(stream);
            }
        });

        format!("http://{}/login/oauth/access_token", addr)
    }

    #[actix_web::test]
    async fn test_token_exchange_timeout_is_provider_error() {
        let mut config = OAuthProviderConfig::github(
            "client id".to_string(),
            "client-secret".to_string(),
            "https://secrets.example.com",
        );
        config.token_uri = silent_token_endpoint();
        let client = OAuthClient::new(config, Duration::from_secs(1)).unwrap();

        let started = std::time::Instant::now();
        let result = client.fetch_identity("code").await;

        assert!(matches!(result, Err(AppError::ProviderError(_))));
        assert!(started.elapsed() < Duration::from_secs(4));
    }

    #[actix_web::test]
    async fn test_unreachable_token_endpoint_is_provider_error() {
        let addr = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap();

        let mut config = OAuthProviderConfig::google(
            "gid".to_string(),
            "gsecret".to_string(),
            "https://secrets.example.com",
        );
        config.token_uri = format!("http://{}/token", addr);
        let client = OAuthClient::new(config, Duration::from_secs(1)).unwrap();

        assert!(matches!(client.fetch_identity("code").await, Err(AppError::ProviderError(_))));
    }
}
