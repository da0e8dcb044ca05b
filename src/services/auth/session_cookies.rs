//! # 서명 쿠키
//!
//! 세션 토큰(`secrets.sid`)과 OAuth state(`oauth_state`)를 담는 쿠키를 만들고 검증합니다.
//! 서명 키는 `SECRET_COOKIE`를 SHA-512로 늘려 만든 64바이트 키입니다.
//! 서명이 맞지 않는 쿠키는 없는 것으로 취급합니다.

use actix_web::cookie::{time::Duration, Cookie, CookieJar, Key, SameSite};
use actix_web::HttpRequest;
use sha2::{Digest, Sha512};
use crate::config::{AuthProvider, OAUTH_STATE_TTL_SECONDS};

/// 세션 토큰 쿠키 이름
pub const SESSION_COOKIE: &str = "secrets.sid";

/// OAuth state 쿠키 이름
pub const OAUTH_STATE_COOKIE: &str = "oauth_state";

#[derive(Clone)]
pub struct SessionCookies {
    key: Key,
    secure: bool,
    session_ttl_seconds: u64,
}

impl SessionCookies {
    pub fn new(secret: &str, secure: bool, session_ttl_seconds: u64) -> Self {
        let digest = Sha512::digest(secret.as_bytes());

        Self {
            key: Key::from(digest.as_slice()),
            secure,
            session_ttl_seconds,
        }
    }

    fn base(&self, name: &'static str, value: String, max_age: Duration) -> Cookie<'static> {
        Cookie::build(name, value)
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure)
            .max_age(max_age)
            .finish()
    }

    /// 쿠키 값을 서명합니다. 속성은 그대로 유지됩니다.
    fn sign(&self, cookie: Cookie<'static>) -> Cookie<'static> {
        let name = cookie.name().to_string();
        let mut jar = CookieJar::new();
        jar.signed_mut(&self.key).add(cookie.clone());
        jar.get(&name).cloned().unwrap_or(cookie)
    }

    /// 요청의 서명 쿠키 값을 검증하여 반환합니다.
    fn verified_value(&self, cookie: Option<Cookie<'static>>) -> Option<String> {
        let cookie = cookie?;
        let name = cookie.name().to_string();
        let mut jar = CookieJar::new();
        jar.add_original(cookie);
        jar.signed(&self.key).get(&name).map(|c| c.value().to_string())
    }

    fn removal(&self, name: &'static str) -> Cookie<'static> {
        let mut cookie = self.base(name, String::new(), Duration::ZERO);
        cookie.make_removal();
        cookie
    }

    /// 세션 토큰 쿠키
    pub fn session_cookie(&self, token: &str) -> Cookie<'static> {
        let max_age = Duration::seconds(self.session_ttl_seconds.min(i64::MAX as u64) as i64);
        self.sign(self.base(SESSION_COOKIE, token.to_string(), max_age))
    }

    pub fn session_removal(&self) -> Cookie<'static> {
        self.removal(SESSION_COOKIE)
    }

    /// 요청에 실린 세션 토큰 (서명 검증 후)
    pub fn session_token(&self, req: &HttpRequest) -> Option<String> {
        self.verified_value(req.cookie(SESSION_COOKIE))
    }

    /// `<provider>:<state>` 형식의 OAuth state 쿠키
    pub fn oauth_state_cookie(&self, provider: AuthProvider, state: &str) -> Cookie<'static> {
        let value = format!("{}:{}", provider.as_str(), state);
        self.sign(self.base(OAUTH_STATE_COOKIE, value, Duration::seconds(OAUTH_STATE_TTL_SECONDS)))
    }

    pub fn oauth_state_removal(&self) -> Cookie<'static> {
        self.removal(OAUTH_STATE_COOKIE)
    }

    /// 콜백의 `state`가 이 공급자로 발급한 쿠키 값과 일치하는지 확인합니다.
    pub fn oauth_state_matches(&self, req: &HttpRequest, provider: AuthProvider, state: Option<&str>) -> bool {
        let (Some(stored), Some(state)) = (self.verified_value(req.cookie(OAUTH_STATE_COOKIE)), state) else {
            return false;
        };

        match stored.split_once(':') {
            Some((stored_provider, stored_state)) => {
                stored_provider == provider.as_str() && !stored_state.is_empty() && stored_state == state
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    fn cookies() -> SessionCookies {
        SessionCookies::new("keyboard cat", false, 3600)
    }

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = cookies().session_cookie("token-value");

        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_ne!(cookie.value(), "token-value");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(Duration::seconds(3600)));
    }

    #[test]
    fn test_signed_session_cookie_round_trip() {
        let cookies = cookies();
        let cookie = cookies.session_cookie("token-value");

        let req = TestRequest::default().cookie(cookie).to_http_request();
        assert_eq!(cookies.session_token(&req), Some("token-value".to_string()));
    }

    #[test]
    fn test_tampered_or_foreign_cookie_is_rejected() {
        let forged = Cookie::new(SESSION_COOKIE, "token-value");
        let req = TestRequest::default().cookie(forged).to_http_request();
        assert_eq!(cookies().session_token(&req), None);

        let other_key = SessionCookies::new("another secret", false, 3600).session_cookie("token-value");
        let req = TestRequest::default().cookie(other_key).to_http_request();
        assert_eq!(cookies().session_token(&req), None);
    }

    #[test]
    fn test_oauth_state_matching() {
        let cookies = cookies();
        let cookie = cookies.oauth_state_cookie(AuthProvider::GitHub, "s1");
        let req = TestRequest::default().cookie(cookie).to_http_request();

        assert!(cookies.oauth_state_matches(&req, AuthProvider::GitHub, Some("s1")));
        assert!(!cookies.oauth_state_matches(&req, AuthProvider::GitHub, Some("s2")));
        assert!(!cookies.oauth_state_matches(&req, AuthProvider::Google, Some("s1")));
        assert!(!cookies.oauth_state_matches(&req, AuthProvider::GitHub, None));

        let empty = TestRequest::default().to_http_request();
        assert!(!cookies.oauth_state_matches(&empty, AuthProvider::GitHub, Some("s1")));
    }

    #[test]
    fn test_removal_cookie_expires_immediately() {
        let removal = cookies().session_removal();
        assert_eq!(removal.name(), SESSION_COOKIE);
        assert_eq!(removal.value(), "");
        assert_eq!(removal.max_age(), Some(Duration::ZERO));
    }
}
