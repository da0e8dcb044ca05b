//! 애플리케이션 설정 로딩
//!
//! 모든 환경 변수를 시작 시점에 한 번 읽어 [`AppConfig`]로 만듭니다.
//! 이후 [`AuthContext`](crate::core::AuthContext)가 이 값으로 구성됩니다.

use std::env;
use crate::config::{AuthProvider, Environment, OAuthProviderConfig, PasswordConfig};
use crate::errors::{AppError, AppResult};

/// 기본 리슨 포트
pub const DEFAULT_PORT: u16 = 5000;

/// 기본 세션 유효 시간 (초)
pub const DEFAULT_SESSION_TTL_SECONDS: u64 = 86_400;

/// 기본 OAuth 외부 호출 타임아웃 (초)
pub const DEFAULT_OAUTH_TIMEOUT_SECONDS: u64 = 10;

/// 시작 시점에 구성되는 전체 설정
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// 세션 쿠키 서명 키 원문 (`SECRET_COOKIE`)
    pub secret_cookie: String,
    /// 자격 증명 저장소 연결 문자열 (`DB_URL`)
    pub db_url: String,
    /// MongoDB 데이터베이스 이름
    pub database_name: String,
    /// 세션 저장소 Redis URL. 없으면 프로세스 내 저장소 사용
    pub redis_url: Option<String>,
    /// 외부에서 접근 가능한 기본 URL (`APP_NAME`)
    pub app_base_url: String,
    pub host: String,
    pub port: u16,
    pub session_ttl_seconds: u64,
    pub oauth_timeout_seconds: u64,
    pub bcrypt_cost: u32,
    /// 자격 증명이 모두 설정된 공급자만 포함
    pub providers: Vec<OAuthProviderConfig>,
}

impl AppConfig {
    /// 프로세스 환경 변수에서 설정을 읽습니다.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 임의의 키 조회 함수로부터 설정을 구성합니다.
    ///
    /// 빈 문자열은 설정되지 않은 것으로 취급합니다.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let secret_cookie = get("SECRET_COOKIE")
            .ok_or_else(|| AppError::ConfigError("SECRET_COOKIE must be set".to_string()))?;

        let port = match get("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| AppError::ConfigError(format!("PORT 파싱 실패 ({}): {}", raw, e)))?,
            None => DEFAULT_PORT,
        };

        let app_base_url = get("APP_NAME")
            .unwrap_or_else(|| format!("http://localhost:{}", port))
            .trim_end_matches('/')
            .to_string();

        let environment = Environment::from_str(&get("ENVIRONMENT").unwrap_or_else(|| "production".to_string()));
        let bcrypt_cost = PasswordConfig::bcrypt_cost(get("BCRYPT_COST").as_deref(), &environment);

        let session_ttl_seconds = parse_positive(get("SESSION_TTL_SECONDS"), DEFAULT_SESSION_TTL_SECONDS, "SESSION_TTL_SECONDS")?;
        let oauth_timeout_seconds = parse_positive(get("OAUTH_TIMEOUT_SECONDS"), DEFAULT_OAUTH_TIMEOUT_SECONDS, "OAUTH_TIMEOUT_SECONDS")?;

        let mut providers = Vec::new();
        for provider in AuthProvider::ALL {
            let prefix = provider.as_str().to_uppercase();
            let client_id = get(&format!("{}_CLIENT_ID", prefix));
            let client_secret = get(&format!("{}_CLIENT_SECRET", prefix));

            match (client_id, client_secret) {
                (Some(id), Some(secret)) => providers.push(match provider {
                    AuthProvider::Google => OAuthProviderConfig::google(id, secret, &app_base_url),
                    AuthProvider::GitHub => OAuthProviderConfig::github(id, secret, &app_base_url),
                }),
                _ => log::warn!("{} OAuth 자격 증명이 없어 비활성화됩니다", provider.display_name()),
            }
        }

        Ok(Self {
            secret_cookie,
            db_url: get("DB_URL").unwrap_or_else(|| "mongodb://localhost:27017".to_string()),
            database_name: get("DATABASE_NAME").unwrap_or_else(|| "secrets".to_string()),
            redis_url: get("REDIS_URL"),
            app_base_url,
            host: get("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            session_ttl_seconds,
            oauth_timeout_seconds,
            bcrypt_cost,
            providers,
        })
    }

    /// 자격 증명 저장소로 프로세스 내 저장소를 사용하는지 여부
    pub fn uses_memory_store(&self) -> bool {
        self.db_url.starts_with("memory:")
    }

    /// 쿠키에 Secure 속성을 붙여야 하는지 여부
    pub fn secure_cookies(&self) -> bool {
        self.app_base_url.starts_with("https://")
    }

    /// 바인딩 주소
    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

/// 초 단위 값은 unix 타임스탬프 연산에 쓰이므로 `i64::MAX`를 넘을 수 없습니다.
fn parse_positive(raw: Option<String>, default: u64, key: &str) -> AppResult<u64> {
    match raw {
        None => Ok(default),
        Some(raw) => match raw.parse::<u64>() {
            Ok(0) => Err(AppError::ConfigError(format!("{}는 0보다 커야 합니다", key))),
            Ok(value) if value > i64::MAX as u64 => {
                Err(AppError::ConfigError(format!("{} 값이 너무 큽니다 ({})", key, raw)))
            }
            Ok(value) => Ok(value),
            Err(e) => Err(AppError::ConfigError(format!("{} 파싱 실패 ({}): {}", key, raw, e))),
        },
    }
}
