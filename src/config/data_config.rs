//! 실행 환경과 비밀번호 해싱 강도
//!
//! `ENVIRONMENT` 값은 bcrypt cost 기본값을 고르는 데에만 쓰입니다.

/// 실행 환경 (`ENVIRONMENT`)
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    /// 알 수 없는 값도 여기로 분류
    Production,
}

impl Environment {
    /// 대소문자 무관, 약어(`dev`, `stage`) 허용
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Self::Development,
            "test" | "testing" => Self::Test,
            "staging" | "stage" => Self::Staging,
            _ => Self::Production,
        }
    }
}

/// 패스워드 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// bcrypt가 허용하는 cost 범위
    pub const COST_RANGE: std::ops::RangeInclusive<u32> = 4..=31;

    /// `BCRYPT_COST` 값과 실행 환경으로부터 bcrypt cost를 결정합니다.
    ///
    /// 값이 없거나 범위를 벗어나면 환경별 기본값을 사용합니다.
    pub fn bcrypt_cost(raw: Option<&str>, env: &Environment) -> u32 {
        raw.and_then(|s| s.trim().parse::<u32>().ok())
            .filter(|cost| Self::COST_RANGE.contains(cost))
            .unwrap_or_else(|| Self::bcrypt_cost_for_env(env))
    }

    /// 환경별 기본 cost (dev/test 4, staging 10, production 12)
    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development | Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}
