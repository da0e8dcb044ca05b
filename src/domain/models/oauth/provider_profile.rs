//! 공급자 프로필 모델
//!
//! 각 공급자는 서로 다른 필드로 사용자를 식별합니다.
//! - Google userinfo v3: `sub` (문자열)
//! - GitHub `/user`: `id` (숫자)
//!
//! 식별자 외의 프로필 정보는 저장하지 않습니다.

use serde::Deserialize;
use crate::config::AuthProvider;

/// Google OpenID userinfo 응답
#[derive(Debug, Deserialize)]
pub struct GoogleProfile {
    /// 안정적인 사용자 식별자
    pub sub: String,
}

/// GitHub `/user` 응답
#[derive(Debug, Deserialize)]
pub struct GitHubProfile {
    pub id: i64,
}

/// 공급자와 공급자 내 사용자 ID 쌍
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderIdentity {
    pub provider: AuthProvider,
    pub provider_id: String,
}

impl ProviderIdentity {
    pub fn new(provider: AuthProvider, provider_id: impl Into<String>) -> Self {
        Self {
            provider,
            provider_id: provider_id.into(),
        }
    }

    /// 공급자 프로필 JSON에서 식별자를 추출합니다.
    pub fn from_profile(provider: AuthProvider, body: &str) -> Result<Self, String> {
        let provider_id = match provider {
            AuthProvider::Google => {
                let profile: GoogleProfile = serde_json::from_str(body).map_err(|e| e.to_string())?;
                profile.sub
            }
            AuthProvider::GitHub => {
                let profile: GitHubProfile = serde_json::from_str(body).map_err(|e| e.to_string())?;
                profile.id.to_string()
            }
        };

        if provider_id.is_empty() {
            return Err("빈 사용자 식별자".to_string());
        }

        Ok(Self::new(provider, provider_id))
    }
}
