//! User Entity Implementation
//!
//! 로컬 자격 증명과 외부 공급자 ID를 함께 가질 수 있는 단일 사용자 모델입니다.
//! 각 바인딩은 선택적 필드로 표현되며, 유일성은 저장소 계층의 인덱스가 보장합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::config::AuthProvider;

/// 사용자 엔티티
///
/// - `username` + `password_hash`: 로컬 계정 (항상 함께 존재)
/// - `google_id`, `github_id`: 외부 공급자 바인딩
/// - `secret`: 본인 세션에서만 기록되는 자유 텍스트
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 로컬 로그인용 사용자명 (unique)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// bcrypt 해시 (솔트 포함)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl User {
    /// 새 로컬 사용자 생성
    pub fn new_local(username: String, password_hash: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            username: Some(username),
            password_hash: Some(password_hash),
            google_id: None,
            github_id: None,
            secret: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// 공급자 ID 하나만 가진 최소 사용자 생성
    pub fn new_federated(provider: AuthProvider, provider_id: String) -> Self {
        let now = DateTime::now();
        let mut user = Self {
            id: None,
            username: None,
            password_hash: None,
            google_id: None,
            github_id: None,
            secret: None,
            created_at: now,
            updated_at: now,
        };
        user.set_provider_id(provider, provider_id);
        user
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 공급자별 바인딩된 ID
    pub fn provider_id(&self, provider: AuthProvider) -> Option<&str> {
        match provider {
            AuthProvider::Google => self.google_id.as_deref(),
            AuthProvider::GitHub => self.github_id.as_deref(),
        }
    }

    pub fn set_provider_id(&mut self, provider: AuthProvider, provider_id: String) {
        match provider {
            AuthProvider::Google => self.google_id = Some(provider_id),
            AuthProvider::GitHub => self.github_id = Some(provider_id),
        }
    }

    /// 비밀번호 인증이 가능한 사용자인지 확인
    pub fn can_authenticate_with_password(&self) -> bool {
        self.username.is_some() && self.password_hash.is_some()
    }
}
