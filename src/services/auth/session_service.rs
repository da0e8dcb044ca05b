//! # 세션 관리 서비스
//!
//! ```text
//!              create / establish
//!  Anonymous ─────────────────────► Authenticated(user_id)
//!      ▲                                   │  │
//!      │   destroy, 만료, 무효 토큰          │  │ 유효한 토큰으로 재요청
//!      └───────────────────────────────────┘  └──► Authenticated(user_id)
//! ```
//!
//! 토큰은 클라이언트 쿠키로만 전달되고, 저장소에는 SHA-256 다이제스트만 키로 남습니다.

use std::sync::Arc;
use crate::{
    domain::models::auth::{SessionRecord, SessionState},
    errors::AppResult,
    repositories::{sessions::SessionStore, users::UserStore},
    utils::string_utils::{random_token, token_digest},
};

#[derive(Clone)]
pub struct SessionService {
    store: Arc<dyn SessionStore>,
    users: Arc<dyn UserStore>,
    ttl_seconds: u64,
}

impl SessionService {
    pub fn new(store: Arc<dyn SessionStore>, users: Arc<dyn UserStore>, ttl_seconds: u64) -> Self {
        Self { store, users, ttl_seconds }
    }

    fn storage_key(token: &str) -> String {
        format!("session:{}", token_digest(token))
    }

    /// 새 세션을 만들고 토큰을 반환합니다.
    pub async fn create(&self, user_id: &str) -> AppResult<String> {
        let token = random_token();
        let record = SessionRecord::new(user_id, self.ttl_seconds);

        self.store
            .save(&Self::storage_key(&token), &record, self.ttl_seconds)
            .await?;

        log::debug!("세션 생성: 사용자 ID {}", user_id);
        Ok(token)
    }

    /// 토큰을 사용자 ID로 해석합니다.
    ///
    /// 세션이 없거나 만료되었거나, 가리키는 사용자가 더 이상 없으면 `None`
    pub async fn resolve(&self, token: &str) -> AppResult<Option<String>> {
        let Some(record) = self.store.load(&Self::storage_key(token)).await? else {
            return Ok(None);
        };

        if self.users.find_by_id(&record.user_id).await?.is_none() {
            log::warn!("존재하지 않는 사용자를 가리키는 세션: {}", record.user_id);
            return Ok(None);
        }

        Ok(Some(record.user_id))
    }

    /// 세션을 삭제합니다. 이미 없는 세션이어도 성공입니다.
    pub async fn destroy(&self, token: &str) -> AppResult<()> {
        self.store.remove(&Self::storage_key(token)).await
    }

    /// 인증 성공 후 세션을 시작합니다.
    ///
    /// 요청에 실려 온 기존 세션은 먼저 폐기하여 세션 고정을 막습니다.
    pub async fn establish(&self, previous_token: Option<&str>, user_id: &str) -> AppResult<String> {
        if let Some(previous) = previous_token {
            self.destroy(previous).await?;
        }
        self.create(user_id).await
    }

    /// 요청의 세션 상태
    ///
    /// 저장소 오류는 로그를 남기고 `Anonymous`로 취급합니다.
    pub async fn state(&self, token: Option<&str>) -> SessionState {
        let Some(token) = token else {
            return SessionState::Anonymous;
        };

        match self.resolve(token).await {
            Ok(Some(user_id)) => SessionState::Authenticated(user_id),
            Ok(None) => SessionState::Anonymous,
            Err(e) => {
                log::error!("세션 해석 실패: {}", e);
                SessionState::Anonymous
            }
        }
    }
}
