//! # 사용자 서비스
//!
//! 비밀은 세션이 가리키는 본인 레코드에만 기록됩니다.
//! 동시에 제출된 비밀은 저장소에서 마지막 쓰기가 이깁니다.

use std::sync::Arc;
use crate::{
    domain::entities::users::user::User,
    errors::{AppError, AppResult},
    repositories::users::UserStore,
};

#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// 현재 사용자의 비밀을 덮어씁니다.
    ///
    /// 세션 해석 이후 사용자가 사라졌다면 `SessionInvalid`
    pub async fn submit_secret(&self, user_id: &str, secret: &str) -> AppResult<User> {
        let user = self
            .users
            .set_secret(user_id, secret)
            .await?
            .ok_or(AppError::SessionInvalid)?;

        log::info!("비밀 제출: 사용자 ID {}", user_id);
        Ok(user)
    }

    /// 비밀이 기록된 모든 사용자의 비밀 텍스트
    pub async fn list_secrets(&self) -> AppResult<Vec<String>> {
        Ok(self
            .users
            .find_with_secrets()
            .await?
            .into_iter()
            .filter_map(|user| user.secret)
            .collect())
    }
}
