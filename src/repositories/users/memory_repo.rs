//! 프로세스 내 사용자 저장소
//!
//! `DB_URL=memory://` 설정이나 테스트에서 사용됩니다.
//! 모든 변경은 하나의 쓰기 락 안에서 검사와 갱신을 함께 수행하므로
//! MongoDB 구현과 같은 유일성/원자성 보장을 가집니다.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, DateTime};
use crate::{
    config::AuthProvider,
    domain::entities::users::user::User,
    errors::{AppError, AppResult},
};
use super::UserStore;

#[derive(Default)]
pub struct MemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, Vec<User>>> {
        self.users
            .read()
            .map_err(|_| AppError::StorageError("사용자 저장소 락 오염".to_string()))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, Vec<User>>> {
        self.users
            .write()
            .map_err(|_| AppError::StorageError("사용자 저장소 락 오염".to_string()))
    }

    fn matches_id(user: &User, id: &str) -> bool {
        user.id_string().as_deref() == Some(id)
    }

    #[cfg(test)]
    pub(crate) fn count_by_username(&self, username: &str) -> usize {
        self.users
            .read()
            .unwrap()
            .iter()
            .filter(|u| u.username.as_deref() == Some(username))
            .count()
    }
}

#[async_trait]
impl UserStore for MemoryUserRepository {
    async fn create(&self, mut user: User) -> AppResult<User> {
        let mut users = self.write()?;

        if let Some(username) = user.username.as_deref() {
            if users.iter().any(|u| u.username.as_deref() == Some(username)) {
                return Err(AppError::DuplicateUsername);
            }
        }

        user.id = Some(ObjectId::new());
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        Ok(self.read()?.iter().find(|u| Self::matches_id(u, id)).cloned())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self
            .read()?
            .iter()
            .find(|u| u.username.as_deref() == Some(username))
            .cloned())
    }

    async fn find_by_provider(&self, provider: AuthProvider, provider_id: &str) -> AppResult<Option<User>> {
        Ok(self
            .read()?
            .iter()
            .find(|u| u.provider_id(provider) == Some(provider_id))
            .cloned())
    }

    async fn find_or_create_by_provider(&self, provider: AuthProvider, provider_id: &str) -> AppResult<User> {
        let mut users = self.write()?;

        if let Some(existing) = users.iter().find(|u| u.provider_id(provider) == Some(provider_id)) {
            return Ok(existing.clone());
        }

        let mut user = User::new_federated(provider, provider_id.to_string());
        user.id = Some(ObjectId::new());
        users.push(user.clone());
        Ok(user)
    }

    async fn link_provider(&self, user_id: &str, provider: AuthProvider, provider_id: &str) -> AppResult<Option<User>> {
        let mut users = self.write()?;

        if users
            .iter()
            .any(|u| u.provider_id(provider) == Some(provider_id) && !Self::matches_id(u, user_id))
        {
            return Err(AppError::DuplicateIdentity);
        }

        let Some(user) = users.iter_mut().find(|u| Self::matches_id(u, user_id)) else {
            return Ok(None);
        };

        if user.provider_id(provider).is_some_and(|bound| bound != provider_id) {
            return Ok(None);
        }

        user.set_provider_id(provider, provider_id.to_string());
        user.updated_at = DateTime::now();
        Ok(Some(user.clone()))
    }

    async fn set_secret(&self, user_id: &str, secret: &str) -> AppResult<Option<User>> {
        let mut users = self.write()?;

        Ok(users.iter_mut().find(|u| Self::matches_id(u, user_id)).map(|user| {
            user.secret = Some(secret.to_string());
            user.updated_at = DateTime::now();
            user.clone()
        }))
    }

    async fn find_with_secrets(&self) -> AppResult<Vec<User>> {
        Ok(self
            .read()?
            .iter()
            .filter(|u| u.secret.is_some())
            .cloned()
            .collect())
    }
}
