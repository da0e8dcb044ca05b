//! 프로세스 내 세션 저장소
//!
//! `REDIS_URL`이 없을 때 사용됩니다. 만료된 레코드는 조회 시점과
//! 새 레코드 저장 시점에 제거됩니다.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use async_trait::async_trait;
use crate::{
    domain::models::auth::SessionRecord,
    errors::{AppError, AppResult},
};
use super::SessionStore;

#[derive(Default)]
pub struct MemorySessionRepository {
    sessions: Mutex<HashMap<String, SessionRecord>>,
}

impl MemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> AppResult<MutexGuard<'_, HashMap<String, SessionRecord>>> {
        self.sessions
            .lock()
            .map_err(|_| AppError::StorageError("세션 저장소 락 오염".to_string()))
    }
}

#[async_trait]
impl SessionStore for MemorySessionRepository {
    /// 만료 시각은 레코드의 `expires_at`이 결정합니다.
    /// 저장 전에 만료된 레코드를 모두 쓸어냅니다.
    async fn save(&self, key: &str, record: &SessionRecord, _ttl_seconds: u64) -> AppResult<()> {
        let mut sessions = self.lock()?;
        sessions.retain(|_, existing| !existing.is_expired());
        sessions.insert(key.to_string(), record.clone());
        Ok(())
    }

    async fn load(&self, key: &str) -> AppResult<Option<SessionRecord>> {
        let mut sessions = self.lock()?;

        match sessions.get(key).cloned() {
            Some(record) if record.is_expired() => {
                sessions.remove(key);
                Ok(None)
            }
            record => Ok(record),
        }
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_save_load_remove() {
        let store = MemorySessionRepository::new();
        let record = SessionRecord::new("u1", 60);

        store.save("session:a", &record, 60).await.unwrap();
        assert_eq!(store.load("session:a").await.unwrap(), Some(record));

        store.remove("session:a").await.unwrap();
        assert!(store.load("session:a").await.unwrap().is_none());

        // 없는 키 삭제도 성공
        store.remove("session:a").await.unwrap();
    }

    #[actix_web::test]
    async fn test_expired_record_is_not_returned() {
        let store = MemorySessionRepository::new();
        let expired = SessionRecord {
            user_id: "u1".to_string(),
            created_at: 0,
            expires_at: 1,
        };

        store.save("session:old", &expired, 1).await.unwrap();
        assert!(store.load("session:old").await.unwrap().is_none());
        assert!(store.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_save_sweeps_expired_records_under_other_keys() {
        let store = MemorySessionRepository::new();
        let expired = SessionRecord {
            user_id: "u1".to_string(),
            created_at: 0,
            expires_at: 1,
        };

        for i in 0..100 {
            store.save(&format!("session:old-{}", i), &expired, 1).await.unwrap();
        }

        let live = SessionRecord::new("u2", 60);
        store.save("session:live", &live, 60).await.unwrap();

        let sessions = store.lock().unwrap();
        assert_eq!(sessions.len(), 1);
        assert!(sessions.contains_key("session:live"));
    }
}
