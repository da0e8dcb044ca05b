//! 세션 데이터 액세스 계층
//!
//! 키는 `session:<토큰 다이제스트>` 형식이며, 토큰 원문은 저장되지 않습니다.

pub mod redis_session_repo;
pub mod memory_session_repo;

pub use redis_session_repo::RedisSessionRepository;
pub use memory_session_repo::MemorySessionRepository;

use async_trait::async_trait;
use crate::domain::models::auth::SessionRecord;
use crate::errors::AppResult;

/// 세션 저장소
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// TTL(초)과 함께 레코드를 저장합니다.
    async fn save(&self, key: &str, record: &SessionRecord, ttl_seconds: u64) -> AppResult<()>;

    /// 만료되지 않은 레코드만 반환합니다.
    async fn load(&self, key: &str) -> AppResult<Option<SessionRecord>>;

    /// 레코드를 삭제합니다. 없는 키여도 성공입니다.
    async fn remove(&self, key: &str) -> AppResult<()>;
}
