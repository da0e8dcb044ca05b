//! Redis 세션 저장소
//!
//! 만료는 Redis `SETEX` TTL에 맡기므로 여러 인스턴스가 같은 세션을 공유할 수 있습니다.

use async_trait::async_trait;
use crate::{
    caching::redis::RedisClient,
    domain::models::auth::SessionRecord,
    errors::AppResult,
};
use super::SessionStore;

#[derive(Clone)]
pub struct RedisSessionRepository {
    redis: RedisClient,
}

impl RedisSessionRepository {
    pub fn new(redis: RedisClient) -> Self {
        Self { redis }
    }
}

#[async_trait]
impl SessionStore for RedisSessionRepository {
    async fn save(&self, key: &str, record: &SessionRecord, ttl_seconds: u64) -> AppResult<()> {
        Ok(self.redis.set_with_expiry(key, record, ttl_seconds).await?)
    }

    async fn load(&self, key: &str) -> AppResult<Option<SessionRecord>> {
        let record: Option<SessionRecord> = self.redis.get(key).await?;
        Ok(record.filter(|r| !r.is_expired()))
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        Ok(self.redis.del(key).await?)
    }
}
