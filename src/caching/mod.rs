//! 캐싱 계층 모듈
//!
//! Redis 키-값 저장소 접근을 제공합니다. 세션 저장소가 이 클라이언트 위에 구현됩니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::caching::redis::RedisClient;
//!
//! let redis = RedisClient::new("redis://localhost:6379").await?;
//! redis.set_with_expiry("session:abc", &record, 86400).await?;
//! let record: Option<SessionRecord> = redis.get("session:abc").await?;
//! redis.del("session:abc").await?;
//! ```

pub mod redis;
