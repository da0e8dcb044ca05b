//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 저장소는 trait으로 추상화되어 있으며, 서비스 계층은 `Arc<dyn ...>`로만 접근합니다.
//!
//! | trait | 운영 구현 | 프로세스 내 구현 |
//! |-------|-----------|------------------|
//! | [`UserStore`](users::UserStore) | MongoDB | `MemoryUserRepository` |
//! | [`SessionStore`](sessions::SessionStore) | Redis | `MemorySessionRepository` |
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::{MongoUserRepository, UserStore};
//!
//! let users: Arc<dyn UserStore> = Arc::new(MongoUserRepository::new(&database));
//! let user = users.find_by_username("alice").await?;
//! ```

pub mod users;
pub mod sessions;
