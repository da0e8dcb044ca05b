//! 사용자 데이터 액세스 계층
//!
//! [`UserStore`]는 사용자 레코드의 조회와 갱신을 추상화합니다.
//! 유일성(사용자명, 공급자 ID)과 find-or-create의 원자성은 구현체가 보장해야 합니다.

pub mod user_repo;
pub mod memory_repo;

pub use user_repo::MongoUserRepository;
pub use memory_repo::MemoryUserRepository;

use async_trait::async_trait;
use crate::config::AuthProvider;
use crate::domain::entities::users::user::User;
use crate::errors::AppResult;

/// 자격 증명 저장소
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 새 사용자 저장
    ///
    /// 사용자명이 이미 존재하면 `AppError::DuplicateUsername`
    async fn create(&self, user: User) -> AppResult<User>;

    /// ID(ObjectId hex)로 조회. 형식이 잘못된 ID는 `None`
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    async fn find_by_provider(&self, provider: AuthProvider, provider_id: &str) -> AppResult<Option<User>>;

    /// 공급자 ID에 바인딩된 사용자를 찾거나 새로 만듭니다.
    ///
    /// 같은 ID로 동시에 호출되어도 사용자는 정확히 하나만 생성됩니다.
    async fn find_or_create_by_provider(&self, provider: AuthProvider, provider_id: &str) -> AppResult<User>;

    /// 기존 사용자에 공급자 ID를 연결합니다.
    ///
    /// - 사용자가 없거나 이미 다른 ID가 연결되어 있으면 `Ok(None)`
    /// - 해당 ID가 다른 사용자에게 연결되어 있으면 `AppError::DuplicateIdentity`
    async fn link_provider(&self, user_id: &str, provider: AuthProvider, provider_id: &str) -> AppResult<Option<User>>;

    /// 사용자의 비밀을 덮어씁니다. 사용자가 없으면 `Ok(None)`
    async fn set_secret(&self, user_id: &str, secret: &str) -> AppResult<Option<User>>;

    /// 비밀이 기록된 모든 사용자
    async fn find_with_secrets(&self) -> AppResult<Vec<User>>;

    /// 저장소 초기화 (인덱스 생성 등)
    async fn ensure_indexes(&self) -> AppResult<()> {
        Ok(())
    }
}
