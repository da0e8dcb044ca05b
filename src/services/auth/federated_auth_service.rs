//! # 외부 공급자 인증 서비스
//!
//! 공급자가 확인해 준 `(provider, provider_id)`를 사용자 레코드로 해석합니다.
//!
//! ## 해석 정책
//!
//! | 현재 세션 | provider_id 바인딩 | 결과 |
//! |-----------|--------------------|------|
//! | 없음 | 있음 | 바인딩된 사용자 |
//! | 없음 | 없음 | 새 사용자 생성 |
//! | 있음 | 있음 | 바인딩된 사용자 |
//! | 있음 | 없음 | 현재 사용자에 연결 (이미 다른 ID가 있으면 새 사용자 생성) |

use std::sync::Arc;
use crate::{
    config::AuthProvider,
    domain::{entities::users::user::User, models::oauth::ProviderIdentity},
    errors::{AppError, AppResult},
    repositories::users::UserStore,
    services::auth::oauth_client::IdentityProvider,
};

#[derive(Clone)]
pub struct FederatedAuthService {
    users: Arc<dyn UserStore>,
}

impl FederatedAuthService {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// 공급자 ID로 사용자를 찾고, 없으면 그 ID만 가진 사용자를 만듭니다.
    ///
    /// 저장소의 원자적 upsert에 위임하므로 같은 ID로 동시에 호출되어도 사용자는 하나입니다.
    pub async fn find_or_create(&self, provider: AuthProvider, provider_id: &str) -> AppResult<User> {
        let user = self.users.find_or_create_by_provider(provider, provider_id).await?;
        log::info!("{} 사용자 로그인: {}", provider.display_name(), user.id_string().unwrap_or_default());
        Ok(user)
    }

    /// 현재 세션을 고려하여 외부 신원을 사용자로 해석합니다.
    pub async fn resolve_identity(&self, identity: &ProviderIdentity, current_user_id: Option<&str>) -> AppResult<User> {
        let ProviderIdentity { provider, provider_id } = identity;

        let Some(current_user_id) = current_user_id else {
            return self.find_or_create(*provider, provider_id).await;
        };

        if let Some(existing) = self.users.find_by_provider(*provider, provider_id).await? {
            return Ok(existing);
        }

        match self.users.link_provider(current_user_id, *provider, provider_id).await {
            Ok(Some(linked)) => {
                log::info!("{} 계정 연결: 사용자 ID {}", provider.display_name(), current_user_id);
                Ok(linked)
            }
            Ok(None) => self.find_or_create(*provider, provider_id).await,
            // 조회와 연결 사이에 다른 요청이 같은 ID를 가져간 경우
            Err(AppError::DuplicateIdentity) => self.find_or_create(*provider, provider_id).await,
            Err(e) => Err(e),
        }
    }

    /// Authorization Code 교환부터 사용자 해석까지 수행합니다.
    pub async fn authenticate(
        &self,
        provider: &dyn IdentityProvider,
        code: &str,
        current_user_id: Option<&str>,
    ) -> AppResult<User> {
        let identity = provider.fetch_identity(code).await?;
        self.resolve_identity(&identity, current_user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::users::MemoryUserRepository;
    use crate::services::auth::oauth_client::StubIdentityProvider;

    fn service() -> (FederatedAuthService, Arc<MemoryUserRepository>) {
        let repo = Arc::new(MemoryUserRepository::new());
        (FederatedAuthService::new(repo.clone()), repo)
    }

    #[actix_web::test]
    async fn test_find_or_create_is_idempotent() {
        let (federated, _) = service();

        let first = federated.find_or_create(AuthProvider::Google, "g-42").await.unwrap();
        let second = federated.find_or_create(AuthProvider::Google, "g-42").await.unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(first.google_id.as_deref(), Some("g-42"));
        assert!(first.username.is_none());
        assert!(first.password_hash.is_none());
    }

    #[actix_web::test]
    async fn test_racing_find_or_create_yields_one_user() {
        let (federated, repo) = service();

        let (a, b) = futures_util::future::join(
            federated.find_or_create(AuthProvider::Google, "g-42"),
            federated.find_or_create(AuthProvider::Google, "g-42"),
        )
        .await;

        assert_eq!(a.unwrap().id, b.unwrap().id);
        let bound = repo.find_by_provider(AuthProvider::Google, "g-42").await.unwrap();
        assert!(bound.is_some());
    }

    #[actix_web::test]
    async fn test_identity_linked_onto_current_user() {
        let (federated, repo) = service();
        let alice = repo
            .create(User::new_local("alice".to_string(), "$2b$04$hash".to_string()))
            .await
            .unwrap();
        let alice_id = alice.id_string().unwrap();

        let identity = ProviderIdentity::new(AuthProvider::GitHub, "583231");
        let resolved = federated.resolve_identity(&identity, Some(&alice_id)).await.unwrap();

        assert_eq!(resolved.id, alice.id);
        assert_eq!(resolved.github_id.as_deref(), Some("583231"));

        // 로그아웃 후 GitHub으로 로그인하면 같은 사용자
        let again = federated.resolve_identity(&identity, None).await.unwrap();
        assert_eq!(again.id, alice.id);
    }

    #[actix_web::test]
    async fn test_already_bound_identity_wins_over_current_user() {
        let (federated, repo) = service();
        let owner = federated.find_or_create(AuthProvider::GitHub, "1").await.unwrap();
        let bob = repo
            .create(User::new_local("bob".to_string(), "$2b$04$hash".to_string()))
            .await
            .unwrap();

        let identity = ProviderIdentity::new(AuthProvider::GitHub, "1");
        let resolved = federated
            .resolve_identity(&identity, bob.id_string().as_deref())
            .await
            .unwrap();

        assert_eq!(resolved.id, owner.id);
    }

    #[actix_web::test]
    async fn test_authenticate_propagates_provider_error() {
        let (federated, _) = service();
        let stub = StubIdentityProvider::new(AuthProvider::Google).with_code("ok", "g-7");

        let user = federated.authenticate(&stub, "ok", None).await.unwrap();
        assert_eq!(user.google_id.as_deref(), Some("g-7"));

        let result = federated.authenticate(&stub, "expired", None).await;
        assert!(matches!(result, Err(AppError::ProviderError(_))));
    }
}
