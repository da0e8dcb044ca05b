//! 요청 처리 컨텍스트

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use crate::{
    caching::redis::RedisClient,
    config::{AppConfig, AuthProvider},
    db::Database,
    errors::{AppResult, ErrorContext},
    repositories::{
        sessions::{MemorySessionRepository, RedisSessionRepository, SessionStore},
        users::{MemoryUserRepository, MongoUserRepository, UserStore},
    },
    services::{
        auth::{FederatedAuthService, IdentityProvider, LocalAuthService, OAuthClient, SessionCookies, SessionService},
        users::UserService,
    },
};

/// 핸들러에 전달되는 인증/세션 컨텍스트
///
/// 모든 필드는 내부적으로 `Arc`를 공유하므로 복제 비용이 작습니다.
#[derive(Clone)]
pub struct AuthContext {
    pub local: LocalAuthService,
    pub federated: FederatedAuthService,
    pub sessions: SessionService,
    pub secrets: UserService,
    pub cookies: SessionCookies,
    providers: HashMap<AuthProvider, Arc<dyn IdentityProvider>>,
}

impl AuthContext {
    /// 설정에 따라 저장소에 연결하고 컨텍스트를 구성합니다.
    ///
    /// - `DB_URL=memory://` → 프로세스 내 사용자 저장소
    /// - `REDIS_URL` 미설정 → 프로세스 내 세션 저장소
    pub async fn initialize(config: &AppConfig) -> AppResult<Self> {
        let users: Arc<dyn UserStore> = if config.uses_memory_store() {
            log::warn!("⚠️ 프로세스 내 사용자 저장소 사용 (재시작 시 데이터 소실)");
            Arc::new(MemoryUserRepository::new())
        } else {
            log::info!("📡 MongoDB 연결 중...");
            let database = Database::connect(&config.db_url, &config.database_name).await?;
            Arc::new(MongoUserRepository::new(&database))
        };
        users.ensure_indexes().await?;

        let session_store: Arc<dyn SessionStore> = match &config.redis_url {
            Some(redis_url) => {
                log::info!("📡 Redis 연결 중...");
                let redis = RedisClient::new(redis_url)
                    .await
                    .storage_context("Redis 연결 실패")?;
                Arc::new(RedisSessionRepository::new(redis))
            }
            None => {
                log::warn!("⚠️ 프로세스 내 세션 저장소 사용 (단일 인스턴스 전용)");
                Arc::new(MemorySessionRepository::new())
            }
        };

        Self::build(config, users, session_store)
    }

    /// 이미 준비된 저장소로 컨텍스트를 구성합니다.
    pub fn build(
        config: &AppConfig,
        users: Arc<dyn UserStore>,
        session_store: Arc<dyn SessionStore>,
    ) -> AppResult<Self> {
        let timeout = Duration::from_secs(config.oauth_timeout_seconds);

        let mut providers: Vec<Arc<dyn IdentityProvider>> = Vec::new();
        for provider_config in &config.providers {
            providers.push(Arc::new(OAuthClient::new(provider_config.clone(), timeout)?));
        }

        let cookies = SessionCookies::new(
            &config.secret_cookie,
            config.secure_cookies(),
            config.session_ttl_seconds,
        );

        Ok(Self::from_parts(
            users,
            session_store,
            cookies,
            config.bcrypt_cost,
            config.session_ttl_seconds,
            providers,
        ))
    }

    pub fn from_parts(
        users: Arc<dyn UserStore>,
        session_store: Arc<dyn SessionStore>,
        cookies: SessionCookies,
        bcrypt_cost: u32,
        session_ttl_seconds: u64,
        providers: Vec<Arc<dyn IdentityProvider>>,
    ) -> Self {
        Self {
            local: LocalAuthService::new(users.clone(), bcrypt_cost),
            federated: FederatedAuthService::new(users.clone()),
            sessions: SessionService::new(session_store, users.clone(), session_ttl_seconds),
            secrets: UserService::new(users),
            cookies,
            providers: providers.into_iter().map(|p| (p.provider(), p)).collect(),
        }
    }

    /// 활성화된 공급자. 자격 증명이 설정되지 않은 공급자는 `None`
    pub fn provider(&self, provider: AuthProvider) -> Option<Arc<dyn IdentityProvider>> {
        self.providers.get(&provider).cloned()
    }

    /// 활성화된 공급자 목록 (표시 순서 고정)
    pub fn enabled_providers(&self) -> Vec<AuthProvider> {
        AuthProvider::ALL
            .into_iter()
            .filter(|p| self.providers.contains_key(p))
            .collect()
    }
}
