//! # 로컬 인증 서비스
//!
//! 사용자명/비밀번호 기반의 회원가입과 자격 증명 검증을 담당합니다.
//!
//! bcrypt 해싱/검증은 CPU 집약적이므로 `web::block`으로 블로킹 풀에서 실행합니다.
//! 세션 생성은 호출자(핸들러)의 책임입니다.

use std::sync::Arc;
use actix_web::web;
use crate::{
    domain::entities::users::user::User,
    errors::{AppError, AppResult},
    repositories::users::UserStore,
};

#[derive(Clone)]
pub struct LocalAuthService {
    users: Arc<dyn UserStore>,
    bcrypt_cost: u32,
}

impl LocalAuthService {
    pub fn new(users: Arc<dyn UserStore>, bcrypt_cost: u32) -> Self {
        Self { users, bcrypt_cost }
    }

    /// 새 로컬 사용자 등록
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - 생성된 사용자 (ID 포함)
    /// * `Err(AppError::DuplicateUsername)` - 이미 사용 중인 사용자명
    /// * `Err(AppError::StorageError)` - 저장소 오류
    ///
    /// 사전 조회는 불필요한 해싱을 피하기 위한 것이며,
    /// 동시 등록 경합은 저장소의 유니크 제약이 최종적으로 거부합니다.
    pub async fn register(&self, username: &str, password: &str) -> AppResult<User> {
        if self.users.find_by_username(username).await?.is_some() {
            return Err(AppError::DuplicateUsername);
        }

        let start_time = std::time::Instant::now();
        let password_hash = hash_password(password, self.bcrypt_cost).await?;
        log::debug!("Password hashing took: {:?}", start_time.elapsed());

        let user = self
            .users
            .create(User::new_local(username.to_string(), password_hash))
            .await?;

        log::info!("새 로컬 사용자 등록: {}", username);
        Ok(user)
    }

    /// 사용자명과 비밀번호 검증
    ///
    /// * `Err(AppError::NoSuchUser)` - 알 수 없는 사용자명
    /// * `Err(AppError::InvalidCredential)` - 비밀번호 불일치, 또는 비밀번호가 없는 계정
    pub async fn verify(&self, username: &str, password: &str) -> AppResult<User> {
        let user = self
            .users
            .find_by_username(username)
            .await?
            .ok_or(AppError::NoSuchUser)?;

        let password_hash = match user.password_hash.clone() {
            Some(hash) if user.can_authenticate_with_password() => hash,
            _ => return Err(AppError::InvalidCredential),
        };

        let start_time = std::time::Instant::now();
        let is_valid = verify_password(password, password_hash).await?;
        log::debug!("Password verification took: {:?}", start_time.elapsed());

        if !is_valid {
            return Err(AppError::InvalidCredential);
        }

        Ok(user)
    }
}

async fn hash_password(password: &str, cost: u32) -> AppResult<String> {
    let password = password.to_string();

    web::block(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| AppError::StorageError(format!("해싱 작업 실행 실패: {}", e)))?
        .map_err(|e| AppError::StorageError(format!("비밀번호 해싱 실패: {}", e)))
}

/// 저장된 해시가 손상되어 있으면 자격 증명 불일치로 취급합니다.
async fn verify_password(password: &str, password_hash: String) -> AppResult<bool> {
    let password = password.to_string();

    let outcome = web::block(move || bcrypt::verify(password, &password_hash))
        .await
        .map_err(|e| AppError::StorageError(format!("검증 작업 실행 실패: {}", e)))?;

    match outcome {
        Ok(is_valid) => Ok(is_valid),
        Err(e) => {
            log::warn!("저장된 비밀번호 해시 검증 실패: {}", e);
            Ok(false)
        }
    }
}
