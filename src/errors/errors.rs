//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 인증/세션 흐름에서 발생하는 모든 실패를 하나의 열거형으로 표현합니다.
//! `thiserror`로 메시지를 정의하고 `actix_web::ResponseError`를 구현하여,
//! 요청 경계까지 전파된 에러는 상세 정보 없이 리다이렉트로 변환됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn verify(username: &str) -> Result<User, AppError> {
//!     let user = store.find_by_username(username).await?
//!         .ok_or(AppError::NoSuchUser)?;
//!     Ok(user)
//! }
//! ```

use actix_web::http::header;
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 클라이언트에게는 어떤 에러 정보도 노출하지 않으며, 에러 종류에 따라
/// `/register`, `/login`, `/` 중 하나로 리다이렉트됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 이미 다른 사용자가 사용 중인 사용자명
    #[error("Username is already registered")]
    DuplicateUsername,

    /// 존재하지 않는 사용자명
    #[error("No such user")]
    NoSuchUser,

    /// 비밀번호 불일치 또는 비밀번호가 없는 계정
    #[error("Invalid credential")]
    InvalidCredential,

    /// OAuth 프로바이더와의 교환 실패 (타임아웃 포함)
    #[error("Provider error: {0}")]
    ProviderError(String),

    /// 자격 증명 저장소 또는 세션 저장소 오류
    #[error("Storage error: {0}")]
    StorageError(String),

    /// 세션이 없거나 만료되었거나 유효하지 않음
    #[error("Session is missing or invalid")]
    SessionInvalid,

    /// 연동하려는 프로바이더 ID가 이미 다른 사용자에게 바인딩됨
    #[error("Provider identity is already bound to another user")]
    DuplicateIdentity,

    /// 폼 입력값 검증 실패
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 시작 시점 설정 오류
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl AppError {
    /// 에러에 대응하는 리다이렉트 경로
    pub fn redirect_target(&self) -> &'static str {
        match self {
            AppError::DuplicateUsername | AppError::ValidationError(_) => "/register",
            AppError::NoSuchUser
            | AppError::InvalidCredential
            | AppError::ProviderError(_)
            | AppError::SessionInvalid
            | AppError::DuplicateIdentity => "/login",
            AppError::StorageError(_) | AppError::ConfigError(_) => "/",
        }
    }

    /// 사용자 입력이나 외부 요인에 의한 실패인지 여부 (로그 레벨 결정용)
    pub fn is_client_failure(&self) -> bool {
        !matches!(self, AppError::StorageError(_) | AppError::ConfigError(_))
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        actix_web::http::StatusCode::FOUND
    }

    /// 에러를 상세 정보 없는 302 리다이렉트로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        if self.is_client_failure() {
            log::warn!("요청 실패: {}", self);
        } else {
            log::error!("요청 실패: {}", self);
        }

        actix_web::HttpResponse::Found()
            .insert_header((header::LOCATION, self.redirect_target()))
            .finish()
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(e: mongodb::error::Error) -> Self {
        AppError::StorageError(e.to_string())
    }
}

impl From<redis::RedisError> for AppError {
    fn from(e: redis::RedisError) -> Self {
        AppError::StorageError(e.to_string())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 저장소 계층 에러로 변환합니다.
    fn storage_context(self, msg: &str) -> AppResult<T>;

    /// 프로바이더 교환 에러로 변환합니다.
    fn provider_context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn storage_context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::StorageError(format!("{}: {}", msg, e)))
    }

    fn provider_context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::ProviderError(format!("{}: {}", msg, e)))
    }
}
