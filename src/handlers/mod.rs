//! # HTTP Request Handlers Module
//!
//! ```text
//! HTTP Layer Architecture
//! ┌─────────────────────────────────────────────┐
//!   Browser (HTML 폼, OAuth 리다이렉트)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   AuthContext → Services - 인증/세션/비밀           ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - UserStore, SessionStore        ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 모든 실패는 상세 정보 없이 리다이렉트로 끝납니다.
//! 리다이렉트 대상은 에러 종류가 아니라 엔드포인트가 정합니다.
//!
//! ## 모듈 구성
//! - **`pages`**: `/`, `/login`, `/register`, `/secrets`
//! - **`auth`**: 로컬 회원가입/로그인, 로그아웃
//! - **`oauth`**: `/auth/{provider}`, `/auth/{provider}/secrets`
//! - **`secrets`**: `/submit` (세션 필수)

use actix_web::http::header;
use actix_web::HttpResponse;
use validator::Validate;
use crate::errors::AppError;

pub mod pages;
pub mod auth;
pub mod oauth;
pub mod secrets;

/// 302 리다이렉트 응답
pub(crate) fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// 실패를 로그로 남기고 지정된 경로로 리다이렉트합니다.
pub(crate) fn fail_to(location: &str, error: &AppError) -> HttpResponse {
    if error.is_client_failure() {
        log::warn!("요청 실패 → {}: {}", location, error);
    } else {
        log::error!("요청 실패 → {}: {}", location, error);
    }
    redirect(location)
}

/// 폼 검증 결과를 `ValidationError`로 변환합니다.
pub(crate) fn validate_form<T: Validate>(form: &T) -> Result<(), AppError> {
    form.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))
}

/// HTML 응답
pub(crate) fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}
