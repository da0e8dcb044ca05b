//! 인증 및 세션 서비스 모듈
//!
//! 로컬 비밀번호 인증, OAuth 2.0 공급자 인증, 세션 관리를 담당합니다.
//!
//! # Security
//!
//! - bcrypt 비밀번호 해싱 (솔트 자동 생성)
//! - CSRF 방지 (OAuth state 매개변수 + 서명 쿠키)
//! - 세션 토큰은 다이제스트로만 저장
//! - 인증 성공 시 기존 세션 폐기 (세션 고정 방지)
//!
//! # Examples
//!
//! ```rust,ignore
//! let user = ctx.local.verify("alice", "pw123").await?;
//! let token = ctx.sessions.establish(previous.as_deref(), &user_id).await?;
//! let cookie = ctx.cookies.session_cookie(&token);
//! ```

pub mod local_auth_service;
pub mod federated_auth_service;
pub mod session_service;
pub mod session_cookies;
pub mod oauth_client;

pub use local_auth_service::*;
pub use federated_auth_service::*;
pub use session_service::*;
pub use session_cookies::*;
pub use oauth_client::*;
