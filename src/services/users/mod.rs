//! 사용자 관리 서비스 모듈
//!
//! 사용자 조회와 비밀 텍스트 기록/목록을 담당합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! ctx.secrets.submit_secret(&current_user.user_id, "hello").await?;
//! let secrets = ctx.secrets.list_secrets().await?;
//! ```

pub mod user_service;

pub use user_service::*;
