//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - HTML 이스케이프, 토큰 다이제스트, 랜덤 토큰
//! - [`display_terminal`] - 시작 시 구성 요약 출력
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::{html_escape, token_digest};
//!
//! let safe = html_escape("<script>");
//! let key = format!("session:{}", token_digest(&token));
//! ```

pub mod string_utils;
pub mod display_terminal;
