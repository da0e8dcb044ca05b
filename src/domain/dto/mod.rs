//! # Data Transfer Objects
//!
//! HTML 폼 입력과 OAuth 공급자 응답을 매핑하는 구조체들입니다.
//! 폼 입력은 `validator`로 검증됩니다.

pub mod users;

// 공통 re-exports
pub use users::*;
