//! 요청 DTO 모듈
//!
//! 폼 본문과 쿼리 파라미터를 역직렬화하는 구조체들입니다.

pub mod auth_request;
pub mod secret_request;

pub use auth_request::*;
pub use secret_request::*;
