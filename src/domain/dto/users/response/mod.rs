//! 외부 공급자 응답 DTO 모듈

pub mod oauth_response;

pub use oauth_response::*;
