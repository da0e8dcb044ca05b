//! 인증/세션 모델

pub mod authenticated_user;
pub mod authentication_request;
pub mod session;

pub use authenticated_user::*;
pub use authentication_request::*;
pub use session::*;
