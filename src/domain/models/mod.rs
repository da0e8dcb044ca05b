//! # Domain Models Module
//!
//! 저장소 문서와 직접 매핑되지 않는 값 객체들을 정의합니다.
//!
//! ```text
//! models/
//! ├── auth/     ← 세션 레코드, 세션 상태, 요청에 주입되는 인증 사용자
//! └── oauth/    ← 공급자 프로필과 정규화된 외부 신원
//! ```

pub mod auth;
pub mod oauth;

pub use auth::*;
pub use oauth::*;
