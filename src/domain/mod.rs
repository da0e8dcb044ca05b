//! # Domain Layer
//!
//! 사용자 엔티티, 요청/응답 DTO, 인증 관련 도메인 모델을 정의합니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← MongoDB 문서와 매핑되는 User 엔티티
//! ├── models/       ← 세션 상태, 인증 사용자, OAuth 프로필
//! └── dto/          ← 폼 입력과 외부 API 응답
//! ```

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::*;
pub use dto::*;
pub use models::*;
