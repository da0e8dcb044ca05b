//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 저장소 trait 객체를 주입받아 생성되며,
//! 시작 시점에 [`AuthContext`](crate::core::AuthContext) 하나로 묶여 핸들러에 전달됩니다.
//!
//! # Features
//!
//! - 로컬 회원가입/로그인 (bcrypt)
//! - OAuth 2.0 소셜 로그인 (Google, GitHub) 및 계정 연결
//! - 서버 측 세션 관리
//! - 사용자 비밀 기록/조회

pub mod users;
pub mod auth;
