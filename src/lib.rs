//! 시크릿 서비스
//!
//! 로컬 계정 또는 Google/GitHub 계정으로 로그인한 사용자가
//! 자신의 비밀을 익명으로 공유하는 웹 서비스입니다.
//!
//! # Features
//!
//! - **로컬 인증**: 사용자명/비밀번호 회원가입과 로그인 (bcrypt)
//! - **OAuth 2.0**: Google, GitHub Authorization Code Flow와 계정 연결
//! - **세션**: 서명 쿠키 + 서버 측 세션 저장소 (Redis 또는 프로세스 내)
//! - **비밀 공유**: 사용자당 하나의 비밀, 작성자 없이 목록 공개
//! - **MongoDB**: 사용자 레코드 영구 저장, 공급자 ID 유니크 인덱스
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← 페이지/폼/OAuth 엔드포인트
//! └─────────────────┘
//!          │  SessionMiddleware
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 처리, 실패 시 리다이렉트
//! └─────────────────┘
//!          │  AuthContext
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 로컬/외부 인증, 세션, 비밀
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserStore, SessionStore
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소 (또는 프로세스 내 구현)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use secrets_service::config::AppConfig;
//! use secrets_service::core::AuthContext;
//!
//! let config = AppConfig::from_env()?;
//! let ctx = AuthContext::initialize(&config).await?;
//!
//! let user = ctx.local.register("alice", "pw123").await?;
//! let token = ctx.sessions.create(&user.id_string().unwrap_or_default()).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
pub mod views;
