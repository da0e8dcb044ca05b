//! 미들웨어 모듈
//!
//! # 제공 미들웨어
//!
//! ### 세션 미들웨어 (SessionMiddleware)
//! - 서명된 `secrets.sid` 쿠키 검증
//! - 세션 저장소에서 사용자 ID 해석
//! - 해석된 사용자를 request extension에 저장
//! - 선택적/강제 모드 지원 (강제 모드는 `/login`으로 리다이렉트)
//!
//! ## 특정 스코프에만 적용
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! App::new()
//!     .wrap(SessionMiddleware::optional())
//!     .service(
//!         web::scope("/submit")
//!             .wrap(SessionMiddleware::required())
//!             .service(submit_page)
//!     )
//! ```

pub mod session_middleware;
mod session_inner;

pub use session_middleware::SessionMiddleware;
