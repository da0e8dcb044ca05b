//! Users Entity Module
//!
//! 로컬 계정과 외부 공급자 바인딩을 한 레코드에 담는 User 엔티티를 정의합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::User;
//! use crate::config::AuthProvider;
//!
//! let local = User::new_local("alice".to_string(), password_hash);
//! let federated = User::new_federated(AuthProvider::Google, "g-42".to_string());
//! ```

pub mod user;

pub use user::User;
