//! # Domain Entities Module
//!
//! MongoDB `users` 컬렉션과 1:1로 대응되는 엔티티를 정의합니다.

pub mod users;

pub use users::*;
