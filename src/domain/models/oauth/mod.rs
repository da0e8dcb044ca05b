//! # OAuth Domain Models
//!
//! 공급자별 프로필 응답과, 이를 정규화한 [`ProviderIdentity`]를 정의합니다.

pub mod provider_profile;

pub use provider_profile::*;
