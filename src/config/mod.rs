//! # Configuration Module
//!
//! 서비스 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값을 시작 시점에 한 번 읽어 [`AppConfig`]로 모으고,
//! 요청 처리 경로에는 명시적으로 전달합니다.
//!
//! ## 모듈 구성
//!
//! - [`app_config`] - 환경 변수 로딩과 전체 설정 구조체
//! - [`data_config`] - 실행 환경, 비밀번호 해싱 설정
//! - [`auth_config`] - OAuth 공급자 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 필수
//! export SECRET_COOKIE="long-random-string"
//!
//! # 저장소
//! export DB_URL="mongodb://localhost:27017"   # memory:// 이면 프로세스 내 저장소
//! export REDIS_URL="redis://localhost:6379"   # 없으면 프로세스 내 세션 저장소
//!
//! # 서버
//! export PORT="5000"
//! export APP_NAME="http://localhost:5000"
//! ```

pub mod app_config;
pub mod data_config;
pub mod auth_config;

pub use app_config::*;
pub use data_config::*;
pub use auth_config::*;
