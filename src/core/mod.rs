//! # Core Module
//!
//! 요청 처리에 필요한 모든 협력 객체를 담은 [`AuthContext`]를 제공합니다.
//!
//! 전역 상태나 서비스 로케이터 대신, 시작 시점에 설정으로부터 한 번 구성한 컨텍스트를
//! `web::Data<AuthContext>`로 각 핸들러와 미들웨어에 명시적으로 전달합니다.
//!
//! ```text
//! AppConfig ──► AuthContext::initialize()
//!                 ├── users: Arc<dyn UserStore>        (MongoDB | in-process)
//!                 ├── sessions: SessionService         (Redis | in-process)
//!                 ├── local / federated / secrets 서비스
//!                 ├── cookies: SessionCookies          (SECRET_COOKIE 서명 키)
//!                 └── providers: 활성화된 IdentityProvider
//! ```

pub mod context;

pub use context::*;
