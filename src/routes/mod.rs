//! 라우트 설정 모듈
//!
//! 페이지, 로컬 인증, OAuth, 비밀 제출 라우트와 헬스체크 엔드포인트를 등록합니다.
//!
//! | Method | Path | 세션 |
//! |--------|------|------|
//! | GET | `/`, `/login`, `/register`, `/secrets` | 선택 |
//! | POST | `/register`, `/login` | 선택 |
//! | GET | `/auth/{provider}`, `/auth/{provider}/secrets` | 선택 |
//! | GET/POST | `/submit` | 필수 |
//! | GET | `/logout` | 선택 |
//! | GET | `/health` | - |
//!
//! 세션 해석은 앱 전체를 감싸는 `SessionMiddleware::optional()`이 담당하고,
//! `/submit` 스코프만 `SessionMiddleware::required()`를 추가로 적용합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(auth_context))
//!     .wrap(SessionMiddleware::optional())
//!     .configure(configure_all_routes);
//! ```

use crate::handlers::{self, redirect};
use crate::middlewares::SessionMiddleware;
use actix_web::{error::InternalError, web, HttpRequest};
use serde_json::json;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // 역직렬화할 수 없는 폼은 같은 경로의 페이지로 돌려보냄
    cfg.app_data(web::FormConfig::default().error_handler(form_error_handler));
    // 쿼리를 해석할 수 없는 OAuth 콜백은 로그인 페이지로
    cfg.app_data(web::QueryConfig::default().error_handler(query_error_handler));

    configure_page_routes(cfg);
    configure_auth_routes(cfg);
    configure_secret_routes(cfg);
}

fn form_error_handler(err: actix_web::error::UrlencodedError, req: &HttpRequest) -> actix_web::Error {
    log::warn!("폼 파싱 실패 ({}): {}", req.path(), err);
    InternalError::from_response(err, redirect(req.path())).into()
}

fn query_error_handler(err: actix_web::error::QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::warn!("쿼리 파싱 실패 ({}): {}", req.path(), err);
    InternalError::from_response(err, redirect("/login")).into()
}

fn configure_page_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::pages::home)
        .service(handlers::pages::login_page)
        .service(handlers::pages::register_page)
        .service(handlers::pages::secrets_page);
}

/// 로컬 인증과 OAuth 라우트
///
/// ```bash
/// # 회원가입
/// curl -i -X POST http://localhost:5000/register \
///   -d 'username=alice&password=pw123'
///
/// # GitHub 동의 화면으로 이동
/// curl -i http://localhost:5000/auth/github
/// ```
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::auth::register)
        .service(handlers::auth::login)
        .service(handlers::auth::logout)
        .service(handlers::oauth::oauth_login)
        .service(handlers::oauth::oauth_callback);
}

fn configure_secret_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/submit")
            .wrap(SessionMiddleware::required())
            .service(handlers::secrets::submit_page)
            .service(handlers::secrets::submit_secret),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "secrets_service",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00Z"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use actix_web::cookie::Cookie;
    use actix_web::dev::ServiceResponse;
    use actix_web::http::{header, StatusCode};
    use actix_web::{test, App};
    use crate::config::AuthProvider;
    use crate::core::AuthContext;
    use crate::domain::models::auth::SessionRecord;
    use crate::errors::{AppError, AppResult};
    use crate::repositories::sessions::{MemorySessionRepository, SessionStore};
    use crate::repositories::users::{MemoryUserRepository, UserStore};
    use crate::services::auth::{IdentityProvider, SessionCookies, StubIdentityProvider, OAUTH_STATE_COOKIE, SESSION_COOKIE};

    /// 모든 호출이 실패하는 세션 저장소
    struct UnavailableSessionStore;

    #[async_trait::async_trait]
    impl SessionStore for UnavailableSessionStore {
        async fn save(&self, _key: &str, _record: &SessionRecord, _ttl_seconds: u64) -> AppResult<()> {
            Err(AppError::StorageError("connection refused".to_string()))
        }

        async fn load(&self, _key: &str) -> AppResult<Option<SessionRecord>> {
            Err(AppError::StorageError("connection refused".to_string()))
        }

        async fn remove(&self, _key: &str) -> AppResult<()> {
            Err(AppError::StorageError("connection refused".to_string()))
        }
    }

    fn context() -> (AuthContext, Arc<MemoryUserRepository>) {
        context_with(Arc::new(MemorySessionRepository::new()))
    }

    fn context_with(session_store: Arc<dyn SessionStore>) -> (AuthContext, Arc<MemoryUserRepository>) {
        let users = Arc::new(MemoryUserRepository::new());
        let github = StubIdentityProvider::new(AuthProvider::GitHub).with_code("good-code", "583231");

        let ctx = AuthContext::from_parts(
            users.clone(),
            session_store,
            SessionCookies::new("keyboard cat", false, 3600),
            4,
            3600,
            vec![Arc::new(github) as Arc<dyn IdentityProvider>],
        );
        (ctx, users)
    }

    macro_rules! init_app {
        ($ctx:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($ctx))
                    .wrap(SessionMiddleware::optional())
                    .configure(configure_all_routes),
            )
            .await
        };
    }

    fn location<B>(res: &ServiceResponse<B>) -> String {
        res.headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    }

    fn response_cookie<B>(res: &ServiceResponse<B>, name: &str) -> Option<Cookie<'static>> {
        res.response()
            .cookies()
            .find(|c| c.name() == name)
            .map(|c| c.into_owned())
    }

    fn assert_state_cookie_cleared<B>(res: &ServiceResponse<B>) {
        let cookie = response_cookie(res, OAUTH_STATE_COOKIE).expect("state 쿠키 삭제 누락");
        assert!(cookie.value().is_empty());
        assert_eq!(cookie.max_age().map(|age| age.whole_seconds()), Some(0));
    }

    #[actix_web::test]
    async fn test_register_login_submit_and_list() {
        let (ctx, users) = context();
        let app = init_app!(ctx);

        let req = test::TestRequest::post()
            .uri("/register")
            .set_form([("username", "alice"), ("password", "pw123")])
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::FOUND);
        assert_eq!(location(&res), "/secrets");
        assert!(response_cookie(&res, SESSION_COOKIE).is_some());

        let req = test::TestRequest::post()
            .uri("/login")
            .set_form([("username", "alice"), ("password", "pw123")])
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(location(&res), "/secrets");
        let session = response_cookie(&res, SESSION_COOKIE).unwrap();

        let req = test::TestRequest::post()
            .uri("/submit")
            .cookie(session.clone())
            .set_form([("secret", "hello")])
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(location(&res), "/secrets");

        let req = test::TestRequest::get().uri("/secrets").to_request();
        let body = test::call_and_read_body(&app, req).await;
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body.contains("hello"));
        assert!(!body.contains("alice"));

        let alice = users.find_by_username("alice").await.unwrap().unwrap();
        assert_eq!(alice.secret.as_deref(), Some("hello"));
    }

    #[actix_web::test]
    async fn test_submit_without_session_redirects_to_login() {
        let (ctx, users) = context();
        let app = init_app!(ctx);

        let req = test::TestRequest::get().uri("/submit").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::FOUND);
        assert_eq!(location(&res), "/login");

        let req = test::TestRequest::post()
            .uri("/submit")
            .set_form([("secret", "sneaky")])
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(location(&res), "/login");

        assert!(users.find_with_secrets().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_registration_and_login_failures() {
        let (ctx, _) = context();
        ctx.local.register("alice", "pw123").await.unwrap();
        let app = init_app!(ctx);

        let req = test::TestRequest::post()
            .uri("/register")
            .set_form([("username", "alice"), ("password", "other")])
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(location(&res), "/register");
        assert!(response_cookie(&res, SESSION_COOKIE).is_none());

        let req = test::TestRequest::post()
            .uri("/login")
            .set_form([("username", "alice"), ("password", "wrong")])
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(location(&res), "/login");

        let req = test::TestRequest::post()
            .uri("/login")
            .set_form([("username", "nobody"), ("password", "pw")])
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(location(&res), "/login");

        // 필드 누락
        let req = test::TestRequest::post()
            .uri("/register")
            .set_form([("username", "bob")])
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(location(&res), "/register");
    }

    #[actix_web::test]
    async fn test_logout_destroys_session() {
        let (ctx, _) = context();
        let user = ctx.local.register("alice", "pw123").await.unwrap();
        let token = ctx.sessions.create(&user.id_string().unwrap()).await.unwrap();
        let session = ctx.cookies.session_cookie(&token);
        let sessions = ctx.sessions.clone();
        let app = init_app!(ctx);

        let req = test::TestRequest::get().uri("/logout").cookie(session.clone()).to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(location(&res), "/");
        assert_eq!(sessions.resolve(&token).await.unwrap(), None);

        let req = test::TestRequest::get().uri("/submit").cookie(session).to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(location(&res), "/login");
    }

    #[actix_web::test]
    async fn test_oauth_flow_with_state_cookie() {
        let (ctx, users) = context();
        let app = init_app!(ctx);

        let req = test::TestRequest::get().uri("/auth/github").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::FOUND);
        let consent = location(&res);
        let state = consent.split("state=").nth(1).unwrap().to_string();
        let state_cookie = response_cookie(&res, OAUTH_STATE_COOKIE).unwrap();

        let req = test::TestRequest::get()
            .uri(&format!("/auth/github/secrets?code=good-code&state={}", state))
            .cookie(state_cookie)
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(location(&res), "/secrets");
        assert!(response_cookie(&res, SESSION_COOKIE).is_some());
        assert_state_cookie_cleared(&res);

        let user = users.find_by_provider(AuthProvider::GitHub, "583231").await.unwrap();
        assert!(user.is_some());
    }

    #[actix_web::test]
    async fn test_oauth_callback_failures_redirect_to_login() {
        let (ctx, users) = context();
        let state_cookie = ctx.cookies.oauth_state_cookie(AuthProvider::GitHub, "s1");
        let app = init_app!(ctx);

        // state 불일치
        let req = test::TestRequest::get()
            .uri("/auth/github/secrets?code=good-code&state=s2")
            .cookie(state_cookie.clone())
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(location(&res), "/login");
        assert_state_cookie_cleared(&res);

        // 사용자가 동의를 거부
        let req = test::TestRequest::get()
            .uri("/auth/github/secrets?error=access_denied&state=s1")
            .cookie(state_cookie.clone())
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(location(&res), "/login");

        // 공급자 교환 실패
        let req = test::TestRequest::get()
            .uri("/auth/github/secrets?code=expired&state=s1")
            .cookie(state_cookie.clone())
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(location(&res), "/login");
        assert_state_cookie_cleared(&res);

        // 해석할 수 없는 쿼리 (중복 필드)
        let req = test::TestRequest::get()
            .uri("/auth/github/secrets?code=a&code=b&state=s1")
            .cookie(state_cookie.clone())
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::FOUND);
        assert_eq!(location(&res), "/login");
        let body = test::read_body(res).await;
        assert!(!String::from_utf8_lossy(&body).contains("duplicate"));

        // state 쿠키 없이 도착한 콜백
        let req = test::TestRequest::get()
            .uri("/auth/github/secrets?code=good-code&state=s1")
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(location(&res), "/login");
        assert_state_cookie_cleared(&res);

        // 비활성화된 공급자
        let req = test::TestRequest::get().uri("/auth/google").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(location(&res), "/login");

        assert!(users.find_by_provider(AuthProvider::GitHub, "583231").await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_pages_and_health() {
        let (ctx, _) = context();
        let app = init_app!(ctx);

        let req = test::TestRequest::get().uri("/login").to_request();
        let body = test::call_and_read_body(&app, req).await;
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body.contains(r#"href="/auth/github""#));
        assert!(!body.contains(r#"href="/auth/google""#));

        let req = test::TestRequest::get().uri("/health").to_request();
        let json: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["service"], "secrets_service");
    }

    #[actix_web::test]
    async fn test_register_with_unavailable_session_store_redirects_to_login() {
        let (ctx, users) = context_with(Arc::new(UnavailableSessionStore));
        let app = init_app!(ctx);

        let req = test::TestRequest::post()
            .uri("/register")
            .set_form([("username", "alice"), ("password", "pw123")])
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::FOUND);
        assert_eq!(location(&res), "/login");
        assert!(response_cookie(&res, SESSION_COOKIE).is_none());

        // 계정은 생성된 상태로 남음
        assert_eq!(users.count_by_username("alice"), 1);
    }
}
