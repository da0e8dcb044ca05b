//! Local Authentication HTTP Handlers
//!
//! - **회원가입**: `POST /register` (실패 시 `/register`, 세션 생성만 실패하면 `/login`)
//! - **로그인**: `POST /login` (실패 시 `/login`)
//! - **로그아웃**: `GET /logout`
//!
//! 인증에 성공하면 요청에 실려 온 세션을 폐기하고 새 세션을 발급합니다.
use actix_web::{get, post, web, HttpRequest, HttpResponse};
use crate::{
    core::AuthContext,
    domain::{dto::users::request::CredentialsForm, models::auth::OptionalUser},
    errors::{AppError, AppResult},
    handlers::{fail_to, redirect, validate_form},
};

/// 세션을 시작하고 `/secrets`로 보내는 응답을 만듭니다.
pub(crate) async fn start_session(ctx: &AuthContext, req: &HttpRequest, user_id: &str) -> AppResult<HttpResponse> {
    let previous = ctx.cookies.session_token(req);
    let token = ctx.sessions.establish(previous.as_deref(), user_id).await?;

    let mut response = redirect("/secrets");
    response
        .add_cookie(&ctx.cookies.session_cookie(&token))
        .map_err(|e| AppError::StorageError(format!("쿠키 설정 실패: {}", e)))?;
    Ok(response)
}

/// 로컬 회원가입 핸들러
///
/// # Endpoint
/// `POST /register` (application/x-www-form-urlencoded)
#[post("/register")]
pub async fn register(
    req: HttpRequest,
    ctx: web::Data<AuthContext>,
    form: web::Form<CredentialsForm>,
) -> HttpResponse {
    let registered: AppResult<String> = async {
        validate_form(&*form)?;
        let user = ctx.local.register(form.username(), &form.password).await?;
        Ok(user.id_string().unwrap_or_default())
    }
    .await;

    let user_id = match registered {
        Ok(user_id) => user_id,
        Err(e) => return fail_to("/register", &e),
    };

    // 계정은 이미 생성되었으므로 세션 실패 시 로그인으로 보냄
    start_session(&ctx, &req, &user_id)
        .await
        .unwrap_or_else(|e| fail_to("/login", &e))
}

/// 로컬 로그인 핸들러
///
/// # Endpoint
/// `POST /login`
#[post("/login")]
pub async fn login(
    req: HttpRequest,
    ctx: web::Data<AuthContext>,
    form: web::Form<CredentialsForm>,
) -> HttpResponse {
    let result: AppResult<HttpResponse> = async {
        validate_form(&*form)?;
        let user = ctx.local.verify(form.username(), &form.password).await?;
        let user_id = user.id_string().unwrap_or_default();
        log::info!("로컬 로그인 - 사용자: {}, ID: {}", form.username(), user_id);
        start_session(&ctx, &req, &user_id).await
    }
    .await;

    result.unwrap_or_else(|e| fail_to("/login", &e))
}

/// 로그아웃 핸들러
///
/// 세션이 없어도 쿠키를 지우고 `/`로 보냅니다.
#[get("/logout")]
pub async fn logout(req: HttpRequest, ctx: web::Data<AuthContext>, user: OptionalUser) -> HttpResponse {
    let token = user.0.map(|u| u.token).or_else(|| ctx.cookies.session_token(&req));

    if let Some(token) = token {
        if let Err(e) = ctx.sessions.destroy(&token).await {
            log::error!("세션 삭제 실패: {}", e);
        }
    }

    let mut response = redirect("/");
    if let Err(e) = response.add_removal_cookie(&ctx.cookies.session_removal()) {
        log::error!("쿠키 삭제 실패: {}", e);
    }
    response
}
