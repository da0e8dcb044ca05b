//! 비밀 제출 핸들러
//!
//! `/submit` 스코프는 `SessionMiddleware::required()`로 감싸져 있으므로
//! 세션이 없는 요청은 여기까지 오지 않습니다.
use actix_web::{get, post, web, HttpResponse};
use crate::{
    core::AuthContext,
    domain::{dto::users::request::SubmitSecretForm, models::auth::CurrentUser},
    errors::AppError,
    handlers::{fail_to, html, redirect, validate_form},
    views::{self, PageContext},
};

/// # Endpoint
/// `GET /submit`
#[get("")]
pub async fn submit_page(ctx: web::Data<AuthContext>, _user: CurrentUser) -> HttpResponse {
    html(views::submit_page(&PageContext {
        authenticated: true,
        providers: ctx.enabled_providers(),
    }))
}

/// 현재 사용자의 비밀을 기록합니다.
///
/// # Endpoint
/// `POST /submit`
#[post("")]
pub async fn submit_secret(
    ctx: web::Data<AuthContext>,
    user: CurrentUser,
    form: web::Form<SubmitSecretForm>,
) -> HttpResponse {
    if let Err(e) = validate_form(&*form) {
        return fail_to("/submit", &e);
    }

    match ctx.secrets.submit_secret(&user.user_id, form.secret()).await {
        Ok(_) => redirect("/secrets"),
        Err(e @ AppError::SessionInvalid) => fail_to("/login", &e),
        Err(e) => fail_to("/", &e),
    }
}
