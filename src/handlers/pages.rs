//! 페이지 렌더링 핸들러
use actix_web::{get, web, HttpResponse};
use crate::{
    core::AuthContext,
    domain::models::auth::OptionalUser,
    handlers::{fail_to, html},
    views::{self, PageContext},
};

fn page_context(ctx: &AuthContext, user: &OptionalUser) -> PageContext {
    PageContext {
        authenticated: user.is_authenticated(),
        providers: ctx.enabled_providers(),
    }
}

#[get("/")]
pub async fn home(ctx: web::Data<AuthContext>, user: OptionalUser) -> HttpResponse {
    html(views::home_page(&page_context(&ctx, &user)))
}

#[get("/login")]
pub async fn login_page(ctx: web::Data<AuthContext>, user: OptionalUser) -> HttpResponse {
    html(views::login_page(&page_context(&ctx, &user)))
}

#[get("/register")]
pub async fn register_page(ctx: web::Data<AuthContext>, user: OptionalUser) -> HttpResponse {
    html(views::register_page(&page_context(&ctx, &user)))
}

/// 비밀 목록 (인증 불필요)
///
/// # Endpoint
/// `GET /secrets`
#[get("/secrets")]
pub async fn secrets_page(ctx: web::Data<AuthContext>, user: OptionalUser) -> HttpResponse {
    match ctx.secrets.list_secrets().await {
        Ok(secrets) => html(views::secrets_page(&page_context(&ctx, &user), &secrets)),
        Err(e) => fail_to("/", &e),
    }
}
