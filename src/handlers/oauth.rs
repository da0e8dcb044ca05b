//! OAuth HTTP Handlers
//!
//! - **동의 화면으로 이동**: `GET /auth/{provider}`
//! - **콜백**: `GET /auth/{provider}/secrets?code={code}&state={state}`
//!
//! 활성화되지 않은 공급자와 모든 콜백 실패는 `/login`으로 리다이렉트됩니다.
use actix_web::{get, web, HttpRequest, HttpResponse};
use crate::{
    config::AuthProvider,
    core::AuthContext,
    domain::{dto::users::request::OAuthCallbackQuery, models::auth::OptionalUser},
    errors::{AppError, AppResult},
    handlers::{auth::start_session, fail_to, redirect},
};

/// OAuth 로그인 시작 핸들러
///
/// state를 생성하여 서명 쿠키에 저장하고 공급자의 동의 화면으로 보냅니다.
#[get("/auth/{provider}")]
pub async fn oauth_login(ctx: web::Data<AuthContext>, path: web::Path<String>) -> HttpResponse {
    let Some(identity_provider) = AuthProvider::from_str(&path)
        .ok()
        .and_then(|provider| ctx.provider(provider))
    else {
        log::warn!("지원하지 않거나 비활성화된 공급자: {}", path);
        return redirect("/login");
    };

    let provider = identity_provider.provider();
    let state = uuid::Uuid::new_v4().simple().to_string();
    let authorization_url = identity_provider.authorization_url(&state);

    let mut response = redirect(&authorization_url);
    if let Err(e) = response.add_cookie(&ctx.cookies.oauth_state_cookie(provider, &state)) {
        return fail_to("/login", &AppError::ProviderError(format!("state 쿠키 설정 실패: {}", e)));
    }

    log::debug!("{} 동의 화면으로 이동", provider.display_name());
    response
}

/// OAuth 콜백 처리 핸들러
///
/// state 쿠키는 성공/실패와 무관하게 항상 지웁니다.
#[get("/auth/{provider}/secrets")]
pub async fn oauth_callback(
    req: HttpRequest,
    ctx: web::Data<AuthContext>,
    path: web::Path<String>,
    query: web::Query<OAuthCallbackQuery>,
    user: OptionalUser,
) -> HttpResponse {
    let result: AppResult<HttpResponse> = async {
        let provider = AuthProvider::from_str(&path).map_err(AppError::ProviderError)?;
        let identity_provider = ctx
            .provider(provider)
            .ok_or_else(|| AppError::ProviderError(format!("{} 공급자가 비활성화되어 있습니다", provider.display_name())))?;

        // 사용자가 거부했거나 공급자 에러
        if let Some(error) = &query.error {
            let description = query.error_description.as_deref().unwrap_or("OAuth 인증이 취소되었거나 실패했습니다");
            return Err(AppError::ProviderError(format!("{} - {}", error, description)));
        }

        if !ctx.cookies.oauth_state_matches(&req, provider, query.state.as_deref()) {
            return Err(AppError::ProviderError("state 불일치".to_string()));
        }

        let code = query
            .code
            .as_deref()
            .filter(|code| !code.is_empty())
            .ok_or_else(|| AppError::ProviderError("authorization code 누락".to_string()))?;

        let current_user_id = user.0.as_ref().map(|u| u.user_id.as_str());
        let account = ctx
            .federated
            .authenticate(identity_provider.as_ref(), code, current_user_id)
            .await?;

        let user_id = account.id_string().unwrap_or_default();
        start_session(&ctx, &req, &user_id).await
    }
    .await;

    let mut response = result.unwrap_or_else(|e| fail_to("/login", &e));
    if let Err(e) = response.add_removal_cookie(&ctx.cookies.oauth_state_removal()) {
        log::error!("state 쿠키 삭제 실패: {}", e);
    }
    response
}
