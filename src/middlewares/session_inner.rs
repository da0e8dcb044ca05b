//! SessionMiddleware 세션 해석 로직
use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::{web, Error, HttpMessage, HttpResponse};
use futures_util::future::LocalBoxFuture;
use crate::core::AuthContext;
use crate::domain::models::auth::{AuthMode, CurrentUser, SessionState};

/// 실제 세션 해석을 수행하는 서비스
pub struct SessionMiddlewareService<S> {
    pub service: Rc<S>,
    pub mode: AuthMode,
}

impl<S, B> Service<ServiceRequest> for SessionMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let mode = self.mode;

        Box::pin(async move {
            let current = resolve_current_user(&req).await;

            match (mode, current) {
                (AuthMode::Required, None) => {
                    log::debug!("세션 없음: {} → /login", req.path());
                    let response = HttpResponse::Found()
                        .insert_header((header::LOCATION, "/login"))
                        .finish();
                    let (req, _) = req.into_parts();
                    return Ok(ServiceResponse::new(req, response).map_into_right_body());
                }
                (_, Some(user)) => {
                    req.extensions_mut().insert(user);
                }
                (AuthMode::Optional, None) => {}
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 요청의 세션 쿠키를 현재 사용자로 해석합니다.
///
/// 바깥 미들웨어가 이미 해석했다면 그 결과를 그대로 사용합니다.
async fn resolve_current_user(req: &ServiceRequest) -> Option<CurrentUser> {
    if let Some(user) = req.extensions().get::<CurrentUser>() {
        return Some(user.clone());
    }

    let Some(ctx) = req.app_data::<web::Data<AuthContext>>() else {
        log::error!("AuthContext가 등록되지 않았습니다");
        return None;
    };

    let token = ctx.cookies.session_token(req.request())?;

    match ctx.sessions.state(Some(&token)).await {
        SessionState::Authenticated(user_id) => Some(CurrentUser { user_id, token }),
        SessionState::Anonymous => None,
    }
}
