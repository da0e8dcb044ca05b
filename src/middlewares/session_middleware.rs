//! 세션 미들웨어
//!
//! 서명된 세션 쿠키를 해석하여 [`CurrentUser`](crate::domain::models::auth::CurrentUser)를
//! 요청 extensions에 넣습니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::domain::models::auth::AuthMode;
use crate::middlewares::session_inner::SessionMiddlewareService;

/// 세션 미들웨어
pub struct SessionMiddleware {
    mode: AuthMode,
}

impl SessionMiddleware {
    pub fn new(mode: AuthMode) -> Self {
        Self { mode }
    }

    /// 세션이 없으면 `/login`으로 리다이렉트
    pub fn required() -> Self {
        Self::new(AuthMode::Required)
    }

    /// 세션이 있으면 해석하고, 없어도 요청을 진행
    pub fn optional() -> Self {
        Self::new(AuthMode::Optional)
    }
}

impl<S, B> Transform<S, ServiceRequest> for SessionMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = SessionMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionMiddlewareService {
            service: Rc::new(service),
            mode: self.mode,
        }))
    }
}
