use std::future::{ready, Ready};
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use crate::errors::AppError;

/// 세션 쿠키에서 해석된 현재 사용자
///
/// 세션 미들웨어가 요청 extensions에 넣어 둡니다.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentUser {
    /// 사용자 ID (ObjectId hex)
    pub user_id: String,

    /// 세션 토큰 원문 (로그아웃, 세션 교체에 사용)
    pub token: String,
}

/// ActixWeb FromRequest trait 구현
///
/// 세션이 없으면 `SessionInvalid`로 실패하여 `/login`으로 리다이렉트됩니다.
impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<CurrentUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::SessionInvalid)),
        }
    }
}

/// 선택적 인증 사용자 추출자
#[derive(Debug, Clone)]
pub struct OptionalUser(pub Option<CurrentUser>);

impl OptionalUser {
    pub fn is_authenticated(&self) -> bool {
        self.0.is_some()
    }
}

impl FromRequest for OptionalUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let user = req.extensions().get::<CurrentUser>().cloned();
        ready(Ok(OptionalUser(user)))
    }
}
