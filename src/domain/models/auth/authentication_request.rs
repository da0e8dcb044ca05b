/// 세션 미들웨어의 동작 모드
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AuthMode {
    /// 세션이 반드시 필요함 (없으면 `/login`으로 리다이렉트)
    Required,
    /// 세션이 선택사항임 (있으면 해석, 없어도 허용)
    Optional,
}
