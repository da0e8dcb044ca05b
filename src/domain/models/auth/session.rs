//! 세션 모델
//!
//! 세션 저장소에는 토큰 원문이 아닌 다이제스트를 키로 한 [`SessionRecord`]가 저장됩니다.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// 세션 저장소에 저장되는 레코드
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub user_id: String,
    /// 생성 시각 (unix seconds)
    pub created_at: i64,
    /// 만료 시각 (unix seconds)
    pub expires_at: i64,
}

impl SessionRecord {
    pub fn new(user_id: impl Into<String>, ttl_seconds: u64) -> Self {
        let now = Utc::now().timestamp();
        Self {
            user_id: user_id.into(),
            created_at: now,
            expires_at: now.saturating_add(i64::try_from(ttl_seconds).unwrap_or(i64::MAX)),
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.expires_at
    }
}

/// 요청 하나에 대해 해석된 세션 상태
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Anonymous,
    Authenticated(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_record_expiry() {
        let live = SessionRecord::new("u1", 60);
        assert!(!live.is_expired());
        assert_eq!(live.expires_at - live.created_at, 60);

        let expired = SessionRecord {
            user_id: "u1".to_string(),
            created_at: 0,
            expires_at: 1,
        };
        assert!(expired.is_expired());
    }

    #[test]
    fn test_oversized_ttl_saturates_instead_of_wrapping() {
        let record = SessionRecord::new("u1", u64::MAX);
        assert!(!record.is_expired());
        assert_eq!(record.expires_at, i64::MAX);

        let record = SessionRecord::new("u1", i64::MAX as u64 + 1);
        assert!(!record.is_expired());
    }
}
