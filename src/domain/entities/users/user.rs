//! 사용자 엔티티
//!
//! MongoDB `users` 컬렉션에 저장되는 계정 문서입니다.
//! `_id` 는 UUID v4 문자열이며, 비밀번호 해시는 `PasswordCodec` 을 통해서만
//! 생성/검증합니다.

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_ROLE: &str = "user";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub is_active: bool,
    pub is_verified: bool,
    /// 마지막 비밀번호 재설정 시각. 이 시각 이전에 발급된 리프레시 토큰은 거부됩니다.
    #[serde(default)]
    pub password_changed_at: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl User {
    /// 가입 직후 상태의 사용자를 생성합니다. (활성, 미인증)
    pub fn new(email: String, password_hash: String) -> Self {
        let now = DateTime::now();

        Self {
            id: Uuid::new_v4().to_string(),
            email,
            password_hash,
            role: DEFAULT_ROLE.to_string(),
            is_active: true,
            is_verified: false,
            password_changed_at: None,
            created_at: now,
            updated_at: now,
        }
    }
}
