//! 계정 토큰 엔티티
//!
//! 비밀번호 재설정과 이메일 인증 링크에 담기는 일회용 토큰입니다.
//! 평문 토큰은 메일로만 전달되고 DB 에는 SHA-256 해시만 저장됩니다.
//!
//! | 종류 | 컬렉션 |
//! |------|--------|
//! | [`AccountTokenKind::PasswordReset`] | `password_reset_tokens` |
//! | [`AccountTokenKind::EmailVerification`] | `email_verification_tokens` |

use chrono::{Duration, Utc};
use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::utils::time_utils::to_bson;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountTokenKind {
    PasswordReset,
    EmailVerification,
}

impl AccountTokenKind {
    pub fn collection_name(&self) -> &'static str {
        match self {
            AccountTokenKind::PasswordReset => "password_reset_tokens",
            AccountTokenKind::EmailVerification => "email_verification_tokens",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountToken {
    #[serde(rename = "_id")]
    pub id: String,
    /// 평문 토큰의 SHA-256 (hex)
    pub token_hash: String,
    pub user_id: String,
    pub expires_at: DateTime,
    pub is_used: bool,
    #[serde(default)]
    pub used_at: Option<DateTime>,
    /// 요청자 IP (감사용)
    #[serde(default)]
    pub ip_address: Option<String>,
    pub created_at: DateTime,
}

impl AccountToken {
    /// 새 평문 토큰을 만들고, 해시가 담긴 엔티티와 함께 반환합니다.
    pub fn issue(user_id: &str, expire_hours: i64, ip_address: Option<String>) -> (String, Self) {
        let token = Self::generate_token();
        let now = Utc::now();

        let entity = Self {
            id: Uuid::new_v4().to_string(),
            token_hash: Self::hash_token(&token),
            user_id: user_id.to_string(),
            expires_at: to_bson(now + Duration::hours(expire_hours)),
            is_used: false,
            used_at: None,
            ip_address,
            created_at: to_bson(now),
        };

        (token, entity)
    }

    /// URL 에 그대로 넣을 수 있는 64자 hex 토큰 (256비트 난수)
    pub fn generate_token() -> String {
        format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple())
    }

    pub fn hash_token(token: &str) -> String {
        format!("{:x}", Sha256::digest(token.as_bytes()))
    }

    pub fn is_expired(&self, now: DateTime) -> bool {
        self.expires_at <= now
    }

    pub fn is_valid(&self, now: DateTime) -> bool {
        !self.is_used && !self.is_expired(now)
    }
}
