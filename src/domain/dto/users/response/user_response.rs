//! 사용자 응답 DTO
//!
//! 엔티티의 비밀번호 해시나 내부 필드를 노출하지 않도록
//! 응답 전용 구조체로 변환해서 내려줍니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::users::user::User;
use crate::utils::time_utils::to_chrono;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub is_active: bool,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            email,
            is_active,
            is_verified,
            created_at,
            ..
        } = user;

        Self {
            id,
            email,
            is_active,
            is_verified,
            created_at: to_chrono(created_at),
        }
    }
}

/// 단순 메시지 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_response_hides_password_hash() {
        let user = User::new("user@herm.io".to_string(), "$2b$04$secret-hash".to_string());
        let id = user.id.clone();

        let value = serde_json::to_value(UserResponse::from(user)).unwrap();

        assert_eq!(value["id"], id);
        assert_eq!(value["email"], "user@herm.io");
        assert_eq!(value["is_active"], true);
        assert_eq!(value["is_verified"], false);
        assert!(value.get("password_hash").is_none());
        assert!(value["created_at"].is_string());
    }
}
