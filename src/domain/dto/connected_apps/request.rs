//! 연결 앱 요청 DTO

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::connected_apps::connected_app::EmailProvider;

/// 연결 앱 등록/갱신 요청
///
/// 같은 프로바이더로 다시 요청하면 기존 연결의 토큰이 교체됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ConnectAppRequest {
    pub provider: EmailProvider,

    #[validate(email(message = "Invalid provider email"))]
    pub provider_email: String,

    #[validate(length(min = 1, message = "Access token is required"))]
    pub access_token: String,

    #[serde(default)]
    pub refresh_token: Option<String>,

    #[serde(default)]
    pub token_expires_at: Option<DateTime<Utc>>,
}

/// OAuth 콜백 쿼리
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct OAuthCallbackQuery {
    #[validate(length(min = 1, message = "Authorization code is required"))]
    pub code: String,
    pub state: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_request_deserializes_optional_fields() {
        let request: ConnectAppRequest = serde_json::from_str(
            r#"{"provider":"yahoo","provider_email":"me@yahoo.com","access_token":"tok"}"#,
        )
        .unwrap();

        assert_eq!(request.provider, EmailProvider::Yahoo);
        assert!(request.refresh_token.is_none());
        assert!(request.token_expires_at.is_none());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_connect_request_rejects_unknown_provider() {
        let result = serde_json::from_str::<ConnectAppRequest>(
            r#"{"provider":"aol","provider_email":"me@aol.com","access_token":"tok"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_connect_request_validation() {
        let request = ConnectAppRequest {
            provider: EmailProvider::Gmail,
            provider_email: "not-an-email".to_string(),
            access_token: String::new(),
            refresh_token: None,
            token_expires_at: None,
        };

        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("provider_email"));
        assert!(fields.contains_key("access_token"));
    }
}
