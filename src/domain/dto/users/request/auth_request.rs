//! 인증 관련 요청 DTO
//!
//! 가입, 로그인, 토큰 갱신/로그아웃 요청 본문입니다.
//! 핸들러에서 `validate()` 를 호출해 검증합니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 회원 가입 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 8, max = 100, message = "Password must be 8-100 characters"))]
    pub password: String,
}

/// 이메일/비밀번호 로그인 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// 리프레시 토큰을 담는 요청 (갱신, 로그아웃 공용)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RefreshTokenRequest {
    #[validate(length(min = 1, message = "Refresh token is required"))]
    pub refresh_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_request_validation() {
        let valid = SignupRequest {
            email: "user@herm.io".to_string(),
            password: "Sup3rSecret!".to_string(),
        };
        assert!(valid.validate().is_ok());

        let bad_email = SignupRequest {
            email: "not-an-email".to_string(),
            ..valid.clone()
        };
        assert!(bad_email.validate().is_err());

        let short_password = SignupRequest {
            password: "short".to_string(),
            ..valid.clone()
        };
        assert!(short_password.validate().is_err());

        let long_password = SignupRequest {
            password: "x".repeat(101),
            ..valid
        };
        assert!(long_password.validate().is_err());
    }

    #[test]
    fn test_login_request_requires_password() {
        let request = LoginRequest {
            email: "user@herm.io".to_string(),
            password: String::new(),
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn test_refresh_request_requires_token() {
        let request = RefreshTokenRequest { refresh_token: String::new() };
        assert!(request.validate().is_err());
    }
}
