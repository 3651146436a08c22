//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 인증 서비스 전체에서 공유하는 통합 에러 타입입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 서비스 계층의 에러가
//! 그대로 HTTP 응답으로 변환되도록 합니다.
//!
//! ## 상태 코드 매핑
//!
//! | Variant | HTTP Status |
//! |---------|-------------|
//! | `ValidationError`, `BadRequest` | 400 |
//! | `AuthenticationError` | 401 |
//! | `AuthorizationError` | 403 |
//! | `NotFound` | 404 |
//! | `ConflictError` | 409 |
//! | 그 외 | 500 |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! async fn signup(&self, request: SignupRequest) -> AppResult<TokenPair> {
//!     if self.users.find_by_email(&request.email).await?.is_some() {
//!         return Err(AppError::ConflictError("Email already registered".to_string()));
//!     }
//!     // ...
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 응답 본문은 항상 `{"error": "<메시지>"}` 형태의 JSON 입니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Redis 관련 에러 (500)
    #[error("Redis error: {0}")]
    RedisError(String),

    /// 입력값 검증 에러 (400)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 잘못된 요청 (400), 외부 OAuth 프로바이더가 요청을 거절한 경우 등
    #[error("{0}")]
    BadRequest(String),

    /// 리소스 없음 (404)
    #[error("{0}")]
    NotFound(String),

    /// 중복 리소스 (409)
    #[error("{0}")]
    ConflictError(String),

    /// 인증 실패 (401)
    #[error("{0}")]
    AuthenticationError(String),

    /// 권한 부족 (403)
    #[error("{0}")]
    AuthorizationError(String),

    /// 외부 서비스 통신 실패 (500)
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 내부 서버 에러 (500)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 각 에러를 상태 코드와 JSON 본문으로 변환합니다.
    ///
    /// 500 계열은 내부 메시지를 노출하지 않고 로그로만 남깁니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        let message = if status.is_server_error() {
            log::error!("❌ {}", self);
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": message
            }))
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(e: mongodb::error::Error) -> Self {
        AppError::DatabaseError(e.to_string())
    }
}

impl From<redis::RedisError> for AppError {
    fn from(e: redis::RedisError) -> Self {
        AppError::RedisError(e.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::ValidationError(e.to_string())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
