//! 인증된 사용자 정보와 Actix 추출기
//!
//! [`crate::middlewares::AuthMiddleware`] 가 액세스 토큰을 검증한 뒤
//! request extension 에 넣어 두면, 핸들러는 인자로 `AuthenticatedUser` 를 받아 사용합니다.
//!
//! ```rust,ignore
//! #[get("/me")]
//! pub async fn me(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
//!     log::info!("요청 사용자: {}", user.user_id);
//!     // ...
//! }
//! ```

use std::future::{ready, Ready};

use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::domain::models::token::AccessClaims;

/// 액세스 토큰에서 복원한 요청 주체
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub user_id: String,
    pub email: String,
}

impl From<AccessClaims> for AuthenticatedUser {
    fn from(claims: AccessClaims) -> Self {
        Self {
            user_id: claims.sub,
            email: claims.email,
        }
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(actix_web::error::ErrorUnauthorized(
                "Could not validate credentials",
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_extracts_user_from_extensions() {
        let req = TestRequest::default().to_http_request();
        req.extensions_mut().insert(AuthenticatedUser {
            user_id: "user-1".to_string(),
            email: "user@herm.io".to_string(),
        });

        let user = AuthenticatedUser::extract(&req).await.unwrap();

        assert_eq!(user.user_id, "user-1");
    }

    #[actix_web::test]
    async fn test_missing_user_is_unauthorized() {
        let req = TestRequest::default().to_http_request();

        let err = AuthenticatedUser::extract(&req).await.unwrap_err();

        assert_eq!(
            err.as_response_error().status_code(),
            actix_web::http::StatusCode::UNAUTHORIZED
        );
    }
}
