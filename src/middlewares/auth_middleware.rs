//! JWT 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 Bearer 액세스 토큰을 검증하고
//! [`AuthenticatedUser`](crate::domain::models::auth::AuthenticatedUser) 를
//! request extension 에 저장합니다.
//!
//! 검증은 서명과 만료만 확인하는 무상태 방식입니다. 계정 활성 여부는
//! 사용자를 조회하는 핸들러에서 확인합니다.
//!
//! 헤더가 없거나, 토큰이 검증되지 않거나, 리프레시 토큰이 제시되면 401 을 반환합니다.
//!
//! ```json
//! {"error": "authentication_required", "message": "Could not validate credentials"}
//! ```

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::middlewares::auth_inner::AuthMiddlewareService;

/// 보호된 스코프에 적용하는 인증 미들웨어
///
/// `web::Data<TokenService>` 가 앱 데이터로 등록되어 있어야 합니다.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthMiddleware;

impl AuthMiddleware {
    pub fn required() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::JwtConfig;
    use crate::domain::models::auth::AuthenticatedUser;
    use crate::services::auth::TokenService;
    use actix_web::{http::StatusCode, test, web, App, HttpResponse};
    use chrono::{Duration, Utc};

    async fn whoami(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().body(user.user_id)
    }

    fn token_service() -> TokenService {
        TokenService::new(JwtConfig::new("middleware-secret"))
    }

    macro_rules! protected_app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(token_service()))
                    .service(
                        web::scope("/protected")
                            .wrap(AuthMiddleware::required())
                            .route("/whoami", web::get().to(whoami)),
                    ),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_missing_header_is_unauthorized() {
        let app = protected_app!();

        let req = test::TestRequest::get().uri("/protected/whoami").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "authentication_required");
    }

    #[actix_web::test]
    async fn test_refresh_token_is_unauthorized() {
        let app = protected_app!();
        let refresh = token_service().issue_refresh("user-1", Utc::now()).unwrap();

        let req = test::TestRequest::get()
            .uri("/protected/whoami")
            .insert_header(("Authorization", format!("Bearer {}", refresh)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_expired_access_token_is_unauthorized() {
        let app = protected_app!();
        let expired = token_service()
            .issue_access("user-1", "user@herm.io", Utc::now() - Duration::hours(1))
            .unwrap();

        let req = test::TestRequest::get()
            .uri("/protected/whoami")
            .insert_header(("Authorization", format!("Bearer {}", expired)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_valid_access_token_passes_user_through() {
        let app = protected_app!();
        let access = token_service().issue_access("user-1", "user@herm.io", Utc::now()).unwrap();

        let req = test::TestRequest::get()
            .uri("/protected/whoami")
            .insert_header(("Authorization", format!("Bearer {}", access)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(test::read_body(resp).await, "user-1");
    }
}
