//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{web, Error, HttpMessage, HttpResponse};
use chrono::Utc;
use futures_util::future::LocalBoxFuture;

use crate::core::errors::{AppError, AppResult};
use crate::domain::models::auth::AuthenticatedUser;
use crate::services::auth::TokenService;

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            let token_service = match req.app_data::<web::Data<TokenService>>() {
                Some(token_service) => token_service.clone(),
                None => {
                    log::error!("TokenService 가 등록되지 않았습니다");
                    let (req, _) = req.into_parts();
                    let response = HttpResponse::InternalServerError()
                        .json(serde_json::json!({ "error": "Internal server error" }));
                    return Ok(ServiceResponse::new(req, response).map_into_right_body());
                }
            };

            match authenticate(&req, &token_service) {
                Ok(user) => {
                    log::debug!("인증 성공: 사용자 ID {}", user.user_id);
                    req.extensions_mut().insert(user);
                }
                Err(err) => {
                    log::warn!("인증 실패: {} {} ({})", req.method(), req.path(), err);
                    let response = HttpResponse::Unauthorized()
                        .json(serde_json::json!({
                            "error": "authentication_required",
                            "message": "Could not validate credentials"
                        }));
                    let (req, _) = req.into_parts();
                    return Ok(ServiceResponse::new(req, response).map_into_right_body());
                }
            }

            // 다음 서비스로 요청 전달
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 요청의 Bearer 토큰을 액세스 토큰으로 검증
fn authenticate(req: &ServiceRequest, token_service: &TokenService) -> AppResult<AuthenticatedUser> {
    let auth_header = req.headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::AuthenticationError("Missing authorization header".to_string()))?;

    let token = token_service.extract_bearer_token(auth_header)?;

    // 리프레시 토큰은 여기서 거부된다
    let claims = token_service
        .verify_access(token, Utc::now())
        .ok_or_else(|| AppError::AuthenticationError("Invalid access token".to_string()))?;

    Ok(AuthenticatedUser::from(claims))
}
