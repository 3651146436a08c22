//! OAuth HTTP Handlers
//!
//! - `GET /oauth/{provider}/authorize` - 동의 화면 URL 과 state 발급 (공개)
//! - `GET /oauth/{provider}/callback?code=...` - 코드 교환 후 연결 앱 저장 (Bearer 필요)
//!
//! `provider` 는 `google`, `microsoft`, `yahoo` 중 하나입니다.

use actix_web::{get, web, HttpResponse};
use validator::Validate;

use crate::config::OAuthProvider;
use crate::core::errors::AppError;
use crate::domain::dto::connected_apps::OAuthCallbackQuery;
use crate::domain::models::auth::AuthenticatedUser;
use crate::middlewares::AuthMiddleware;
use crate::services::auth::OAuthService;

fn parse_provider(raw: &str) -> Result<OAuthProvider, AppError> {
    OAuthProvider::from_str(raw).map_err(AppError::BadRequest)
}

#[get("/{provider}/authorize")]
pub async fn authorize(
    provider: web::Path<String>,
    oauth_service: web::Data<OAuthService>,
) -> Result<HttpResponse, AppError> {
    let provider = parse_provider(&provider)?;

    let response = oauth_service.authorization_url(provider)?;

    Ok(HttpResponse::Ok().json(response))
}

#[get("/{provider}/callback", wrap = "AuthMiddleware::required()")]
pub async fn callback(
    user: AuthenticatedUser,
    provider: web::Path<String>,
    query: web::Query<OAuthCallbackQuery>,
    oauth_service: web::Data<OAuthService>,
) -> Result<HttpResponse, AppError> {
    let provider = parse_provider(&provider)?;
    query.validate()?;

    let app = oauth_service
        .connect_with_code(&user.user_id, provider, &query.code)
        .await?;

    log::info!("OAuth 연결 완료: user={} provider={}", user.user_id, provider.as_str());
    Ok(HttpResponse::Ok().json(app))
}
