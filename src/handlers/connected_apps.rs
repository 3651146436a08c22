//! Connected App HTTP Handlers
//!
//! 인증된 사용자의 이메일 프로바이더 연결을 관리합니다.
//! 라우트 설정에서 스코프 전체에 [`AuthMiddleware`](crate::middlewares::AuthMiddleware) 가 걸립니다.

use actix_web::{delete, get, post, web, HttpResponse};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::connected_apps::ConnectAppRequest;
use crate::domain::dto::users::response::MessageResponse;
use crate::domain::models::auth::AuthenticatedUser;
use crate::services::connected_apps::ConnectedAppService;

#[post("")]
pub async fn connect_app(
    user: AuthenticatedUser,
    payload: web::Json<ConnectAppRequest>,
    service: web::Data<ConnectedAppService>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let app = service.connect(&user.user_id, payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(app))
}

#[get("")]
pub async fn list_connected_apps(
    user: AuthenticatedUser,
    service: web::Data<ConnectedAppService>,
) -> Result<HttpResponse, AppError> {
    let apps = service.list(&user.user_id).await?;

    Ok(HttpResponse::Ok().json(apps))
}

#[delete("/{app_id}")]
pub async fn delete_connected_app(
    user: AuthenticatedUser,
    app_id: web::Path<String>,
    service: web::Data<ConnectedAppService>,
) -> Result<HttpResponse, AppError> {
    service.delete(&user.user_id, &app_id).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Connected app deleted successfully")))
}
