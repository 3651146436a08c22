//! Authentication HTTP Handlers
//!
//! 가입, 로그인, 토큰 갱신/로그아웃, 현재 사용자 조회 엔드포인트입니다.
//!
//! # Endpoints
//!
//! - `POST /auth/signup`  - 가입 후 토큰 쌍 발급 (201)
//! - `POST /auth/login`   - 이메일/비밀번호 로그인
//! - `POST /auth/refresh` - 리프레시 토큰 회전
//! - `POST /auth/logout`  - 리프레시 토큰 폐기
//! - `GET  /auth/me`      - 현재 사용자 (Bearer 액세스 토큰 필요)
//!
//! `signup`, `login`, `refresh` 는 라우트 설정에서 별도 요청 제한을 걸기 위해
//! 매크로 없이 `web::resource` 로 등록합니다.

use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::users::request::{LoginRequest, RefreshTokenRequest, SignupRequest};
use crate::domain::dto::users::response::{MessageResponse, UserResponse};
use crate::domain::models::auth::AuthenticatedUser;
use crate::middlewares::AuthMiddleware;
use crate::services::users::UserService;

pub async fn signup(
    payload: web::Json<SignupRequest>,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let token_pair = user_service.signup(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(token_pair))
}

pub async fn login(
    payload: web::Json<LoginRequest>,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let token_pair = user_service.login(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(token_pair))
}

pub async fn refresh(
    payload: web::Json<RefreshTokenRequest>,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let token_pair = user_service.refresh(&payload.refresh_token).await?;

    Ok(HttpResponse::Ok().json(token_pair))
}

#[post("/logout")]
pub async fn logout(
    payload: web::Json<RefreshTokenRequest>,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    user_service.logout(&payload.refresh_token).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Successfully logged out")))
}

#[get("/me", wrap = "AuthMiddleware::required()")]
pub async fn me(
    user: AuthenticatedUser,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let user = user_service.get_active_user(&user.user_id).await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}
