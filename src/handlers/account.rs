//! Account Recovery HTTP Handlers
//!
//! # Endpoints
//!
//! - `POST /auth/forgot-password`     - 재설정 메일 요청 (가입 여부와 무관하게 200)
//! - `POST /auth/reset-password`      - 메일의 토큰으로 비밀번호 재설정
//! - `POST /auth/verify-email/send`   - 인증 메일 발송 (Bearer 액세스 토큰 필요)
//! - `POST /auth/verify-email`        - 메일의 토큰으로 이메일 인증
//!
//! `forgot-password`, `reset-password` 는 가입/로그인과 같은 요청 제한을 받습니다.

use actix_web::{post, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::users::request::{ForgotPasswordRequest, ResetPasswordRequest, VerifyEmailRequest};
use crate::domain::dto::users::response::{MessageResponse, UserResponse};
use crate::domain::models::auth::AuthenticatedUser;
use crate::middlewares::AuthMiddleware;
use crate::services::users::AccountService;

fn client_ip(req: &HttpRequest) -> Option<String> {
    req.connection_info().realip_remote_addr().map(str::to_string)
}

pub async fn forgot_password(
    req: HttpRequest,
    payload: web::Json<ForgotPasswordRequest>,
    account_service: web::Data<AccountService>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    account_service.forgot_password(payload.into_inner(), client_ip(&req)).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new(
        "If an account exists with this email, a password reset link has been sent.",
    )))
}

pub async fn reset_password(
    payload: web::Json<ResetPasswordRequest>,
    account_service: web::Data<AccountService>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    account_service.reset_password(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Password has been reset successfully.")))
}

#[post("/verify-email/send", wrap = "AuthMiddleware::required()")]
pub async fn send_verification_email(
    req: HttpRequest,
    user: AuthenticatedUser,
    account_service: web::Data<AccountService>,
) -> Result<HttpResponse, AppError> {
    let sent = account_service.send_verification(&user.user_id, client_ip(&req)).await?;

    let message = if sent {
        "Verification email has been sent."
    } else {
        "Email is already verified."
    };

    Ok(HttpResponse::Ok().json(MessageResponse::new(message)))
}

#[post("/verify-email")]
pub async fn verify_email(
    payload: web::Json<VerifyEmailRequest>,
    account_service: web::Data<AccountService>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let user = account_service.verify_email(&payload.token).await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::config::{AccountConfig, JwtConfig, PasswordConfig};
    use crate::handlers::auth;
    use crate::repositories::memory::{
        InMemoryAccountTokenStore, InMemoryPendingEmailStore, InMemoryRevokedTokenStore, InMemoryUserStore,
    };
    use crate::services::auth::{PasswordCodec, TokenService};
    use crate::services::users::UserService;

    struct Data {
        tokens: web::Data<TokenService>,
        users: web::Data<UserService>,
        accounts: web::Data<AccountService>,
        emails: Arc<InMemoryPendingEmailStore>,
    }

    fn app_data() -> Data {
        let user_store = Arc::new(InMemoryUserStore::default());
        let emails = Arc::new(InMemoryPendingEmailStore::default());
        let codec = Arc::new(PasswordCodec::new(&PasswordConfig { bcrypt_cost: 4 }));
        let tokens = Arc::new(TokenService::new(JwtConfig::new("account-handler-secret")));

        let users = UserService::new(
            user_store.clone(),
            Arc::new(InMemoryRevokedTokenStore::default()),
            codec.clone(),
            tokens.clone(),
        );
        let accounts = AccountService::new(
            user_store,
            Arc::new(InMemoryAccountTokenStore::default()),
            Arc::new(InMemoryAccountTokenStore::default()),
            emails.clone(),
            codec,
            AccountConfig::default(),
        );

        Data {
            tokens: web::Data::from(tokens),
            users: web::Data::new(users),
            accounts: web::Data::new(accounts),
            emails,
        }
    }

    macro_rules! account_app {
        ($data:expr) => {{
            test::init_service(
                App::new()
                    .app_data($data.tokens.clone())
                    .app_data($data.users.clone())
                    .app_data($data.accounts.clone())
                    .service(
                        web::scope("/auth")
                            .route("/signup", web::post().to(auth::signup))
                            .route("/login", web::post().to(auth::login))
                            .route("/refresh", web::post().to(auth::refresh))
                            .route("/forgot-password", web::post().to(forgot_password))
                            .route("/reset-password", web::post().to(reset_password))
                            .service(send_verification_email)
                            .service(verify_email),
                    ),
            )
            .await
        }};
    }

    fn last_token(data: &Data, link_key: &str) -> String {
        let email = data.emails.sent().pop().unwrap();
        email.template_variables[link_key].split("token=").nth(1).unwrap().to_string()
    }

    #[actix_web::test]
    async fn test_forgot_then_reset_password() {
        let data = app_data();
        let app = account_app!(data);

        let req = test::TestRequest::post()
            .uri("/auth/signup")
            .set_json(json!({"email": "erin@herm.io", "password": "0ldPassword!"}))
            .to_request();
        let session: Value = test::call_and_read_body_json(&app, req).await;

        let req = test::TestRequest::post()
            .uri("/auth/forgot-password")
            .set_json(json!({"email": "erin@herm.io"}))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
        let token = last_token(&data, "reset_link");

        let req = test::TestRequest::post()
            .uri("/auth/reset-password")
            .set_json(json!({"token": token, "new_password": "N3wPassword!"}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["message"], "Password has been reset successfully.");

        let req = test::TestRequest::post()
            .uri("/auth/login")
            .set_json(json!({"email": "erin@herm.io", "password": "0ldPassword!"}))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);

        let req = test::TestRequest::post()
            .uri("/auth/login")
            .set_json(json!({"email": "erin@herm.io", "password": "N3wPassword!"}))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        // 재설정 이전 세션은 갱신할 수 없다
        let req = test::TestRequest::post()
            .uri("/auth/refresh")
            .set_json(json!({"refresh_token": session["refresh_token"]}))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_forgot_password_hides_unknown_email() {
        let data = app_data();
        let app = account_app!(data);

        let req = test::TestRequest::post()
            .uri("/auth/forgot-password")
            .set_json(json!({"email": "nobody@herm.io"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert!(data.emails.sent().is_empty());
    }

    #[actix_web::test]
    async fn test_reset_password_with_bad_token_is_bad_request() {
        let data = app_data();
        let app = account_app!(data);

        let req = test::TestRequest::post()
            .uri("/auth/reset-password")
            .set_json(json!({"token": "forged", "new_password": "N3wPassword!"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Invalid or expired password reset token");
    }

    #[actix_web::test]
    async fn test_send_and_verify_email() {
        let data = app_data();
        let app = account_app!(data);

        let req = test::TestRequest::post()
            .uri("/auth/verify-email/send")
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);

        let req = test::TestRequest::post()
            .uri("/auth/signup")
            .set_json(json!({"email": "frank@herm.io", "password": "Sup3rSecret!"}))
            .to_request();
        let session: Value = test::call_and_read_body_json(&app, req).await;
        let bearer = format!("Bearer {}", session["access_token"].as_str().unwrap());

        let req = test::TestRequest::post()
            .uri("/auth/verify-email/send")
            .insert_header(("Authorization", bearer.clone()))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["message"], "Verification email has been sent.");
        let token = last_token(&data, "verification_link");

        let req = test::TestRequest::post()
            .uri("/auth/verify-email")
            .set_json(json!({"token": token}))
            .to_request();
        let user: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(user["email"], "frank@herm.io");
        assert_eq!(user["is_verified"], true);

        let req = test::TestRequest::post()
            .uri("/auth/verify-email/send")
            .insert_header(("Authorization", bearer))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["message"], "Email is already verified.");
    }
}
