//! # 계정 복구/이메일 인증 서비스
//!
//! 비밀번호 재설정과 이메일 인증 흐름을 담당합니다. 두 흐름 모두
//! 일회용 토큰을 발급해 `pending_emails` 에 메일을 적재하고, 사용자가
//! 링크의 토큰을 제출하면 검증 후 사용 처리합니다.
//!
//! ```text
//! forgot_password ─► AccountTokenStore.issue ─► PendingEmailStore.enqueue
//! reset_password  ─► find_by_hash ─► consume ─► UserStore.update_password
//! send_verification ─► AccountTokenStore.issue ─► PendingEmailStore.enqueue
//! verify_email    ─► find_by_hash ─► consume ─► UserStore.mark_verified
//! ```
//!
//! 재설정 요청은 가입 여부와 무관하게 항상 성공으로 응답합니다.
//! 재설정이 끝나면 `password_changed_at` 이 갱신되어 기존 리프레시 토큰이 모두 무효가 됩니다.

use std::collections::HashMap;
use std::sync::Arc;

use mongodb::bson::DateTime;

use crate::config::AccountConfig;
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::users::request::{ForgotPasswordRequest, ResetPasswordRequest};
use crate::domain::entities::account_tokens::account_token::AccountToken;
use crate::domain::entities::pending_emails::pending_email::{EmailTemplate, PendingEmail};
use crate::domain::entities::users::user::User;
use crate::repositories::account_tokens::AccountTokenStore;
use crate::repositories::pending_emails::PendingEmailStore;
use crate::repositories::users::UserStore;
use crate::services::auth::PasswordCodec;
use crate::services::users::user_service::ensure_active;
use crate::utils::string_utils::normalize_email;

const INVALID_RESET_TOKEN: &str = "Invalid or expired password reset token";
const INVALID_VERIFICATION_TOKEN: &str = "Invalid or expired verification token";

pub struct AccountService {
    users: Arc<dyn UserStore>,
    reset_tokens: Arc<dyn AccountTokenStore>,
    verification_tokens: Arc<dyn AccountTokenStore>,
    emails: Arc<dyn PendingEmailStore>,
    codec: Arc<PasswordCodec>,
    config: AccountConfig,
}

impl AccountService {
    pub fn new(
        users: Arc<dyn UserStore>,
        reset_tokens: Arc<dyn AccountTokenStore>,
        verification_tokens: Arc<dyn AccountTokenStore>,
        emails: Arc<dyn PendingEmailStore>,
        codec: Arc<PasswordCodec>,
        config: AccountConfig,
    ) -> Self {
        Self {
            users,
            reset_tokens,
            verification_tokens,
            emails,
            codec,
            config,
        }
    }

    /// 비밀번호 재설정 링크를 메일 대기열에 넣습니다.
    ///
    /// 미가입/비활성 계정이어도 `Ok(())` 를 반환하여 가입 여부를 드러내지 않습니다.
    pub async fn forgot_password(
        &self,
        request: ForgotPasswordRequest,
        ip_address: Option<String>,
    ) -> AppResult<()> {
        let email = normalize_email(&request.email);

        let user = match self.users.find_by_email(&email).await? {
            Some(user) if user.is_active => user,
            Some(user) => {
                log::warn!("비활성 계정의 비밀번호 재설정 요청: {}", user.id);
                return Ok(());
            }
            None => {
                log::info!("미가입 이메일의 비밀번호 재설정 요청");
                return Ok(());
            }
        };

        let expire_hours = self.config.password_reset_expire_hours;
        let (token, entity) = AccountToken::issue(&user.id, expire_hours, ip_address);
        self.reset_tokens.issue(entity).await?;

        let link = format!("{}/reset-password?token={}", self.config.frontend_url, token);
        self.enqueue(&user, EmailTemplate::ForgetPassword, link, expire_hours).await?;

        log::info!("비밀번호 재설정 토큰 발급: {} ({}시간)", user.id, expire_hours);
        Ok(())
    }

    /// 재설정 토큰을 사용 처리하고 새 비밀번호를 저장합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::BadRequest` - 없거나 만료되었거나 이미 사용된 토큰
    /// * `AppError::NotFound` - 토큰의 사용자가 삭제된 경우
    /// * `AppError::AuthorizationError` - 비활성 계정
    pub async fn reset_password(&self, request: ResetPasswordRequest) -> AppResult<()> {
        let token = self.reset_tokens
            .find_by_hash(&AccountToken::hash_token(&request.token))
            .await?
            .filter(|token| token.is_valid(DateTime::now()))
            .ok_or_else(|| {
                log::warn!("유효하지 않은 비밀번호 재설정 토큰");
                AppError::BadRequest(INVALID_RESET_TOKEN.to_string())
            })?;

        let user = self.find_user(&token.user_id).await?;
        ensure_active(&user)?;

        let password_hash = self.codec.hash(&request.new_password)?;

        if !self.reset_tokens.consume(&token.id).await? {
            log::warn!("비밀번호 재설정 토큰 동시 사용: {}", user.id);
            return Err(AppError::BadRequest(INVALID_RESET_TOKEN.to_string()));
        }

        if !self.users.update_password(&user.id, &password_hash).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        log::info!("비밀번호 재설정 완료: {}", user.id);
        Ok(())
    }

    /// 인증 메일을 보냅니다. 이미 인증된 계정이면 보내지 않고 `false` 입니다.
    pub async fn send_verification(&self, user_id: &str, ip_address: Option<String>) -> AppResult<bool> {
        let user = self.find_user(user_id).await?;
        ensure_active(&user)?;

        if user.is_verified {
            return Ok(false);
        }

        let expire_hours = self.config.email_verification_expire_hours;
        let (token, entity) = AccountToken::issue(&user.id, expire_hours, ip_address);
        self.verification_tokens.issue(entity).await?;

        let link = format!("{}/verify-email?token={}", self.config.frontend_url, token);
        self.enqueue(&user, EmailTemplate::EmailVerification, link, expire_hours).await?;

        log::info!("이메일 인증 토큰 발급: {}", user.id);
        Ok(true)
    }

    /// 인증 토큰으로 이메일을 인증합니다.
    ///
    /// 이미 인증된 사용자라면 사용된 토큰이어도 성공으로 처리합니다.
    /// (프론트엔드의 중복 호출 대응)
    ///
    /// # Errors
    ///
    /// * `AppError::BadRequest` - 없거나 만료된 토큰, 또는 미인증 사용자의 사용된 토큰
    /// * `AppError::NotFound` - 토큰의 사용자가 삭제된 경우
    pub async fn verify_email(&self, token: &str) -> AppResult<User> {
        let invalid = || AppError::BadRequest(INVALID_VERIFICATION_TOKEN.to_string());

        let token = self.verification_tokens
            .find_by_hash(&AccountToken::hash_token(token))
            .await?
            .filter(|token| !token.is_expired(DateTime::now()))
            .ok_or_else(|| {
                log::warn!("유효하지 않은 이메일 인증 토큰");
                invalid()
            })?;

        let mut user = self.find_user(&token.user_id).await?;

        if user.is_verified {
            if !token.is_used {
                self.verification_tokens.consume(&token.id).await?;
            }
            return Ok(user);
        }

        if token.is_used || !self.verification_tokens.consume(&token.id).await? {
            log::warn!("사용된 인증 토큰 재사용: {}", user.id);
            return Err(invalid());
        }

        if !self.users.mark_verified(&user.id).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        log::info!("이메일 인증 완료: {}", user.id);
        user.is_verified = true;
        Ok(user)
    }

    async fn find_user(&self, user_id: &str) -> AppResult<User> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| {
                log::error!("토큰의 사용자를 찾을 수 없음: {}", user_id);
                AppError::NotFound("User not found".to_string())
            })
    }

    async fn enqueue(
        &self,
        user: &User,
        template: EmailTemplate,
        link: String,
        expire_hours: i64,
    ) -> AppResult<()> {
        let link_key = match template {
            EmailTemplate::ForgetPassword => "reset_link",
            EmailTemplate::EmailVerification => "verification_link",
        };
        let user_name = user.email.split('@').next().unwrap_or_default().to_string();

        let variables = HashMap::from([
            (link_key.to_string(), link),
            ("user_name".to_string(), user_name),
            ("expiry_hours".to_string(), expire_hours.to_string()),
        ]);

        self.emails
            .enqueue(PendingEmail::new(&user.email, template, variables))
            .await
    }
}
