//! # 사용자 인증 서비스 구현
//!
//! 가입, 로그인, 리프레시 토큰 회전, 로그아웃, 현재 사용자 조회를 담당합니다.
//! 비밀번호는 [`PasswordCodec`], 토큰은 [`TokenService`] 를 통해서만 다룹니다.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                     UserService                      │
//! │  signup ─┐                                           │
//! │  login  ─┼─► PasswordCodec ─► TokenService.issue_pair│
//! │  refresh ─► verify_refresh ─► denylist ─► rotation   │
//! │  logout  ─► verify_refresh ─► denylist               │
//! └──────────────────────────────────────────────────────┘
//!          │                         │
//!          ▼                         ▼
//!     UserStore (MongoDB)     RevokedTokenStore (Redis)
//! ```
//!
//! ## 리프레시 토큰 회전
//!
//! 갱신에 사용된 리프레시 토큰은 `jti` 기준으로 남은 수명만큼 폐기 목록에 올라가므로
//! 같은 토큰으로 두 번 갱신할 수 없습니다. 폐기는 원자적이어서 같은 토큰으로 동시에
//! 들어온 갱신 요청 중 하나만 새 토큰 쌍을 받습니다. 액세스 토큰은 폐기하지 않습니다.
//!
//! 비밀번호가 재설정되면 그 시각 이전(같은 초 포함)에 발급된 리프레시 토큰은 모두 거부됩니다.

use std::sync::Arc;

use chrono::Utc;

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::users::request::{LoginRequest, SignupRequest};
use crate::domain::entities::users::user::User;
use crate::domain::models::token::TokenPair;
use crate::repositories::tokens::RevokedTokenStore;
use crate::repositories::users::UserStore;
use crate::services::auth::{PasswordCodec, TokenService};
use crate::utils::string_utils::normalize_email;

const INVALID_CREDENTIALS: &str = "Incorrect email or password";
const INVALID_TOKEN: &str = "Could not validate credentials";

/// 계정과 세션 토큰을 다루는 비즈니스 로직
pub struct UserService {
    users: Arc<dyn UserStore>,
    revoked_tokens: Arc<dyn RevokedTokenStore>,
    codec: Arc<PasswordCodec>,
    tokens: Arc<TokenService>,
}

impl UserService {
    pub fn new(
        users: Arc<dyn UserStore>,
        revoked_tokens: Arc<dyn RevokedTokenStore>,
        codec: Arc<PasswordCodec>,
        tokens: Arc<TokenService>,
    ) -> Self {
        Self {
            users,
            revoked_tokens,
            codec,
            tokens,
        }
    }

    /// 새 계정을 만들고 바로 토큰 쌍을 발급합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 이미 가입된 이메일
    /// * `AppError::InternalError` - 해싱/서명 실패
    pub async fn signup(&self, request: SignupRequest) -> AppResult<TokenPair> {
        let email = normalize_email(&request.email);

        if self.users.find_by_email(&email).await?.is_some() {
            log::warn!("중복 가입 시도: {}", email);
            return Err(AppError::ConflictError("Email already registered".to_string()));
        }

        let password_hash = self.codec.hash(&request.password)?;
        let user = self.users.create(User::new(email, password_hash)).await?;

        log::info!("신규 사용자 가입: {}", user.id);
        self.tokens.issue_pair(&user.id, &user.email, Utc::now())
    }

    /// 이메일/비밀번호로 인증하고 토큰 쌍을 발급합니다.
    ///
    /// 존재하지 않는 이메일과 틀린 비밀번호는 같은 에러로 응답합니다.
    /// 비활성 계정은 비밀번호가 맞더라도 403 입니다.
    pub async fn login(&self, request: LoginRequest) -> AppResult<TokenPair> {
        let email = normalize_email(&request.email);

        let user = match self.users.find_by_email(&email).await? {
            Some(user) => user,
            None => {
                log::warn!("로그인 실패 (미가입): {}", email);
                return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
            }
        };

        if !self.codec.verify(&request.password, &user.password_hash) {
            log::warn!("로그인 실패 (비밀번호 불일치): {}", user.id);
            return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
        }

        ensure_active(&user)?;

        log::info!("로그인 성공: {}", user.id);
        self.tokens.issue_pair(&user.id, &user.email, Utc::now())
    }

    /// 리프레시 토큰으로 새 토큰 쌍을 발급하고 기존 리프레시 토큰을 폐기합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 검증 실패, 액세스 토큰 사용, 폐기된 토큰,
    ///   비밀번호 변경 이전 토큰, 삭제된 사용자
    /// * `AppError::AuthorizationError` - 비활성 계정
    pub async fn refresh(&self, refresh_token: &str) -> AppResult<TokenPair> {
        let now = Utc::now();

        let claims = self.tokens
            .verify_refresh(refresh_token, now)
            .ok_or_else(|| AppError::AuthenticationError(INVALID_TOKEN.to_string()))?;

        if self.revoked_tokens.is_revoked(&claims.jti).await? {
            log::warn!("폐기된 리프레시 토큰 재사용: sub={}", claims.sub);
            return Err(AppError::AuthenticationError(INVALID_TOKEN.to_string()));
        }

        let user = self.users
            .find_by_id(&claims.sub)
            .await?
            .ok_or_else(|| AppError::AuthenticationError(INVALID_TOKEN.to_string()))?;

        ensure_active(&user)?;

        if issued_before_password_change(&user, claims.iat) {
            log::warn!("비밀번호 변경 이전에 발급된 리프레시 토큰: sub={}", claims.sub);
            return Err(AppError::AuthenticationError(INVALID_TOKEN.to_string()));
        }

        // 같은 jti 로 동시에 들어온 요청 중 하나만 폐기에 성공한다
        let claimed = self.revoked_tokens
            .revoke(&claims.jti, claims.exp - now.timestamp())
            .await?;
        if !claimed {
            log::warn!("리프레시 토큰 동시 사용 감지: sub={}", claims.sub);
            return Err(AppError::AuthenticationError(INVALID_TOKEN.to_string()));
        }

        log::info!("토큰 갱신: {}", user.id);
        self.tokens.issue_pair(&user.id, &user.email, now)
    }

    /// 리프레시 토큰을 폐기합니다.
    ///
    /// 이미 만료되었거나 검증되지 않는 토큰은 더 이상 쓸 수 없으므로 그대로 성공 처리합니다.
    /// 다른 기기에서 발급된 리프레시 토큰은 `jti` 가 달라 영향을 받지 않습니다.
    pub async fn logout(&self, refresh_token: &str) -> AppResult<()> {
        let now = Utc::now();

        match self.tokens.verify_refresh(refresh_token, now) {
            Some(claims) => {
                self.revoked_tokens
                    .revoke(&claims.jti, claims.exp - now.timestamp())
                    .await?;
                log::info!("로그아웃: {}", claims.sub);
            }
            None => log::debug!("로그아웃 요청의 리프레시 토큰이 유효하지 않음"),
        }

        Ok(())
    }

    /// 인증된 사용자 ID 로 활성 계정을 조회합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 토큰 발급 이후 삭제된 사용자
    /// * `AppError::AuthorizationError` - 비활성 계정
    pub async fn get_active_user(&self, user_id: &str) -> AppResult<User> {
        let user = self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        ensure_active(&user)?;
        Ok(user)
    }
}

pub(crate) fn ensure_active(user: &User) -> AppResult<()> {
    if user.is_active {
        Ok(())
    } else {
        log::warn!("비활성 계정 접근: {}", user.id);
        Err(AppError::AuthorizationError("User account is inactive".to_string()))
    }
}

fn issued_before_password_change(user: &User, issued_at: i64) -> bool {
    user.password_changed_at
        .map(|changed_at| issued_at <= changed_at.timestamp_millis().div_euclid(1000))
        .unwrap_or(false)
}
