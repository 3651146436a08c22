//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스는 구체 타입 대신 저장소 trait(`UserStore`, `ConnectedAppStore`,
//! `AccountTokenStore`, `PendingEmailStore`, `RevokedTokenStore`)에 의존합니다. 운영에서는 MongoDB/Redis 구현을,
//! 테스트에서는 메모리 구현을 주입합니다.
//!
//! | trait | 운영 구현 | 저장소 |
//! |-------|-----------|--------|
//! | [`users::UserStore`] | [`users::UserRepository`] | MongoDB `users` |
//! | [`connected_apps::ConnectedAppStore`] | [`connected_apps::ConnectedAppRepository`] | MongoDB `connected_apps` |
//! | [`account_tokens::AccountTokenStore`] | [`account_tokens::AccountTokenRepository`] | MongoDB `password_reset_tokens`, `email_verification_tokens` |
//! | [`pending_emails::PendingEmailStore`] | [`pending_emails::PendingEmailRepository`] | MongoDB `pending_emails` |
//! | [`tokens::RevokedTokenStore`] | [`tokens::TokenRepository`] | Redis `revoked_token:*` |
//!
//! # Examples
//!
//! ```rust,ignore
//! let users: Arc<dyn UserStore> = Arc::new(UserRepository::new(&database));
//! let user = users.find_by_email("user@example.com").await?;
//! ```

use async_trait::async_trait;

use crate::core::errors::AppResult;

pub mod users;
pub mod connected_apps;
pub mod tokens;
pub mod account_tokens;
pub mod pending_emails;

#[cfg(test)]
pub(crate) mod memory;

/// MongoDB 컬렉션을 소유한 리포지토리 공통 인터페이스
#[async_trait]
pub trait Repository: Send + Sync {
    fn collection_name(&self) -> &str;

    /// 시작 시 한 번 호출되어 인덱스 등을 준비합니다.
    async fn init(&self) -> AppResult<()>;
}

/// MongoDB 중복 키 에러(E11000) 여부
pub(crate) fn is_duplicate_key_error(error: &mongodb::error::Error) -> bool {
    use mongodb::error::{ErrorKind, WriteFailure};

    matches!(
        error.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == 11000
    )
}
