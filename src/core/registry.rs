//! 서비스 조립 (Composition Root)
//!
//! 설정, 저장소, 서비스를 시작 시 한 번 명시적으로 조립하여
//! `web::Data` 로 각 워커에 공유합니다. 전역 싱글톤이나 지연 초기화는 없습니다.
//!
//! ```text
//! AppConfig ──► Database ──► UserRepository ──────────┐
//!           │            ├─► ConnectedAppRepository ──┤
//!           │            ├─► AccountTokenRepository ──┼─► UserService
//!           │            └─► PendingEmailRepository ──┤   AccountService
//!           ├─► RedisClient ─► TokenRepository ───────┤   ConnectedAppService
//!           ├─► PasswordCodec ────────────────────────┤   OAuthService
//!           └─► TokenService ─────────────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! let registry = ServiceRegistry::connect(&config).await?;
//!
//! HttpServer::new(move || {
//!     App::new().configure(|cfg| registry.register(cfg))
//! })
//! ```

use std::sync::Arc;

use actix_web::web;
use log::info;

use crate::caching::redis::RedisClient;
use crate::config::{AppConfig, OAuthProvider};
use crate::core::errors::AppResult;
use crate::db::Database;
use crate::domain::entities::account_tokens::account_token::AccountTokenKind;
use crate::repositories::account_tokens::{AccountTokenRepository, AccountTokenStore};
use crate::repositories::connected_apps::{ConnectedAppRepository, ConnectedAppStore};
use crate::repositories::pending_emails::{PendingEmailRepository, PendingEmailStore};
use crate::repositories::tokens::{RevokedTokenStore, TokenRepository};
use crate::repositories::users::{UserRepository, UserStore};
use crate::repositories::Repository;
use crate::services::auth::{OAuthService, PasswordCodec, TokenService};
use crate::services::connected_apps::ConnectedAppService;
use crate::services::users::{AccountService, UserService};

/// 서비스 조립에 필요한 저장소 구현 묶음
pub struct Stores {
    pub users: Arc<dyn UserStore>,
    pub apps: Arc<dyn ConnectedAppStore>,
    pub reset_tokens: Arc<dyn AccountTokenStore>,
    pub verification_tokens: Arc<dyn AccountTokenStore>,
    pub emails: Arc<dyn PendingEmailStore>,
    pub revoked_tokens: Arc<dyn RevokedTokenStore>,
}

/// 핸들러와 미들웨어가 사용하는 공유 서비스 묶음
#[derive(Clone)]
pub struct ServiceRegistry {
    pub tokens: web::Data<TokenService>,
    pub users: web::Data<UserService>,
    pub accounts: web::Data<AccountService>,
    pub connected_apps: web::Data<ConnectedAppService>,
    pub oauth: web::Data<OAuthService>,
}

impl ServiceRegistry {
    /// MongoDB/Redis 에 연결하고 인덱스를 준비한 뒤 서비스를 조립합니다.
    pub async fn connect(config: &AppConfig) -> AppResult<Self> {
        info!("📡 데이터베이스 연결 중...");
        let database = Database::new(&config.database).await?;
        let redis = Arc::new(RedisClient::new(&config.redis).await?);

        let user_repo = Arc::new(UserRepository::new(&database));
        let app_repo = Arc::new(ConnectedAppRepository::new(&database));
        let reset_repo = Arc::new(AccountTokenRepository::new(&database, AccountTokenKind::PasswordReset));
        let verification_repo = Arc::new(AccountTokenRepository::new(&database, AccountTokenKind::EmailVerification));
        let email_repo = Arc::new(PendingEmailRepository::new(&database));

        let repositories: [&dyn Repository; 5] = [
            user_repo.as_ref(),
            app_repo.as_ref(),
            reset_repo.as_ref(),
            verification_repo.as_ref(),
            email_repo.as_ref(),
        ];
        for repository in repositories {
            repository.init().await?;
            info!("✅ {} 인덱스 준비 완료", repository.collection_name());
        }

        Self::from_stores(
            config,
            Stores {
                users: user_repo,
                apps: app_repo,
                reset_tokens: reset_repo,
                verification_tokens: verification_repo,
                emails: email_repo,
                revoked_tokens: Arc::new(TokenRepository::new(redis)),
            },
        )
    }

    /// 주어진 저장소 구현으로 서비스를 조립합니다.
    pub fn from_stores(config: &AppConfig, stores: Stores) -> AppResult<Self> {
        let tokens = Arc::new(TokenService::new(config.jwt.clone()));
        let codec = Arc::new(PasswordCodec::new(&config.password));

        let connected_apps = Arc::new(ConnectedAppService::new(stores.apps));
        let oauth = OAuthService::new(config.oauth.clone(), connected_apps.clone())?;
        let accounts = AccountService::new(
            stores.users.clone(),
            stores.reset_tokens,
            stores.verification_tokens,
            stores.emails,
            codec.clone(),
            config.account.clone(),
        );
        let users = UserService::new(stores.users, stores.revoked_tokens, codec, tokens.clone());

        for provider in [OAuthProvider::Google, OAuthProvider::Microsoft, OAuthProvider::Yahoo] {
            if !config.oauth.client(provider).is_configured() {
                log::warn!("⚠️ {} OAuth 클라이언트가 설정되지 않았습니다", provider.as_str());
            }
        }

        Ok(Self {
            tokens: web::Data::from(tokens),
            users: web::Data::new(users),
            accounts: web::Data::new(accounts),
            connected_apps: web::Data::from(connected_apps),
            oauth: web::Data::new(oauth),
        })
    }

    /// 앱 데이터로 등록합니다.
    pub fn register(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.tokens.clone())
            .app_data(self.users.clone())
            .app_data(self.accounts.clone())
            .app_data(self.connected_apps.clone())
            .app_data(self.oauth.clone());
    }
}
