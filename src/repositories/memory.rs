//! 테스트용 메모리 저장소
//!
//! MongoDB/Redis 없이 서비스와 핸들러를 검증하기 위한 구현입니다.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use mongodb::bson::DateTime;
use uuid::Uuid;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::account_tokens::account_token::AccountToken;
use crate::domain::entities::connected_apps::connected_app::ConnectedApp;
use crate::domain::entities::pending_emails::pending_email::PendingEmail;
use crate::repositories::account_tokens::AccountTokenStore;
use crate::domain::entities::users::user::User;
use crate::repositories::connected_apps::{ConnectedAppStore, NewConnectedApp};
use crate::repositories::pending_emails::PendingEmailStore;
use crate::repositories::tokens::token_repository::revoked_token_key;
use crate::repositories::tokens::RevokedTokenStore;
use crate::repositories::users::UserStore;

#[derive(Default)]
pub struct InMemoryUserStore {
    users: Mutex<HashMap<String, User>>,
}

impl InMemoryUserStore {
    pub fn set_active(&self, id: &str, active: bool) {
        if let Some(user) = self.users.lock().unwrap().get_mut(id) {
            user.is_active = active;
        }
    }

    pub fn remove(&self, id: &str) {
        self.users.lock().unwrap().remove(id);
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self.users.lock().unwrap().values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        Ok(self.users.lock().unwrap().get(id).cloned())
    }

    async fn create(&self, user: User) -> AppResult<User> {
        let mut users = self.users.lock().unwrap();
        if users.values().any(|u| u.email == user.email) {
            return Err(AppError::ConflictError("Email already registered".to_string()));
        }
        users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn update_password(&self, id: &str, password_hash: &str) -> AppResult<bool> {
        let mut users = self.users.lock().unwrap();
        let Some(user) = users.get_mut(id) else {
            return Ok(false);
        };

        let now = DateTime::now();
        user.password_hash = password_hash.to_string();
        user.password_changed_at = Some(now);
        user.updated_at = now;
        Ok(true)
    }

    async fn mark_verified(&self, id: &str) -> AppResult<bool> {
        let mut users = self.users.lock().unwrap();
        let Some(user) = users.get_mut(id) else {
            return Ok(false);
        };

        user.is_verified = true;
        user.updated_at = DateTime::now();
        Ok(true)
    }
}

#[derive(Default)]
pub struct InMemoryConnectedAppStore {
    apps: Mutex<Vec<ConnectedApp>>,
}

#[async_trait]
impl ConnectedAppStore for InMemoryConnectedAppStore {
    async fn upsert(&self, app: NewConnectedApp) -> AppResult<ConnectedApp> {
        let mut apps = self.apps.lock().unwrap();
        let now = DateTime::now();

        if let Some(existing) = apps
            .iter_mut()
            .find(|a| a.user_id == app.user_id && a.provider == app.provider)
        {
            existing.provider_email = app.provider_email;
            existing.access_token = app.access_token;
            existing.refresh_token = app.refresh_token;
            existing.token_expires_at = app.token_expires_at;
            existing.updated_at = now;
            return Ok(existing.clone());
        }

        let created = ConnectedApp {
            id: Uuid::new_v4().to_string(),
            user_id: app.user_id,
            provider: app.provider,
            provider_email: app.provider_email,
            access_token: app.access_token,
            refresh_token: app.refresh_token,
            token_expires_at: app.token_expires_at,
            created_at: now,
            updated_at: now,
        };
        apps.push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<ConnectedApp>> {
        Ok(self.apps.lock().unwrap().iter().find(|a| a.id == id).cloned())
    }

    async fn list_by_user(&self, user_id: &str) -> AppResult<Vec<ConnectedApp>> {
        Ok(self.apps
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let mut apps = self.apps.lock().unwrap();
        let before = apps.len();
        apps.retain(|a| a.id != id);
        Ok(apps.len() < before)
    }
}

#[derive(Default)]
pub struct InMemoryRevokedTokenStore {
    keys: Mutex<HashSet<String>>,
}

#[async_trait]
impl RevokedTokenStore for InMemoryRevokedTokenStore {
    async fn revoke(&self, jti: &str, ttl_seconds: i64) -> AppResult<bool> {
        if ttl_seconds <= 0 {
            return Ok(false);
        }
        // 잠금 안에서 확인과 기록이 한 번에 일어난다 (SET NX 와 동일)
        Ok(self.keys.lock().unwrap().insert(revoked_token_key(jti)))
    }

    async fn is_revoked(&self, jti: &str) -> AppResult<bool> {
        Ok(self.keys.lock().unwrap().contains(&revoked_token_key(jti)))
    }
}

#[derive(Default)]
pub struct InMemoryAccountTokenStore {
    tokens: Mutex<Vec<AccountToken>>,
}

impl InMemoryAccountTokenStore {
    pub fn expire_all(&self) {
        for token in self.tokens.lock().unwrap().iter_mut() {
            token.expires_at = DateTime::from_millis(token.created_at.timestamp_millis() - 1);
        }
    }
}

#[async_trait]
impl AccountTokenStore for InMemoryAccountTokenStore {
    async fn issue(&self, token: AccountToken) -> AppResult<AccountToken> {
        let mut tokens = self.tokens.lock().unwrap();
        let now = DateTime::now();

        for old in tokens.iter_mut().filter(|t| t.user_id == token.user_id && !t.is_used) {
            old.is_used = true;
            old.used_at = Some(now);
        }
        tokens.push(token.clone());
        Ok(token)
    }

    async fn find_by_hash(&self, token_hash: &str) -> AppResult<Option<AccountToken>> {
        Ok(self.tokens.lock().unwrap().iter().find(|t| t.token_hash == token_hash).cloned())
    }

    async fn consume(&self, id: &str) -> AppResult<bool> {
        let mut tokens = self.tokens.lock().unwrap();
        let Some(token) = tokens.iter_mut().find(|t| t.id == id && !t.is_used) else {
            return Ok(false);
        };

        token.is_used = true;
        token.used_at = Some(DateTime::now());
        Ok(true)
    }
}

#[derive(Default)]
pub struct InMemoryPendingEmailStore {
    emails: Mutex<Vec<PendingEmail>>,
}

impl InMemoryPendingEmailStore {
    pub fn sent(&self) -> Vec<PendingEmail> {
        self.emails.lock().unwrap().clone()
    }
}

#[async_trait]
impl PendingEmailStore for InMemoryPendingEmailStore {
    async fn enqueue(&self, email: PendingEmail) -> AppResult<()> {
        self.emails.lock().unwrap().push(email);
        Ok(())
    }
}
