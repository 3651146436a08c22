//! 연결 앱 응답 DTO
//!
//! 프로바이더 토큰 자체는 응답에 포함하지 않습니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::connected_apps::connected_app::{ConnectedApp, EmailProvider};
use crate::utils::time_utils::to_chrono;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectedAppResponse {
    pub id: String,
    pub provider: EmailProvider,
    pub provider_email: String,
    pub token_expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ConnectedApp> for ConnectedAppResponse {
    fn from(app: ConnectedApp) -> Self {
        Self {
            id: app.id,
            provider: app.provider,
            provider_email: app.provider_email,
            token_expires_at: app.token_expires_at.map(to_chrono),
            created_at: to_chrono(app.created_at),
            updated_at: to_chrono(app.updated_at),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectedAppsList {
    pub apps: Vec<ConnectedAppResponse>,
    pub total: usize,
}

impl From<Vec<ConnectedApp>> for ConnectedAppsList {
    fn from(apps: Vec<ConnectedApp>) -> Self {
        let apps: Vec<ConnectedAppResponse> = apps.into_iter().map(ConnectedAppResponse::from).collect();
        let total = apps.len();
        Self { apps, total }
    }
}

/// OAuth 인가 URL 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorizationUrlResponse {
    pub authorization_url: String,
    pub state: String,
}
