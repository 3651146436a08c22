//! 연결된 이메일 앱 엔티티
//!
//! 사용자 한 명당 프로바이더별로 하나씩 저장되는 OAuth 자격 증명입니다.
//! `(user_id, provider)` 조합은 유니크 인덱스로 보장됩니다.

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

use crate::config::OAuthProvider;

/// 연결 가능한 이메일 프로바이더
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailProvider {
    Gmail,
    Outlook,
    Yahoo,
}

impl EmailProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmailProvider::Gmail => "gmail",
            EmailProvider::Outlook => "outlook",
            EmailProvider::Yahoo => "yahoo",
        }
    }
}

impl From<OAuthProvider> for EmailProvider {
    fn from(provider: OAuthProvider) -> Self {
        match provider {
            OAuthProvider::Google => EmailProvider::Gmail,
            OAuthProvider::Microsoft => EmailProvider::Outlook,
            OAuthProvider::Yahoo => EmailProvider::Yahoo,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectedApp {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: String,
    pub provider: EmailProvider,
    pub provider_email: String,
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub token_expires_at: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}
