//! 발송 대기 메일 엔티티
//!
//! 이 서비스는 메일을 직접 보내지 않고 `pending_emails` 컬렉션에 기록만 합니다.
//! 별도 워커가 `status: "pending"` 문서를 가져가 템플릿을 렌더링해 발송합니다.

use std::collections::HashMap;

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_LANGUAGE: &str = "en";
pub const STATUS_PENDING: &str = "pending";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailTemplate {
    ForgetPassword,
    EmailVerification,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingEmail {
    #[serde(rename = "_id")]
    pub id: String,
    pub recipient_email: String,
    pub template: EmailTemplate,
    pub language_code: String,
    pub template_variables: HashMap<String, String>,
    pub status: String,
    pub created_at: DateTime,
}

impl PendingEmail {
    pub fn new(
        recipient_email: &str,
        template: EmailTemplate,
        template_variables: HashMap<String, String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            recipient_email: recipient_email.to_string(),
            template,
            language_code: DEFAULT_LANGUAGE.to_string(),
            template_variables,
            status: STATUS_PENDING.to_string(),
            created_at: DateTime::now(),
        }
    }
}
