//! 발송 대기 메일 리포지토리

use async_trait::async_trait;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::core::errors::AppResult;
use crate::db::Database;
use crate::domain::entities::pending_emails::pending_email::PendingEmail;
use crate::repositories::Repository;

const COLLECTION: &str = "pending_emails";

#[async_trait]
pub trait PendingEmailStore: Send + Sync {
    async fn enqueue(&self, email: PendingEmail) -> AppResult<()>;
}

pub struct PendingEmailRepository {
    collection: Collection<PendingEmail>,
}

impl PendingEmailRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<PendingEmail>(COLLECTION),
        }
    }
}

#[async_trait]
impl PendingEmailStore for PendingEmailRepository {
    async fn enqueue(&self, email: PendingEmail) -> AppResult<()> {
        self.collection.insert_one(&email).await?;
        Ok(())
    }
}

#[async_trait]
impl Repository for PendingEmailRepository {
    fn collection_name(&self) -> &str {
        COLLECTION
    }

    async fn init(&self) -> AppResult<()> {
        // 워커가 오래된 대기 메일부터 가져간다
        let status_index = IndexModel::builder()
            .keys(doc! { "status": 1, "created_at": 1 })
            .options(IndexOptions::builder()
                .name("status_created_at".to_string())
                .build())
            .build();

        self.collection
            .create_indexes([status_index])
            .await?;

        Ok(())
    }
}
