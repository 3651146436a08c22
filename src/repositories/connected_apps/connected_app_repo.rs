//! 연결 앱 리포지토리
//!
//! `(user_id, provider)` 당 하나의 문서를 유지합니다.
//! 등록은 `find_one_and_update` + upsert 한 번으로 처리하여
//! 최초 생성 시에만 `_id` 와 `created_at` 을 채웁니다.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, DateTime},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};
use uuid::Uuid;

use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::connected_apps::connected_app::{ConnectedApp, EmailProvider};
use crate::repositories::Repository;

const COLLECTION: &str = "connected_apps";

/// 연결 앱 등록/갱신 입력
#[derive(Debug, Clone)]
pub struct NewConnectedApp {
    pub user_id: String,
    pub provider: EmailProvider,
    pub provider_email: String,
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub token_expires_at: Option<DateTime>,
}

/// 연결 앱 저장소 인터페이스
#[async_trait]
pub trait ConnectedAppStore: Send + Sync {
    /// 같은 사용자/프로바이더 조합이 있으면 토큰을 교체하고, 없으면 새로 만듭니다.
    async fn upsert(&self, app: NewConnectedApp) -> AppResult<ConnectedApp>;

    async fn find_by_id(&self, id: &str) -> AppResult<Option<ConnectedApp>>;

    /// 생성 순으로 정렬된 사용자의 연결 앱 목록
    async fn list_by_user(&self, user_id: &str) -> AppResult<Vec<ConnectedApp>>;

    async fn delete(&self, id: &str) -> AppResult<bool>;
}

pub struct ConnectedAppRepository {
    collection: Collection<ConnectedApp>,
}

impl ConnectedAppRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<ConnectedApp>(COLLECTION),
        }
    }
}

#[async_trait]
impl ConnectedAppStore for ConnectedAppRepository {
    async fn upsert(&self, app: NewConnectedApp) -> AppResult<ConnectedApp> {
        let now = DateTime::now();

        let filter = doc! {
            "user_id": &app.user_id,
            "provider": app.provider.as_str(),
        };
        let update = doc! {
            "$set": {
                "provider_email": &app.provider_email,
                "access_token": &app.access_token,
                "refresh_token": app.refresh_token.clone(),
                "token_expires_at": app.token_expires_at,
                "updated_at": now,
            },
            "$setOnInsert": {
                "_id": Uuid::new_v4().to_string(),
                "created_at": now,
            },
        };

        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        self.collection
            .find_one_and_update(filter, update)
            .with_options(options)
            .await?
            .ok_or_else(|| AppError::DatabaseError("upsert 결과 문서가 없습니다".to_string()))
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<ConnectedApp>> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    async fn list_by_user(&self, user_id: &str) -> AppResult<Vec<ConnectedApp>> {
        let cursor = self.collection
            .find(doc! { "user_id": user_id })
            .sort(doc! { "created_at": 1 })
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let result = self.collection
            .delete_one(doc! { "_id": id })
            .await?;

        Ok(result.deleted_count > 0)
    }
}

#[async_trait]
impl Repository for ConnectedAppRepository {
    fn collection_name(&self) -> &str {
        COLLECTION
    }

    async fn init(&self) -> AppResult<()> {
        // 사용자당 프로바이더 하나
        let user_provider_index = IndexModel::builder()
            .keys(doc! { "user_id": 1, "provider": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("user_provider_unique".to_string())
                .build())
            .build();

        self.collection
            .create_indexes([user_provider_index])
            .await?;

        Ok(())
    }
}
