//! 계정 토큰 리포지토리
//!
//! 비밀번호 재설정/이메일 인증 토큰을 종류별 컬렉션에 저장합니다.
//! 사용자당 유효한 토큰은 하나뿐이며, 새 토큰을 발급하면 이전 토큰은 사용 처리됩니다.
//! 만료된 문서는 `expires_at` TTL 인덱스로 MongoDB 가 정리합니다.

use std::time::Duration;

use async_trait::async_trait;
use mongodb::{
    bson::{doc, DateTime},
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::core::errors::AppResult;
use crate::db::Database;
use crate::domain::entities::account_tokens::account_token::{AccountToken, AccountTokenKind};
use crate::repositories::Repository;

/// 계정 토큰 저장소 인터페이스
#[async_trait]
pub trait AccountTokenStore: Send + Sync {
    /// 사용자의 미사용 토큰을 모두 사용 처리한 뒤 새 토큰을 저장합니다.
    async fn issue(&self, token: AccountToken) -> AppResult<AccountToken>;

    async fn find_by_hash(&self, token_hash: &str) -> AppResult<Option<AccountToken>>;

    /// 미사용 토큰을 사용 처리합니다. 이미 사용된 토큰이면 `false` 입니다.
    async fn consume(&self, id: &str) -> AppResult<bool>;
}

pub struct AccountTokenRepository {
    collection: Collection<AccountToken>,
    collection_name: &'static str,
}

impl AccountTokenRepository {
    pub fn new(db: &Database, kind: AccountTokenKind) -> Self {
        Self {
            collection: db.collection::<AccountToken>(kind.collection_name()),
            collection_name: kind.collection_name(),
        }
    }
}

#[async_trait]
impl AccountTokenStore for AccountTokenRepository {
    async fn issue(&self, token: AccountToken) -> AppResult<AccountToken> {
        self.collection
            .update_many(
                doc! { "user_id": &token.user_id, "is_used": false },
                doc! { "$set": { "is_used": true, "used_at": DateTime::now() } },
            )
            .await?;

        self.collection.insert_one(&token).await?;

        Ok(token)
    }

    async fn find_by_hash(&self, token_hash: &str) -> AppResult<Option<AccountToken>> {
        Ok(self.collection.find_one(doc! { "token_hash": token_hash }).await?)
    }

    async fn consume(&self, id: &str) -> AppResult<bool> {
        // is_used 조건이 걸려 있어 동시 요청 중 하나만 갱신된다
        let result = self.collection
            .update_one(
                doc! { "_id": id, "is_used": false },
                doc! { "$set": { "is_used": true, "used_at": DateTime::now() } },
            )
            .await?;

        Ok(result.modified_count > 0)
    }
}

#[async_trait]
impl Repository for AccountTokenRepository {
    fn collection_name(&self) -> &str {
        self.collection_name
    }

    async fn init(&self) -> AppResult<()> {
        let token_hash_index = IndexModel::builder()
            .keys(doc! { "token_hash": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("token_hash_unique".to_string())
                .build())
            .build();

        let user_index = IndexModel::builder()
            .keys(doc! { "user_id": 1, "is_used": 1 })
            .options(IndexOptions::builder()
                .name("user_unused".to_string())
                .build())
            .build();

        // 만료 시각이 지나면 삭제
        let ttl_index = IndexModel::builder()
            .keys(doc! { "expires_at": 1 })
            .options(IndexOptions::builder()
                .expire_after(Duration::from_secs(0))
                .name("expires_at_ttl".to_string())
                .build())
            .build();

        self.collection
            .create_indexes([token_hash_index, user_index, ttl_index])
            .await?;

        Ok(())
    }
}
