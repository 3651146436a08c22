//! 사용자 리포지토리
//!
//! `users` 컬렉션에 대한 조회/생성/갱신을 담당합니다.
//! 이메일 유니크 인덱스가 중복 가입의 최종 방어선입니다.

use async_trait::async_trait;
use mongodb::{bson::{doc, DateTime}, options::IndexOptions, Collection, IndexModel};

use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::users::user::User;
use crate::repositories::{is_duplicate_key_error, Repository};

const COLLECTION: &str = "users";

/// 사용자 저장소 인터페이스
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;

    /// # Errors
    ///
    /// * `AppError::ConflictError` - 이미 같은 이메일이 존재하는 경우
    async fn create(&self, user: User) -> AppResult<User>;

    /// 비밀번호 해시를 바꾸고 `password_changed_at` 을 현재 시각으로 기록합니다.
    ///
    /// 사용자가 없으면 `false` 입니다.
    async fn update_password(&self, id: &str, password_hash: &str) -> AppResult<bool>;

    /// 이메일 인증 완료로 표시합니다. 사용자가 없으면 `false` 입니다.
    async fn mark_verified(&self, id: &str) -> AppResult<bool>;
}

pub struct UserRepository {
    collection: Collection<User>,
}

impl UserRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<User>(COLLECTION),
        }
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self.collection.find_one(doc! { "email": email }).await?)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    async fn create(&self, user: User) -> AppResult<User> {
        match self.collection.insert_one(&user).await {
            Ok(_) => Ok(user),
            Err(e) if is_duplicate_key_error(&e) => {
                Err(AppError::ConflictError("Email already registered".to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn update_password(&self, id: &str, password_hash: &str) -> AppResult<bool> {
        let now = DateTime::now();

        let result = self.collection
            .update_one(
                doc! { "_id": id },
                doc! { "$set": {
                    "password_hash": password_hash,
                    "password_changed_at": now,
                    "updated_at": now,
                }},
            )
            .await?;

        Ok(result.matched_count > 0)
    }

    async fn mark_verified(&self, id: &str) -> AppResult<bool> {
        let result = self.collection
            .update_one(
                doc! { "_id": id },
                doc! { "$set": { "is_verified": true, "updated_at": DateTime::now() } },
            )
            .await?;

        Ok(result.matched_count > 0)
    }
}

#[async_trait]
impl Repository for UserRepository {
    fn collection_name(&self) -> &str {
        COLLECTION
    }

    async fn init(&self) -> AppResult<()> {
        // 이메일 유니크 인덱스
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        // 생성일 인덱스
        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        self.collection
            .create_indexes([email_index, created_at_index])
            .await?;

        Ok(())
    }
}
