//! # MongoDB 사용자 리포지토리 구현
//!
//! `users` 컬렉션에 대한 [`UserStore`] 구현입니다.
//!
//! ## 유일성 보장
//!
//! 사용자명과 공급자 ID는 부분(partial) 유니크 인덱스로 보호됩니다.
//! 필드가 없는 문서끼리는 충돌하지 않으므로 로컬 전용 사용자와 공급자 전용 사용자가 공존할 수 있습니다.
//!
//! | 인덱스 | 필드 | 조건 |
//! |--------|------|------|
//! | `username_unique` | `username` | `username`이 문자열인 문서 |
//! | `google_id_unique` | `google_id` | `google_id`가 문자열인 문서 |
//! | `github_id_unique` | `github_id` | `github_id`가 문자열인 문서 |

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, DateTime, Document},
    error::{ErrorKind, WriteFailure},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};
use crate::{
    config::AuthProvider,
    db::Database,
    domain::entities::users::user::User,
    errors::{AppError, AppResult},
};
use super::UserStore;

/// MongoDB duplicate key 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 사용자 컬렉션명
const COLLECTION_NAME: &str = "users";

/// MongoDB 기반 사용자 리포지토리
#[derive(Clone)]
pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.get_database().collection::<User>(COLLECTION_NAME),
        }
    }

    fn provider_filter(provider: AuthProvider, provider_id: &str) -> Document {
        let mut filter = Document::new();
        filter.insert(provider.id_field(), provider_id);
        filter
    }

    fn unique_partial_index(field: &str) -> IndexModel {
        let mut keys = Document::new();
        keys.insert(field, 1);

        let mut partial = Document::new();
        partial.insert(field, doc! { "$type": "string" });

        IndexModel::builder()
            .keys(keys)
            .options(IndexOptions::builder()
                .unique(true)
                .partial_filter_expression(partial)
                .name(format!("{}_unique", field))
                .build())
            .build()
    }
}

/// 유니크 인덱스 위반 여부
///
/// `insert_one`은 write error로, `find_one_and_update`는 command error로 보고합니다.
fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    match *err.kind {
        ErrorKind::Write(WriteFailure::WriteError(ref e)) => e.code == DUPLICATE_KEY_CODE,
        ErrorKind::Command(ref e) => e.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

fn parse_object_id(id: &str) -> Option<ObjectId> {
    ObjectId::parse_str(id).ok()
}

#[async_trait]
impl UserStore for MongoUserRepository {
    async fn create(&self, mut user: User) -> AppResult<User> {
        let result = match self.collection.insert_one(&user).await {
            Ok(result) => result,
            Err(e) if is_duplicate_key(&e) => return Err(AppError::DuplicateUsername),
            Err(e) => return Err(e.into()),
        };

        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::StorageError("inserted_id가 ObjectId가 아닙니다".to_string()))?;
        user.id = Some(id);

        Ok(user)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let Some(object_id) = parse_object_id(id) else {
            return Ok(None);
        };

        Ok(self.collection.find_one(doc! { "_id": object_id }).await?)
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self.collection.find_one(doc! { "username": username }).await?)
    }

    async fn find_by_provider(&self, provider: AuthProvider, provider_id: &str) -> AppResult<Option<User>> {
        Ok(self
            .collection
            .find_one(Self::provider_filter(provider, provider_id))
            .await?)
    }

    /// upsert 한 번으로 조회와 생성을 처리합니다.
    ///
    /// 동시에 두 upsert가 삽입을 시도하면 유니크 인덱스가 한쪽을 거부하므로,
    /// 거부된 쪽은 이미 생성된 문서를 다시 읽습니다.
    async fn find_or_create_by_provider(&self, provider: AuthProvider, provider_id: &str) -> AppResult<User> {
        let now = DateTime::now();
        let update = doc! {
            "$setOnInsert": { "created_at": now, "updated_at": now }
        };
        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let outcome = self
            .collection
            .find_one_and_update(Self::provider_filter(provider, provider_id), update)
            .with_options(options)
            .await;

        match outcome {
            Ok(Some(user)) => Ok(user),
            Ok(None) => Err(AppError::StorageError("upsert 결과 문서가 없습니다".to_string())),
            Err(e) if is_duplicate_key(&e) => self
                .find_by_provider(provider, provider_id)
                .await?
                .ok_or_else(|| AppError::StorageError("upsert 충돌 후 재조회 실패".to_string())),
            Err(e) => Err(e.into()),
        }
    }

    async fn link_provider(&self, user_id: &str, provider: AuthProvider, provider_id: &str) -> AppResult<Option<User>> {
        let Some(object_id) = parse_object_id(user_id) else {
            return Ok(None);
        };

        let field = provider.id_field();
        let mut unbound = Document::new();
        unbound.insert(field, doc! { "$exists": false });

        let filter = doc! {
            "_id": object_id,
            "$or": [unbound, Self::provider_filter(provider, provider_id)],
        };

        let mut set = Self::provider_filter(provider, provider_id);
        set.insert("updated_at", DateTime::now());

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        match self
            .collection
            .find_one_and_update(filter, doc! { "$set": set })
            .with_options(options)
            .await
        {
            Ok(user) => Ok(user),
            Err(e) if is_duplicate_key(&e) => Err(AppError::DuplicateIdentity),
            Err(e) => Err(e.into()),
        }
    }

    async fn set_secret(&self, user_id: &str, secret: &str) -> AppResult<Option<User>> {
        let Some(object_id) = parse_object_id(user_id) else {
            return Ok(None);
        };

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        Ok(self
            .collection
            .find_one_and_update(
                doc! { "_id": object_id },
                doc! { "$set": { "secret": secret, "updated_at": DateTime::now() } },
            )
            .with_options(options)
            .await?)
    }

    async fn find_with_secrets(&self) -> AppResult<Vec<User>> {
        let cursor = self
            .collection
            .find(doc! { "secret": { "$ne": null } })
            .sort(doc! { "created_at": 1 })
            .await?;

        let users: Vec<User> = cursor.try_collect().await?;
        Ok(users)
    }

    /// 사용자명/공급자 ID 유니크 인덱스를 생성합니다.
    ///
    /// 이미 같은 정의의 인덱스가 있으면 MongoDB가 무시합니다.
    async fn ensure_indexes(&self) -> AppResult<()> {
        let indexes = ["username", AuthProvider::Google.id_field(), AuthProvider::GitHub.id_field()]
            .into_iter()
            .map(Self::unique_partial_index);

        self.collection.create_indexes(indexes).await?;

        log::info!("✅ users 컬렉션 인덱스 확인 완료");
        Ok(())
    }
}
