use async_trait::async_trait;
use mongodb::{
    bson::{doc, oid::ObjectId},
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::{db::Database, errors::AppResult, models::domain::User};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: User) -> AppResult<User>;
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;
    async fn find_by_credentials(&self, username: &str, password: &str) -> AppResult<Option<User>>;
    /// Appends a course reference to the user's purchases. Returns `false` when
    /// no user has that username.
    async fn push_purchased_course(&self, username: &str, course_id: ObjectId) -> AppResult<bool>;
    async fn ensure_indexes(&self) -> AppResult<()>;
}

pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("users");
        Self { collection }
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn create(&self, user: User) -> AppResult<User> {
        self.collection.insert_one(&user).await?;
        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let user = self
            .collection
            .find_one(doc! { "username": username })
            .await?;
        Ok(user)
    }

    async fn find_by_credentials(&self, username: &str, password: &str) -> AppResult<Option<User>> {
        let user = self
            .collection
            .find_one(doc! { "username": username, "password": password })
            .await?;
        Ok(user)
    }

    async fn push_purchased_course(&self, username: &str, course_id: ObjectId) -> AppResult<bool> {
        let result = self
            .collection
            .update_one(
                doc! { "username": username },
                doc! { "$push": { "purchasedCourses": course_id } },
            )
            .await?;

        Ok(result.matched_count > 0)
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        let options = IndexOptions::builder()
            .name("username_lookup".to_string())
            .build();
        let model = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(options)
            .build();

        self.collection.create_index(model).await?;
        log::info!("Ensured username index on users collection");

        Ok(())
    }
}
