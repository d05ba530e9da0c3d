use async_trait::async_trait;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{db::Database, errors::AppResult, models::domain::Admin};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdminRepository: Send + Sync {
    async fn create(&self, admin: Admin) -> AppResult<Admin>;
    async fn find_by_username(&self, username: &str) -> AppResult<Option<Admin>>;
    async fn find_by_credentials(&self, username: &str, password: &str) -> AppResult<Option<Admin>>;
    async fn ensure_indexes(&self) -> AppResult<()>;
}

pub struct MongoAdminRepository {
    collection: Collection<Admin>,
}

impl MongoAdminRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("admins");
        Self { collection }
    }
}

#[async_trait]
impl AdminRepository for MongoAdminRepository {
    async fn create(&self, admin: Admin) -> AppResult<Admin> {
        self.collection.insert_one(&admin).await?;
        Ok(admin)
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<Admin>> {
        let admin = self
            .collection
            .find_one(doc! { "username": username })
            .await?;
        Ok(admin)
    }

    async fn find_by_credentials(&self, username: &str, password: &str) -> AppResult<Option<Admin>> {
        let admin = self
            .collection
            .find_one(doc! { "username": username, "password": password })
            .await?;
        Ok(admin)
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
        log::info!("Ensured username index on admins collection");

        Ok(())
    }
}
