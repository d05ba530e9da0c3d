use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    Collection,
};

use crate::{
    db::{parse_object_id, Database},
    errors::AppResult,
    models::domain::{Course, CourseChanges},
};

/// Course storage. Lookups by a string identifier fail with
/// `AppError::InvalidId` when the identifier is not a valid `ObjectId`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn create(&self, course: Course) -> AppResult<Course>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Course>>;
    async fn find_published_by_id(&self, id: &str) -> AppResult<Option<Course>>;
    async fn find_all(&self) -> AppResult<Vec<Course>>;
    async fn find_published(&self) -> AppResult<Vec<Course>>;
    /// Fetches the courses whose ids are in `ids`, in no particular order.
    async fn find_by_ids(&self, ids: &[ObjectId]) -> AppResult<Vec<Course>>;
    /// Applies `changes` and returns the course as it was before the update,
    /// or `None` when no course has that id.
    async fn update(&self, id: &str, changes: CourseChanges) -> AppResult<Option<Course>>;
}

pub struct MongoCourseRepository {
    collection: Collection<Course>,
}

impl MongoCourseRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("courses");
        Self { collection }
    }
}

#[async_trait]
impl CourseRepository for MongoCourseRepository {
    async fn create(&self, course: Course) -> AppResult<Course> {
        self.collection.insert_one(&course).await?;
        Ok(course)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Course>> {
        let oid = parse_object_id(id)?;
        let course = self.collection.find_one(doc! { "_id": oid }).await?;
        Ok(course)
    }

    async fn find_published_by_id(&self, id: &str) -> AppResult<Option<Course>> {
        let oid = parse_object_id(id)?;
        let course = self
            .collection
            .find_one(doc! { "_id": oid, "published": true })
            .await?;
        Ok(course)
    }

    async fn find_all(&self) -> AppResult<Vec<Course>> {
        let cursor = self.collection.find(doc! {}).await?;
        let courses: Vec<Course> = cursor.try_collect().await?;
        Ok(courses)
    }

    async fn find_published(&self) -> AppResult<Vec<Course>> {
        let cursor = self.collection.find(doc! { "published": true }).await?;
        let courses: Vec<Course> = cursor.try_collect().await?;
        Ok(courses)
    }

    async fn find_by_ids(&self, ids: &[ObjectId]) -> AppResult<Vec<Course>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let cursor = self
            .collection
            .find(doc! { "_id": { "$in": ids.to_vec() } })
            .await?;
        let courses: Vec<Course> = cursor.try_collect().await?;
        Ok(courses)
    }

    async fn update(&self, id: &str, changes: CourseChanges) -> AppResult<Option<Course>> {
        let oid = parse_object_id(id)?;

        // `$set` with an empty document is rejected by the server.
        if changes.is_empty() {
            return Ok(self.collection.find_one(doc! { "_id": oid }).await?);
        }

        // Returns the pre-update document by default.
        let course = self
            .collection
            .find_one_and_update(doc! { "_id": oid }, doc! { "$set": changes.to_set_document() })
            .await?;
        Ok(course)
    }
}
