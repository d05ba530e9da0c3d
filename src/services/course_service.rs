use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::Course,
        dto::request::{CreateCourseRequest, UpdateCourseRequest},
    },
    repositories::CourseRepository,
};

pub struct CourseService {
    repository: Arc<dyn CourseRepository>,
}

impl CourseService {
    pub fn new(repository: Arc<dyn CourseRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_course(&self, request: CreateCourseRequest) -> AppResult<Course> {
        request.validate()?;

        let course = self.repository.create(Course::from_request(request)).await?;
        log::info!(
            "Created course '{}' ({})",
            course.title,
            course.id.map(|oid| oid.to_hex()).unwrap_or_default()
        );

        Ok(course)
    }

    /// Any course, published or not.
    pub async fn get_course(&self, id: &str) -> AppResult<Course> {
        course_or_not_found(self.repository.find_by_id(id).await)
    }

    pub async fn get_published_course(&self, id: &str) -> AppResult<Course> {
        course_or_not_found(self.repository.find_published_by_id(id).await)
    }

    pub async fn update_course(&self, id: &str, request: UpdateCourseRequest) -> AppResult<()> {
        request.validate()?;

        course_or_not_found(self.repository.update(id, request.into()).await)?;
        log::info!("Updated course {}", id);

        Ok(())
    }

    pub async fn list_courses(&self) -> AppResult<Vec<Course>> {
        self.repository.find_all().await
    }

    pub async fn list_published_courses(&self) -> AppResult<Vec<Course>> {
        self.repository.find_published().await
    }
}

/// Collapses a missing course and a malformed identifier into the same 404.
pub(crate) fn course_or_not_found(result: AppResult<Option<Course>>) -> AppResult<Course> {
    match result {
        Ok(Some(course)) => Ok(course),
        Ok(None) | Err(AppError::InvalidId(_)) => {
            Err(AppError::NotFound("Course not found".to_string()))
        }
        Err(err) => Err(err),
    }
}
