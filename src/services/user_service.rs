use std::{collections::HashMap, sync::Arc};

use mongodb::bson::oid::ObjectId;
use validator::Validate;

use crate::{
    auth::JwtService,
    errors::{AppError, AppResult},
    models::{
        domain::{Course, Role, User},
        dto::request::{LoginCredentials, SignupRequest},
    },
    repositories::{CourseRepository, UserRepository},
    services::course_service::course_or_not_found,
};

pub struct UserService {
    users: Arc<dyn UserRepository>,
    courses: Arc<dyn CourseRepository>,
    jwt_service: Arc<JwtService>,
}

impl UserService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        courses: Arc<dyn CourseRepository>,
        jwt_service: Arc<JwtService>,
    ) -> Self {
        Self {
            users,
            courses,
            jwt_service,
        }
    }

    pub async fn signup(&self, request: SignupRequest) -> AppResult<String> {
        request.validate()?;

        if self
            .users
            .find_by_username(&request.username)
            .await?
            .is_some()
        {
            return Err(AppError::Forbidden("User already exists".to_string()));
        }

        let user = self
            .users
            .create(User::new(&request.username, &request.password))
            .await?;
        log::info!("User '{}' signed up", user.username);

        self.jwt_service.issue(&user.username, Role::User)
    }

    pub async fn login(&self, credentials: &LoginCredentials) -> AppResult<String> {
        let user = self
            .users
            .find_by_credentials(&credentials.username, &credentials.password)
            .await?
            .ok_or_else(|| AppError::Forbidden("Invalid credentials".to_string()))?;

        self.jwt_service.issue(&user.username, Role::User)
    }

    /// Appends a published course to the caller's purchases. Buying the same
    /// course twice records it twice.
    pub async fn purchase_course(&self, username: &str, course_id: &str) -> AppResult<()> {
        let course = course_or_not_found(self.courses.find_published_by_id(course_id).await)?;
        let course_oid = course
            .id
            .ok_or_else(|| AppError::InternalError("Stored course has no identifier".to_string()))?;

        if !self.users.push_purchased_course(username, course_oid).await? {
            return Err(AppError::Forbidden("User not found".to_string()));
        }

        log::info!("User '{}' purchased course {}", username, course_oid);
        Ok(())
    }

    /// The caller's purchases resolved to full courses, in purchase order.
    /// References to courses that no longer exist are skipped.
    pub async fn purchased_courses(&self, username: &str) -> AppResult<Vec<Course>> {
        let user = self
            .users
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::Forbidden("User not found".to_string()))?;

        let mut unique_ids = user.purchased_courses.clone();
        unique_ids.sort();
        unique_ids.dedup();

        let by_id: HashMap<ObjectId, Course> = self
            .courses
            .find_by_ids(&unique_ids)
            .await?
            .into_iter()
            .filter_map(|course| course.id.map(|id| (id, course)))
            .collect();

        Ok(user
            .purchased_courses
            .iter()
            .filter_map(|id| by_id.get(id).cloned())
            .collect())
    }
}
