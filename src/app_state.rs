use std::sync::Arc;

use crate::{
    auth::JwtService,
    config::Config,
    db::{Database, HealthCheck},
    errors::AppResult,
    repositories::{
        AdminRepository, CourseRepository, MongoAdminRepository, MongoCourseRepository,
        MongoUserRepository, UserRepository,
    },
    services::{AdminService, CourseService, UserService},
};

#[derive(Clone)]
pub struct AppState {
    pub admin_service: Arc<AdminService>,
    pub user_service: Arc<UserService>,
    pub course_service: Arc<CourseService>,
    pub jwt_service: Arc<JwtService>,
    pub health: Arc<dyn HealthCheck>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(db: &Database, config: Config) -> AppResult<Self> {
        let admin_repository = Arc::new(MongoAdminRepository::new(db));
        admin_repository.ensure_indexes().await?;

        let user_repository = Arc::new(MongoUserRepository::new(db));
        user_repository.ensure_indexes().await?;

        let course_repository = Arc::new(MongoCourseRepository::new(db));

        Ok(Self::from_parts(
            config,
            admin_repository,
            user_repository,
            course_repository,
            Arc::new(db.clone()),
        ))
    }

    /// Wires the services over the given repositories.
    pub fn from_parts(
        config: Config,
        admin_repository: Arc<dyn AdminRepository>,
        user_repository: Arc<dyn UserRepository>,
        course_repository: Arc<dyn CourseRepository>,
        health: Arc<dyn HealthCheck>,
    ) -> Self {
        let jwt_service = Arc::new(JwtService::new(
            &config.jwt_secret,
            config.jwt_expiration_hours,
        ));

        let admin_service = Arc::new(AdminService::new(admin_repository, jwt_service.clone()));
        let user_service = Arc::new(UserService::new(
            user_repository,
            course_repository.clone(),
            jwt_service.clone(),
        ));
        let course_service = Arc::new(CourseService::new(course_repository));

        Self {
            admin_service,
            user_service,
            course_service,
            jwt_service,
            health,
            config: Arc::new(config),
        }
    }
}
