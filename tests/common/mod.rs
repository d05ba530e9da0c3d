#![allow(dead_code, unused_imports, unused_macros)]

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use secrecy::SecretString;
use tokio::sync::RwLock;

use course_market::{
    app_state::AppState,
    config::Config,
    db::{parse_object_id, HealthCheck},
    errors::AppResult,
    models::domain::{Admin, Course, CourseChanges, User},
    repositories::{AdminRepository, CourseRepository, UserRepository},
};

/// Builds the full route table over `$state` and returns the test service.
macro_rules! test_app {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($state))
                .app_data(course_market::handlers::json_config())
                .configure(course_market::handlers::configure),
        )
        .await
    };
}

/// Sends a `TestRequest` and yields `(status, json body)`; non-JSON bodies
/// come back as `Value::Null`.
macro_rules! send {
    ($app:expr, $req:expr) => {{
        let resp = actix_web::test::call_service(&$app, $req.to_request()).await;
        let status = resp.status();
        let body = actix_web::test::read_body(resp).await;
        let json: serde_json::Value =
            serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
        (status, json)
    }};
}

/// Signs up `$username` under `/admin` or `/users` and returns the issued token.
/// Needs `send!` in scope at the call site.
macro_rules! signup_token {
    ($app:expr, $scope:expr, $username:expr) => {{
        let (status, body) = send!(
            $app,
            actix_web::test::TestRequest::post()
                .uri(&format!("/{}/signup", $scope))
                .set_json(serde_json::json!({ "username": $username, "password": "p" }))
        );
        assert_eq!(status, actix_web::http::StatusCode::CREATED);
        body["token"].as_str().unwrap().to_string()
    }};
}

pub(crate) use send;
pub(crate) use signup_token;
pub(crate) use test_app;

#[derive(Default)]
pub struct InMemoryAdminRepository {
    pub admins: RwLock<Vec<Admin>>,
}

#[async_trait]
impl AdminRepository for InMemoryAdminRepository {
    async fn create(&self, admin: Admin) -> AppResult<Admin> {
        self.admins.write().await.push(admin.clone());
        Ok(admin)
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<Admin>> {
        let admins = self.admins.read().await;
        Ok(admins.iter().find(|a| a.username == username).cloned())
    }

    async fn find_by_credentials(&self, username: &str, password: &str) -> AppResult<Option<Admin>> {
        let admins = self.admins.read().await;
        Ok(admins
            .iter()
            .find(|a| a.username == username && a.password == password)
            .cloned())
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    pub users: RwLock<Vec<User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> AppResult<User> {
        self.users.write().await.push(user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.username == username).cloned())
    }

    async fn find_by_credentials(&self, username: &str, password: &str) -> AppResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users
            .iter()
            .find(|u| u.username == username && u.password == password)
            .cloned())
    }

    async fn push_purchased_course(&self, username: &str, course_id: ObjectId) -> AppResult<bool> {
        let mut users = self.users.write().await;
        match users.iter_mut().find(|u| u.username == username) {
            Some(user) => {
                user.purchased_courses.push(course_id);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryCourseRepository {
    pub courses: RwLock<HashMap<ObjectId, Course>>,
    pub order: RwLock<Vec<ObjectId>>,
}

impl InMemoryCourseRepository {
    pub async fn remove(&self, id: &ObjectId) {
        self.courses.write().await.remove(id);
    }
}

#[async_trait]
impl CourseRepository for InMemoryCourseRepository {
    async fn create(&self, course: Course) -> AppResult<Course> {
        let id = course.id.unwrap_or_else(ObjectId::new);
        let stored = Course {
            id: Some(id),
            ..course
        };

        self.courses.write().await.insert(id, stored.clone());
        self.order.write().await.push(id);
        Ok(stored)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Course>> {
        let oid = parse_object_id(id)?;
        Ok(self.courses.read().await.get(&oid).cloned())
    }

    async fn find_published_by_id(&self, id: &str) -> AppResult<Option<Course>> {
        let oid = parse_object_id(id)?;
        Ok(self
            .courses
            .read()
            .await
            .get(&oid)
            .filter(|c| c.published)
            .cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Course>> {
        let courses = self.courses.read().await;
        let order = self.order.read().await;
        Ok(order.iter().filter_map(|id| courses.get(id).cloned()).collect())
    }

    async fn find_published(&self) -> AppResult<Vec<Course>> {
        Ok(self
            .find_all()
            .await?
            .into_iter()
            .filter(|c| c.published)
            .collect())
    }

    async fn find_by_ids(&self, ids: &[ObjectId]) -> AppResult<Vec<Course>> {
        let courses = self.courses.read().await;
        Ok(ids.iter().filter_map(|id| courses.get(id).cloned()).collect())
    }

    async fn update(&self, id: &str, changes: CourseChanges) -> AppResult<Option<Course>> {
        let oid = parse_object_id(id)?;
        let mut courses = self.courses.write().await;

        Ok(courses.get_mut(&oid).map(|course| {
            let before = course.clone();
            changes.apply(course);
            before
        }))
    }
}

pub struct AlwaysHealthy;

#[async_trait]
impl HealthCheck for AlwaysHealthy {
    async fn health_check(&self) -> AppResult<()> {
        Ok(())
    }
}

pub fn test_config() -> Config {
    Config {
        mongo_conn_string: "mongodb://localhost:27017".to_string(),
        mongo_db_name: "courses-test".to_string(),
        web_server_host: "127.0.0.1".to_string(),
        web_server_port: 3000,
        jwt_secret: SecretString::from("integration_test_secret_key".to_string()),
        jwt_expiration_hours: 1,
        app_env: "test".to_string(),
    }
}

pub struct TestContext {
    pub state: AppState,
    pub admins: Arc<InMemoryAdminRepository>,
    pub users: Arc<InMemoryUserRepository>,
    pub courses: Arc<InMemoryCourseRepository>,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_config(test_config())
    }

    pub fn with_config(config: Config) -> Self {
        let admins = Arc::new(InMemoryAdminRepository::default());
        let users = Arc::new(InMemoryUserRepository::default());
        let courses = Arc::new(InMemoryCourseRepository::default());

        let state = AppState::from_parts(
            config,
            admins.clone(),
            users.clone(),
            courses.clone(),
            Arc::new(AlwaysHealthy),
        );

        Self {
            state,
            admins,
            users,
            courses,
        }
    }
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}
