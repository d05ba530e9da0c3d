use std::sync::Arc;

use validator::Validate;

use crate::{
    auth::JwtService,
    errors::{AppError, AppResult},
    models::{
        domain::{Admin, Role},
        dto::request::{LoginCredentials, SignupRequest},
    },
    repositories::AdminRepository,
};

pub struct AdminService {
    repository: Arc<dyn AdminRepository>,
    jwt_service: Arc<JwtService>,
}

impl AdminService {
    pub fn new(repository: Arc<dyn AdminRepository>, jwt_service: Arc<JwtService>) -> Self {
        Self {
            repository,
            jwt_service,
        }
    }

    /// Creates the admin unless the username is taken and returns a fresh token.
    ///
    /// The existence check and the insert are separate operations, so two
    /// concurrent signups for one username can both succeed.
    pub async fn signup(&self, request: SignupRequest) -> AppResult<String> {
        request.validate()?;

        if self
            .repository
            .find_by_username(&request.username)
            .await?
            .is_some()
        {
            return Err(AppError::Forbidden("Admin already exists".to_string()));
        }

        let admin = self
            .repository
            .create(Admin::new(&request.username, &request.password))
            .await?;
        log::info!("Admin '{}' signed up", admin.username);

        self.jwt_service.issue(&admin.username, Role::Admin)
    }

    pub async fn login(&self, credentials: &LoginCredentials) -> AppResult<String> {
        let admin = self
            .repository
            .find_by_credentials(&credentials.username, &credentials.password)
            .await?
            .ok_or_else(|| AppError::Forbidden("Invalid credentials".to_string()))?;

        self.jwt_service.issue(&admin.username, Role::Admin)
    }
}
