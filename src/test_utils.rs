#[cfg(test)]
pub mod fixtures {
    use crate::models::domain::Course;

    pub fn published_course(title: &str) -> Course {
        Course::new(title, "A published course", 10.0, "https://example.com/img.png", true)
    }

    pub fn draft_course(title: &str) -> Course {
        Course::new(title, "A draft course", 10.0, "https://example.com/img.png", false)
    }
}

#[cfg(test)]
pub mod test_helpers {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use async_trait::async_trait;

    use crate::{
        app_state::AppState,
        config::Config,
        db::HealthCheck,
        errors::AppResult,
        repositories::{
            admin_repository::MockAdminRepository, course_repository::MockCourseRepository,
            user_repository::MockUserRepository,
        },
    };

    pub struct AlwaysHealthy;

    #[async_trait]
    impl HealthCheck for AlwaysHealthy {
        async fn health_check(&self) -> AppResult<()> {
            Ok(())
        }
    }

    /// State over mocks with no expectations; any repository call panics.
    pub fn test_state() -> AppState {
        test_state_with(
            MockAdminRepository::new(),
            MockUserRepository::new(),
            MockCourseRepository::new(),
        )
    }

    pub fn test_state_with(
        admins: MockAdminRepository,
        users: MockUserRepository,
        courses: MockCourseRepository,
    ) -> AppState {
        AppState::from_parts(
            Config::test_config(),
            Arc::new(admins),
            Arc::new(users),
            Arc::new(courses),
            Arc::new(AlwaysHealthy),
        )
    }

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_courses() {
        assert!(published_course("a").published);
        assert!(!draft_course("b").published);
        assert!(published_course("a").id.is_some());
    }
}
