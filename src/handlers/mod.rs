pub mod admin_handler;
pub mod health_handler;
pub mod user_handler;

use actix_web::{web, HttpRequest};

use crate::{
    auth::AuthMiddleware,
    errors::{AppError, AppResult},
    models::{domain::Role, dto::request::LoginCredentials},
};

/// Registers every route. Signup and login are open; the rest of each
/// scope requires a token for that scope's role.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_handler::health_check)
        .service(health_handler::health_check_ready)
        .service(
            web::scope("/admin")
                .service(admin_handler::signup)
                .service(admin_handler::login)
                .service(
                    web::scope("")
                        .wrap(AuthMiddleware::new(Role::Admin))
                        .service(admin_handler::me)
                        .service(admin_handler::create_course)
                        .service(admin_handler::list_courses)
                        .service(admin_handler::get_course)
                        .service(admin_handler::update_course),
                ),
        )
        .service(
            web::scope("/users")
                .service(user_handler::signup)
                .service(user_handler::login)
                .service(
                    web::scope("")
                        .wrap(AuthMiddleware::new(Role::User))
                        .service(user_handler::me)
                        .service(user_handler::list_courses)
                        .service(user_handler::get_course)
                        .service(user_handler::purchase_course)
                        .service(user_handler::purchased_courses),
                ),
        );
}

/// Malformed or mistyped JSON bodies become a 400 with a `message`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into())
}

/// Login takes credentials from the `username` and `password` headers, not the body.
pub(crate) fn login_credentials(req: &HttpRequest) -> AppResult<LoginCredentials> {
    let header = |name: &str| {
        req.headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    };

    match (header("username"), header("password")) {
        (Some(username), Some(password)) => Ok(LoginCredentials { username, password }),
        _ => Err(AppError::Forbidden("Invalid credentials".to_string())),
    }
}
