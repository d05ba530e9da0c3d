use actix_web::{get, post, put, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    handlers::login_credentials,
    models::dto::{
        request::{CreateCourseRequest, SignupRequest, UpdateCourseRequest},
        response::{
            CourseCreatedResponse, CourseDto, CourseResponse, CoursesResponse, MessageResponse,
            TokenResponse, UsernameResponse,
        },
    },
};

#[post("/signup")]
async fn signup(
    state: web::Data<AppState>,
    request: web::Json<SignupRequest>,
) -> Result<HttpResponse, AppError> {
    let token = state.admin_service.signup(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(TokenResponse {
        message: "Admin created successfully".to_string(),
        token,
    }))
}

#[post("/login")]
async fn login(state: web::Data<AppState>, req: HttpRequest) -> Result<HttpResponse, AppError> {
    let credentials = login_credentials(&req)?;
    let token = state.admin_service.login(&credentials).await?;
    Ok(HttpResponse::Ok().json(TokenResponse {
        message: "Logged in successfully".to_string(),
        token,
    }))
}

#[get("/me")]
async fn me(auth: AuthenticatedUser) -> HttpResponse {
    HttpResponse::Ok().json(UsernameResponse {
        username: auth.0.username,
    })
}

#[post("/courses")]
async fn create_course(
    state: web::Data<AppState>,
    request: web::Json<CreateCourseRequest>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let course = state.course_service.create_course(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(CourseCreatedResponse {
        message: "Course created successfully".to_string(),
        course_id: course.id.map(|oid| oid.to_hex()).unwrap_or_default(),
    }))
}

#[get("/courses/{course_id}")]
async fn get_course(
    state: web::Data<AppState>,
    course_id: web::Path<String>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let course = state.course_service.get_course(&course_id).await?;
    Ok(HttpResponse::Ok().json(CourseResponse {
        course: course.into(),
    }))
}

#[put("/courses/{course_id}")]
async fn update_course(
    state: web::Data<AppState>,
    course_id: web::Path<String>,
    request: web::Json<UpdateCourseRequest>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    state
        .course_service
        .update_course(&course_id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Course updated successfully")))
}

#[get("/courses")]
async fn list_courses(
    state: web::Data<AppState>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let courses = state.course_service.list_courses().await?;
    Ok(HttpResponse::Ok().json(CoursesResponse {
        courses: courses.into_iter().map(CourseDto::from).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        handlers::{configure, json_config},
        models::domain::{Admin, Role},
        repositories::{
            admin_repository::MockAdminRepository, course_repository::MockCourseRepository,
            user_repository::MockUserRepository,
        },
        test_utils::{
            fixtures::draft_course,
            test_helpers::{assert_error_status, test_state_with},
        },
    };
    use actix_web::{http::StatusCode, test, App};
    use serde_json::json;

    #[actix_web::test]
    async fn test_signup_returns_created_with_token() {
        let mut admins = MockAdminRepository::new();
        admins.expect_find_by_username().returning(|_| Ok(None));
        admins.expect_create().returning(|admin| Ok(admin));

        let state = test_state_with(admins, MockUserRepository::new(), MockCourseRepository::new());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .app_data(json_config())
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/admin/signup")
            .set_json(json!({ "username": "a", "password": "p" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Admin created successfully");
        assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
    }

    #[actix_web::test]
    async fn test_signup_rejects_malformed_body() {
        let state = test_state_with(
            MockAdminRepository::new(),
            MockUserRepository::new(),
            MockCourseRepository::new(),
        );
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .app_data(json_config())
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/admin/signup")
            .set_json(json!({ "username": "a" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_login_reads_header_credentials() {
        let mut admins = MockAdminRepository::new();
        admins
            .expect_find_by_credentials()
            .withf(|username, password| username == "a" && password == "p")
            .returning(|username, password| Ok(Some(Admin::new(username, password))));

        let state = test_state_with(admins, MockUserRepository::new(), MockCourseRepository::new());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/admin/login")
            .insert_header(("username", "a"))
            .insert_header(("password", "p"))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["message"], "Logged in successfully");
    }

    #[actix_web::test]
    async fn test_get_course_returns_unpublished_course() {
        let course = draft_course("X");
        let course_id = course.id.unwrap().to_hex();

        let mut courses = MockCourseRepository::new();
        courses
            .expect_find_by_id()
            .returning(move |_| Ok(Some(course.clone())));

        let state = test_state_with(MockAdminRepository::new(), MockUserRepository::new(), courses);
        let token = state.jwt_service.issue("a", Role::Admin).unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/admin/courses/{}", course_id))
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["course"]["_id"], course_id);
        assert_eq!(body["course"]["published"], false);
    }

    #[actix_web::test]
    async fn test_courses_require_token() {
        let state = test_state_with(
            MockAdminRepository::new(),
            MockUserRepository::new(),
            MockCourseRepository::new(),
        );
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/admin/courses").to_request();
        let resp = test::call_service(&app, req).await;
        assert_error_status(resp.status());
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
