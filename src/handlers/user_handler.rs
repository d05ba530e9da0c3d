use actix_web::{get, post, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    handlers::login_credentials,
    models::dto::{
        request::SignupRequest,
        response::{
            CourseDto, CoursesResponse, MessageResponse, PurchasedCoursesResponse, TokenResponse,
            UsernameResponse,
        },
    },
};

#[post("/signup")]
async fn signup(
    state: web::Data<AppState>,
    request: web::Json<SignupRequest>,
) -> Result<HttpResponse, AppError> {
    let token = state.user_service.signup(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(TokenResponse {
        message: "User created successfully".to_string(),
        token,
    }))
}

#[post("/login")]
async fn login(state: web::Data<AppState>, req: HttpRequest) -> Result<HttpResponse, AppError> {
    let credentials = login_credentials(&req)?;
    let token = state.user_service.login(&credentials).await?;
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

#[get("/courses")]
async fn list_courses(
    state: web::Data<AppState>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let courses = state.course_service.list_published_courses().await?;
    Ok(HttpResponse::Ok().json(CoursesResponse {
        courses: courses.into_iter().map(CourseDto::from).collect(),
    }))
}

// Responds with the bare course, unlike the admin route which wraps it in `course`.
#[get("/courses/{course_id}")]
async fn get_course(
    state: web::Data<AppState>,
    course_id: web::Path<String>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let course = state.course_service.get_published_course(&course_id).await?;
    Ok(HttpResponse::Ok().json(CourseDto::from(course)))
}

#[post("/courses/{course_id}")]
async fn purchase_course(
    state: web::Data<AppState>,
    course_id: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    state
        .user_service
        .purchase_course(&auth.0.username, &course_id)
        .await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Course purchased successfully")))
}

#[get("/purchasedCourses")]
async fn purchased_courses(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let courses = state.user_service.purchased_courses(&auth.0.username).await?;
    Ok(HttpResponse::Ok().json(PurchasedCoursesResponse {
        purchased_courses: courses.into_iter().map(CourseDto::from).collect(),
    }))
}
