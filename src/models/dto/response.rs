use serde::Serialize;

use crate::models::domain::Course;

/// Course as returned to clients, with the identifier rendered as hex.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub image_link: String,
    pub published: bool,
}

impl From<Course> for CourseDto {
    fn from(course: Course) -> Self {
        CourseDto {
            id: course.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            title: course.title,
            description: course.description,
            price: course.price,
            image_link: course.image_link,
            published: course.published,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub message: String,
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct UsernameResponse {
    pub username: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseCreatedResponse {
    pub message: String,
    pub course_id: String,
}

#[derive(Debug, Serialize)]
pub struct CourseResponse {
    pub course: CourseDto,
}

#[derive(Debug, Serialize)]
pub struct CoursesResponse {
    pub courses: Vec<CourseDto>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchasedCoursesResponse {
    pub purchased_courses: Vec<CourseDto>,
}
