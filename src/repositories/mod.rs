pub mod admin_repository;
pub mod course_repository;
pub mod user_repository;

pub use admin_repository::{AdminRepository, MongoAdminRepository};
pub use course_repository::{CourseRepository, MongoCourseRepository};
pub use user_repository::{MongoUserRepository, UserRepository};
