use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub username: String,
    pub password: String,
    // Course references in purchase order; duplicates are allowed.
    #[serde(default)]
    pub purchased_courses: Vec<ObjectId>,
}

impl User {
    pub fn new(username: &str, password: &str) -> Self {
        User {
            id: Some(ObjectId::new()),
            username: username.to_string(),
            password: password.to_string(),
            purchased_courses: Vec::new(),
        }
    }
}

#[cfg(test)]
impl User {
    pub fn test_user_simple(username: &str) -> Self {
        User::new(username, "password")
    }
}
