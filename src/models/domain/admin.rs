use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Admin account. The password is stored as supplied.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Admin {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub username: String,
    pub password: String,
}

impl Admin {
    pub fn new(username: &str, password: &str) -> Self {
        Admin {
            id: Some(ObjectId::new()),
            username: username.to_string(),
            password: password.to_string(),
        }
    }
}
