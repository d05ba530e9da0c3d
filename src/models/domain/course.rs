use mongodb::bson::{oid::ObjectId, Document};
use serde::{Deserialize, Serialize};

use crate::models::dto::request::{CreateCourseRequest, UpdateCourseRequest};

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub image_link: String,
    #[serde(default)]
    pub published: bool,
}

impl Course {
    pub fn new(title: &str, description: &str, price: f64, image_link: &str, published: bool) -> Self {
        Course {
            id: Some(ObjectId::new()),
            title: title.to_string(),
            description: description.to_string(),
            price,
            image_link: image_link.to_string(),
            published,
        }
    }

    pub fn from_request(request: CreateCourseRequest) -> Self {
        Course {
            id: Some(ObjectId::new()),
            title: request.title,
            description: request.description,
            price: request.price,
            image_link: request.image_link,
            published: request.published,
        }
    }
}

/// Partial course update. Only the fields that are `Some` are written.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CourseChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image_link: Option<String>,
    pub published: Option<bool>,
}

impl CourseChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.image_link.is_none()
            && self.published.is_none()
    }

    /// In-memory counterpart of `to_set_document`: overwrites only the supplied fields.
    pub fn apply(&self, course: &mut Course) {
        if let Some(title) = &self.title {
            course.title = title.clone();
        }
        if let Some(description) = &self.description {
            course.description = description.clone();
        }
        if let Some(price) = self.price {
            course.price = price;
        }
        if let Some(image_link) = &self.image_link {
            course.image_link = image_link.clone();
        }
        if let Some(published) = self.published {
            course.published = published;
        }
    }

    /// Builds the body of a `$set` update using the stored field names.
    pub fn to_set_document(&self) -> Document {
        let mut set = Document::new();
        if let Some(title) = &self.title {
            set.insert("title", title.as_str());
        }
        if let Some(description) = &self.description {
            set.insert("description", description.as_str());
        }
        if let Some(price) = self.price {
            set.insert("price", price);
        }
        if let Some(image_link) = &self.image_link {
            set.insert("imageLink", image_link.as_str());
        }
        if let Some(published) = self.published {
            set.insert("published", published);
        }
        set
    }
}

impl From<UpdateCourseRequest> for CourseChanges {
    fn from(request: UpdateCourseRequest) -> Self {
        CourseChanges {
            title: request.title,
            description: request.description,
            price: request.price,
            image_link: request.image_link,
            published: request.published,
        }
    }
}
