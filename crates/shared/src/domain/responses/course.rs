use crate::model::Course;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct CourseResponse {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub created_at: Option<String>,
}

impl From<Course> for CourseResponse {
    fn from(value: Course) -> Self {
        CourseResponse {
            id: value.id,
            name: value.name,
            code: value.code,
            description: value.description,
            created_at: value.created_at.map(|dt| dt.to_rfc3339()),
        }
    }
}
