use crate::model::ActivityWithCourse;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ActivityResponse {
    pub id: Uuid,
    pub course_id: Uuid,
    pub title: String,
    pub activity_type: String,
    pub scheduled_date: String,
    pub course_name: String,
    pub course_code: String,
}

impl From<ActivityWithCourse> for ActivityResponse {
    fn from(value: ActivityWithCourse) -> Self {
        ActivityResponse {
            id: value.id,
            course_id: value.course_id,
            title: value.title,
            activity_type: value.activity_type,
            scheduled_date: value.scheduled_date.to_rfc3339(),
            course_name: value.course_name,
            course_code: value.course_code,
        }
    }
}
