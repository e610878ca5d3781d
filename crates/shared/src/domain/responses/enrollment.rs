use crate::model::EnrollmentWithCourse;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct EnrollmentResponse {
    pub id: Uuid,
    pub course_id: Uuid,
    pub course_name: String,
    pub course_code: String,
    pub course_description: Option<String>,
    pub enrolled_at: Option<String>,
}

impl From<EnrollmentWithCourse> for EnrollmentResponse {
    fn from(value: EnrollmentWithCourse) -> Self {
        EnrollmentResponse {
            id: value.id,
            course_id: value.course_id,
            course_name: value.course_name,
            course_code: value.course_code,
            course_description: value.course_description,
            enrolled_at: value.created_at.map(|dt| dt.to_rfc3339()),
        }
    }
}
