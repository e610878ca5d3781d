use crate::domain::responses::{
    ActivityResponse, AttendanceBreakdown, AttendanceResponse, CourseResponse,
    EnrollmentResponse, ProfileResponse,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Everything the admin landing page renders in one payload.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct AdminOverviewResponse {
    pub courses: Vec<CourseResponse>,
    pub students: Vec<ProfileResponse>,
    pub recent_activities: Vec<ActivityResponse>,
    pub attendance: AttendanceBreakdown,
    pub total_enrollments: i64,
}

/// Everything the student landing page renders in one payload.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct StudentOverviewResponse {
    pub profile: ProfileResponse,
    pub enrollments: Vec<EnrollmentResponse>,
    pub upcoming_activities: Vec<ActivityResponse>,
    pub recent_attendance: Vec<AttendanceResponse>,
    pub attendance: AttendanceBreakdown,
}
