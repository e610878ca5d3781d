use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Activity {
    pub id: Uuid,
    pub course_id: Uuid,
    pub title: String,
    pub activity_type: String,
    pub scheduled_date: DateTime<Utc>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Activity row joined with its course name/code, as both dashboards
/// render it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ActivityWithCourse {
    pub id: Uuid,
    pub course_id: Uuid,
    pub title: String,
    pub activity_type: String,
    pub scheduled_date: DateTime<Utc>,
    pub created_at: Option<DateTime<Utc>>,
    pub course_name: String,
    pub course_code: String,
}
