use crate::{
    errors::RepositoryError,
    model::{Attendance, StatusCount},
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynAttendanceQueryRepository = Arc<dyn AttendanceQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait AttendanceQueryRepositoryTrait {
    async fn count_by_status(&self) -> Result<Vec<StatusCount>, RepositoryError>;

    async fn count_by_status_for_student(
        &self,
        student_id: Uuid,
    ) -> Result<Vec<StatusCount>, RepositoryError>;

    async fn find_recent_by_student(
        &self,
        student_id: Uuid,
        limit: i64,
    ) -> Result<Vec<Attendance>, RepositoryError>;
}
