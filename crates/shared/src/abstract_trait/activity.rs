use crate::{errors::RepositoryError, model::ActivityWithCourse};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynActivityQueryRepository = Arc<dyn ActivityQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ActivityQueryRepositoryTrait {
    async fn find_recent(&self, limit: i64) -> Result<Vec<ActivityWithCourse>, RepositoryError>;

    /// Upcoming activities in courses the student is enrolled in, soonest
    /// first.
    async fn find_upcoming_for_student(
        &self,
        student_id: Uuid,
        limit: i64,
    ) -> Result<Vec<ActivityWithCourse>, RepositoryError>;
}
