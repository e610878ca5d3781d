use crate::{errors::RepositoryError, model::EnrollmentWithCourse};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynEnrollmentQueryRepository = Arc<dyn EnrollmentQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait EnrollmentQueryRepositoryTrait {
    async fn find_by_student(
        &self,
        student_id: Uuid,
    ) -> Result<Vec<EnrollmentWithCourse>, RepositoryError>;

    async fn count_all(&self) -> Result<i64, RepositoryError>;
}
