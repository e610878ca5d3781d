use crate::{errors::RepositoryError, model::Course};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCourseQueryRepository = Arc<dyn CourseQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CourseQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<Course>, RepositoryError>;
}
