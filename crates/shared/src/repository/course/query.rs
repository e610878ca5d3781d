use crate::{
    abstract_trait::CourseQueryRepositoryTrait, config::ConnectionPool,
    errors::RepositoryError, model::Course,
};
use async_trait::async_trait;
use tracing::error;

pub struct CourseQueryRepository {
    db: ConnectionPool,
}

impl CourseQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CourseQueryRepositoryTrait for CourseQueryRepository {
    async fn find_all(&self) -> Result<Vec<Course>, RepositoryError> {
        let courses = sqlx::query_as::<_, Course>(
            r#"
            SELECT id, name, code, description, created_at
            FROM courses
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch courses: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(courses)
    }
}
