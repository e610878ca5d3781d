use crate::{
    abstract_trait::EnrollmentQueryRepositoryTrait, config::ConnectionPool,
    errors::RepositoryError, model::EnrollmentWithCourse,
};
use async_trait::async_trait;
use tracing::error;
use uuid::Uuid;

pub struct EnrollmentQueryRepository {
    db: ConnectionPool,
}

impl EnrollmentQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EnrollmentQueryRepositoryTrait for EnrollmentQueryRepository {
    async fn find_by_student(
        &self,
        student_id: Uuid,
    ) -> Result<Vec<EnrollmentWithCourse>, RepositoryError> {
        let enrollments = sqlx::query_as::<_, EnrollmentWithCourse>(
            r#"
            SELECT e.id, e.student_id, e.course_id, e.created_at,
                   c.name AS course_name, c.code AS course_code,
                   c.description AS course_description
            FROM enrollments e
            JOIN courses c ON c.id = e.course_id
            WHERE e.student_id = $1
            ORDER BY e.created_at DESC
            "#,
        )
        .bind(student_id)
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch enrollments for student {student_id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(enrollments)
    }

    async fn count_all(&self) -> Result<i64, RepositoryError> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM enrollments
            "#,
        )
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to count enrollments: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(count)
    }
}
