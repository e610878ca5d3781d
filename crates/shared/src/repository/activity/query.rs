use crate::{
    abstract_trait::ActivityQueryRepositoryTrait, config::ConnectionPool,
    errors::RepositoryError, model::ActivityWithCourse,
};
use async_trait::async_trait;
use tracing::error;
use uuid::Uuid;

pub struct ActivityQueryRepository {
    db: ConnectionPool,
}

impl ActivityQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ActivityQueryRepositoryTrait for ActivityQueryRepository {
    async fn find_recent(&self, limit: i64) -> Result<Vec<ActivityWithCourse>, RepositoryError> {
        let activities = sqlx::query_as::<_, ActivityWithCourse>(
            r#"
            SELECT a.id, a.course_id, a.title, a.activity_type, a.scheduled_date,
                   a.created_at, c.name AS course_name, c.code AS course_code
            FROM activities a
            JOIN courses c ON c.id = a.course_id
            ORDER BY a.created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch recent activities: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(activities)
    }

    async fn find_upcoming_for_student(
        &self,
        student_id: Uuid,
        limit: i64,
    ) -> Result<Vec<ActivityWithCourse>, RepositoryError> {
        let activities = sqlx::query_as::<_, ActivityWithCourse>(
            r#"
            SELECT a.id, a.course_id, a.title, a.activity_type, a.scheduled_date,
                   a.created_at, c.name AS course_name, c.code AS course_code
            FROM activities a
            JOIN courses c ON c.id = a.course_id
            JOIN enrollments e ON e.course_id = a.course_id
            WHERE e.student_id = $1
              AND a.scheduled_date >= now()
            ORDER BY a.scheduled_date ASC
            LIMIT $2
            "#,
        )
        .bind(student_id)
        .bind(limit)
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch upcoming activities for student {student_id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(activities)
    }
}
