use crate::{
    abstract_trait::AttendanceQueryRepositoryTrait,
    config::ConnectionPool,
    errors::RepositoryError,
    model::{Attendance, StatusCount},
};
use async_trait::async_trait;
use tracing::error;
use uuid::Uuid;

pub struct AttendanceQueryRepository {
    db: ConnectionPool,
}

impl AttendanceQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AttendanceQueryRepositoryTrait for AttendanceQueryRepository {
    async fn count_by_status(&self) -> Result<Vec<StatusCount>, RepositoryError> {
        let counts = sqlx::query_as::<_, StatusCount>(
            r#"
            SELECT status, COUNT(*) AS count
            FROM attendance
            GROUP BY status
            "#,
        )
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to aggregate attendance: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(counts)
    }

    async fn count_by_status_for_student(
        &self,
        student_id: Uuid,
    ) -> Result<Vec<StatusCount>, RepositoryError> {
        let counts = sqlx::query_as::<_, StatusCount>(
            r#"
            SELECT status, COUNT(*) AS count
            FROM attendance
            WHERE student_id = $1
            GROUP BY status
            "#,
        )
        .bind(student_id)
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to aggregate attendance for student {student_id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(counts)
    }

    async fn find_recent_by_student(
        &self,
        student_id: Uuid,
        limit: i64,
    ) -> Result<Vec<Attendance>, RepositoryError> {
        let records = sqlx::query_as::<_, Attendance>(
            r#"
            SELECT id, student_id, activity_id, status, created_at
            FROM attendance
            WHERE student_id = $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(student_id)
        .bind(limit)
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch attendance for student {student_id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(records)
    }
}
