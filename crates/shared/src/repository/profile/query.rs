use crate::{
    abstract_trait::ProfileQueryRepositoryTrait,
    config::ConnectionPool,
    errors::RepositoryError,
    model::{Profile, Role},
};
use async_trait::async_trait;
use tracing::{error, warn};
use uuid::Uuid;

pub struct ProfileQueryRepository {
    db: ConnectionPool,
}

impl ProfileQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileQueryRepositoryTrait for ProfileQueryRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Profile>, RepositoryError> {
        let profile = sqlx::query_as::<_, Profile>(
            r#"
            SELECT id, email, full_name, password, role, created_at
            FROM profiles
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch profile {id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(profile)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Profile>, RepositoryError> {
        let profile = sqlx::query_as::<_, Profile>(
            r#"
            SELECT id, email, full_name, password, role, created_at
            FROM profiles
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch profile by email: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(profile)
    }

    async fn find_role_by_id(&self, id: Uuid) -> Result<Option<Role>, RepositoryError> {
        let role = sqlx::query_scalar::<_, String>(
            r#"
            SELECT role FROM profiles WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch role for profile {id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(role.and_then(|value| {
            let parsed = Role::parse(&value);
            if parsed.is_none() {
                warn!("Profile {id} has unrecognized role '{value}'");
            }
            parsed
        }))
    }

    async fn find_students(&self) -> Result<Vec<Profile>, RepositoryError> {
        let students = sqlx::query_as::<_, Profile>(
            r#"
            SELECT id, email, full_name, password, role, created_at
            FROM profiles
            WHERE role = 'student'
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch students: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(students)
    }
}
