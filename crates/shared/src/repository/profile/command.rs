use crate::{
    abstract_trait::ProfileCommandRepositoryTrait, config::ConnectionPool,
    domain::requests::CreateProfileRequest, errors::RepositoryError, model::Profile,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct ProfileCommandRepository {
    db: ConnectionPool,
}

impl ProfileCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileCommandRepositoryTrait for ProfileCommandRepository {
    async fn create(&self, request: &CreateProfileRequest) -> Result<Profile, RepositoryError> {
        let profile = sqlx::query_as::<_, Profile>(
            r#"
            INSERT INTO profiles (email, full_name, password, role)
            VALUES ($1, $2, $3, $4)
            RETURNING id, email, full_name, password, role, created_at
            "#,
        )
        .bind(&request.email)
        .bind(&request.full_name)
        .bind(&request.password)
        .bind(request.role.as_str())
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            if e.as_database_error()
                .is_some_and(|db_err| db_err.is_unique_violation())
            {
                return RepositoryError::AlreadyExists(format!(
                    "profile with email {} already exists",
                    request.email
                ));
            }
            error!("❌ Failed to insert profile: {e:?}");
            RepositoryError::from(e)
        })?;

        info!("✅ Created profile {} ({})", profile.id, profile.role);

        Ok(profile)
    }
}
