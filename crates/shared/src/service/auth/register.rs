use crate::{
    abstract_trait::{
        DynHashing, DynProfileCommandRepository, DynProfileQueryRepository,
        RegisterServiceTrait,
    },
    domain::{
        requests::{CreateProfileRequest, RegisterRequest},
        responses::{ApiResponse, ProfileResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::Role,
};
use async_trait::async_trait;
use tracing::{info, warn};

pub struct RegisterService {
    query: DynProfileQueryRepository,
    command: DynProfileCommandRepository,
    hash: DynHashing,
}

impl RegisterService {
    pub fn new(
        query: DynProfileQueryRepository,
        command: DynProfileCommandRepository,
        hash: DynHashing,
    ) -> Self {
        Self {
            query,
            command,
            hash,
        }
    }
}

#[async_trait]
impl RegisterServiceTrait for RegisterService {
    async fn register(
        &self,
        request: &RegisterRequest,
    ) -> Result<ApiResponse<ProfileResponse>, ServiceError> {
        let email = &request.email;

        info!("📝 Registering new profile for email: {email}");

        if self.query.find_by_email(email).await?.is_some() {
            warn!("Registration rejected, email already in use: {email}");
            return Err(ServiceError::Repo(RepositoryError::AlreadyExists(format!(
                "profile with email {email} already exists"
            ))));
        }

        let hashed_password = self.hash.hash_password(&request.password).await?;

        // Self-service signup always lands on the student side; admins are
        // provisioned out of band.
        let profile = self
            .command
            .create(&CreateProfileRequest {
                email: email.clone(),
                full_name: request.full_name.clone(),
                password: hashed_password,
                role: Role::Student,
            })
            .await?;

        info!("✅ Registered profile {}", profile.id);

        Ok(ApiResponse::success(
            "Registration successful",
            profile.into(),
        ))
    }
}
