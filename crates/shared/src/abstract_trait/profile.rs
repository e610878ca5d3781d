use crate::{
    domain::requests::CreateProfileRequest,
    errors::RepositoryError,
    model::{Profile, Role},
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynProfileQueryRepository = Arc<dyn ProfileQueryRepositoryTrait + Send + Sync>;
pub type DynProfileCommandRepository = Arc<dyn ProfileCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProfileQueryRepositoryTrait {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Profile>, RepositoryError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Profile>, RepositoryError>;

    /// Role of the profile, if the row exists and its role column parses.
    async fn find_role_by_id(&self, id: Uuid) -> Result<Option<Role>, RepositoryError>;

    async fn find_students(&self) -> Result<Vec<Profile>, RepositoryError>;
}

#[async_trait]
pub trait ProfileCommandRepositoryTrait {
    async fn create(&self, request: &CreateProfileRequest) -> Result<Profile, RepositoryError>;
}
