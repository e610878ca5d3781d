use crate::{
    domain::{
        requests::{LoginRequest, RegisterRequest},
        responses::{ApiResponse, LoginResponse, ProfileResponse, TokenResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynLoginService = Arc<dyn LoginServiceTrait + Send + Sync>;
pub type DynRegisterService = Arc<dyn RegisterServiceTrait + Send + Sync>;
pub type DynIdentityService = Arc<dyn IdentityServiceTrait + Send + Sync>;
pub type DynTokenService = Arc<dyn TokenServiceTrait + Send + Sync>;

#[async_trait]
pub trait LoginServiceTrait {
    async fn login(
        &self,
        request: &LoginRequest,
    ) -> Result<ApiResponse<LoginResponse>, ServiceError>;
}

#[async_trait]
pub trait RegisterServiceTrait {
    async fn register(
        &self,
        request: &RegisterRequest,
    ) -> Result<ApiResponse<ProfileResponse>, ServiceError>;
}

#[async_trait]
pub trait IdentityServiceTrait {
    async fn get_me(&self, user_id: Uuid) -> Result<ApiResponse<ProfileResponse>, ServiceError>;

    async fn refresh_token(
        &self,
        refresh_token: &str,
    ) -> Result<ApiResponse<TokenResponse>, ServiceError>;
}

#[async_trait]
pub trait TokenServiceTrait {
    async fn create_access_token(&self, user_id: Uuid) -> Result<String, ServiceError>;
    async fn create_refresh_token(&self, user_id: Uuid) -> Result<String, ServiceError>;
}
