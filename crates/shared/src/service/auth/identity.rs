use crate::{
    abstract_trait::{
        DynJwtService, DynProfileQueryRepository, DynTokenService, IdentityServiceTrait,
    },
    domain::responses::{ApiResponse, ProfileResponse, TokenResponse},
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

pub struct IdentityService {
    query: DynProfileQueryRepository,
    jwt: DynJwtService,
    token_service: DynTokenService,
}

impl IdentityService {
    pub fn new(
        query: DynProfileQueryRepository,
        jwt: DynJwtService,
        token_service: DynTokenService,
    ) -> Self {
        Self {
            query,
            jwt,
            token_service,
        }
    }
}

#[async_trait]
impl IdentityServiceTrait for IdentityService {
    async fn get_me(&self, user_id: Uuid) -> Result<ApiResponse<ProfileResponse>, ServiceError> {
        let profile = self
            .query
            .find_by_id(user_id)
            .await?
            .ok_or(ServiceError::Repo(RepositoryError::NotFound))?;

        Ok(ApiResponse::success("Profile retrieved", profile.into()))
    }

    async fn refresh_token(
        &self,
        refresh_token: &str,
    ) -> Result<ApiResponse<TokenResponse>, ServiceError> {
        let user_id = self.jwt.verify_token(refresh_token, "refresh")?;

        // The profile must still exist, a deleted account keeps a valid
        // refresh token until it expires.
        if self.query.find_by_id(user_id).await?.is_none() {
            return Err(ServiceError::Repo(RepositoryError::NotFound));
        }

        let access_token = self.token_service.create_access_token(user_id).await?;
        let refresh_token = self.token_service.create_refresh_token(user_id).await?;

        info!("🔄 Issued fresh token pair for profile {user_id}");

        Ok(ApiResponse::success(
            "Token refreshed",
            TokenResponse {
                access_token,
                refresh_token,
            },
        ))
    }
}
