use crate::{
    abstract_trait::{
        DynHashing, DynProfileQueryRepository, DynTokenService, LoginServiceTrait,
    },
    domain::{
        requests::LoginRequest,
        responses::{ApiResponse, LoginResponse, TokenResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use tracing::{error, info, warn};

pub struct LoginService {
    query: DynProfileQueryRepository,
    hash: DynHashing,
    token_service: DynTokenService,
}

impl LoginService {
    pub fn new(
        query: DynProfileQueryRepository,
        hash: DynHashing,
        token_service: DynTokenService,
    ) -> Self {
        Self {
            query,
            hash,
            token_service,
        }
    }
}

#[async_trait]
impl LoginServiceTrait for LoginService {
    async fn login(
        &self,
        request: &LoginRequest,
    ) -> Result<ApiResponse<LoginResponse>, ServiceError> {
        let email = &request.email;

        info!("🔐 Attempting login for email: {email}");

        let profile = match self.query.find_by_email(email).await {
            Ok(Some(profile)) => profile,
            Ok(None) => {
                // Same error as a bad password, no account oracle.
                warn!("Login rejected, no profile for {email}");
                return Err(ServiceError::InvalidCredentials);
            }
            Err(err) => {
                error!("❌ Failed to query profile for {email}: {err}");
                return Err(ServiceError::Repo(err));
            }
        };

        self.hash
            .compare_password(&profile.password, &request.password)
            .await?;

        let access_token = self.token_service.create_access_token(profile.id).await?;
        let refresh_token = self.token_service.create_refresh_token(profile.id).await?;

        info!("✅ Login successful for profile {}", profile.id);

        Ok(ApiResponse::success(
            "Login successful",
            LoginResponse {
                profile: profile.into(),
                tokens: TokenResponse {
                    access_token,
                    refresh_token,
                },
            },
        ))
    }
}
