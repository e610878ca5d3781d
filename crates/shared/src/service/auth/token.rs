use crate::{
    abstract_trait::{DynJwtService, TokenServiceTrait},
    errors::ServiceError,
};
use async_trait::async_trait;
use uuid::Uuid;

pub struct TokenService {
    jwt: DynJwtService,
}

impl TokenService {
    pub fn new(jwt: DynJwtService) -> Self {
        Self { jwt }
    }
}

#[async_trait]
impl TokenServiceTrait for TokenService {
    async fn create_access_token(&self, user_id: Uuid) -> Result<String, ServiceError> {
        self.jwt.generate_token(user_id, "access")
    }

    async fn create_refresh_token(&self, user_id: Uuid) -> Result<String, ServiceError> {
        self.jwt.generate_token(user_id, "refresh")
    }
}
