use crate::domain::responses::{ProfileResponse, TokenResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct LoginResponse {
    pub profile: ProfileResponse,
    #[serde(flatten)]
    pub tokens: TokenResponse,
}
