use crate::model::Profile;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ProfileResponse {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub role: String,
    pub created_at: Option<String>,
}

impl From<Profile> for ProfileResponse {
    fn from(value: Profile) -> Self {
        ProfileResponse {
            id: value.id,
            email: value.email,
            full_name: value.full_name,
            role: value.role,
            created_at: value.created_at.map(|dt| dt.to_rfc3339()),
        }
    }
}
