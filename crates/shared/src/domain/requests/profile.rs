use crate::model::Role;
use serde::{Deserialize, Serialize};

/// Internal insert payload; the password is already hashed by the time this
/// is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProfileRequest {
    pub email: String,
    pub full_name: String,
    pub password: String,
    pub role: Role,
}
