use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Session record cached in Redis under `session:{user_id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub user_id: Uuid,
    pub email: String,
    pub role: String,
}
