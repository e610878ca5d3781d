mod auth;
mod profile;

pub use self::auth::{LoginRequest, RefreshTokenRequest, RegisterRequest};
pub use self::profile::CreateProfileRequest;
