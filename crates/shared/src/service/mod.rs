mod auth;
mod dashboard;

pub use self::auth::{IdentityService, LoginService, RegisterService, TokenService};
pub use self::dashboard::{
    AdminOverviewDeps, AdminOverviewService, StudentOverviewDeps, StudentOverviewService,
};
