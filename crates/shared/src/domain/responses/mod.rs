mod activity;
mod api;
mod attendance;
mod auth;
mod course;
mod dashboard;
mod enrollment;
mod profile;
mod token;

pub use self::activity::ActivityResponse;
pub use self::api::ApiResponse;
pub use self::attendance::{AttendanceBreakdown, AttendanceResponse};
pub use self::auth::LoginResponse;
pub use self::course::CourseResponse;
pub use self::dashboard::{AdminOverviewResponse, StudentOverviewResponse};
pub use self::enrollment::EnrollmentResponse;
pub use self::profile::ProfileResponse;
pub use self::token::TokenResponse;
