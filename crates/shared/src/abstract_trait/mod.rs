mod activity;
mod attendance;
mod auth;
mod course;
mod dashboard;
mod enrollment;
mod hashing;
mod jwt;
mod profile;

pub use self::activity::{ActivityQueryRepositoryTrait, DynActivityQueryRepository};
pub use self::attendance::{AttendanceQueryRepositoryTrait, DynAttendanceQueryRepository};
pub use self::auth::{
    DynIdentityService, DynLoginService, DynRegisterService, DynTokenService,
    IdentityServiceTrait, LoginServiceTrait, RegisterServiceTrait, TokenServiceTrait,
};
pub use self::course::{CourseQueryRepositoryTrait, DynCourseQueryRepository};
pub use self::dashboard::{
    AdminOverviewServiceTrait, DynAdminOverviewService, DynStudentOverviewService,
    StudentOverviewServiceTrait,
};
pub use self::enrollment::{DynEnrollmentQueryRepository, EnrollmentQueryRepositoryTrait};
pub use self::hashing::{DynHashing, HashingTrait};
pub use self::jwt::{DynJwtService, JwtServiceTrait};
pub use self::profile::{
    DynProfileCommandRepository, DynProfileQueryRepository, ProfileCommandRepositoryTrait,
    ProfileQueryRepositoryTrait,
};
