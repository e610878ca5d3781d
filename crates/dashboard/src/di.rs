use shared::{
    abstract_trait::{
        DynActivityQueryRepository, DynAdminOverviewService, DynAttendanceQueryRepository,
        DynCourseQueryRepository, DynEnrollmentQueryRepository, DynHashing,
        DynIdentityService, DynJwtService, DynLoginService, DynProfileCommandRepository,
        DynProfileQueryRepository, DynRegisterService, DynStudentOverviewService,
        DynTokenService,
    },
    config::ConnectionPool,
    repository::{
        ActivityQueryRepository, AttendanceQueryRepository, CourseQueryRepository,
        EnrollmentQueryRepository, ProfileCommandRepository, ProfileQueryRepository,
    },
    service::{
        AdminOverviewDeps, AdminOverviewService, IdentityService, LoginService,
        RegisterService, StudentOverviewDeps, StudentOverviewService, TokenService,
    },
};
use std::sync::Arc;

#[derive(Clone)]
pub struct DependenciesInject {
    pub profile_query: DynProfileQueryRepository,
    pub login_service: DynLoginService,
    pub register_service: DynRegisterService,
    pub identity_service: DynIdentityService,
    pub admin_overview: DynAdminOverviewService,
    pub student_overview: DynStudentOverviewService,
}

impl std::fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("profile_query", &"DynProfileQueryRepository")
            .field("login_service", &"DynLoginService")
            .field("register_service", &"DynRegisterService")
            .field("identity_service", &"DynIdentityService")
            .field("admin_overview", &"DynAdminOverviewService")
            .field("student_overview", &"DynStudentOverviewService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool, hashing: DynHashing, jwt: DynJwtService) -> Self {
        let profile_query =
            Arc::new(ProfileQueryRepository::new(pool.clone())) as DynProfileQueryRepository;
        let profile_command =
            Arc::new(ProfileCommandRepository::new(pool.clone())) as DynProfileCommandRepository;
        let courses = Arc::new(CourseQueryRepository::new(pool.clone())) as DynCourseQueryRepository;
        let enrollments =
            Arc::new(EnrollmentQueryRepository::new(pool.clone())) as DynEnrollmentQueryRepository;
        let activities =
            Arc::new(ActivityQueryRepository::new(pool.clone())) as DynActivityQueryRepository;
        let attendance =
            Arc::new(AttendanceQueryRepository::new(pool)) as DynAttendanceQueryRepository;

        let token_service = Arc::new(TokenService::new(jwt.clone())) as DynTokenService;

        let login_service = Arc::new(LoginService::new(
            profile_query.clone(),
            hashing.clone(),
            token_service.clone(),
        )) as DynLoginService;

        let register_service = Arc::new(RegisterService::new(
            profile_query.clone(),
            profile_command,
            hashing,
        )) as DynRegisterService;

        let identity_service = Arc::new(IdentityService::new(
            profile_query.clone(),
            jwt,
            token_service,
        )) as DynIdentityService;

        let admin_overview = Arc::new(AdminOverviewService::new(AdminOverviewDeps {
            courses,
            profiles: profile_query.clone(),
            activities: activities.clone(),
            attendance: attendance.clone(),
            enrollments: enrollments.clone(),
        })) as DynAdminOverviewService;

        let student_overview = Arc::new(StudentOverviewService::new(StudentOverviewDeps {
            profiles: profile_query.clone(),
            enrollments,
            activities,
            attendance,
        })) as DynStudentOverviewService;

        Self {
            profile_query,
            login_service,
            register_service,
            identity_service,
            admin_overview,
            student_overview,
        }
    }
}
