use crate::{
    abstract_trait::{
        AdminOverviewServiceTrait, DynActivityQueryRepository, DynAttendanceQueryRepository,
        DynCourseQueryRepository, DynEnrollmentQueryRepository, DynProfileQueryRepository,
    },
    domain::responses::{
        ActivityResponse, AdminOverviewResponse, ApiResponse, AttendanceBreakdown,
        CourseResponse, ProfileResponse,
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use tracing::info;

const RECENT_ACTIVITY_LIMIT: i64 = 10;

pub struct AdminOverviewService {
    courses: DynCourseQueryRepository,
    profiles: DynProfileQueryRepository,
    activities: DynActivityQueryRepository,
    attendance: DynAttendanceQueryRepository,
    enrollments: DynEnrollmentQueryRepository,
}

pub struct AdminOverviewDeps {
    pub courses: DynCourseQueryRepository,
    pub profiles: DynProfileQueryRepository,
    pub activities: DynActivityQueryRepository,
    pub attendance: DynAttendanceQueryRepository,
    pub enrollments: DynEnrollmentQueryRepository,
}

impl AdminOverviewService {
    pub fn new(deps: AdminOverviewDeps) -> Self {
        let AdminOverviewDeps {
            courses,
            profiles,
            activities,
            attendance,
            enrollments,
        } = deps;

        Self {
            courses,
            profiles,
            activities,
            attendance,
            enrollments,
        }
    }
}

#[async_trait]
impl AdminOverviewServiceTrait for AdminOverviewService {
    async fn overview(&self) -> Result<ApiResponse<AdminOverviewResponse>, ServiceError> {
        info!("📊 Building admin overview");

        let courses = self.courses.find_all().await?;
        let students = self.profiles.find_students().await?;
        let recent = self.activities.find_recent(RECENT_ACTIVITY_LIMIT).await?;
        let counts = self.attendance.count_by_status().await?;
        let total_enrollments = self.enrollments.count_all().await?;

        Ok(ApiResponse::success(
            "Admin overview",
            AdminOverviewResponse {
                courses: courses.into_iter().map(CourseResponse::from).collect(),
                students: students.into_iter().map(ProfileResponse::from).collect(),
                recent_activities: recent.into_iter().map(ActivityResponse::from).collect(),
                attendance: AttendanceBreakdown::from_counts(&counts),
                total_enrollments,
            },
        ))
    }

    async fn courses(&self) -> Result<ApiResponse<Vec<CourseResponse>>, ServiceError> {
        let courses = self.courses.find_all().await?;

        Ok(ApiResponse::success(
            "Courses",
            courses.into_iter().map(CourseResponse::from).collect(),
        ))
    }

    async fn students(&self) -> Result<ApiResponse<Vec<ProfileResponse>>, ServiceError> {
        let students = self.profiles.find_students().await?;

        Ok(ApiResponse::success(
            "Students",
            students.into_iter().map(ProfileResponse::from).collect(),
        ))
    }

    async fn activities(&self) -> Result<ApiResponse<Vec<ActivityResponse>>, ServiceError> {
        let recent = self.activities.find_recent(RECENT_ACTIVITY_LIMIT).await?;

        Ok(ApiResponse::success(
            "Recent activities",
            recent.into_iter().map(ActivityResponse::from).collect(),
        ))
    }

    async fn attendance(&self) -> Result<ApiResponse<AttendanceBreakdown>, ServiceError> {
        let counts = self.attendance.count_by_status().await?;

        Ok(ApiResponse::success(
            "Attendance breakdown",
            AttendanceBreakdown::from_counts(&counts),
        ))
    }
}
