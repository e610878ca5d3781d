use crate::{
    abstract_trait::{
        DynActivityQueryRepository, DynAttendanceQueryRepository,
        DynEnrollmentQueryRepository, DynProfileQueryRepository, StudentOverviewServiceTrait,
    },
    domain::responses::{
        ActivityResponse, ApiResponse, AttendanceBreakdown, AttendanceResponse,
        EnrollmentResponse, ProfileResponse, StudentOverviewResponse,
    },
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

const UPCOMING_ACTIVITY_LIMIT: i64 = 10;
const RECENT_ATTENDANCE_LIMIT: i64 = 10;

pub struct StudentOverviewService {
    profiles: DynProfileQueryRepository,
    enrollments: DynEnrollmentQueryRepository,
    activities: DynActivityQueryRepository,
    attendance: DynAttendanceQueryRepository,
}

pub struct StudentOverviewDeps {
    pub profiles: DynProfileQueryRepository,
    pub enrollments: DynEnrollmentQueryRepository,
    pub activities: DynActivityQueryRepository,
    pub attendance: DynAttendanceQueryRepository,
}

impl StudentOverviewService {
    pub fn new(deps: StudentOverviewDeps) -> Self {
        let StudentOverviewDeps {
            profiles,
            enrollments,
            activities,
            attendance,
        } = deps;

        Self {
            profiles,
            enrollments,
            activities,
            attendance,
        }
    }
}

#[async_trait]
impl StudentOverviewServiceTrait for StudentOverviewService {
    async fn overview(
        &self,
        student_id: Uuid,
    ) -> Result<ApiResponse<StudentOverviewResponse>, ServiceError> {
        info!("📚 Building student overview for {student_id}");

        let profile = self
            .profiles
            .find_by_id(student_id)
            .await?
            .ok_or(ServiceError::Repo(RepositoryError::NotFound))?;

        let enrollments = self.enrollments.find_by_student(student_id).await?;
        let upcoming = self
            .activities
            .find_upcoming_for_student(student_id, UPCOMING_ACTIVITY_LIMIT)
            .await?;
        let recent = self
            .attendance
            .find_recent_by_student(student_id, RECENT_ATTENDANCE_LIMIT)
            .await?;
        let counts = self.attendance.count_by_status_for_student(student_id).await?;

        Ok(ApiResponse::success(
            "Student overview",
            StudentOverviewResponse {
                profile: ProfileResponse::from(profile),
                enrollments: enrollments
                    .into_iter()
                    .map(EnrollmentResponse::from)
                    .collect(),
                upcoming_activities: upcoming
                    .into_iter()
                    .map(ActivityResponse::from)
                    .collect(),
                recent_attendance: recent
                    .into_iter()
                    .map(AttendanceResponse::from)
                    .collect(),
                attendance: AttendanceBreakdown::from_counts(&counts),
            },
        ))
    }

    async fn profile(
        &self,
        student_id: Uuid,
    ) -> Result<ApiResponse<ProfileResponse>, ServiceError> {
        let profile = self
            .profiles
            .find_by_id(student_id)
            .await?
            .ok_or(ServiceError::Repo(RepositoryError::NotFound))?;

        Ok(ApiResponse::success(
            "Student profile",
            ProfileResponse::from(profile),
        ))
    }
}
