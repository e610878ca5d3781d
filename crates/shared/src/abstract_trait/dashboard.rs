use crate::{
    domain::responses::{
        ActivityResponse, AdminOverviewResponse, ApiResponse, AttendanceBreakdown,
        CourseResponse, ProfileResponse, StudentOverviewResponse,
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynAdminOverviewService = Arc<dyn AdminOverviewServiceTrait + Send + Sync>;
pub type DynStudentOverviewService = Arc<dyn StudentOverviewServiceTrait + Send + Sync>;

#[async_trait]
pub trait AdminOverviewServiceTrait {
    async fn overview(&self) -> Result<ApiResponse<AdminOverviewResponse>, ServiceError>;
    async fn courses(&self) -> Result<ApiResponse<Vec<CourseResponse>>, ServiceError>;
    async fn students(&self) -> Result<ApiResponse<Vec<ProfileResponse>>, ServiceError>;
    async fn activities(&self) -> Result<ApiResponse<Vec<ActivityResponse>>, ServiceError>;
    async fn attendance(&self) -> Result<ApiResponse<AttendanceBreakdown>, ServiceError>;
}

#[async_trait]
pub trait StudentOverviewServiceTrait {
    async fn overview(
        &self,
        student_id: Uuid,
    ) -> Result<ApiResponse<StudentOverviewResponse>, ServiceError>;

    async fn profile(&self, student_id: Uuid)
    -> Result<ApiResponse<ProfileResponse>, ServiceError>;
}
