use crate::state::AppState;
use axum::{Extension, Json, response::IntoResponse, routing::get};
use shared::{
    abstract_trait::DynAdminOverviewService,
    domain::responses::{
        ActivityResponse, AdminOverviewResponse, ApiResponse, AttendanceBreakdown,
        CourseResponse, ProfileResponse,
    },
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/admin",
    responses(
        (status = 200, description = "Admin dashboard payload", body = ApiResponse<AdminOverviewResponse>)
    ),
    tag = "Admin"
)]
pub async fn admin_overview_handler(
    Extension(service): Extension<DynAdminOverviewService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.overview().await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/admin/courses",
    responses(
        (status = 200, description = "All courses, newest first", body = ApiResponse<Vec<CourseResponse>>)
    ),
    tag = "Admin"
)]
pub async fn admin_courses_handler(
    Extension(service): Extension<DynAdminOverviewService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.courses().await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/admin/students",
    responses(
        (status = 200, description = "All student profiles", body = ApiResponse<Vec<ProfileResponse>>)
    ),
    tag = "Admin"
)]
pub async fn admin_students_handler(
    Extension(service): Extension<DynAdminOverviewService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.students().await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/admin/activities",
    responses(
        (status = 200, description = "Recently created activities", body = ApiResponse<Vec<ActivityResponse>>)
    ),
    tag = "Admin"
)]
pub async fn admin_activities_handler(
    Extension(service): Extension<DynAdminOverviewService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.activities().await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/admin/attendance",
    responses(
        (status = 200, description = "Attendance counts by status", body = ApiResponse<AttendanceBreakdown>)
    ),
    tag = "Admin"
)]
pub async fn admin_attendance_handler(
    Extension(service): Extension<DynAdminOverviewService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.attendance().await?;
    Ok(Json(response))
}

pub fn admin_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/admin", get(admin_overview_handler))
        .route("/admin/courses", get(admin_courses_handler))
        .route("/admin/students", get(admin_students_handler))
        .route("/admin/activities", get(admin_activities_handler))
        .route("/admin/attendance", get(admin_attendance_handler))
        .layer(Extension(app_state.di_container.admin_overview.clone()))
}
