use crate::{middleware::AuthContext, state::AppState};
use axum::{Extension, Json, response::IntoResponse, routing::get};
use shared::{
    abstract_trait::DynStudentOverviewService,
    domain::responses::{ApiResponse, ProfileResponse, StudentOverviewResponse},
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/student",
    responses(
        (status = 200, description = "Student dashboard payload", body = ApiResponse<StudentOverviewResponse>),
        (status = 404, description = "Profile not found")
    ),
    tag = "Student"
)]
pub async fn student_overview_handler(
    Extension(auth): Extension<AuthContext>,
    Extension(service): Extension<DynStudentOverviewService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.overview(auth.user_id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/student/profile",
    responses(
        (status = 200, description = "Student profile", body = ApiResponse<ProfileResponse>),
        (status = 404, description = "Profile not found")
    ),
    tag = "Student"
)]
pub async fn student_profile_handler(
    Extension(auth): Extension<AuthContext>,
    Extension(service): Extension<DynStudentOverviewService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.profile(auth.user_id).await?;
    Ok(Json(response))
}

pub fn student_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/student", get(student_overview_handler))
        .route("/student/profile", get(student_profile_handler))
        .layer(Extension(app_state.di_container.student_overview.clone()))
}
