use axum::{Json, response::IntoResponse, routing::get};
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Landing page payload")),
    tag = "Pages"
)]
pub async fn landing_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": "Smart Curriculum",
        "tagline": "Activity & attendance management for modern education",
        "sign_in": "/auth/login",
        "sign_up": "/auth/signup"
    }))
}

#[utoipa::path(
    get,
    path = "/api/healthchecker",
    responses((status = 200, description = "Service is up")),
    tag = "Pages"
)]
pub async fn health_checker_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "success",
        "message": "Smart Curriculum backend is running"
    }))
}

#[utoipa::path(
    get,
    path = "/maintenance",
    responses((status = 200, description = "Maintenance page payload")),
    tag = "Pages"
)]
pub async fn maintenance_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "page": "maintenance",
        "message": "Scheduled maintenance is in progress. Please check back shortly."
    }))
}

#[utoipa::path(
    get,
    path = "/unauthorized",
    responses((status = 200, description = "Unauthorized page payload")),
    tag = "Pages"
)]
pub async fn unauthorized_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "page": "unauthorized",
        "message": "You do not have access to that page."
    }))
}

pub fn pages_routes() -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/", get(landing_handler))
        .route("/api/healthchecker", get(health_checker_handler))
        .route("/maintenance", get(maintenance_handler))
        .route("/unauthorized", get(unauthorized_handler))
}
