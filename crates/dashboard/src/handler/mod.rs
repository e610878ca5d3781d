mod admin;
mod auth;
mod pages;
mod student;

use crate::{middleware::access_gate, state::AppState};
use anyhow::{Context, Result};
use axum::{Extension, extract::DefaultBodyLimit, middleware};
use shared::utils::shutdown_signal;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::info;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::admin::admin_routes;
pub use self::auth::auth_routes;
pub use self::pages::pages_routes;
pub use self::student::student_routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        pages::landing_handler,
        pages::health_checker_handler,
        pages::maintenance_handler,
        pages::unauthorized_handler,

        auth::login_page_handler,
        auth::login_user_handler,
        auth::signup_page_handler,
        auth::register_user_handler,
        auth::auth_success_handler,
        auth::auth_error_handler,
        auth::refresh_token_handler,
        auth::logout_user_handler,
        auth::get_me_handler,

        admin::admin_overview_handler,
        admin::admin_courses_handler,
        admin::admin_students_handler,
        admin::admin_activities_handler,
        admin::admin_attendance_handler,

        student::student_overview_handler,
        student::student_profile_handler,
    ),
    tags(
        (name = "Pages", description = "Public and shared pages"),
        (name = "Auth", description = "Authentication endpoints"),
        (name = "Admin", description = "Admin dashboard endpoints"),
        (name = "Student", description = "Student dashboard endpoints"),
    )
)]
struct ApiDoc;

pub struct AppRouter;

impl AppRouter {
    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .merge(pages_routes())
            .merge(auth_routes(shared_state.clone()))
            .merge(admin_routes(shared_state.clone()))
            .merge(student_routes(shared_state.clone()));

        // The access gate wraps every route; the extensions it reads are
        // layered outside it, and tracing outermost.
        let router_with_layers = api_router
            .layer(middleware::from_fn(access_gate))
            .layer(Extension(shared_state.jwt_config.clone()))
            .layer(Extension(shared_state.session.clone()))
            .layer(Extension(shared_state.di_container.profile_query.clone()))
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(2 * 1024 * 1024))
            .layer(TraceLayer::new_for_http());

        let (app_router, api) = router_with_layers.split_for_parts();

        let app = app_router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api.clone()));

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr)
            .await
            .context("Failed to bind server port")?;

        info!("🚀 Server running on http://{}", listener.local_addr()?);
        info!("📖 Swagger UI: http://localhost:{port}/swagger-ui");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("Server error")?;

        Ok(())
    }
}
