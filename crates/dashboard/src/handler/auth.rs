use crate::{
    abstract_trait::session::DynSessionStore,
    domain::response::session::Session,
    middleware::{
        AuthContext, ValidatedJson,
        access_gate::{SESSION_TTL_MINUTES, expired_session_cookie, session_cookie, session_key},
    },
    state::AppState,
};
use axum::{
    Extension, Json,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use axum_extra::extract::cookie::CookieJar;
use chrono::Duration;
use shared::{
    abstract_trait::{DynIdentityService, DynLoginService, DynRegisterService},
    domain::{
        requests::{LoginRequest, RefreshTokenRequest, RegisterRequest},
        responses::{ApiResponse, LoginResponse, ProfileResponse, TokenResponse},
    },
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = ApiResponse<LoginResponse>),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "Auth"
)]
pub async fn login_user_handler(
    Extension(service): Extension<DynLoginService>,
    Extension(sessions): Extension<DynSessionStore>,
    cookie_jar: CookieJar,
    ValidatedJson(body): ValidatedJson<LoginRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.login(&body).await?;

    let profile = &response.data.profile;
    let session = Session {
        user_id: profile.id,
        email: profile.email.clone(),
        role: profile.role.clone(),
    };
    sessions
        .create_session(
            &session_key(profile.id),
            &session,
            Duration::minutes(SESSION_TTL_MINUTES),
        )
        .await;

    let jar = cookie_jar.add(session_cookie(response.data.tokens.access_token.clone()));

    Ok((jar, Json(response)))
}

#[utoipa::path(
    post,
    path = "/auth/signup",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Registration successful", body = ApiResponse<ProfileResponse>),
        (status = 409, description = "Email already registered")
    ),
    tag = "Auth"
)]
pub async fn register_user_handler(
    Extension(service): Extension<DynRegisterService>,
    ValidatedJson(body): ValidatedJson<RegisterRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.register(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    post,
    path = "/auth/refresh",
    request_body = RefreshTokenRequest,
    responses(
        (status = 200, description = "Token refreshed", body = ApiResponse<TokenResponse>),
        (status = 401, description = "Invalid refresh token")
    ),
    tag = "Auth"
)]
pub async fn refresh_token_handler(
    Extension(service): Extension<DynIdentityService>,
    cookie_jar: CookieJar,
    ValidatedJson(body): ValidatedJson<RefreshTokenRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.refresh_token(&body.refresh_token).await?;

    let jar = cookie_jar.add(session_cookie(response.data.access_token.clone()));

    Ok((jar, Json(response)))
}

#[utoipa::path(
    post,
    path = "/auth/logout",
    responses(
        (status = 200, description = "Logged out", body = ApiResponse<bool>)
    ),
    tag = "Auth"
)]
pub async fn logout_user_handler(
    Extension(auth): Extension<AuthContext>,
    Extension(sessions): Extension<DynSessionStore>,
    cookie_jar: CookieJar,
) -> Result<impl IntoResponse, HttpError> {
    sessions.delete_session(&session_key(auth.user_id)).await;

    let jar = cookie_jar.remove(expired_session_cookie());

    Ok((jar, Json(ApiResponse::success("Logged out", true))))
}

#[utoipa::path(
    get,
    path = "/auth/me",
    responses(
        (status = 200, description = "Current profile", body = ApiResponse<ProfileResponse>),
        (status = 404, description = "Profile not found")
    ),
    tag = "Auth"
)]
pub async fn get_me_handler(
    Extension(auth): Extension<AuthContext>,
    Extension(service): Extension<DynIdentityService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.get_me(auth.user_id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/auth/login",
    responses((status = 200, description = "Login page payload")),
    tag = "Auth"
)]
pub async fn login_page_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "page": "login",
        "message": "Sign in with email and password via POST /auth/login"
    }))
}

#[utoipa::path(
    get,
    path = "/auth/signup",
    responses((status = 200, description = "Signup page payload")),
    tag = "Auth"
)]
pub async fn signup_page_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "page": "signup",
        "message": "Create a student account via POST /auth/signup"
    }))
}

#[utoipa::path(
    get,
    path = "/auth/success",
    responses((status = 200, description = "Signup landing page payload")),
    tag = "Auth"
)]
pub async fn auth_success_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "page": "success",
        "message": "Account created. You can sign in now."
    }))
}

#[utoipa::path(
    get,
    path = "/auth/error",
    responses((status = 200, description = "Auth error page payload")),
    tag = "Auth"
)]
pub async fn auth_error_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "page": "error",
        "message": "Something went wrong during authentication. Please try again."
    }))
}

pub fn auth_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route(
            "/auth/login",
            get(login_page_handler).post(login_user_handler),
        )
        .route(
            "/auth/signup",
            get(signup_page_handler).post(register_user_handler),
        )
        .route("/auth/success", get(auth_success_handler))
        .route("/auth/error", get(auth_error_handler))
        .route("/auth/refresh", post(refresh_token_handler))
        .route("/auth/logout", post(logout_user_handler))
        .route("/auth/me", get(get_me_handler))
        .layer(Extension(app_state.di_container.login_service.clone()))
        .layer(Extension(app_state.di_container.register_service.clone()))
        .layer(Extension(app_state.di_container.identity_service.clone()))
        .layer(Extension(app_state.session.clone()))
}
