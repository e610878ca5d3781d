//! Per-request access control: every route is gated by session state and
//! role before its handler runs.
//!
//! The decision itself is a pure function over `(path, visitor)`; the
//! middleware around it resolves the visitor from the request's credentials
//! and carries the session refresh onto whichever response leaves the gate.

use crate::{abstract_trait::session::DynSessionStore, domain::response::session::Session};
use axum::{
    Extension,
    body::Body,
    http::{Request, header},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::Duration;
use shared::{
    abstract_trait::{DynJwtService, DynProfileQueryRepository},
    model::Role,
};
use tracing::{debug, warn};
use uuid::Uuid;

/// Paths reachable without a session.
pub const PUBLIC_PATHS: &[&str] = &[
    "/",
    "/auth/login",
    "/auth/signup",
    "/auth/success",
    "/auth/error",
];

pub const LOGIN_PATH: &str = "/auth/login";
pub const SIGNUP_PATH: &str = "/auth/signup";

pub const SESSION_TTL_MINUTES: i64 = 30;

const TOKEN_COOKIE: &str = "token";

/// Who is knocking, as far as the gate is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visitor {
    Guest,
    Member { id: Uuid, role: Role },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    PassThrough,
    RedirectTo(&'static str),
}

/// Identity of the authenticated caller, inserted as a request extension on
/// pass-through so handlers skip the lookups the gate already did.
#[derive(Debug, Clone, Copy)]
pub struct AuthContext {
    pub user_id: Uuid,
    pub role: Role,
}

pub fn is_public(path: &str) -> bool {
    PUBLIC_PATHS.contains(&path)
}

/// Routing decision, first matching rule wins:
///
/// 1. guests on non-public paths go to the login page
/// 2. members on the login/signup pages go to their role's home
/// 3. members on the opposite role's section go to their own home
/// 4. everything else passes through
pub fn decide(path: &str, visitor: Visitor) -> GateOutcome {
    match visitor {
        Visitor::Guest if !is_public(path) => GateOutcome::RedirectTo(LOGIN_PATH),
        Visitor::Guest => GateOutcome::PassThrough,
        Visitor::Member { role, .. } if path == LOGIN_PATH || path == SIGNUP_PATH => {
            GateOutcome::RedirectTo(role.home_path())
        }
        Visitor::Member {
            role: Role::Admin, ..
        } if path.starts_with(Role::Student.home_path()) => {
            GateOutcome::RedirectTo(Role::Admin.home_path())
        }
        Visitor::Member {
            role: Role::Student,
            ..
        } if path.starts_with(Role::Admin.home_path()) => {
            GateOutcome::RedirectTo(Role::Student.home_path())
        }
        Visitor::Member { .. } => GateOutcome::PassThrough,
    }
}

pub async fn access_gate(
    cookie_jar: CookieJar,
    Extension(jwt): Extension<DynJwtService>,
    Extension(sessions): Extension<DynSessionStore>,
    Extension(profiles): Extension<DynProfileQueryRepository>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let token = extract_token(&cookie_jar, &req);
    let visitor = resolve_visitor(token.as_deref(), &jwt, &sessions, &profiles).await;

    // Re-issue the session cookie so the refresh rides along on every
    // outcome, redirects included.
    let jar = match (visitor, token) {
        (Visitor::Member { .. }, Some(token)) => cookie_jar.add(session_cookie(token)),
        _ => cookie_jar,
    };

    if let Visitor::Member { id, role } = visitor {
        req.extensions_mut().insert(AuthContext { user_id: id, role });
    }

    match decide(req.uri().path(), visitor) {
        GateOutcome::PassThrough => (jar, next.run(req).await).into_response(),
        GateOutcome::RedirectTo(target) => {
            debug!("Gate redirect {} -> {}", req.uri().path(), target);
            (jar, Redirect::temporary(target)).into_response()
        }
    }
}

/// Token from the `token` cookie, falling back to a bearer header.
fn extract_token(cookie_jar: &CookieJar, req: &Request<Body>) -> Option<String> {
    cookie_jar
        .get(TOKEN_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .or_else(|| {
            req.headers()
                .get(header::AUTHORIZATION)
                .and_then(|auth_header| auth_header.to_str().ok())
                .and_then(|auth_value| auth_value.strip_prefix("Bearer ").map(str::to_owned))
        })
}

/// Resolves the caller, failing closed at every step: a missing, invalid or
/// unverifiable token makes a `Guest`; an authenticated user whose role
/// cannot be resolved is routed as a `Student`.
async fn resolve_visitor(
    token: Option<&str>,
    jwt: &DynJwtService,
    sessions: &DynSessionStore,
    profiles: &DynProfileQueryRepository,
) -> Visitor {
    let Some(token) = token else {
        return Visitor::Guest;
    };

    let user_id = match jwt.verify_token(token, "access") {
        Ok(id) => id,
        Err(err) => {
            debug!("Rejected access token: {err}");
            return Visitor::Guest;
        }
    };

    let key = session_key(user_id);

    if let Some(session) = sessions.get_session(&key).await {
        sessions
            .refresh_session(&key, Duration::minutes(SESSION_TTL_MINUTES))
            .await;

        if let Some(role) = Role::parse(&session.role) {
            return Visitor::Member { id: user_id, role };
        }
    }

    let role = match profiles.find_role_by_id(user_id).await {
        Ok(Some(role)) => {
            let session = Session {
                user_id,
                email: String::new(),
                role: role.as_str().to_string(),
            };
            sessions
                .create_session(&key, &session, Duration::minutes(SESSION_TTL_MINUTES))
                .await;
            role
        }
        // The fallback is never cached, a transient lookup failure must not
        // pin an admin to the student side for a whole session TTL.
        Ok(None) => {
            warn!("No role on file for authenticated user {user_id}, routing as student");
            Role::Student
        }
        Err(err) => {
            warn!("Role lookup failed for {user_id}: {err}, routing as student");
            Role::Student
        }
    };

    Visitor::Member { id: user_id, role }
}

pub fn session_key(user_id: Uuid) -> String {
    format!("session:{user_id}")
}

pub fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// Removal counterpart of [`session_cookie`], used by logout.
pub fn expired_session_cookie() -> Cookie<'static> {
    Cookie::build(TOKEN_COOKIE).path("/").build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> Visitor {
        Visitor::Member {
            id: Uuid::new_v4(),
            role: Role::Admin,
        }
    }

    fn student() -> Visitor {
        Visitor::Member {
            id: Uuid::new_v4(),
            role: Role::Student,
        }
    }

    #[test]
    fn guest_on_protected_paths_is_sent_to_login() {
        for path in ["/admin", "/admin/courses", "/student", "/student/profile", "/maintenance"] {
            assert_eq!(
                decide(path, Visitor::Guest),
                GateOutcome::RedirectTo("/auth/login"),
                "path: {path}"
            );
        }
    }

    #[test]
    fn guest_on_public_paths_passes() {
        for path in PUBLIC_PATHS {
            assert_eq!(decide(path, Visitor::Guest), GateOutcome::PassThrough);
        }
    }

    #[test]
    fn member_on_auth_pages_is_sent_home() {
        assert_eq!(
            decide("/auth/login", admin()),
            GateOutcome::RedirectTo("/admin")
        );
        assert_eq!(
            decide("/auth/signup", student()),
            GateOutcome::RedirectTo("/student")
        );
    }

    #[test]
    fn admin_is_kept_out_of_the_student_section() {
        assert_eq!(
            decide("/student/profile", admin()),
            GateOutcome::RedirectTo("/admin")
        );
        assert_eq!(decide("/student", admin()), GateOutcome::RedirectTo("/admin"));
    }

    #[test]
    fn student_is_kept_out_of_the_admin_section() {
        assert_eq!(
            decide("/admin/courses", student()),
            GateOutcome::RedirectTo("/student")
        );
        assert_eq!(decide("/admin", student()), GateOutcome::RedirectTo("/student"));
    }

    #[test]
    fn members_pass_through_their_own_section() {
        assert_eq!(decide("/admin/courses", admin()), GateOutcome::PassThrough);
        assert_eq!(decide("/student/profile", student()), GateOutcome::PassThrough);
    }

    #[test]
    fn members_pass_through_role_free_paths() {
        for path in ["/maintenance", "/unauthorized", "/auth/success", "/api/healthchecker"] {
            assert_eq!(decide(path, admin()), GateOutcome::PassThrough, "path: {path}");
            assert_eq!(decide(path, student()), GateOutcome::PassThrough, "path: {path}");
        }
    }

    #[test]
    fn role_homes_are_not_public() {
        assert!(!is_public("/admin"));
        assert!(!is_public("/student"));
    }

    #[test]
    fn redirects_never_loop() {
        let paths = [
            "/",
            "/auth/login",
            "/auth/signup",
            "/auth/success",
            "/auth/error",
            "/admin",
            "/admin/courses",
            "/student",
            "/student/profile",
            "/maintenance",
            "/unknown",
        ];

        for visitor in [Visitor::Guest, admin(), student()] {
            for path in paths {
                if let GateOutcome::RedirectTo(target) = decide(path, visitor) {
                    assert_eq!(
                        decide(target, visitor),
                        GateOutcome::PassThrough,
                        "redirect {path} -> {target} loops for {visitor:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn session_key_is_per_user() {
        let id = Uuid::new_v4();
        assert_eq!(session_key(id), format!("session:{id}"));
    }

    #[test]
    fn session_cookie_is_scoped_to_the_site() {
        let cookie = session_cookie("abc".to_string());
        assert_eq!(cookie.name(), "token");
        assert_eq!(cookie.value(), "abc");
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.http_only(), Some(true));
    }
}
