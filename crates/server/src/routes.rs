// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Router assembly.
//!
//! Layers run outermost first: tracing, CORS, security headers,
//! authentication, audit, and then the matched route with its allow-list.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderName, HeaderValue},
    middleware,
    routing::{delete, get, post, put},
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use crate::audit_log::record_audit;
use crate::authorization::{ADMIN, ADMIN_OR_JOB_SEEKER, guarded};
use crate::handlers::{
    applications::{
        handle_create_application, handle_delete_application, handle_get_application,
        handle_list_applications, handle_update_application, handle_upload,
    },
    audits::{handle_get_audit_log, handle_list_audit_logs},
    auth::{
        handle_activate, handle_forgot_password, handle_get_user, handle_login, handle_me,
        handle_register, handle_reset_password, handle_social_login,
    },
    handle_not_found,
    jobs::{
        handle_create_job, handle_delete_job, handle_get_job, handle_list_jobs,
        handle_list_jobs_with_applications, handle_update_job,
    },
};
use crate::session::authenticate;
use crate::state::AppState;

fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(handle_register))
        .route("/login", post(handle_login))
        .route("/social-login", post(handle_social_login))
        .route("/activate", post(handle_activate))
        .route("/forgot-password", post(handle_forgot_password))
        .route("/reset-password", post(handle_reset_password))
        .route(
            "/me",
            guarded(get(handle_me), ADMIN_OR_JOB_SEEKER, "view your profile"),
        )
        .route(
            "/user/{id}",
            guarded(get(handle_get_user), ADMIN, "view users"),
        )
}

fn job_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/create",
            guarded(post(handle_create_job), ADMIN, "create jobs"),
        )
        .route(
            "/detail/{id}",
            guarded(get(handle_get_job), ADMIN, "view jobs"),
        )
        .route(
            "/update/{id}",
            guarded(put(handle_update_job), ADMIN, "update jobs"),
        )
        .route(
            "/delete/{id}",
            guarded(delete(handle_delete_job), ADMIN, "delete jobs"),
        )
        .route("/list", guarded(get(handle_list_jobs), ADMIN, "view jobs"))
        .route(
            "/list-with-applications",
            guarded(
                get(handle_list_jobs_with_applications),
                ADMIN,
                "view jobs with applications",
            ),
        )
}

fn application_routes() -> Router<AppState> {
    Router::new()
        .route("/create", post(handle_create_application))
        .route("/upload", post(handle_upload))
        .route(
            "/detail/{id}",
            guarded(
                get(handle_get_application),
                ADMIN_OR_JOB_SEEKER,
                "view applications",
            ),
        )
        .route(
            "/list",
            guarded(
                get(handle_list_applications),
                ADMIN_OR_JOB_SEEKER,
                "view applications",
            ),
        )
        .route(
            "/update/{id}",
            guarded(put(handle_update_application), ADMIN, "update applications"),
        )
        .route(
            "/delete/{id}",
            guarded(
                delete(handle_delete_application),
                ADMIN,
                "delete applications",
            ),
        )
}

fn audit_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/list",
            guarded(get(handle_list_audit_logs), ADMIN, "view audit logs"),
        )
        .route(
            "/detail/{id}",
            guarded(get(handle_get_audit_log), ADMIN, "view audit logs"),
        )
}

/// Hardening headers added to every response that does not set them.
const SECURITY_HEADERS: [(&str, &str); 6] = [
    ("x-content-type-options", "nosniff"),
    ("x-frame-options", "SAMEORIGIN"),
    ("x-dns-prefetch-control", "off"),
    ("referrer-policy", "no-referrer"),
    (
        "strict-transport-security",
        "max-age=15552000; includeSubDomains",
    ),
    ("cross-origin-opener-policy", "same-origin"),
];

fn with_security_headers(router: Router<AppState>) -> Router<AppState> {
    SECURITY_HEADERS
        .into_iter()
        .fold(router, |router, (name, value)| {
            router.layer(SetResponseHeaderLayer::if_not_present(
                HeaderName::from_static(name),
                HeaderValue::from_static(value),
            ))
        })
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Builds the application router with all endpoints.
pub fn build_router(state: AppState) -> Router {
    let api: Router<AppState> = Router::new()
        .nest("/auth", auth_routes())
        .nest("/job", job_routes())
        .nest("/application", application_routes())
        .nest("/audits", audit_routes());

    let router: Router<AppState> = Router::new()
        .nest("/api/v1", api)
        .nest_service("/uploads", ServeDir::new(state.uploads.root()))
        .fallback(handle_not_found)
        .layer(DefaultBodyLimit::max(state.settings.max_body_bytes))
        .layer(middleware::from_fn_with_state(state.clone(), record_audit))
        .layer(middleware::from_fn_with_state(state.clone(), authenticate));

    with_security_headers(router)
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
