// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-route role allow-lists.
//!
//! Allow-lists are attached with `route_layer`, so they run after
//! authentication and only for routes that matched.

use axum::{
    extract::{Request, State},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::MethodRouter,
};
use job_board_api::{ApiError, AuthError, AuthorizationService};
use job_board_domain::UserType;
use tracing::{debug, warn};

use crate::error::HttpError;
use crate::session::Authentication;
use crate::state::AppState;

/// Administrators only.
pub const ADMIN: &[UserType] = &[UserType::Admin];

/// Any signed-in account. Both roles are listed; there is no hierarchy.
pub const ADMIN_OR_JOB_SEEKER: &[UserType] = &[UserType::Admin, UserType::JobSeeker];

/// The roles permitted on one route and a label for the action.
#[derive(Debug, Clone, Copy)]
pub struct AllowList {
    pub roles: &'static [UserType],
    pub action: &'static str,
}

/// Middleware enforcing an [`AllowList`].
///
/// A request whose authentication failed is refused with that failure
/// (401). An authenticated caller outside the list gets a 403.
pub async fn require_roles(
    State(allow): State<AllowList>,
    request: Request,
    next: Next,
) -> Response {
    let decision: Result<(), AuthError> = match request.extensions().get::<Authentication>() {
        Some(Authentication(Err(e))) => Err(e.clone()),
        authentication => AuthorizationService::authorize(
            authentication.and_then(Authentication::identity),
            allow.roles,
            allow.action,
        )
        .map(|identity| {
            debug!(user_id = identity.id, action = allow.action, "Request authorized");
        }),
    };

    match decision {
        Ok(()) => next.run(request).await,
        Err(e) => {
            warn!(action = allow.action, error = %e, "Request refused");
            HttpError::from(ApiError::from(e)).into_response()
        }
    }
}

/// Wraps a route so only `roles` may call it.
pub fn guarded(
    route: MethodRouter<AppState>,
    roles: &'static [UserType],
    action: &'static str,
) -> MethodRouter<AppState> {
    route.route_layer(middleware::from_fn_with_state(
        AllowList { roles, action },
        require_roles,
    ))
}
