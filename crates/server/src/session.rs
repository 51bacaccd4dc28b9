// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bearer authentication for the server.
//!
//! The `authenticate` middleware runs on every request. It never rejects
//! anything itself: it records the outcome as an [`Authentication`]
//! extension so that the authorization layers, the audit middleware, and
//! handlers all read the same decision.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderValue, header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use job_board_api::{ApiError, AuthError, AuthenticationService, Identity};
use tracing::{debug, warn};

use crate::error::HttpError;
use crate::state::AppState;

/// The authentication outcome of one request.
#[derive(Debug, Clone)]
pub struct Authentication(pub Result<Identity, AuthError>);

impl Authentication {
    /// The authenticated caller, if authentication succeeded.
    pub fn identity(&self) -> Option<&Identity> {
        self.0.as_ref().ok()
    }
}

/// Middleware that verifies the `Authorization` header, if any, and
/// attaches the outcome to the request.
pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let outcome: Result<Identity, AuthError> = match request
        .headers()
        .get(AUTHORIZATION)
        .map(HeaderValue::to_str)
        .transpose()
    {
        Ok(header) => AuthenticationService::authenticate(&state.tokens, header),
        Err(_) => {
            warn!("Invalid Authorization header encoding");
            Err(AuthError::Unauthenticated {
                reason: String::from("Invalid Authorization header encoding"),
            })
        }
    };

    match &outcome {
        Ok(identity) => debug!(user_id = identity.id, "Request authenticated"),
        Err(e) => debug!(error = %e, "Request not authenticated"),
    }

    request.extensions_mut().insert(Authentication(outcome));
    next.run(request).await
}

/// Extractor for the authenticated caller.
///
/// # Usage
///
/// ```ignore
/// async fn my_handler(SessionUser(identity): SessionUser) -> impl IntoResponse {
///     // identity: Identity
/// }
/// ```
///
/// # Errors
///
/// Rejects with HTTP 401 when the request carried no valid bearer token.
pub struct SessionUser(pub Identity);

impl<S> FromRequestParts<S> for SessionUser
where
    S: Send + Sync,
{
    type Rejection = SessionError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match parts.extensions.get::<Authentication>() {
            Some(Authentication(Ok(identity))) => Ok(Self(identity.clone())),
            Some(Authentication(Err(e))) => Err(SessionError::Rejected(e.clone())),
            None => {
                warn!("Authentication middleware did not run for this route");
                Err(SessionError::NotAuthenticated)
            }
        }
    }
}

/// Session extraction errors.
#[derive(Debug)]
pub enum SessionError {
    /// Authentication did not run for the request.
    NotAuthenticated,
    /// Authentication ran and failed.
    Rejected(AuthError),
}

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        let err: AuthError = match self {
            Self::NotAuthenticated => AuthError::Unauthenticated {
                reason: String::from("Access denied. No token provided."),
            },
            Self::Rejected(e) => e,
        };
        HttpError::from(ApiError::from(err)).into_response()
    }
}
