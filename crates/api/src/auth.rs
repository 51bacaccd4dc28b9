// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication and authorization types and services.

use job_board_domain::UserType;
use tracing::debug;

use crate::error::AuthError;
use crate::token::{SessionClaims, TokenService};

/// The authenticated caller of a request.
///
/// Decoded from a verified session token. The role is the user type; there
/// is no role hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// The user id.
    pub id: i64,
    /// The user's email address, used as the audit actor.
    pub email: String,
    /// The role used for authorization.
    pub role: UserType,
    /// Display name.
    pub names: String,
    /// Profile picture URL.
    pub profile_picture_url: String,
}

impl From<SessionClaims> for Identity {
    fn from(claims: SessionClaims) -> Self {
        Self {
            id: claims.id,
            email: claims.email,
            role: claims.user_type,
            names: claims.names,
            profile_picture_url: claims.profile_picture_url,
        }
    }
}

/// Authentication service for bearer credentials.
pub struct AuthenticationService;

impl AuthenticationService {
    /// Authenticates the value of an `Authorization` header.
    ///
    /// # Arguments
    ///
    /// * `tokens` - The token service holding the verification key
    /// * `header` - The raw header value, if the header was present
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Unauthenticated` if the header is absent, is not
    /// a `Bearer` credential, or the token fails verification.
    pub fn authenticate(
        tokens: &TokenService,
        header: Option<&str>,
    ) -> Result<Identity, AuthError> {
        let header: &str = header.ok_or_else(|| AuthError::Unauthenticated {
            reason: String::from("Access denied. No token provided."),
        })?;

        let token: &str = header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AuthError::Unauthenticated {
                reason: String::from("Invalid Authorization header format. Expected: 'Bearer <token>'"),
            })?;

        let claims: SessionClaims =
            tokens
                .verify_session(token)
                .map_err(|e| AuthError::Unauthenticated {
                    reason: format!("Invalid or expired token: {e}"),
                })?;

        debug!(user_id = claims.id, role = %claims.user_type, "Bearer token verified");
        Ok(Identity::from(claims))
    }
}

/// Authorization service for enforcing route allow-lists.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Checks a caller against an allow-list of roles.
    ///
    /// Every permitted role must be listed explicitly; `admin` does not
    /// imply any other role.
    ///
    /// # Arguments
    ///
    /// * `identity` - The authenticated caller, if any
    /// * `allowed` - The roles permitted to perform `action`
    /// * `action` - A label for the action, used in errors and logs
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Unauthenticated` when there is no caller and
    /// `AuthError::Forbidden` when the caller's role is not allowed.
    pub fn authorize<'a>(
        identity: Option<&'a Identity>,
        allowed: &[UserType],
        action: &str,
    ) -> Result<&'a Identity, AuthError> {
        let identity: &Identity = identity.ok_or_else(|| AuthError::Unauthenticated {
            reason: String::from("Access denied. No token provided."),
        })?;

        if allowed.contains(&identity.role) {
            return Ok(identity);
        }

        Err(AuthError::Forbidden {
            action: action.to_string(),
            allowed_roles: allowed
                .iter()
                .map(UserType::as_str)
                .collect::<Vec<_>>()
                .join(", "),
        })
    }
}
