// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use job_board_domain::DomainError;
use job_board_persistence::PersistenceError;
use tracing::error;

use crate::password_policy::PasswordPolicyError;
use crate::token::TokenError;

/// Authentication and authorization errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No usable credential was presented, or it failed verification.
    Unauthenticated {
        /// The reason authentication failed.
        reason: String,
    },
    /// The caller's role is not on the route's allow-list.
    Forbidden {
        /// The action that was attempted.
        action: String,
        /// The roles permitted to perform it.
        allowed_roles: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthenticated { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Forbidden {
                action,
                allowed_roles,
            } => {
                write!(f, "Forbidden: '{action}' requires one of [{allowed_roles}]")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// These are distinct from domain and persistence errors and represent the
/// API contract. Each variant corresponds to one HTTP status class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Malformed input.
    Validation {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// The caller is not authenticated.
    Unauthenticated {
        /// The reason authentication failed.
        reason: String,
    },
    /// The caller may not perform the action.
    Forbidden {
        /// A human-readable description of the refusal.
        message: String,
    },
    /// A requested resource was not found.
    NotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The request conflicts with existing state.
    Conflict {
        /// A human-readable description of the conflict.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error. Never shown to clients.
        message: String,
    },
}

impl ApiError {
    /// Builds a `NotFound` error for a resource type.
    #[must_use]
    pub fn not_found(resource_type: &str) -> Self {
        Self::NotFound {
            resource_type: resource_type.to_string(),
            message: format!("{resource_type} not found"),
        }
    }

    /// Builds a `Validation` error.
    #[must_use]
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// The message that may be shown to a client.
    ///
    /// Internal errors are replaced with a generic message.
    #[must_use]
    pub fn client_message(&self) -> String {
        match self {
            Self::Validation { message, .. }
            | Self::Forbidden { message }
            | Self::NotFound { message, .. }
            | Self::Conflict { message } => message.clone(),
            Self::Unauthenticated { reason } => reason.clone(),
            Self::Internal { .. } => String::from("Internal server error"),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::Unauthenticated { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Forbidden { message } => write!(f, "Forbidden: {message}"),
            Self::NotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Conflict { message } => write!(f, "Conflict: {message}"),
            Self::Internal { message } => write!(f, "Internal error: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Unauthenticated { reason } => Self::Unauthenticated { reason },
            AuthError::Forbidden { action, .. } => Self::Forbidden {
                message: format!("You do not have permission to {action}"),
            },
        }
    }
}

impl From<PasswordPolicyError> for ApiError {
    fn from(err: PasswordPolicyError) -> Self {
        match err {
            PasswordPolicyError::Hashing(_) => Self::Internal {
                message: err.to_string(),
            },
            PasswordPolicyError::Missing | PasswordPolicyError::TooShort { .. } => {
                Self::validation("password", err.to_string())
            }
        }
    }
}

impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Encode(_) => Self::Internal {
                message: err.to_string(),
            },
            TokenError::Invalid(_) => Self::Unauthenticated {
                reason: String::from("Invalid token"),
            },
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidField { field, message } => ApiError::validation(field, message),
        DomainError::InvalidUserType(_) => ApiError::validation("type", err.to_string()),
        DomainError::InvalidRegistrationType(_) => {
            ApiError::validation("registrationType", err.to_string())
        }
        DomainError::InvalidUserStatus(_) => ApiError::validation("userStatus", err.to_string()),
        DomainError::InvalidJobStatus(_) | DomainError::InvalidApplicationStatus(_) => {
            ApiError::validation("status", err.to_string())
        }
        DomainError::InvalidJobType(_) => ApiError::validation("type", err.to_string()),
        DomainError::DateParseError { .. } => ApiError::validation("date", err.to_string()),
    }
}

/// Translates a persistence error into an API error.
///
/// Storage-level failures are logged here and surface as `Internal`; only
/// the errors with a business meaning keep their identity.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::NotFound(message) => ApiError::NotFound {
            resource_type: String::from("Resource"),
            message,
        },
        PersistenceError::UniqueViolation(message) => ApiError::Conflict { message },
        PersistenceError::JobReferenced { .. } => ApiError::Forbidden {
            message: String::from("Job has applications and cannot be deleted"),
        },
        other => {
            error!(error = %other, "Persistence failure");
            ApiError::Internal {
                message: other.to_string(),
            }
        }
    }
}
