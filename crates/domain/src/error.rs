// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// User type is not one of the known roles.
    InvalidUserType(String),
    /// Registration type is not `manual` or `oauth`.
    InvalidRegistrationType(String),
    /// User status is not a known lifecycle state.
    InvalidUserStatus(String),
    /// Job status is not `open` or `closed`.
    InvalidJobStatus(String),
    /// Job type is not a known employment type.
    InvalidJobType(String),
    /// Application status is not a known review state.
    InvalidApplicationStatus(String),
    /// A request field failed validation.
    InvalidField {
        /// The field that was invalid.
        field: &'static str,
        /// The human-readable validation message.
        message: String,
    },
    /// A date or timestamp could not be parsed.
    DateParseError {
        /// The input that failed to parse.
        date_string: String,
        /// The underlying parse error.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidUserType(value) => {
                write!(f, "User type must be either admin or job-seeker, got '{value}'")
            }
            Self::InvalidRegistrationType(value) => write!(
                f,
                "Registration type must be either manual or oauth, got '{value}'"
            ),
            Self::InvalidUserStatus(value) => write!(f, "Invalid user status: '{value}'"),
            Self::InvalidJobStatus(value) => {
                write!(f, "Job status must be one of: open, closed, got '{value}'")
            }
            Self::InvalidJobType(value) => write!(
                f,
                "Job type must be one of: full-time, part-time, contract, internship, freelance, got '{value}'"
            ),
            Self::InvalidApplicationStatus(value) => {
                write!(f, "Invalid application status: '{value}'")
            }
            Self::InvalidField { message, .. } => write!(f, "{message}"),
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
