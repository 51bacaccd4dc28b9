// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

//! API boundary for the job board.
//!
//! This crate sits between HTTP and persistence. It owns the error
//! contract, bearer-token authentication, role allow-lists, request
//! validation, password hashing, notifications, and the business rules of
//! every route.

mod auth;
mod error;
pub mod handlers;
mod notifier;
mod password_policy;
mod request_response;
mod token;
mod validation;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticationService, AuthorizationService, Identity};
pub use error::{ApiError, AuthError, translate_domain_error, translate_persistence_error};
pub use handlers::applications::{
    create_application, delete_application, find_application_by_job_and_email, get_application,
    list_applications, list_applications_for_job, stored_file_name, update_application,
    upload_url,
};
pub use handlers::audits::{build_audit_filter, get_audit_log, list_audit_logs, record_audit_log};
pub use handlers::auth::{
    DEFAULT_PROFILE_PICTURE_URL, activate_account, find_user_by_email, find_user_by_id,
    forgot_password, login, me, register, reset_password, seed_first_admin, social_login,
};
pub use handlers::jobs::{
    close_expired_jobs, create_job, delete_job, find_duplicate_job, get_job, list_jobs,
    list_jobs_with_applications, update_job,
};
pub use notifier::{
    EMAIL_TEMPLATE, LoggingNotifier, Notification, NotificationContext, NotificationDispatcher,
    NotificationError, Notifier, run_notification_worker,
};
pub use password_policy::{
    GENERATED_PASSWORD_LENGTH, PasswordPolicy, PasswordPolicyError, generate_password,
    hash_password, verify_password,
};
pub use request_response::{
    ActivateAccountRequest, ApplicationResponse, AuditLogQuery, AuditLogResponse,
    AuditLogSummaryResponse, CreateApplicationRequest, ForgotPasswordRequest, JobRequest,
    JobResponse, JobWithApplicationsResponse, LoginRequest, LoginResponse, PageQuery,
    RegisterRequest, ResetPasswordRequest, SocialLoginRequest, UpdateApplicationRequest,
    UploadResponse, UserResponse,
};
pub use token::{EmailClaims, SessionClaims, TokenError, TokenService};
pub use validation::{ValidJob, ValidRegistration, ValidSocialLogin};
