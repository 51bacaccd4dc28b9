// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Request fields are optional at the type level so that a missing field
//! produces a field-specific validation message rather than a generic
//! deserialization failure.

use job_board_audit::decode_body;
use job_board_domain::{ApplicationStatus, JobStatus, JobType, UserStatus, UserType};
use job_board_persistence::{
    ApplicationData, AuditLogData, AuditLogSummary, JobData, JobWithApplications, UserData,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request to register an account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub names: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    #[serde(rename = "type")]
    pub user_type: Option<String>,
    pub registration_type: Option<String>,
    #[serde(rename = "profilePictureURL")]
    pub profile_picture_url: Option<String>,
}

/// Request to log in with email and password.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Request to log in through an identity provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLoginRequest {
    pub names: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    #[serde(rename = "profilePictureURL")]
    pub profile_picture_url: Option<String>,
}

/// Request to activate an account from an emailed token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivateAccountRequest {
    pub token: Option<String>,
}

/// Request a password reset link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: Option<String>,
}

/// Request to set a new password from an emailed token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub token: Option<String>,
    pub new_password: Option<String>,
}

/// A user as exposed to clients. The password hash and registration type
/// never leave the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub names: String,
    pub email: String,
    #[serde(rename = "type")]
    pub user_type: UserType,
    pub user_status: UserStatus,
    #[serde(rename = "profilePictureURL")]
    pub profile_picture_url: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<UserData> for UserResponse {
    fn from(user: UserData) -> Self {
        Self {
            id: user.id,
            names: user.names,
            email: user.email,
            user_type: user.user_type,
            user_status: user.user_status,
            profile_picture_url: user.profile_picture_url,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// A freshly issued session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Request to create or replace a job.
///
/// On creation a missing `status` means `open`; on update every field is
/// required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub deadline: Option<String>,
    #[serde(rename = "type")]
    pub job_type: Option<String>,
    pub status: Option<String>,
}

/// A job as exposed to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub company: String,
    pub location: String,
    pub deadline: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub status: JobStatus,
    pub posted_by: i64,
    pub created_at: String,
    pub updated_at: String,
}

impl From<JobData> for JobResponse {
    fn from(job: JobData) -> Self {
        Self {
            id: job.id,
            title: job.title,
            description: job.description,
            company: job.company,
            location: job.location,
            deadline: job.deadline,
            job_type: job.job_type,
            status: job.status,
            posted_by: job.posted_by,
            created_at: job.created_at,
            updated_at: job.updated_at,
        }
    }
}

/// A job together with every application it has received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobWithApplicationsResponse {
    #[serde(flatten)]
    pub job: JobResponse,
    pub applications: Vec<ApplicationResponse>,
}

impl From<JobWithApplications> for JobWithApplicationsResponse {
    fn from(value: JobWithApplications) -> Self {
        Self {
            job: JobResponse::from(value.job),
            applications: value
                .applications
                .into_iter()
                .map(ApplicationResponse::from)
                .collect(),
        }
    }
}

/// Request to submit an application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateApplicationRequest {
    pub job_id: Option<i64>,
    pub names: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    #[serde(rename = "linkedInProfile")]
    pub linked_in_profile: Option<String>,
    pub cover_letter: Option<String>,
    #[serde(rename = "resumeURL")]
    pub resume_url: Option<String>,
}

/// Request to change an application. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateApplicationRequest {
    pub names: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    #[serde(rename = "linkedInProfile")]
    pub linked_in_profile: Option<String>,
    pub cover_letter: Option<String>,
    #[serde(rename = "resumeURL")]
    pub resume_url: Option<String>,
    pub status: Option<String>,
}

/// An application as exposed to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationResponse {
    pub id: i64,
    pub job_id: i64,
    pub names: String,
    pub email: String,
    pub phone_number: Option<String>,
    #[serde(rename = "linkedInProfile")]
    pub linked_in_profile: Option<String>,
    pub cover_letter: String,
    #[serde(rename = "resumeURL")]
    pub resume_url: String,
    pub status: ApplicationStatus,
    pub applied_at: String,
    pub updated_at: String,
}

impl From<ApplicationData> for ApplicationResponse {
    fn from(application: ApplicationData) -> Self {
        Self {
            id: application.id,
            job_id: application.job_id,
            names: application.names,
            email: application.email,
            phone_number: application.phone_number,
            linked_in_profile: application.linked_in_profile,
            cover_letter: application.cover_letter,
            resume_url: application.resume_url,
            status: application.status,
            applied_at: application.applied_at,
            updated_at: application.updated_at,
        }
    }
}

/// The public URL of a stored upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub url: String,
}

/// Query parameters of the audit listing. Every value arrives as text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub search: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub activity: Option<String>,
    pub status: Option<String>,
    pub method: Option<String>,
    pub status_code: Option<String>,
    pub done_by: Option<String>,
    pub ip_address: Option<String>,
}

/// Query parameters of the paginated listings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// One row of the audit listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogSummaryResponse {
    pub id: i64,
    pub timestamp: String,
    pub done_by: String,
    pub status: String,
    pub ip_address: String,
    pub activity: String,
    pub details: String,
}

impl From<AuditLogSummary> for AuditLogSummaryResponse {
    fn from(summary: AuditLogSummary) -> Self {
        Self {
            id: summary.id,
            timestamp: summary.timestamp,
            done_by: summary.done_by,
            status: summary.status,
            ip_address: summary.ip_address,
            activity: summary.activity,
            details: summary.details,
        }
    }
}

/// A full audit record with its bodies decoded.
///
/// A body that does not decode to JSON is `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogResponse {
    pub id: i64,
    pub timestamp: String,
    pub method: String,
    pub url: String,
    pub status_code: i32,
    pub user_agent: String,
    pub duration: String,
    pub done_by: String,
    pub ip_address: String,
    pub activity: String,
    pub details: String,
    pub status: String,
    pub request_body: Value,
    pub response_body: Value,
    pub created_at: String,
    pub updated_at: String,
}

impl From<AuditLogData> for AuditLogResponse {
    fn from(log: AuditLogData) -> Self {
        Self {
            request_body: decode_body(&log.request_body).unwrap_or(Value::Null),
            response_body: decode_body(&log.response_body).unwrap_or(Value::Null),
            id: log.id,
            timestamp: log.timestamp,
            method: log.method,
            url: log.url,
            status_code: log.status_code,
            user_agent: log.user_agent,
            duration: log.duration,
            done_by: log.done_by,
            ip_address: log.ip_address,
            activity: log.activity,
            details: log.details,
            status: log.status,
            created_at: log.created_at,
            updated_at: log.updated_at,
        }
    }
}
