// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use job_board_domain::{
    ApplicationStatus, JobStatus, JobType, RegistrationType, UserStatus, UserType,
};

/// A stored user account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserData {
    pub id: i64,
    pub names: String,
    pub email: String,
    /// `None` for accounts created through an identity provider.
    pub password_hash: Option<String>,
    pub user_type: UserType,
    pub registration_type: RegistrationType,
    pub user_status: UserStatus,
    pub profile_picture_url: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Values for a user insert.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub names: String,
    pub email: String,
    pub password_hash: Option<String>,
    pub user_type: UserType,
    pub registration_type: RegistrationType,
    pub user_status: UserStatus,
    pub profile_picture_url: String,
}

/// A stored job posting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobData {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub company: String,
    pub location: String,
    pub deadline: String,
    pub job_type: JobType,
    pub status: JobStatus,
    pub posted_by: i64,
    pub created_at: String,
    pub updated_at: String,
}

/// Values for a job insert.
///
/// `deadline` must already be in the canonical timestamp layout.
#[derive(Debug, Clone)]
pub struct NewJob {
    pub title: String,
    pub description: String,
    pub company: String,
    pub location: String,
    pub deadline: String,
    pub job_type: JobType,
    pub status: JobStatus,
    pub posted_by: i64,
}

/// Replacement values for a job update.
#[derive(Debug, Clone)]
pub struct JobUpdate {
    pub title: String,
    pub description: String,
    pub company: String,
    pub location: String,
    pub deadline: String,
    pub job_type: JobType,
    pub status: JobStatus,
}

/// A job together with every application submitted for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobWithApplications {
    pub job: JobData,
    pub applications: Vec<ApplicationData>,
}

/// A stored application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationData {
    pub id: i64,
    pub job_id: i64,
    pub names: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub linked_in_profile: Option<String>,
    pub cover_letter: String,
    pub resume_url: String,
    pub status: ApplicationStatus,
    pub applied_at: String,
    pub updated_at: String,
}

/// Values for an application insert. New applications are always pending.
#[derive(Debug, Clone)]
pub struct NewApplication {
    pub job_id: i64,
    pub names: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub linked_in_profile: Option<String>,
    pub cover_letter: String,
    pub resume_url: String,
}

/// A partial application update; `None` leaves the column unchanged.
#[derive(Debug, Clone, Default)]
pub struct ApplicationUpdate {
    pub names: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub linked_in_profile: Option<String>,
    pub cover_letter: Option<String>,
    pub resume_url: Option<String>,
    pub status: Option<ApplicationStatus>,
}

/// A stored audit row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditLogData {
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
    pub response_body: String,
    pub request_body: String,
    pub created_at: String,
    pub updated_at: String,
}

/// The listing projection of an audit row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditLogSummary {
    pub id: i64,
    pub timestamp: String,
    pub done_by: String,
    pub status: String,
    pub ip_address: String,
    pub activity: String,
    pub details: String,
}

/// Filters for listing audit rows. Unset filters match everything.
///
/// The date range applies only when both ends are present; both must be
/// in the canonical timestamp layout.
#[derive(Debug, Clone, Default)]
pub struct AuditLogFilter {
    /// Substring matched against `done_by` or `details`.
    pub search: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub activity: Option<String>,
    pub status: Option<String>,
    pub method: Option<String>,
    pub status_code: Option<i32>,
    pub done_by: Option<String>,
    pub ip_address: Option<String>,
    /// An actor whose rows are hidden from the listing.
    pub exclude_done_by: Option<String>,
}
