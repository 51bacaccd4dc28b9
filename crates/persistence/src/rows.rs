// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Diesel row structs and their mapping to the public data models.
//!
//! Enumerated columns are stored as their string form and parsed back on
//! read; a stored value outside the vocabulary surfaces as
//! `PersistenceError::InvalidStoredValue`.

use diesel::prelude::*;

use crate::data_models::{
    ApplicationData, AuditLogData, AuditLogSummary, JobData, UserData,
};
use crate::diesel_schema::{applications, audit_logs, jobs, users};
use crate::error::PersistenceError;

#[derive(Queryable, Selectable)]
#[diesel(table_name = users)]
pub struct UserRow {
    id: i64,
    names: String,
    email: String,
    password_hash: Option<String>,
    user_type: String,
    registration_type: String,
    user_status: String,
    profile_picture_url: String,
    created_at: String,
    updated_at: String,
}

impl TryFrom<UserRow> for UserData {
    type Error = PersistenceError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            names: row.names,
            email: row.email,
            password_hash: row.password_hash,
            user_type: row.user_type.parse()?,
            registration_type: row.registration_type.parse()?,
            user_status: row.user_status.parse()?,
            profile_picture_url: row.profile_picture_url,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = jobs)]
pub struct JobRow {
    id: i64,
    title: String,
    description: String,
    company: String,
    location: String,
    deadline: String,
    job_type: String,
    status: String,
    posted_by: i64,
    created_at: String,
    updated_at: String,
}

impl TryFrom<JobRow> for JobData {
    type Error = PersistenceError;

    fn try_from(row: JobRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            title: row.title,
            description: row.description,
            company: row.company,
            location: row.location,
            deadline: row.deadline,
            job_type: row.job_type.parse()?,
            status: row.status.parse()?,
            posted_by: row.posted_by,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = applications)]
pub struct ApplicationRow {
    id: i64,
    job_id: i64,
    names: String,
    email: String,
    phone_number: Option<String>,
    linked_in_profile: Option<String>,
    cover_letter: String,
    resume_url: String,
    status: String,
    applied_at: String,
    updated_at: String,
}

impl TryFrom<ApplicationRow> for ApplicationData {
    type Error = PersistenceError;

    fn try_from(row: ApplicationRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            job_id: row.job_id,
            names: row.names,
            email: row.email,
            phone_number: row.phone_number,
            linked_in_profile: row.linked_in_profile,
            cover_letter: row.cover_letter,
            resume_url: row.resume_url,
            status: row.status.parse()?,
            applied_at: row.applied_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = audit_logs)]
pub struct AuditLogRow {
    id: i64,
    timestamp: String,
    method: String,
    url: String,
    status_code: i32,
    user_agent: String,
    duration: String,
    done_by: String,
    ip_address: String,
    activity: String,
    details: String,
    status: String,
    response_body: String,
    request_body: String,
    created_at: String,
    updated_at: String,
}

impl From<AuditLogRow> for AuditLogData {
    fn from(row: AuditLogRow) -> Self {
        Self {
            id: row.id,
            timestamp: row.timestamp,
            method: row.method,
            url: row.url,
            status_code: row.status_code,
            user_agent: row.user_agent,
            duration: row.duration,
            done_by: row.done_by,
            ip_address: row.ip_address,
            activity: row.activity,
            details: row.details,
            status: row.status,
            response_body: row.response_body,
            request_body: row.request_body,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = audit_logs)]
pub struct AuditLogSummaryRow {
    id: i64,
    timestamp: String,
    done_by: String,
    status: String,
    ip_address: String,
    activity: String,
    details: String,
}

impl From<AuditLogSummaryRow> for AuditLogSummary {
    fn from(row: AuditLogSummaryRow) -> Self {
        Self {
            id: row.id,
            timestamp: row.timestamp,
            done_by: row.done_by,
            status: row.status,
            ip_address: row.ip_address,
            activity: row.activity,
            details: row.details,
        }
    }
}

/// Maps a batch of rows, failing on the first row that cannot be mapped.
pub fn map_rows<R, T>(rows: Vec<R>) -> Result<Vec<T>, PersistenceError>
where
    T: TryFrom<R, Error = PersistenceError>,
{
    rows.into_iter().map(T::try_from).collect()
}
