// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use job_board_domain::{JobStatus, Page, PageRequest, compact_timestamp, parse_timestamp};
use job_board_persistence::{ApplicationData, JobData, NewApplication, Persistence};
use time::OffsetDateTime;
use tracing::{info, warn};

use crate::error::{ApiError, translate_domain_error, translate_persistence_error};
use crate::notifier::NotificationDispatcher;
use crate::request_response::{
    ApplicationResponse, CreateApplicationRequest, UpdateApplicationRequest,
};
use crate::validation::{validate_application_update, validate_new_application};

fn application_not_found() -> ApiError {
    ApiError::not_found("Application")
}

fn load_application(
    persistence: &mut Persistence,
    application_id: i64,
) -> Result<ApplicationData, ApiError> {
    persistence
        .get_application_by_id(application_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(application_not_found)
}

/// Submits an application.
///
/// Checks run in order: the job must exist, the email must not have
/// applied to it already, and the job must still accept applications.
/// The duplicate check and the insert are separate statements.
///
/// # Errors
///
/// Returns `NotFound` for an unknown job, `Conflict` for a repeat
/// application, and `Validation` when the job is past its deadline or
/// closed.
pub fn create_application(
    persistence: &mut Persistence,
    notifications: &NotificationDispatcher,
    request: &CreateApplicationRequest,
    now: OffsetDateTime,
) -> Result<ApplicationResponse, ApiError> {
    let new_application: NewApplication = validate_new_application(request)?;

    let job: JobData = persistence
        .get_job_by_id(new_application.job_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| {
            warn!(job_id = new_application.job_id, "Application refused: job not found");
            ApiError::not_found("Job")
        })?;

    if find_application_by_job_and_email(persistence, job.id, &new_application.email)?.is_some() {
        warn!(job_id = job.id, "Application refused: duplicate application");
        return Err(ApiError::Conflict {
            message: String::from("You have already applied for this job"),
        });
    }

    let deadline: OffsetDateTime = parse_timestamp(&job.deadline).map_err(translate_domain_error)?;
    if now > deadline || job.status == JobStatus::Closed {
        warn!(job_id = job.id, "Application refused: job closed");
        return Err(ApiError::validation(
            "jobId",
            "Application for this job is closed",
        ));
    }

    let application: ApplicationData = persistence
        .create_application(&new_application)
        .map_err(translate_persistence_error)?;

    notifications.application_submitted(&application.email, &application.names, &job.title);
    info!(
        application_id = application.id,
        job_id = job.id,
        "Application submitted"
    );
    Ok(ApplicationResponse::from(application))
}

/// Finds the application an email address made for a job.
///
/// # Errors
///
/// Returns an error if persistence fails.
pub fn find_application_by_job_and_email(
    persistence: &mut Persistence,
    job_id: i64,
    email: &str,
) -> Result<Option<ApplicationResponse>, ApiError> {
    Ok(persistence
        .find_application_by_job_and_email(job_id, email)
        .map_err(translate_persistence_error)?
        .map(ApplicationResponse::from))
}

/// Lists applications, most recent first.
///
/// # Errors
///
/// Returns an error if persistence fails.
pub fn list_applications(
    persistence: &mut Persistence,
    page: PageRequest,
) -> Result<Page<ApplicationResponse>, ApiError> {
    Ok(persistence
        .list_applications(page)
        .map_err(translate_persistence_error)?
        .map(ApplicationResponse::from))
}

/// Lists every application for one job, most recent first.
///
/// # Errors
///
/// Returns an error if persistence fails.
pub fn list_applications_for_job(
    persistence: &mut Persistence,
    job_id: i64,
) -> Result<Vec<ApplicationResponse>, ApiError> {
    Ok(persistence
        .list_applications_for_job(job_id)
        .map_err(translate_persistence_error)?
        .into_iter()
        .map(ApplicationResponse::from)
        .collect())
}

/// Returns one application.
///
/// # Errors
///
/// Returns `NotFound` if the application does not exist.
pub fn get_application(
    persistence: &mut Persistence,
    application_id: i64,
) -> Result<ApplicationResponse, ApiError> {
    load_application(persistence, application_id).map(ApplicationResponse::from)
}

/// Applies a partial update to an application.
///
/// # Errors
///
/// Returns `Validation` for bad input and `NotFound` if the application
/// does not exist.
pub fn update_application(
    persistence: &mut Persistence,
    application_id: i64,
    request: &UpdateApplicationRequest,
) -> Result<ApplicationResponse, ApiError> {
    let update = validate_application_update(request)?;
    load_application(persistence, application_id)?;

    let application: ApplicationData = persistence
        .update_application(application_id, &update)
        .map_err(translate_persistence_error)?;

    info!(application_id, status = %application.status, "Application updated");
    Ok(ApplicationResponse::from(application))
}

/// Deletes an application.
///
/// # Errors
///
/// Returns `NotFound` if the application does not exist.
pub fn delete_application(
    persistence: &mut Persistence,
    application_id: i64,
) -> Result<(), ApiError> {
    load_application(persistence, application_id)?;
    persistence
        .delete_application(application_id)
        .map_err(translate_persistence_error)?;
    info!(application_id, "Application deleted");
    Ok(())
}

/// Derives the stored name of an upload: the compact upload time, a dash,
/// and the final path component of the client's file name.
///
/// # Errors
///
/// Returns `Validation` if no usable file name remains.
pub fn stored_file_name(original: &str, now: OffsetDateTime) -> Result<String, ApiError> {
    let base: &str = original
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim();

    if base.is_empty() || base == "." || base == ".." {
        return Err(ApiError::validation("file", "No file uploaded"));
    }

    Ok(format!("{}-{base}", compact_timestamp(now)))
}

/// The public URL of a stored upload.
#[must_use]
pub fn upload_url(backend_url: &str, stored_name: &str) -> String {
    format!("{}/uploads/{stored_name}", backend_url.trim_end_matches('/'))
}
