// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use job_board_domain::{Page, PageRequest, format_timestamp};
use job_board_persistence::{JobData, JobUpdate, NewJob, Persistence, UserData};
use time::OffsetDateTime;
use tracing::{info, warn};

use crate::auth::Identity;
use crate::error::{ApiError, translate_persistence_error};
use crate::notifier::NotificationDispatcher;
use crate::request_response::{JobRequest, JobResponse, JobWithApplicationsResponse};
use crate::validation::{ValidJob, validate_job};

fn job_not_found() -> ApiError {
    ApiError::not_found("Job")
}

fn load_job(persistence: &mut Persistence, job_id: i64) -> Result<JobData, ApiError> {
    persistence
        .get_job_by_id(job_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(job_not_found)
}

/// Creates a job posted by the caller.
///
/// A job with the same title, company, and location must not already
/// exist. The check and the insert are separate statements.
///
/// # Errors
///
/// Returns `Validation` for bad input, `NotFound` if the caller's account
/// is gone, and `Conflict` for a duplicate posting.
pub fn create_job(
    persistence: &mut Persistence,
    notifications: &NotificationDispatcher,
    identity: &Identity,
    request: &JobRequest,
    now: OffsetDateTime,
) -> Result<JobResponse, ApiError> {
    let valid: ValidJob = validate_job(request, false, now)?;

    let poster: UserData = persistence
        .get_user_by_id(identity.id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::not_found("User"))?;

    if find_duplicate_job(persistence, &valid.title, &valid.company, &valid.location)?.is_some() {
        warn!(title = %valid.title, "Job creation refused: duplicate posting");
        return Err(ApiError::Conflict {
            message: String::from("Job with this title already exists"),
        });
    }

    let job: JobData = persistence
        .create_job(&NewJob {
            title: valid.title,
            description: valid.description,
            company: valid.company,
            location: valid.location,
            deadline: valid.deadline,
            job_type: valid.job_type,
            status: valid.status,
            posted_by: poster.id,
        })
        .map_err(translate_persistence_error)?;

    notifications.job_created(&poster.email, &poster.names, &job.title);
    info!(job_id = job.id, posted_by = poster.id, "Job created");
    Ok(JobResponse::from(job))
}

/// Finds a job with the given identity triple.
///
/// # Errors
///
/// Returns an error if persistence fails.
pub fn find_duplicate_job(
    persistence: &mut Persistence,
    title: &str,
    company: &str,
    location: &str,
) -> Result<Option<JobResponse>, ApiError> {
    Ok(persistence
        .find_job_by_identity(title, company, location)
        .map_err(translate_persistence_error)?
        .map(JobResponse::from))
}

/// Returns one job.
///
/// # Errors
///
/// Returns `NotFound` if the job does not exist.
pub fn get_job(persistence: &mut Persistence, job_id: i64) -> Result<JobResponse, ApiError> {
    load_job(persistence, job_id).map(JobResponse::from)
}

/// Lists jobs, newest first.
///
/// # Errors
///
/// Returns an error if persistence fails.
pub fn list_jobs(
    persistence: &mut Persistence,
    page: PageRequest,
) -> Result<Page<JobResponse>, ApiError> {
    Ok(persistence
        .list_jobs(page)
        .map_err(translate_persistence_error)?
        .map(JobResponse::from))
}

/// Lists jobs, newest first, each with its applications.
///
/// # Errors
///
/// Returns an error if persistence fails.
pub fn list_jobs_with_applications(
    persistence: &mut Persistence,
    page: PageRequest,
) -> Result<Page<JobWithApplicationsResponse>, ApiError> {
    Ok(persistence
        .list_jobs_with_applications(page)
        .map_err(translate_persistence_error)?
        .map(JobWithApplicationsResponse::from))
}

/// Replaces every editable field of a job.
///
/// # Errors
///
/// Returns `Validation` for bad input and `NotFound` if the job does not
/// exist.
pub fn update_job(
    persistence: &mut Persistence,
    job_id: i64,
    request: &JobRequest,
    now: OffsetDateTime,
) -> Result<JobResponse, ApiError> {
    let valid: ValidJob = validate_job(request, true, now)?;
    load_job(persistence, job_id)?;

    let job: JobData = persistence
        .update_job(
            job_id,
            &JobUpdate {
                title: valid.title,
                description: valid.description,
                company: valid.company,
                location: valid.location,
                deadline: valid.deadline,
                job_type: valid.job_type,
                status: valid.status,
            },
        )
        .map_err(translate_persistence_error)?;

    info!(job_id, "Job updated");
    Ok(JobResponse::from(job))
}

/// Deletes a job that has no applications.
///
/// # Errors
///
/// Returns `NotFound` if the job does not exist and `Forbidden` if any
/// application references it.
pub fn delete_job(persistence: &mut Persistence, job_id: i64) -> Result<(), ApiError> {
    load_job(persistence, job_id)?;

    let applications: i64 = persistence
        .count_applications_for_job(job_id)
        .map_err(translate_persistence_error)?;
    if applications > 0 {
        warn!(job_id, applications, "Job deletion refused: job has applications");
        return Err(ApiError::Forbidden {
            message: String::from("Job has applications and cannot be deleted"),
        });
    }

    persistence
        .delete_job(job_id)
        .map_err(translate_persistence_error)?;
    info!(job_id, "Job deleted");
    Ok(())
}

/// Closes every open job whose deadline is before `now`.
///
/// Running it again closes nothing new.
///
/// # Returns
///
/// The number of jobs closed.
///
/// # Errors
///
/// Returns an error if persistence fails.
pub fn close_expired_jobs(
    persistence: &mut Persistence,
    now: OffsetDateTime,
) -> Result<usize, ApiError> {
    let closed: usize = persistence
        .close_expired_jobs(&format_timestamp(now))
        .map_err(translate_persistence_error)?;
    info!(closed, "Deadline sweep finished");
    Ok(closed)
}
