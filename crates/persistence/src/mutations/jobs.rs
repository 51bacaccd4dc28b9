// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Job mutations.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use job_board_domain::{JobStatus, now_timestamp};
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::data_models::{JobData, JobUpdate, NewJob};
use crate::diesel_schema::{applications, jobs};
use crate::error::PersistenceError;
use crate::rows::JobRow;

backend_fn! {
/// Creates a job and returns the stored row.
///
/// # Errors
///
/// Returns an error if the poster does not exist or the insert fails.
pub fn create_job(conn: &mut _, new_job: &NewJob) -> Result<JobData, PersistenceError> {
    info!(title = %new_job.title, posted_by = new_job.posted_by, "Creating job");
    let now: String = now_timestamp();

    conn.transaction(|conn| {
        diesel::insert_into(jobs::table)
            .values((
                jobs::title.eq(&new_job.title),
                jobs::description.eq(&new_job.description),
                jobs::company.eq(&new_job.company),
                jobs::location.eq(&new_job.location),
                jobs::deadline.eq(&new_job.deadline),
                jobs::job_type.eq(new_job.job_type.as_str()),
                jobs::status.eq(new_job.status.as_str()),
                jobs::posted_by.eq(new_job.posted_by),
                jobs::created_at.eq(&now),
                jobs::updated_at.eq(&now),
            ))
            .execute(conn)?;

        let job_id: i64 = conn.last_insert_id()?;
        let row: JobRow = jobs::table
            .find(job_id)
            .select(JobRow::as_select())
            .first(conn)?;

        info!(job_id, "Job created successfully");
        JobData::try_from(row)
    })
}
}

backend_fn! {
/// Replaces a job's editable fields and returns the updated row.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if the job does not exist.
pub fn update_job(
    conn: &mut _,
    job_id: i64,
    update: &JobUpdate,
) -> Result<JobData, PersistenceError> {
    info!(job_id, "Updating job");
    let now: String = now_timestamp();

    conn.transaction(|conn| {
        let rows_affected: usize = diesel::update(jobs::table.find(job_id))
            .set((
                jobs::title.eq(&update.title),
                jobs::description.eq(&update.description),
                jobs::company.eq(&update.company),
                jobs::location.eq(&update.location),
                jobs::deadline.eq(&update.deadline),
                jobs::job_type.eq(update.job_type.as_str()),
                jobs::status.eq(update.status.as_str()),
                jobs::updated_at.eq(&now),
            ))
            .execute(conn)?;

        if rows_affected == 0 {
            return Err(PersistenceError::NotFound(format!(
                "Job with ID {job_id} not found"
            )));
        }

        let row: JobRow = jobs::table
            .find(job_id)
            .select(JobRow::as_select())
            .first(conn)?;
        JobData::try_from(row)
    })
}
}

backend_fn! {
/// Deletes a job that no application references.
///
/// The reference check and the delete share one transaction.
///
/// # Errors
///
/// Returns `PersistenceError::JobReferenced` if any application references
/// the job, or `PersistenceError::NotFound` if the job does not exist.
pub fn delete_job(conn: &mut _, job_id: i64) -> Result<(), PersistenceError> {
    info!(job_id, "Attempting to delete job");

    conn.transaction(|conn| {
        let references: i64 = applications::table
            .filter(applications::job_id.eq(job_id))
            .count()
            .get_result(conn)?;

        if references > 0 {
            return Err(PersistenceError::JobReferenced { job_id });
        }

        let rows_affected: usize = diesel::delete(jobs::table.find(job_id)).execute(conn)?;
        if rows_affected == 0 {
            return Err(PersistenceError::NotFound(format!(
                "Job with ID {job_id} not found"
            )));
        }

        info!(job_id, "Deleted job");
        Ok(())
    })
}
}

backend_fn! {
/// Closes every open job whose deadline is before `now`.
///
/// Closed jobs fall outside the predicate, so running this again changes
/// nothing.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `now` - The cutoff in the canonical timestamp layout
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn close_expired_jobs(conn: &mut _, now: &str) -> Result<usize, PersistenceError> {
    let closed: usize = diesel::update(
        jobs::table
            .filter(jobs::status.eq(JobStatus::Open.as_str()))
            .filter(jobs::deadline.lt(now)),
    )
    .set((
        jobs::status.eq(JobStatus::Closed.as_str()),
        jobs::updated_at.eq(now),
    ))
    .execute(conn)?;

    if closed > 0 {
        info!(closed, "Closed jobs past their deadline");
    }

    Ok(closed)
}
}
