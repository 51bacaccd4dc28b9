// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Job queries.

use std::collections::BTreeMap;

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use job_board_domain::{Page, PageRequest};
use tracing::debug;

use crate::data_models::{ApplicationData, JobData, JobWithApplications};
use crate::diesel_schema::{applications, jobs};
use crate::error::PersistenceError;
use crate::rows::{ApplicationRow, JobRow, map_rows};

backend_fn! {
/// Retrieves a job by id.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the job is not found.
pub fn get_job_by_id(conn: &mut _, job_id: i64) -> Result<Option<JobData>, PersistenceError> {
    debug!(job_id, "Looking up job by id");

    let result: Result<JobRow, diesel::result::Error> = jobs::table
        .find(job_id)
        .select(JobRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(JobData::try_from(row)?)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(e.into()),
    }
}
}

backend_fn! {
/// Finds a job with exactly this title, company and location.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn find_job_by_identity(
    conn: &mut _,
    title: &str,
    company: &str,
    location: &str,
) -> Result<Option<JobData>, PersistenceError> {
    let result: Result<JobRow, diesel::result::Error> = jobs::table
        .filter(jobs::title.eq(title))
        .filter(jobs::company.eq(company))
        .filter(jobs::location.eq(location))
        .select(JobRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(JobData::try_from(row)?)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(e.into()),
    }
}
}

backend_fn! {
/// Lists one page of jobs, newest first.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_jobs(conn: &mut _, page: PageRequest) -> Result<Page<JobData>, PersistenceError> {
    let total: i64 = jobs::table.count().get_result(conn)?;

    let rows: Vec<JobRow> = jobs::table
        .select(JobRow::as_select())
        .order((jobs::created_at.desc(), jobs::id.desc()))
        .limit(i64::from(page.limit()))
        .offset(page.offset())
        .load(conn)?;

    Ok(Page::new(map_rows(rows)?, total, page))
}
}

backend_fn! {
/// Lists one page of jobs, newest first, each with all of its applications.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_jobs_with_applications(
    conn: &mut _,
    page: PageRequest,
) -> Result<Page<JobWithApplications>, PersistenceError> {
    let total: i64 = jobs::table.count().get_result(conn)?;

    let job_rows: Vec<JobRow> = jobs::table
        .select(JobRow::as_select())
        .order((jobs::created_at.desc(), jobs::id.desc()))
        .limit(i64::from(page.limit()))
        .offset(page.offset())
        .load(conn)?;
    let job_list: Vec<JobData> = map_rows(job_rows)?;

    let job_ids: Vec<i64> = job_list.iter().map(|job| job.id).collect();
    let application_rows: Vec<ApplicationRow> = applications::table
        .filter(applications::job_id.eq_any(job_ids))
        .select(ApplicationRow::as_select())
        .order((applications::applied_at.desc(), applications::id.desc()))
        .load(conn)?;

    let mut by_job: BTreeMap<i64, Vec<ApplicationData>> = BTreeMap::new();
    for application in map_rows::<_, ApplicationData>(application_rows)? {
        by_job.entry(application.job_id).or_default().push(application);
    }

    let data: Vec<JobWithApplications> = job_list
        .into_iter()
        .map(|job| {
            let applications: Vec<ApplicationData> = by_job.remove(&job.id).unwrap_or_default();
            JobWithApplications { job, applications }
        })
        .collect();

    Ok(Page::new(data, total, page))
}
}

backend_fn! {
/// Counts the applications that reference a job.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_applications_for_job(conn: &mut _, job_id: i64) -> Result<i64, PersistenceError> {
    Ok(applications::table
        .filter(applications::job_id.eq(job_id))
        .count()
        .get_result(conn)?)
}
}
