// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use job_board_domain::{Page, PageRequest};
use tracing::debug;

use crate::data_models::ApplicationData;
use crate::diesel_schema::applications;
use crate::error::PersistenceError;
use crate::rows::{ApplicationRow, map_rows};

backend_fn! {
/// Retrieves an application by id.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the application is not found.
pub fn get_application_by_id(
    conn: &mut _,
    application_id: i64,
) -> Result<Option<ApplicationData>, PersistenceError> {
    debug!(application_id, "Looking up application by id");

    let result: Result<ApplicationRow, diesel::result::Error> = applications::table
        .find(application_id)
        .select(ApplicationRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(ApplicationData::try_from(row)?)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(e.into()),
    }
}
}

backend_fn! {
/// Finds the application a given email submitted for a job, if any.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn find_application_by_job_and_email(
    conn: &mut _,
    job_id: i64,
    email: &str,
) -> Result<Option<ApplicationData>, PersistenceError> {
    let result: Result<ApplicationRow, diesel::result::Error> = applications::table
        .filter(applications::job_id.eq(job_id))
        .filter(applications::email.eq(email))
        .select(ApplicationRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(ApplicationData::try_from(row)?)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(e.into()),
    }
}
}

backend_fn! {
/// Lists one page of applications, most recently applied first.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_applications(
    conn: &mut _,
    page: PageRequest,
) -> Result<Page<ApplicationData>, PersistenceError> {
    let total: i64 = applications::table.count().get_result(conn)?;

    let rows: Vec<ApplicationRow> = applications::table
        .select(ApplicationRow::as_select())
        .order((applications::applied_at.desc(), applications::id.desc()))
        .limit(i64::from(page.limit()))
        .offset(page.offset())
        .load(conn)?;

    Ok(Page::new(map_rows(rows)?, total, page))
}
}

backend_fn! {
/// Lists every application submitted for a job.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_applications_for_job(
    conn: &mut _,
    job_id: i64,
) -> Result<Vec<ApplicationData>, PersistenceError> {
    let rows: Vec<ApplicationRow> = applications::table
        .filter(applications::job_id.eq(job_id))
        .select(ApplicationRow::as_select())
        .order((applications::applied_at.desc(), applications::id.desc()))
        .load(conn)?;

    map_rows(rows)
}
}
