// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Application mutations.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use job_board_domain::{ApplicationStatus, now_timestamp};
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::data_models::{ApplicationData, ApplicationUpdate, NewApplication};
use crate::diesel_schema::applications;
use crate::error::PersistenceError;
use crate::rows::ApplicationRow;

#[derive(AsChangeset)]
#[diesel(table_name = applications)]
struct ApplicationChangeset<'a> {
    names: Option<&'a str>,
    email: Option<&'a str>,
    phone_number: Option<&'a str>,
    linked_in_profile: Option<&'a str>,
    cover_letter: Option<&'a str>,
    resume_url: Option<&'a str>,
    status: Option<&'static str>,
    updated_at: &'a str,
}

impl<'a> ApplicationChangeset<'a> {
    fn new(update: &'a ApplicationUpdate, updated_at: &'a str) -> Self {
        Self {
            names: update.names.as_deref(),
            email: update.email.as_deref(),
            phone_number: update.phone_number.as_deref(),
            linked_in_profile: update.linked_in_profile.as_deref(),
            cover_letter: update.cover_letter.as_deref(),
            resume_url: update.resume_url.as_deref(),
            status: update.status.map(|status| status.as_str()),
            updated_at,
        }
    }
}

backend_fn! {
/// Creates a pending application and returns the stored row.
///
/// # Errors
///
/// Returns an error if the job does not exist or the insert fails.
pub fn create_application(
    conn: &mut _,
    new_application: &NewApplication,
) -> Result<ApplicationData, PersistenceError> {
    info!(
        job_id = new_application.job_id,
        email = %new_application.email,
        "Creating application"
    );
    let now: String = now_timestamp();

    conn.transaction(|conn| {
        diesel::insert_into(applications::table)
            .values((
                applications::job_id.eq(new_application.job_id),
                applications::names.eq(&new_application.names),
                applications::email.eq(&new_application.email),
                applications::phone_number.eq(new_application.phone_number.as_deref()),
                applications::linked_in_profile.eq(new_application.linked_in_profile.as_deref()),
                applications::cover_letter.eq(&new_application.cover_letter),
                applications::resume_url.eq(&new_application.resume_url),
                applications::status.eq(ApplicationStatus::Pending.as_str()),
                applications::applied_at.eq(&now),
                applications::updated_at.eq(&now),
            ))
            .execute(conn)?;

        let application_id: i64 = conn.last_insert_id()?;
        let row: ApplicationRow = applications::table
            .find(application_id)
            .select(ApplicationRow::as_select())
            .first(conn)?;

        info!(application_id, "Application created successfully");
        ApplicationData::try_from(row)
    })
}
}

backend_fn! {
/// Applies a partial update and returns the updated row.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if the application does not exist.
pub fn update_application(
    conn: &mut _,
    application_id: i64,
    update: &ApplicationUpdate,
) -> Result<ApplicationData, PersistenceError> {
    info!(application_id, "Updating application");
    let now: String = now_timestamp();

    conn.transaction(|conn| {
        let rows_affected: usize = diesel::update(applications::table.find(application_id))
            .set(ApplicationChangeset::new(update, &now))
            .execute(conn)?;

        if rows_affected == 0 {
            return Err(PersistenceError::NotFound(format!(
                "Application with ID {application_id} not found"
            )));
        }

        let row: ApplicationRow = applications::table
            .find(application_id)
            .select(ApplicationRow::as_select())
            .first(conn)?;
        ApplicationData::try_from(row)
    })
}
}

backend_fn! {
/// Deletes an application.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if the application does not exist.
pub fn delete_application(conn: &mut _, application_id: i64) -> Result<(), PersistenceError> {
    info!(application_id, "Deleting application");

    let rows_affected: usize =
        diesel::delete(applications::table.find(application_id)).execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Application with ID {application_id} not found"
        )));
    }

    Ok(())
}
}
