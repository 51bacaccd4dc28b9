// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! User mutations.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use job_board_domain::{UserStatus, now_timestamp};
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::data_models::{NewUser, UserData};
use crate::diesel_schema::users;
use crate::error::PersistenceError;
use crate::rows::UserRow;

backend_fn! {
/// Creates a user and returns the stored row.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `new_user` - The values to insert
///
/// # Errors
///
/// Returns `PersistenceError::UniqueViolation` if the email is taken, or
/// another error if the insert fails.
pub fn create_user(conn: &mut _, new_user: &NewUser) -> Result<UserData, PersistenceError> {
    info!(
        email = %new_user.email,
        user_type = %new_user.user_type,
        registration_type = %new_user.registration_type,
        "Creating user"
    );
    let now: String = now_timestamp();

    conn.transaction(|conn| {
        diesel::insert_into(users::table)
            .values((
                users::names.eq(&new_user.names),
                users::email.eq(&new_user.email),
                users::password_hash.eq(new_user.password_hash.as_deref()),
                users::user_type.eq(new_user.user_type.as_str()),
                users::registration_type.eq(new_user.registration_type.as_str()),
                users::user_status.eq(new_user.user_status.as_str()),
                users::profile_picture_url.eq(&new_user.profile_picture_url),
                users::created_at.eq(&now),
                users::updated_at.eq(&now),
            ))
            .execute(conn)?;

        let user_id: i64 = conn.last_insert_id()?;
        let row: UserRow = users::table
            .find(user_id)
            .select(UserRow::as_select())
            .first(conn)?;

        info!(user_id, "User created successfully");
        UserData::try_from(row)
    })
}
}

backend_fn! {
/// Moves a user to a new lifecycle status and returns the updated row.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if the user does not exist.
pub fn update_user_status(
    conn: &mut _,
    user_id: i64,
    status: UserStatus,
) -> Result<UserData, PersistenceError> {
    info!(user_id, status = %status, "Updating user status");
    let now: String = now_timestamp();

    conn.transaction(|conn| {
        let rows_affected: usize = diesel::update(users::table.find(user_id))
            .set((
                users::user_status.eq(status.as_str()),
                users::updated_at.eq(&now),
            ))
            .execute(conn)?;

        if rows_affected == 0 {
            return Err(PersistenceError::NotFound(format!(
                "User with ID {user_id} not found"
            )));
        }

        let row: UserRow = users::table
            .find(user_id)
            .select(UserRow::as_select())
            .first(conn)?;
        UserData::try_from(row)
    })
}
}

backend_fn! {
/// Replaces a user's password hash and status together.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if the user does not exist.
pub fn update_user_password(
    conn: &mut _,
    user_id: i64,
    password_hash: &str,
    status: UserStatus,
) -> Result<(), PersistenceError> {
    info!(user_id, "Updating user password");

    let rows_affected: usize = diesel::update(users::table.find(user_id))
        .set((
            users::password_hash.eq(Some(password_hash)),
            users::user_status.eq(status.as_str()),
            users::updated_at.eq(now_timestamp()),
        ))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "User with ID {user_id} not found"
        )));
    }

    Ok(())
}
}
