// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! `SQLite` connections.
//!
//! Foreign keys are off by default in `SQLite`, so they are switched on for
//! every connection before the schema is applied. File databases also get
//! write-ahead logging and a busy timeout so a reader on another connection
//! does not fail while an audit row is being written.

use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Integer};
use diesel_migrations::{EmbeddedMigrations, embed_migrations};
use tracing::info;

use super::migrate;
use crate::error::PersistenceError;

/// Schema for the `SQLite` backend.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

const BUSY_TIMEOUT_MS: u32 = 5_000;

#[derive(QueryableByName)]
struct ForeignKeysPragma {
    #[diesel(sql_type = Integer)]
    foreign_keys: i32,
}

// Diesel has no PRAGMA DSL.
fn pragma(conn: &mut SqliteConnection, statement: &str) -> Result<(), PersistenceError> {
    diesel::sql_query(statement)
        .execute(conn)
        .map(|_| ())
        .map_err(|e| PersistenceError::QueryFailed(format!("{statement}: {e}")))
}

/// Opens `database_url`, enables foreign keys and applies the schema.
///
/// # Arguments
///
/// * `database_url` - A file path or a `file:` URI
///
/// # Errors
///
/// Returns an error if the connection, a PRAGMA, or a migration fails.
pub fn open(database_url: &str) -> Result<SqliteConnection, PersistenceError> {
    info!(database_url, "Opening SQLite database");

    let mut conn: SqliteConnection = SqliteConnection::establish(database_url)?;
    pragma(&mut conn, "PRAGMA foreign_keys = ON")?;
    migrate(&mut conn, MIGRATIONS)?;
    Ok(conn)
}

/// Tunes a file database for one writer and concurrent readers.
///
/// # Errors
///
/// Returns an error if a PRAGMA fails.
pub fn tune_file_database(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    pragma(conn, "PRAGMA journal_mode = WAL")?;
    pragma(conn, &format!("PRAGMA busy_timeout = {BUSY_TIMEOUT_MS}"))
}

/// Returns the rowid of the last row inserted on this connection.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn last_insert_id(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    Ok(diesel::select(sql::<BigInt>("last_insert_rowid()")).get_result(conn)?)
}

/// Fails unless `PRAGMA foreign_keys` is on.
///
/// # Errors
///
/// Returns `ForeignKeyEnforcementNotEnabled` when it is off.
pub fn check_foreign_keys(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    let pragma: ForeignKeysPragma =
        diesel::sql_query("PRAGMA foreign_keys").get_result(conn)?;

    if pragma.foreign_keys == 0 {
        return Err(PersistenceError::ForeignKeyEnforcementNotEnabled);
    }
    Ok(())
}
