// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-database plumbing.
//!
//! Entity queries and mutations are written once against the Diesel DSL
//! and expanded for each connection type by `backend_fn!`. The few things
//! that cannot be written that way live here: opening a connection with the
//! session settings the job board depends on, applying the embedded schema,
//! and reading back generated ids.
//!
//! `SQLite` serves files, tests and small deployments. MySQL/MariaDB is
//! selected with a `mysql://` URL and keeps its own migration directory.

pub mod mysql;
pub mod sqlite;

use diesel::{Connection, MysqlConnection, SqliteConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness};
use tracing::info;

use crate::error::PersistenceError;

/// Operations whose SQL differs between backends.
pub trait PersistenceBackend: Connection {
    /// Backend name used in log fields.
    const NAME: &'static str;

    /// The id generated by the most recent insert on this connection.
    ///
    /// Inserts call this inside their transaction to read the stored row
    /// back; `MySQL` has no `RETURNING`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn last_insert_id(&mut self) -> Result<i64, PersistenceError>;

    /// Fails unless the connection enforces foreign keys.
    ///
    /// `jobs.posted_by` and `applications.job_id` rely on it.
    ///
    /// # Errors
    ///
    /// Returns `ForeignKeyEnforcementNotEnabled` when enforcement is off.
    fn check_foreign_keys(&mut self) -> Result<(), PersistenceError>;
}

impl PersistenceBackend for SqliteConnection {
    const NAME: &'static str = "sqlite";

    fn last_insert_id(&mut self) -> Result<i64, PersistenceError> {
        sqlite::last_insert_id(self)
    }

    fn check_foreign_keys(&mut self) -> Result<(), PersistenceError> {
        sqlite::check_foreign_keys(self)
    }
}

impl PersistenceBackend for MysqlConnection {
    const NAME: &'static str = "mysql";

    fn last_insert_id(&mut self) -> Result<i64, PersistenceError> {
        mysql::last_insert_id(self)
    }

    fn check_foreign_keys(&mut self) -> Result<(), PersistenceError> {
        mysql::check_foreign_keys(self)
    }
}

/// Applies every pending migration from `migrations`.
///
/// # Errors
///
/// Returns `MigrationFailed` if any migration fails.
pub fn migrate<C>(conn: &mut C, migrations: EmbeddedMigrations) -> Result<(), PersistenceError>
where
    C: PersistenceBackend + MigrationHarness<<C as Connection>::Backend>,
{
    let applied: usize = conn
        .run_pending_migrations(migrations)
        .map_err(|e| PersistenceError::MigrationFailed(e.to_string()))?
        .len();
    info!(backend = C::NAME, applied, "Job board schema is up to date");
    Ok(())
}
