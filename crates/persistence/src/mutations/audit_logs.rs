// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use job_board_audit::AuditRecord;
use job_board_domain::now_timestamp;
use tracing::debug;

use crate::backend::PersistenceBackend;
use crate::diesel_schema::audit_logs;
use crate::error::PersistenceError;

backend_fn! {
/// Inserts one audit row and returns its id.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_audit_log(conn: &mut _, record: &AuditRecord) -> Result<i64, PersistenceError> {
    let now: String = now_timestamp();

    conn.transaction(|conn| {
        diesel::insert_into(audit_logs::table)
            .values((
                audit_logs::timestamp.eq(&record.timestamp),
                audit_logs::method.eq(&record.method),
                audit_logs::url.eq(&record.url),
                audit_logs::status_code.eq(i32::from(record.status_code)),
                audit_logs::user_agent.eq(&record.user_agent),
                audit_logs::duration.eq(&record.duration),
                audit_logs::done_by.eq(&record.done_by),
                audit_logs::ip_address.eq(&record.ip_address),
                audit_logs::activity.eq(&record.activity),
                audit_logs::details.eq(&record.details),
                audit_logs::status.eq(&record.status),
                audit_logs::response_body.eq(&record.response_body),
                audit_logs::request_body.eq(&record.request_body),
                audit_logs::created_at.eq(&now),
                audit_logs::updated_at.eq(&now),
            ))
            .execute(conn)?;

        let audit_log_id: i64 = conn.last_insert_id()?;
        debug!(audit_log_id, method = %record.method, url = %record.url, "Audit log stored");
        Ok(audit_log_id)
    })
}
}
