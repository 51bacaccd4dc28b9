// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Audit log queries.
//!
//! Listing builds the same filtered query twice, once for the total count
//! and once for the requested page, so both always agree.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use job_board_domain::{Page, PageRequest};
use tracing::debug;

use crate::data_models::{AuditLogData, AuditLogFilter, AuditLogSummary};
use crate::diesel_schema::audit_logs;
use crate::error::PersistenceError;
use crate::rows::{AuditLogRow, AuditLogSummaryRow};

/// Builds a boxed `audit_logs` query with every set filter applied.
macro_rules! filtered_audit_logs {
    ($filter:expr) => {{
        let filter: &AuditLogFilter = $filter;
        let mut query = audit_logs::table.into_boxed();

        if let Some(search) = filter.search.as_deref().filter(|s| !s.is_empty()) {
            let pattern: String = format!("%{search}%");
            query = query.filter(
                audit_logs::done_by
                    .like(pattern.clone())
                    .or(audit_logs::details.like(pattern)),
            );
        }
        if let (Some(start), Some(end)) = (&filter.start_date, &filter.end_date) {
            query = query.filter(audit_logs::created_at.between(start.clone(), end.clone()));
        }
        if let Some(activity) = &filter.activity {
            query = query.filter(audit_logs::activity.eq(activity.clone()));
        }
        if let Some(status) = &filter.status {
            query = query.filter(audit_logs::status.eq(status.clone()));
        }
        if let Some(method) = &filter.method {
            query = query.filter(audit_logs::method.eq(method.clone()));
        }
        if let Some(status_code) = filter.status_code {
            query = query.filter(audit_logs::status_code.eq(status_code));
        }
        if let Some(done_by) = &filter.done_by {
            query = query.filter(audit_logs::done_by.eq(done_by.clone()));
        }
        if let Some(ip_address) = &filter.ip_address {
            query = query.filter(audit_logs::ip_address.eq(ip_address.clone()));
        }
        if let Some(hidden) = &filter.exclude_done_by {
            query = query.filter(audit_logs::done_by.ne(hidden.clone()));
        }

        query
    }};
}

backend_fn! {
/// Retrieves a full audit row by id.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the row is not found.
pub fn get_audit_log_by_id(
    conn: &mut _,
    audit_log_id: i64,
) -> Result<Option<AuditLogData>, PersistenceError> {
    debug!(audit_log_id, "Looking up audit log by id");

    let result: Result<AuditLogRow, diesel::result::Error> = audit_logs::table
        .find(audit_log_id)
        .select(AuditLogRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(row.into())),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(e.into()),
    }
}
}

backend_fn! {
/// Lists one page of audit summaries matching a filter, newest first.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_audit_logs(
    conn: &mut _,
    filter: &AuditLogFilter,
    page: PageRequest,
) -> Result<Page<AuditLogSummary>, PersistenceError> {
    let total: i64 = filtered_audit_logs!(filter).count().get_result(conn)?;

    let rows: Vec<AuditLogSummaryRow> = filtered_audit_logs!(filter)
        .select(AuditLogSummaryRow::as_select())
        .order((audit_logs::created_at.desc(), audit_logs::id.desc()))
        .limit(i64::from(page.limit()))
        .offset(page.offset())
        .load(conn)?;

    Ok(Page::new(
        rows.into_iter().map(AuditLogSummary::from).collect(),
        total,
        page,
    ))
}
}
