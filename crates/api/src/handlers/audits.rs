// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Audit trail writes and queries.

use job_board_audit::AuditRecord;
use job_board_domain::{Page, PageRequest, normalize_timestamp};
use job_board_persistence::{AuditLogFilter, Persistence};

use crate::error::{ApiError, translate_persistence_error};
use crate::request_response::{AuditLogQuery, AuditLogResponse, AuditLogSummaryResponse};

/// Treats empty query values as absent.
fn present(value: Option<&String>) -> Option<String> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty()).map(String::from)
}

fn date(field: &str, label: &str, value: Option<&String>) -> Result<Option<String>, ApiError> {
    present(value)
        .map(|v| {
            normalize_timestamp(&v)
                .map_err(|_| ApiError::validation(field, format!("{label} must be a valid date")))
        })
        .transpose()
}

/// Builds a listing filter from query parameters.
///
/// # Arguments
///
/// * `query` - The raw query parameters
/// * `hidden_actor` - A `doneBy` value to leave out of every listing
///
/// # Errors
///
/// Returns `Validation` for an unparsable date or status code.
pub fn build_audit_filter(
    query: &AuditLogQuery,
    hidden_actor: Option<&str>,
) -> Result<AuditLogFilter, ApiError> {
    let status_code: Option<i32> = present(query.status_code.as_ref())
        .map(|v| {
            v.parse::<i32>()
                .map_err(|_| ApiError::validation("statusCode", "Status code must be a number"))
        })
        .transpose()?;

    Ok(AuditLogFilter {
        search: present(query.search.as_ref()),
        start_date: date("startDate", "Start date", query.start_date.as_ref())?,
        end_date: date("endDate", "End date", query.end_date.as_ref())?,
        activity: present(query.activity.as_ref()),
        status: present(query.status.as_ref()),
        method: present(query.method.as_ref()).map(|m| m.to_uppercase()),
        status_code,
        done_by: present(query.done_by.as_ref()),
        ip_address: present(query.ip_address.as_ref()),
        exclude_done_by: hidden_actor.filter(|v| !v.is_empty()).map(String::from),
    })
}

/// Lists audit records, newest first.
///
/// # Errors
///
/// Returns `Validation` for bad filters, or an error if persistence fails.
pub fn list_audit_logs(
    persistence: &mut Persistence,
    query: &AuditLogQuery,
    hidden_actor: Option<&str>,
) -> Result<Page<AuditLogSummaryResponse>, ApiError> {
    let filter: AuditLogFilter = build_audit_filter(query, hidden_actor)?;
    let page: PageRequest = PageRequest::from_query(query.page.as_deref(), query.limit.as_deref());

    Ok(persistence
        .list_audit_logs(&filter, page)
        .map_err(translate_persistence_error)?
        .map(AuditLogSummaryResponse::from))
}

/// Returns one audit record with decoded bodies.
///
/// # Errors
///
/// Returns `NotFound` if the record does not exist.
pub fn get_audit_log(
    persistence: &mut Persistence,
    audit_log_id: i64,
) -> Result<AuditLogResponse, ApiError> {
    persistence
        .get_audit_log_by_id(audit_log_id)
        .map_err(translate_persistence_error)?
        .map(AuditLogResponse::from)
        .ok_or_else(|| ApiError::not_found("Audit log"))
}

/// Persists one captured audit record and returns its id.
///
/// # Errors
///
/// Returns an error if persistence fails. Callers on the request path log
/// and drop it.
pub fn record_audit_log(
    persistence: &mut Persistence,
    record: &AuditRecord,
) -> Result<i64, ApiError> {
    persistence
        .insert_audit_log(record)
        .map_err(translate_persistence_error)
}
