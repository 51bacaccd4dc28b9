// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use axum::extract::{Path, Query, State};
use job_board_api::{
    AuditLogQuery, AuditLogResponse, AuditLogSummaryResponse, get_audit_log, list_audit_logs,
};
use job_board_domain::Page;
use tracing::info;

use crate::error::{ApiResponse, ok, parse_id};
use crate::state::AppState;

/// Handler for GET `/api/v1/audits/list`.
pub async fn handle_list_audit_logs(
    State(state): State<AppState>,
    Query(query): Query<AuditLogQuery>,
) -> ApiResponse<Page<AuditLogSummaryResponse>> {
    info!("Handling list audit logs request");
    let mut persistence = state.persistence.lock().await;
    let page: Page<AuditLogSummaryResponse> = list_audit_logs(
        &mut persistence,
        &query,
        state.settings.audit_hidden_actor.as_deref(),
    )?;
    drop(persistence);

    ok("Audit logs retrieved successfully", page)
}

/// Handler for GET `/api/v1/audits/detail/{id}`.
pub async fn handle_get_audit_log(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResponse<AuditLogResponse> {
    let audit_log_id: i64 = parse_id(&raw_id, "Audit log")?;
    info!(audit_log_id, "Handling get audit log request");
    let mut persistence = state.persistence.lock().await;
    let log: AuditLogResponse = get_audit_log(&mut persistence, audit_log_id)?;
    drop(persistence);

    ok("Audit log retrieved successfully", log)
}
