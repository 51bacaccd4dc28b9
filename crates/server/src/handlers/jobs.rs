// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use axum::extract::{Path, Query, State};
use job_board_api::{
    JobRequest, JobResponse, JobWithApplicationsResponse, PageQuery, create_job, delete_job,
    get_job, list_jobs, list_jobs_with_applications, update_job,
};
use job_board_domain::{Page, PageRequest};
use time::OffsetDateTime;
use tracing::info;

use crate::error::{ApiResponse, JsonBody, created, ok, ok_message, parse_id};
use crate::session::SessionUser;
use crate::state::AppState;

fn page_request(query: &PageQuery) -> PageRequest {
    PageRequest::from_query(query.page.as_deref(), query.limit.as_deref())
}

/// Handler for POST `/api/v1/job/create`.
pub async fn handle_create_job(
    State(state): State<AppState>,
    SessionUser(identity): SessionUser,
    JsonBody(request): JsonBody<JobRequest>,
) -> ApiResponse<JobResponse> {
    info!(user_id = identity.id, "Handling create job request");
    let mut persistence = state.persistence.lock().await;
    let job: JobResponse = create_job(
        &mut persistence,
        &state.notifications,
        &identity,
        &request,
        OffsetDateTime::now_utc(),
    )?;
    drop(persistence);

    created("Job created successfully", job)
}

/// Handler for GET `/api/v1/job/list`.
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> ApiResponse<Page<JobResponse>> {
    info!("Handling list jobs request");
    let mut persistence = state.persistence.lock().await;
    let page: Page<JobResponse> = list_jobs(&mut persistence, page_request(&query))?;
    drop(persistence);

    ok("Jobs retrieved successfully", page)
}

/// Handler for GET `/api/v1/job/list-with-applications`.
pub async fn handle_list_jobs_with_applications(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> ApiResponse<Page<JobWithApplicationsResponse>> {
    info!("Handling list jobs with applications request");
    let mut persistence = state.persistence.lock().await;
    let page: Page<JobWithApplicationsResponse> =
        list_jobs_with_applications(&mut persistence, page_request(&query))?;
    drop(persistence);

    ok("Jobs with applications retrieved successfully", page)
}

/// Handler for GET `/api/v1/job/detail/{id}`.
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResponse<JobResponse> {
    let job_id: i64 = parse_id(&raw_id, "Job")?;
    info!(job_id, "Handling get job request");
    let mut persistence = state.persistence.lock().await;
    let job: JobResponse = get_job(&mut persistence, job_id)?;
    drop(persistence);

    ok("Job retrieved successfully", job)
}

/// Handler for PUT `/api/v1/job/update/{id}`.
pub async fn handle_update_job(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    JsonBody(request): JsonBody<JobRequest>,
) -> ApiResponse<JobResponse> {
    let job_id: i64 = parse_id(&raw_id, "Job")?;
    info!(job_id, "Handling update job request");
    let mut persistence = state.persistence.lock().await;
    let job: JobResponse =
        update_job(&mut persistence, job_id, &request, OffsetDateTime::now_utc())?;
    drop(persistence);

    ok("Job updated successfully", job)
}

/// Handler for DELETE `/api/v1/job/delete/{id}`.
pub async fn handle_delete_job(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResponse<()> {
    let job_id: i64 = parse_id(&raw_id, "Job")?;
    info!(job_id, "Handling delete job request");
    let mut persistence = state.persistence.lock().await;
    delete_job(&mut persistence, job_id)?;
    drop(persistence);

    ok_message("Job deleted successfully")
}
