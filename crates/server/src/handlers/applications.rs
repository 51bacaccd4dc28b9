// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use axum::{
    body::Bytes,
    extract::{Multipart, Path, Query, State, multipart::MultipartRejection},
};
use job_board_api::{
    ApplicationResponse, CreateApplicationRequest, PageQuery, UpdateApplicationRequest,
    UploadResponse, create_application, delete_application, get_application, list_applications,
    stored_file_name, update_application, upload_url,
};
use job_board_domain::{Page, PageRequest};
use time::OffsetDateTime;
use tracing::{debug, info};

use crate::error::{ApiResponse, JsonBody, created, ok, ok_message, parse_id};
use crate::state::AppState;
use crate::uploads::{UploadError, read_file_field};

/// Handler for POST `/api/v1/application/create`.
pub async fn handle_create_application(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateApplicationRequest>,
) -> ApiResponse<ApplicationResponse> {
    info!(job_id = ?request.job_id, "Handling create application request");
    let mut persistence = state.persistence.lock().await;
    let application: ApplicationResponse = create_application(
        &mut persistence,
        &state.notifications,
        &request,
        OffsetDateTime::now_utc(),
    )?;
    drop(persistence);

    created("Application submitted successfully", application)
}

/// Handler for GET `/api/v1/application/list`.
pub async fn handle_list_applications(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> ApiResponse<Page<ApplicationResponse>> {
    info!("Handling list applications request");
    let page_request: PageRequest =
        PageRequest::from_query(query.page.as_deref(), query.limit.as_deref());
    let mut persistence = state.persistence.lock().await;
    let page: Page<ApplicationResponse> = list_applications(&mut persistence, page_request)?;
    drop(persistence);

    ok("Applications retrieved successfully", page)
}

/// Handler for GET `/api/v1/application/detail/{id}`.
pub async fn handle_get_application(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResponse<ApplicationResponse> {
    let application_id: i64 = parse_id(&raw_id, "Application")?;
    info!(application_id, "Handling get application request");
    let mut persistence = state.persistence.lock().await;
    let application: ApplicationResponse = get_application(&mut persistence, application_id)?;
    drop(persistence);

    ok("Application retrieved successfully", application)
}

/// Handler for PUT `/api/v1/application/update/{id}`.
pub async fn handle_update_application(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    JsonBody(request): JsonBody<UpdateApplicationRequest>,
) -> ApiResponse<ApplicationResponse> {
    let application_id: i64 = parse_id(&raw_id, "Application")?;
    info!(application_id, "Handling update application request");
    let mut persistence = state.persistence.lock().await;
    let application: ApplicationResponse =
        update_application(&mut persistence, application_id, &request)?;
    drop(persistence);

    ok("Application updated successfully", application)
}

/// Handler for DELETE `/api/v1/application/delete/{id}`.
pub async fn handle_delete_application(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResponse<()> {
    let application_id: i64 = parse_id(&raw_id, "Application")?;
    info!(application_id, "Handling delete application request");
    let mut persistence = state.persistence.lock().await;
    delete_application(&mut persistence, application_id)?;
    drop(persistence);

    ok_message("Application deleted successfully")
}

/// Handler for POST `/api/v1/application/upload`.
///
/// Stores the multipart `file` field and returns its public URL.
pub async fn handle_upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResponse<UploadResponse> {
    let mut multipart: Multipart = multipart.map_err(|e| {
        debug!(error = %e, "Upload is not a multipart body");
        UploadError::Missing
    })?;

    let (original, contents): (String, Bytes) = read_file_field(&mut multipart).await?;
    let stored_name: String = stored_file_name(&original, OffsetDateTime::now_utc())?;
    state.uploads.store(&stored_name, &contents).await?;

    let url: String = upload_url(&state.settings.backend_url, &stored_name);
    info!(stored_name = %stored_name, bytes = contents.len(), "File uploaded");
    ok("File uploaded successfully", UploadResponse { url })
}
