// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use axum::http::{StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use super::helpers::{application_body, create_test_app, job_body, json_request};

#[tokio::test]
async fn test_admin_creates_open_job() {
    let app = create_test_app();
    let admin_token: String = app.admin_token().await;

    let (status, body) = app
        .post(
            "/api/v1/job/create",
            Some(&admin_token),
            &job_body("Backend Engineer"),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Job created successfully");
    assert_eq!(body["data"]["status"], "open");
    assert_eq!(body["data"]["type"], "full-time");
    assert_eq!(body["data"]["deadline"], "2999-01-01T00:00:00.000Z");
}

#[tokio::test]
async fn test_job_seeker_cannot_create_job() {
    let app = create_test_app();
    let seeker_token: String = app.job_seeker_token().await;

    let (status, body) = app
        .post(
            "/api/v1/job/create",
            Some(&seeker_token),
            &job_body("Backend Engineer"),
        )
        .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "You do not have permission to create jobs");
}

#[tokio::test]
async fn test_duplicate_job_conflicts() {
    let app = create_test_app();
    let admin_token: String = app.admin_token().await;
    app.create_job(&admin_token, "Backend Engineer").await;

    let (status, body) = app
        .post(
            "/api/v1/job/create",
            Some(&admin_token),
            &job_body("Backend Engineer"),
        )
        .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Job with this title already exists");
}

#[tokio::test]
async fn test_list_jobs_reports_last_page() {
    let app = create_test_app();
    let admin_token: String = app.admin_token().await;
    for title in ["Job One", "Job Two", "Job Three"] {
        app.create_job(&admin_token, title).await;
    }

    let (status, body) = app
        .get("/api/v1/job/list?page=1&limit=2", Some(&admin_token))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["total"], 3);
    assert_eq!(body["data"]["page"], 1);
    assert_eq!(body["data"]["lastPage"], 2);
    assert_eq!(body["data"]["data"].as_array().unwrap().len(), 2);
    assert_eq!(body["data"]["data"][0]["title"], "Job Three");
}

#[tokio::test]
async fn test_list_jobs_far_past_last_page_is_empty() {
    let app = create_test_app();
    let admin_token: String = app.admin_token().await;
    app.create_job(&admin_token, "Job One").await;

    let (status, body) = app
        .get(
            "/api/v1/job/list?page=4294967295&limit=4294967295",
            Some(&admin_token),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["total"], 1);
    assert_eq!(body["data"]["page"], 4_294_967_295_u64);
    assert_eq!(body["data"]["lastPage"], 1);
    assert!(body["data"]["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_list_with_applications_nests_applications() {
    let app = create_test_app();
    let admin_token: String = app.admin_token().await;
    let job_id: i64 = app.create_job(&admin_token, "Backend Engineer").await;
    app.post(
        "/api/v1/application/create",
        None,
        &application_body(job_id, "sam@example.com"),
    )
    .await;

    let (status, body) = app
        .get("/api/v1/job/list-with-applications", Some(&admin_token))
        .await;

    assert_eq!(status, StatusCode::OK);
    let job: &Value = &body["data"]["data"][0];
    assert_eq!(job["id"], job_id);
    assert_eq!(job["applications"][0]["email"], "sam@example.com");
}

#[tokio::test]
async fn test_update_job_requires_status() {
    let app = create_test_app();
    let admin_token: String = app.admin_token().await;
    let job_id: i64 = app.create_job(&admin_token, "Backend Engineer").await;

    let (status, _) = app
        .put(
            &format!("/api/v1/job/update/{job_id}"),
            Some(&admin_token),
            &job_body("Backend Engineer"),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let mut update: Value = job_body("Senior Backend Engineer");
    update["status"] = json!("closed");
    let (status, body) = app
        .put(
            &format!("/api/v1/job/update/{job_id}"),
            Some(&admin_token),
            &update,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["title"], "Senior Backend Engineer");
    assert_eq!(body["data"]["status"], "closed");
}

#[tokio::test]
async fn test_delete_job_with_applications_is_forbidden() {
    let app = create_test_app();
    let admin_token: String = app.admin_token().await;
    let job_id: i64 = app.create_job(&admin_token, "Backend Engineer").await;
    app.post(
        "/api/v1/application/create",
        None,
        &application_body(job_id, "sam@example.com"),
    )
    .await;

    let (status, body) = app
        .delete(&format!("/api/v1/job/delete/{job_id}"), Some(&admin_token))
        .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(
        body["message"],
        "Job has applications and cannot be deleted"
    );
}

#[tokio::test]
async fn test_delete_job_then_detail_is_not_found() {
    let app = create_test_app();
    let admin_token: String = app.admin_token().await;
    let job_id: i64 = app.create_job(&admin_token, "Backend Engineer").await;

    let (status, body) = app
        .delete(&format!("/api/v1/job/delete/{job_id}"), Some(&admin_token))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Job deleted successfully");

    let (status, body) = app
        .get(&format!("/api/v1/job/detail/{job_id}"), Some(&admin_token))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Job not found");
}

#[tokio::test]
async fn test_non_numeric_job_id_is_not_found() {
    let app = create_test_app();
    let admin_token: String = app.admin_token().await;

    let (status, body) = app
        .get("/api/v1/job/detail/abc", Some(&admin_token))
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Job not found");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = create_test_app();

    let (status, body) = app.get("/api/v1/nowhere", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Route not found");
}

#[tokio::test]
async fn test_responses_carry_security_headers() {
    let app = create_test_app();

    let response = app
        .router
        .clone()
        .oneshot(json_request("GET", "/api/v1/nowhere", None, None))
        .await
        .unwrap();

    let headers = response.headers();
    assert_eq!(headers[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
    assert_eq!(headers[header::X_FRAME_OPTIONS], "SAMEORIGIN");
    assert_eq!(headers[header::REFERRER_POLICY], "no-referrer");
    assert_eq!(headers["cross-origin-opener-policy"], "same-origin");
}
