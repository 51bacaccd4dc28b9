// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use job_board_api::{Notification, NotificationDispatcher, TokenService, hash_password};
use job_board_domain::{PageRequest, RegistrationType, UserStatus, UserType};
use job_board_persistence::{AuditLogData, AuditLogFilter, NewUser, Persistence, UserData};
use serde_json::{Value, json};
use tokio::sync::mpsc::UnboundedReceiver;
use tower::ServiceExt;

use crate::routes::build_router;
use crate::state::{AppState, Settings};
use crate::uploads::LocalFileStore;

pub const TEST_SECRET: &str = "server-test-secret";
pub const TEST_BACKEND_URL: &str = "http://backend.test";
pub const TEST_PASSWORD: &str = "secret123";
pub const HIDDEN_ACTOR: &str = "monitor@example.com";

static UPLOAD_DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// A router over a fresh in-memory database.
pub struct TestApp {
    pub state: AppState,
    pub router: Router,
    pub notifications: UnboundedReceiver<Notification>,
    pub upload_dir: PathBuf,
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.upload_dir);
    }
}

pub fn create_test_app() -> TestApp {
    create_test_app_with_body_limit(1024 * 1024)
}

pub fn create_test_app_with_body_limit(max_body_bytes: usize) -> TestApp {
    let upload_dir: PathBuf = std::env::temp_dir().join(format!(
        "job-board-uploads-{}-{}",
        std::process::id(),
        UPLOAD_DIR_COUNTER.fetch_add(1, Ordering::SeqCst)
    ));
    let persistence: Persistence =
        Persistence::new_in_memory().expect("Failed to create in-memory persistence");
    let (dispatcher, notifications) = NotificationDispatcher::new("http://frontend.test", None);

    let state: AppState = AppState::new(
        persistence,
        TokenService::new(TEST_SECRET, 3600),
        dispatcher,
        LocalFileStore::new(upload_dir.clone()),
        Settings {
            backend_url: String::from(TEST_BACKEND_URL),
            audit_hidden_actor: Some(String::from(HIDDEN_ACTOR)),
            max_body_bytes,
        },
    );
    let router: Router = build_router(state.clone());

    TestApp {
        state,
        router,
        notifications,
        upload_dir,
    }
}

pub fn json_request(
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<&Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub fn multipart_request(field_name: &str, file_name: &str, contents: &str) -> Request<Body> {
    let boundary: &str = "job-board-test-boundary";
    let body: String = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"{field_name}\"; filename=\"{file_name}\"\r\n\
         Content-Type: text/plain\r\n\r\n\
         {contents}\r\n\
         --{boundary}--\r\n"
    );
    Request::builder()
        .method("POST")
        .uri("/api/v1/application/upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap()
}

impl TestApp {
    /// Sends a request and returns the status and the JSON body
    /// (`Value::Null` when the body is not JSON).
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status: StatusCode = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send(json_request("GET", uri, token, None)).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: &Value) -> (StatusCode, Value) {
        self.send(json_request("POST", uri, token, Some(body))).await
    }

    pub async fn put(&self, uri: &str, token: Option<&str>, body: &Value) -> (StatusCode, Value) {
        self.send(json_request("PUT", uri, token, Some(body))).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send(json_request("DELETE", uri, token, None)).await
    }

    /// Inserts an active manual account with `TEST_PASSWORD` and returns
    /// it with a bearer token.
    pub async fn create_user(&self, email: &str, user_type: UserType) -> (UserData, String) {
        let mut persistence = self.state.persistence.lock().await;
        let user: UserData = persistence
            .create_user(&NewUser {
                names: String::from("Test User"),
                email: email.to_string(),
                password_hash: Some(hash_password(TEST_PASSWORD).unwrap()),
                user_type,
                registration_type: RegistrationType::Manual,
                user_status: UserStatus::Active,
                profile_picture_url: String::from("https://cdn.example.com/u.png"),
            })
            .expect("Failed to create test user");
        drop(persistence);

        let token: String = self.state.tokens.issue_session(&user).unwrap();
        (user, token)
    }

    pub async fn admin_token(&self) -> String {
        self.create_user("admin@example.com", UserType::Admin).await.1
    }

    pub async fn job_seeker_token(&self) -> String {
        self.create_user("seeker@example.com", UserType::JobSeeker)
            .await
            .1
    }

    /// Creates a job through the API and returns its id.
    pub async fn create_job(&self, admin_token: &str, title: &str) -> i64 {
        let (status, body) = self
            .post("/api/v1/job/create", Some(admin_token), &job_body(title))
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["data"]["id"].as_i64().unwrap()
    }

    /// The number of audit rows written so far.
    pub async fn audit_log_count(&self) -> i64 {
        self.state
            .persistence
            .lock()
            .await
            .list_audit_logs(&AuditLogFilter::default(), PageRequest::default())
            .unwrap()
            .total
    }

    /// Waits for the detached audit writes to land and returns every row,
    /// oldest first.
    pub async fn wait_for_audit_logs(&self, expected: usize) -> Vec<AuditLogData> {
        for _ in 0..200 {
            let mut persistence = self.state.persistence.lock().await;
            let page = persistence
                .list_audit_logs(
                    &AuditLogFilter::default(),
                    PageRequest::new(Some(1), Some(1000)),
                )
                .unwrap();
            if page.data.len() >= expected {
                let mut logs: Vec<AuditLogData> = page
                    .data
                    .iter()
                    .map(|summary| {
                        persistence
                            .get_audit_log_by_id(summary.id)
                            .unwrap()
                            .unwrap()
                    })
                    .collect();
                logs.sort_by_key(|log| log.id);
                return logs;
            }
            drop(persistence);
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("expected {expected} audit logs to be written");
    }
}

pub fn job_body(title: &str) -> Value {
    json!({
        "title": title,
        "description": "Design and build backend services.",
        "company": "Acme",
        "location": "Kigali",
        "deadline": "2999-01-01",
        "type": "full-time"
    })
}

pub fn application_body(job_id: i64, email: &str) -> Value {
    json!({
        "jobId": job_id,
        "names": "Sam Seeker",
        "email": email,
        "phoneNumber": "+250788123456",
        "linkedInProfile": "https://linkedin.com/in/sam",
        "coverLetter": "I would love to join your team.",
        "resumeURL": "https://cdn.example.com/sam.pdf"
    })
}
