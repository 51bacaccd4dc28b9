// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod application_tests;

use job_board_audit::AuditRecord;
use job_board_domain::{
    JobStatus, JobType, RegistrationType, UserStatus, UserType, format_timestamp,
};
use time::{Duration, OffsetDateTime};

use crate::{
    ApplicationData, JobData, NewApplication, NewJob, NewUser, Persistence, UserData,
};

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("Failed to create in-memory persistence")
}

pub fn create_test_new_user(email: &str) -> NewUser {
    NewUser {
        names: String::from("Jane Admin"),
        email: email.to_string(),
        password_hash: Some(String::from("$2b$04$hash")),
        user_type: UserType::Admin,
        registration_type: RegistrationType::Manual,
        user_status: UserStatus::Active,
        profile_picture_url: String::from("https://cdn.example.com/jane.png"),
    }
}

pub fn create_test_user(persistence: &mut Persistence, email: &str) -> UserData {
    persistence
        .create_user(&create_test_new_user(email))
        .expect("Failed to create test user")
}

pub fn timestamp_in(offset: Duration) -> String {
    format_timestamp(OffsetDateTime::now_utc() + offset)
}

pub fn create_test_new_job(posted_by: i64, title: &str, deadline: &str) -> NewJob {
    NewJob {
        title: title.to_string(),
        description: String::from("Build and run the hiring pipeline backend."),
        company: String::from("Acme"),
        location: String::from("Kigali"),
        deadline: deadline.to_string(),
        job_type: JobType::FullTime,
        status: JobStatus::Open,
        posted_by,
    }
}

pub fn create_test_job(persistence: &mut Persistence, posted_by: i64, title: &str) -> JobData {
    let deadline: String = timestamp_in(Duration::days(30));
    persistence
        .create_job(&create_test_new_job(posted_by, title, &deadline))
        .expect("Failed to create test job")
}

pub fn create_test_new_application(job_id: i64, email: &str) -> NewApplication {
    NewApplication {
        job_id,
        names: String::from("Sam Seeker"),
        email: email.to_string(),
        phone_number: Some(String::from("+250788123456")),
        linked_in_profile: None,
        cover_letter: String::from("I would love to work on this team."),
        resume_url: String::from("https://cdn.example.com/sam.pdf"),
    }
}

pub fn create_test_application(
    persistence: &mut Persistence,
    job_id: i64,
    email: &str,
) -> ApplicationData {
    persistence
        .create_application(&create_test_new_application(job_id, email))
        .expect("Failed to create test application")
}

pub fn create_test_audit_record(done_by: &str, method: &str, status_code: u16) -> AuditRecord {
    AuditRecord {
        timestamp: timestamp_in(Duration::ZERO),
        method: method.to_string(),
        url: String::from("/api/v1/job/list"),
        status_code,
        user_agent: String::from("test-agent"),
        duration: String::from("5ms"),
        done_by: done_by.to_string(),
        ip_address: String::from("10.0.0.1"),
        activity: method.to_string(),
        details: String::from("Jobs retrieved successfully"),
        status: String::from("success"),
        response_body: String::from("InVua25vd24i"),
        request_body: String::from("InVua25vd24i"),
    }
}
