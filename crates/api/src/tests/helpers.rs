// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use job_board_domain::{RegistrationType, UserStatus, UserType, format_timestamp};
use job_board_persistence::{NewUser, Persistence, UserData};
use time::{Duration, OffsetDateTime};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::{
    CreateApplicationRequest, Identity, JobRequest, Notification, NotificationDispatcher,
    TokenService,
};

pub const TEST_SECRET: &str = "test-token-secret";
pub const TEST_FRONTEND_URL: &str = "http://frontend.test";

pub fn setup_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("Failed to create in-memory persistence")
}

pub fn create_test_tokens() -> TokenService {
    TokenService::new(TEST_SECRET, 3600)
}

pub fn create_test_dispatcher() -> (NotificationDispatcher, UnboundedReceiver<Notification>) {
    NotificationDispatcher::new(TEST_FRONTEND_URL, Some(String::from("http://logo.test/l.png")))
}

pub fn drain(receiver: &mut UnboundedReceiver<Notification>) -> Vec<Notification> {
    let mut notifications: Vec<Notification> = Vec::new();
    while let Ok(notification) = receiver.try_recv() {
        notifications.push(notification);
    }
    notifications
}

/// Inserts a user directly, without a password.
pub fn create_test_user(
    persistence: &mut Persistence,
    email: &str,
    user_type: UserType,
) -> UserData {
    persistence
        .create_user(&NewUser {
            names: String::from("Test User"),
            email: email.to_string(),
            password_hash: None,
            user_type,
            registration_type: RegistrationType::OAuth,
            user_status: UserStatus::Active,
            profile_picture_url: String::from("https://cdn.example.com/u.png"),
        })
        .expect("Failed to create test user")
}

pub fn identity_for(user: &UserData) -> Identity {
    Identity {
        id: user.id,
        email: user.email.clone(),
        role: user.user_type,
        names: user.names.clone(),
        profile_picture_url: user.profile_picture_url.clone(),
    }
}

pub fn create_test_admin(persistence: &mut Persistence) -> Identity {
    let admin: UserData = create_test_user(persistence, "admin@example.com", UserType::Admin);
    identity_for(&admin)
}

pub fn now() -> OffsetDateTime {
    OffsetDateTime::now_utc()
}

pub fn create_test_job_request(title: &str) -> JobRequest {
    JobRequest {
        title: Some(title.to_string()),
        description: Some(String::from("Design and build backend services.")),
        company: Some(String::from("Acme")),
        location: Some(String::from("Kigali")),
        deadline: Some(format_timestamp(now() + Duration::days(30))),
        job_type: Some(String::from("full-time")),
        status: None,
    }
}

pub fn create_test_application_request(job_id: i64, email: &str) -> CreateApplicationRequest {
    CreateApplicationRequest {
        job_id: Some(job_id),
        names: Some(String::from("Sam Seeker")),
        email: Some(email.to_string()),
        phone_number: Some(String::from("+250788123456")),
        linked_in_profile: Some(String::from("https://linkedin.com/in/sam")),
        cover_letter: Some(String::from("I would love to join your team.")),
        resume_url: Some(String::from("https://cdn.example.com/sam.pdf")),
    }
}
