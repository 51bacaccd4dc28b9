// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use job_board_domain::{ApplicationStatus, JobStatus, JobType, RegistrationType, UserType};
use time::Duration;

use super::helpers::{create_test_application_request, create_test_job_request, now};
use crate::validation::{
    validate_application_update, validate_job, validate_new_application, validate_registration,
};
use crate::{ApiError, JobRequest, RegisterRequest, UpdateApplicationRequest};

fn create_test_register_request() -> RegisterRequest {
    RegisterRequest {
        names: Some(String::from("Jane Doe")),
        email: Some(String::from("jane@example.com")),
        password: Some(String::from("secret123")),
        user_type: Some(String::from("job-seeker")),
        registration_type: Some(String::from("manual")),
        profile_picture_url: None,
    }
}

fn message_of(err: ApiError) -> String {
    match err {
        ApiError::Validation { message, .. } => message,
        other => panic!("expected a validation error, got {other:?}"),
    }
}

#[test]
fn test_valid_registration_is_typed() {
    let registration = validate_registration(&create_test_register_request()).unwrap();

    assert_eq!(registration.user_type, UserType::JobSeeker);
    assert_eq!(registration.registration_type, RegistrationType::Manual);
    assert_eq!(registration.profile_picture_url, None);
}

#[test]
fn test_registration_messages_name_the_field() {
    let missing_names = RegisterRequest {
        names: None,
        ..create_test_register_request()
    };
    let short_names = RegisterRequest {
        names: Some(String::from("Jo")),
        ..create_test_register_request()
    };
    let bad_type = RegisterRequest {
        user_type: Some(String::from("hr")),
        ..create_test_register_request()
    };
    let bad_picture = RegisterRequest {
        profile_picture_url: Some(String::from("not a url")),
        ..create_test_register_request()
    };

    assert_eq!(
        message_of(validate_registration(&missing_names).unwrap_err()),
        "Names is a required field"
    );
    assert_eq!(
        message_of(validate_registration(&short_names).unwrap_err()),
        "Names should have a minimum length of 3"
    );
    assert!(
        message_of(validate_registration(&bad_type).unwrap_err())
            .starts_with("User type must be either admin or job-seeker")
    );
    assert_eq!(
        message_of(validate_registration(&bad_picture).unwrap_err()),
        "Profile picture URL must be a valid URL"
    );
}

#[test]
fn test_job_deadline_must_be_in_the_future() {
    let past = JobRequest {
        deadline: Some(String::from("2020-01-01")),
        ..create_test_job_request("Backend Engineer")
    };
    let garbage = JobRequest {
        deadline: Some(String::from("next tuesday")),
        ..create_test_job_request("Backend Engineer")
    };

    assert_eq!(
        message_of(validate_job(&past, false, now()).unwrap_err()),
        "Deadline must be a future date"
    );
    assert_eq!(
        message_of(validate_job(&garbage, false, now()).unwrap_err()),
        "Deadline must be a valid date"
    );
}

#[test]
fn test_job_status_defaults_on_create_only() {
    let request: JobRequest = create_test_job_request("Backend Engineer");

    let created = validate_job(&request, false, now()).unwrap();
    let updated = validate_job(&request, true, now());

    assert_eq!(created.status, JobStatus::Open);
    assert_eq!(created.job_type, JobType::FullTime);
    assert_eq!(
        message_of(updated.unwrap_err()),
        "Job status is a required field"
    );
}

#[test]
fn test_job_deadline_is_canonicalized() {
    let request = JobRequest {
        deadline: Some(String::from("2999-06-30")),
        ..create_test_job_request("Backend Engineer")
    };

    let job = validate_job(&request, false, now() - Duration::days(1)).unwrap();

    assert_eq!(job.deadline, "2999-06-30T00:00:00.000Z");
}

#[test]
fn test_application_requires_job_and_contact() {
    let mut request = create_test_application_request(1, "sam@example.com");
    request.job_id = None;
    assert_eq!(
        message_of(validate_new_application(&request).unwrap_err()),
        "Job ID is a required field"
    );

    let mut request = create_test_application_request(1, "sam@example.com");
    request.phone_number = Some(String::from("0788123456"));
    assert!(
        message_of(validate_new_application(&request).unwrap_err())
            .starts_with("Phone number must start with a country code")
    );

    let mut request = create_test_application_request(1, "sam@example.com");
    request.phone_number = None;
    request.linked_in_profile = None;
    let application = validate_new_application(&request).unwrap();
    assert_eq!(application.phone_number, None);
    assert_eq!(application.linked_in_profile, None);
}

#[test]
fn test_application_update_checks_only_present_fields() {
    let status_only = UpdateApplicationRequest {
        status: Some(String::from("offer-made")),
        ..UpdateApplicationRequest::default()
    };
    let bad_status = UpdateApplicationRequest {
        status: Some(String::from("hired")),
        ..UpdateApplicationRequest::default()
    };

    let update = validate_application_update(&status_only).unwrap();

    assert_eq!(update.status, Some(ApplicationStatus::OfferMade));
    assert_eq!(update.email, None);
    assert!(validate_application_update(&bad_status).is_err());
}
