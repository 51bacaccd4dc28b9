// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::{Duration, OffsetDateTime};

use crate::{
    DomainError, validate_email, validate_future_deadline, validate_min_length,
    validate_phone_number, validate_url,
};

fn message_of(result: Result<(), DomainError>) -> String {
    match result {
        Err(DomainError::InvalidField { message, .. }) => message,
        other => panic!("expected InvalidField, got {other:?}"),
    }
}

#[test]
fn test_min_length_counts_characters() {
    assert!(validate_min_length("names", "Names", "Zoë", 3).is_ok());
    assert_eq!(
        message_of(validate_min_length("names", "Names", "Jo", 3)),
        "Names should have a minimum length of 3"
    );
    assert_eq!(
        message_of(validate_min_length("names", "Names", "", 3)),
        "Names cannot be an empty field"
    );
}

#[test]
fn test_email_validation() {
    assert!(validate_email("email", "jane@example.com").is_ok());
    assert!(validate_email("email", "jane.doe+jobs@mail.example.rw").is_ok());

    for bad in [
        "jane",
        "jane@",
        "@example.com",
        "jane@example",
        "jane@example.c",
        "jane@@example.com",
        "ja ne@example.com",
        "jane@example..com",
    ] {
        assert_eq!(
            message_of(validate_email("email", bad)),
            "Email must be a valid email",
            "{bad} should be rejected"
        );
    }
}

#[test]
fn test_url_validation_accepts_optional_scheme() {
    assert!(validate_url("resumeURL", "Resume URL", "https://cdn.example.com/cv.pdf").is_ok());
    assert!(validate_url("resumeURL", "Resume URL", "example.com").is_ok());
    assert!(validate_url("resumeURL", "Resume URL", "http://linkedin.com/in/jane?x=1").is_ok());
}

#[test]
fn test_url_validation_rejects_hosts_without_dot() {
    assert_eq!(
        message_of(validate_url("resumeURL", "Resume URL", "https://localhost/cv")),
        "Resume URL must be a valid URL"
    );
    assert!(validate_url("resumeURL", "Resume URL", ".com").is_err());
    assert!(validate_url("resumeURL", "Resume URL", "example.").is_err());
}

#[test]
fn test_phone_number_validation() {
    assert!(validate_phone_number("phoneNumber", "+250788123456").is_ok());
    assert!(validate_phone_number("phoneNumber", "+12345").is_ok());
    assert!(validate_phone_number("phoneNumber", "250788123456").is_err());
    assert!(validate_phone_number("phoneNumber", "+2507881").is_ok());
    assert!(validate_phone_number("phoneNumber", "+1234").is_err());
    assert!(validate_phone_number("phoneNumber", "+25078812345678901").is_ok());
    assert!(validate_phone_number("phoneNumber", "+250788123456789012").is_err());
    assert!(validate_phone_number("phoneNumber", "+250-788-123").is_err());
}

#[test]
fn test_deadline_must_be_in_future() {
    let now: OffsetDateTime = OffsetDateTime::now_utc();
    assert!(validate_future_deadline(now + Duration::days(1), now).is_ok());
    assert_eq!(
        message_of(validate_future_deadline(now - Duration::days(1), now)),
        "Deadline must be a future date"
    );
    assert!(validate_future_deadline(now, now).is_err());
}
