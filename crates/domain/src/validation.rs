// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Field-level validation rules.
//!
//! Each validator checks a single field and reports the first violation
//! with a message suitable for returning to the client verbatim. Request
//! level validation composes these in the API layer.

use crate::error::DomainError;
use time::OffsetDateTime;

/// Minimum and maximum number of digits after the `+` in a phone number.
const PHONE_MIN_DIGITS: usize = 5;
const PHONE_MAX_DIGITS: usize = 17;

/// Validates that a required text field is present and long enough.
///
/// Length is measured in characters, not bytes.
///
/// # Arguments
///
/// * `field` - The request field name, used for error attribution
/// * `label` - The human-readable label used in the message
/// * `value` - The value to check
/// * `min` - The minimum number of characters
///
/// # Errors
///
/// Returns `DomainError::InvalidField` if the value is empty or shorter
/// than `min` characters.
pub fn validate_min_length(
    field: &'static str,
    label: &str,
    value: &str,
    min: usize,
) -> Result<(), DomainError> {
    if value.is_empty() {
        return Err(DomainError::InvalidField {
            field,
            message: format!("{label} cannot be an empty field"),
        });
    }

    if value.chars().count() < min {
        return Err(DomainError::InvalidField {
            field,
            message: format!("{label} should have a minimum length of {min}"),
        });
    }

    Ok(())
}

/// Validates an email address.
///
/// Requires exactly one `@`, a non-empty local part, and a dotted domain
/// with a top-level label of at least two characters.
///
/// # Errors
///
/// Returns `DomainError::InvalidField` if the address is malformed.
pub fn validate_email(field: &'static str, value: &str) -> Result<(), DomainError> {
    let invalid = || DomainError::InvalidField {
        field,
        message: String::from("Email must be a valid email"),
    };

    if value.is_empty() {
        return Err(DomainError::InvalidField {
            field,
            message: String::from("Email is a required field"),
        });
    }

    if value.chars().any(char::is_whitespace) {
        return Err(invalid());
    }

    let (local, domain) = value.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|label| label.is_empty()) {
        return Err(invalid());
    }

    let tld: &str = labels.last().copied().unwrap_or_default();
    if tld.chars().count() < 2 {
        return Err(invalid());
    }

    Ok(())
}

/// Validates a loosely formatted web address.
///
/// The scheme is optional. The host portion must contain a dot with at
/// least one character on each side; anything may follow the host.
///
/// # Errors
///
/// Returns `DomainError::InvalidField` if the value does not look like a URL.
pub fn validate_url(field: &'static str, label: &str, value: &str) -> Result<(), DomainError> {
    let invalid = || DomainError::InvalidField {
        field,
        message: format!("{label} must be a valid URL"),
    };

    if value.is_empty() {
        return Err(DomainError::InvalidField {
            field,
            message: format!("{label} is a required field"),
        });
    }

    if value.contains('\n') {
        return Err(invalid());
    }

    let without_scheme: &str = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"))
        .unwrap_or(value);

    let host: &str = without_scheme
        .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '.' || c == '-'))
        .next()
        .unwrap_or_default();

    let host_len: usize = host.len();
    let has_inner_dot: bool = host
        .char_indices()
        .any(|(index, c)| c == '.' && index > 0 && index + 1 < host_len);

    if has_inner_dot {
        Ok(())
    } else {
        Err(invalid())
    }
}

/// Validates an international phone number such as `+250788123456`.
///
/// # Errors
///
/// Returns `DomainError::InvalidField` unless the value is a `+` followed
/// by a country code and subscriber digits only.
pub fn validate_phone_number(field: &'static str, value: &str) -> Result<(), DomainError> {
    let digits: Option<&str> = value.strip_prefix('+');
    let valid: bool = digits.is_some_and(|digits| {
        (PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&digits.len())
            && digits.chars().all(|c| c.is_ascii_digit())
    });

    if valid {
        Ok(())
    } else {
        Err(DomainError::InvalidField {
            field,
            message: String::from(
                "Phone number must start with a country code (e.g., +250) and be between 5 to 15 digits long",
            ),
        })
    }
}

/// Validates that a deadline lies strictly in the future.
///
/// # Errors
///
/// Returns `DomainError::InvalidField` if `deadline` is not after `now`.
pub fn validate_future_deadline(
    deadline: OffsetDateTime,
    now: OffsetDateTime,
) -> Result<(), DomainError> {
    if deadline <= now {
        return Err(DomainError::InvalidField {
            field: "deadline",
            message: String::from("Deadline must be a future date"),
        });
    }
    Ok(())
}
