// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request validation.
//!
//! Each validator turns a raw request into typed values or reports the
//! first invalid field, in declaration order.

use std::str::FromStr;

use job_board_domain::{
    ApplicationStatus, DomainError, JobStatus, JobType, RegistrationType, UserType,
    format_timestamp, parse_timestamp, validate_email, validate_future_deadline,
    validate_min_length, validate_phone_number, validate_url,
};
use job_board_persistence::{ApplicationUpdate, NewApplication};
use time::OffsetDateTime;

use crate::error::{ApiError, translate_domain_error};
use crate::password_policy::PasswordPolicy;
use crate::request_response::{
    CreateApplicationRequest, JobRequest, LoginRequest, RegisterRequest, SocialLoginRequest,
    UpdateApplicationRequest,
};

/// A registration that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidRegistration {
    pub names: String,
    pub email: String,
    pub password: String,
    pub user_type: UserType,
    pub registration_type: RegistrationType,
    pub profile_picture_url: Option<String>,
}

/// A social login that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidSocialLogin {
    pub names: String,
    pub email: String,
    pub user_type: UserType,
    pub profile_picture_url: String,
}

/// Job fields that passed validation. The deadline is canonical.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidJob {
    pub title: String,
    pub description: String,
    pub company: String,
    pub location: String,
    pub deadline: String,
    pub job_type: JobType,
    pub status: JobStatus,
}

fn required<'a>(
    field: &'static str,
    label: &str,
    value: Option<&'a str>,
) -> Result<&'a str, ApiError> {
    value.ok_or_else(|| ApiError::validation(field, format!("{label} is a required field")))
}

fn text(
    field: &'static str,
    label: &str,
    value: Option<&str>,
    min: usize,
) -> Result<String, ApiError> {
    let value: &str = required(field, label, value)?;
    validate_min_length(field, label, value, min).map_err(translate_domain_error)?;
    Ok(value.to_string())
}

fn email(field: &'static str, value: Option<&str>) -> Result<String, ApiError> {
    let value: &str = required(field, "Email", value)?;
    validate_email(field, value).map_err(translate_domain_error)?;
    Ok(value.to_string())
}

fn url(field: &'static str, label: &str, value: Option<&str>) -> Result<String, ApiError> {
    let value: &str = required(field, label, value)?;
    validate_url(field, label, value).map_err(translate_domain_error)?;
    Ok(value.to_string())
}

fn choice<T>(field: &'static str, label: &str, value: Option<&str>) -> Result<T, ApiError>
where
    T: FromStr<Err = DomainError>,
{
    let value: &str = required(field, label, value)?;
    T::from_str(value).map_err(|e| ApiError::validation(field, e.to_string()))
}

fn optional_url(
    field: &'static str,
    label: &str,
    value: Option<&str>,
) -> Result<Option<String>, ApiError> {
    value.map(|v| url(field, label, Some(v))).transpose()
}

fn optional_phone(value: Option<&str>) -> Result<Option<String>, ApiError> {
    value
        .map(|v| {
            validate_phone_number("phoneNumber", v).map_err(translate_domain_error)?;
            Ok(v.to_string())
        })
        .transpose()
}

/// Validates a registration request.
///
/// # Errors
///
/// Returns `ApiError::Validation` naming the first invalid field.
pub fn validate_registration(request: &RegisterRequest) -> Result<ValidRegistration, ApiError> {
    let names: String = text("names", "Names", request.names.as_deref(), 3)?;
    let email: String = email("email", request.email.as_deref())?;
    let password: String = PasswordPolicy::default()
        .validate(request.password.as_deref())?
        .to_string();
    let user_type: UserType = choice("type", "User type", request.user_type.as_deref())?;
    let registration_type: RegistrationType = choice(
        "registrationType",
        "Registration type",
        request.registration_type.as_deref(),
    )?;
    let profile_picture_url: Option<String> = optional_url(
        "profilePictureURL",
        "Profile picture URL",
        request.profile_picture_url.as_deref(),
    )?;

    Ok(ValidRegistration {
        names,
        email,
        password,
        user_type,
        registration_type,
        profile_picture_url,
    })
}

/// Validates a login request and returns the email and password.
///
/// # Errors
///
/// Returns `ApiError::Validation` naming the first invalid field.
pub fn validate_login(request: &LoginRequest) -> Result<(String, String), ApiError> {
    let email: String = email("email", request.email.as_deref())?;
    let password: String = PasswordPolicy::default()
        .validate(request.password.as_deref())?
        .to_string();
    Ok((email, password))
}

/// Validates a social login request.
///
/// # Errors
///
/// Returns `ApiError::Validation` naming the first invalid field.
pub fn validate_social_login(request: &SocialLoginRequest) -> Result<ValidSocialLogin, ApiError> {
    Ok(ValidSocialLogin {
        names: text("names", "Names", request.names.as_deref(), 3)?,
        email: email("email", request.email.as_deref())?,
        user_type: choice("role", "Role", request.role.as_deref())?,
        profile_picture_url: url(
            "profilePictureURL",
            "Profile picture URL",
            request.profile_picture_url.as_deref(),
        )?,
    })
}

/// Validates an email-only request such as forgot-password.
///
/// # Errors
///
/// Returns `ApiError::Validation` if the address is missing or malformed.
pub fn validate_email_request(value: Option<&str>) -> Result<String, ApiError> {
    email("email", value)
}

/// Validates a token field.
///
/// # Errors
///
/// Returns `ApiError::Validation` if the token is missing or empty.
pub fn validate_token_field(value: Option<&str>) -> Result<String, ApiError> {
    let token: &str = required("token", "Token", value)?;
    if token.is_empty() {
        return Err(ApiError::validation("token", "Token cannot be an empty field"));
    }
    Ok(token.to_string())
}

/// Validates a job request.
///
/// # Arguments
///
/// * `request` - The raw request
/// * `require_status` - Whether `status` must be present; when it is not
///   required a missing status means `open`
/// * `now` - The reference time for the future-deadline rule
///
/// # Errors
///
/// Returns `ApiError::Validation` naming the first invalid field.
pub fn validate_job(
    request: &JobRequest,
    require_status: bool,
    now: OffsetDateTime,
) -> Result<ValidJob, ApiError> {
    let title: String = text("title", "Job title", request.title.as_deref(), 3)?;
    let description: String = text(
        "description",
        "Job description",
        request.description.as_deref(),
        10,
    )?;
    let company: String = text("company", "Company name", request.company.as_deref(), 3)?;
    let location: String = text("location", "Job location", request.location.as_deref(), 3)?;

    let raw_deadline: &str = required("deadline", "Deadline", request.deadline.as_deref())?;
    let deadline: OffsetDateTime = parse_timestamp(raw_deadline)
        .map_err(|_| ApiError::validation("deadline", "Deadline must be a valid date"))?;
    validate_future_deadline(deadline, now).map_err(translate_domain_error)?;

    let job_type: JobType = choice("type", "Job type", request.job_type.as_deref())?;
    let status: JobStatus = match (request.status.as_deref(), require_status) {
        (None, false) => JobStatus::default(),
        (value, _) => choice("status", "Job status", value)?,
    };

    Ok(ValidJob {
        title,
        description,
        company,
        location,
        deadline: format_timestamp(deadline),
        job_type,
        status,
    })
}

/// Validates an application submission.
///
/// # Errors
///
/// Returns `ApiError::Validation` naming the first invalid field.
pub fn validate_new_application(
    request: &CreateApplicationRequest,
) -> Result<NewApplication, ApiError> {
    let job_id: i64 = request
        .job_id
        .ok_or_else(|| ApiError::validation("jobId", "Job ID is a required field"))?;

    Ok(NewApplication {
        job_id,
        names: text("names", "Names", request.names.as_deref(), 3)?,
        email: email("email", request.email.as_deref())?,
        phone_number: optional_phone(request.phone_number.as_deref())?,
        linked_in_profile: optional_url(
            "linkedInProfile",
            "LinkedIn Profile",
            request.linked_in_profile.as_deref(),
        )?,
        cover_letter: text(
            "coverLetter",
            "Cover letter",
            request.cover_letter.as_deref(),
            10,
        )?,
        resume_url: url("resumeURL", "Resume URL", request.resume_url.as_deref())?,
    })
}

/// Validates a partial application update. Only present fields are checked.
///
/// # Errors
///
/// Returns `ApiError::Validation` naming the first invalid field.
pub fn validate_application_update(
    request: &UpdateApplicationRequest,
) -> Result<ApplicationUpdate, ApiError> {
    Ok(ApplicationUpdate {
        names: request
            .names
            .as_deref()
            .map(|v| text("names", "Names", Some(v), 3))
            .transpose()?,
        email: request
            .email
            .as_deref()
            .map(|v| email("email", Some(v)))
            .transpose()?,
        phone_number: optional_phone(request.phone_number.as_deref())?,
        linked_in_profile: optional_url(
            "linkedInProfile",
            "LinkedIn Profile",
            request.linked_in_profile.as_deref(),
        )?,
        cover_letter: request
            .cover_letter
            .as_deref()
            .map(|v| text("coverLetter", "Cover letter", Some(v), 10))
            .transpose()?,
        resume_url: optional_url("resumeURL", "Resume URL", request.resume_url.as_deref())?,
        status: request
            .status
            .as_deref()
            .map(|v| {
                ApplicationStatus::from_str(v)
                    .map_err(|e| ApiError::validation("status", e.to_string()))
            })
            .transpose()?,
    })
}
