// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Account handlers: registration, login, activation, and password reset.

use job_board_domain::{RegistrationType, UserStatus, UserType};
use job_board_persistence::{NewUser, Persistence, UserData};
use tracing::{error, info, warn};

use crate::auth::Identity;
use crate::error::{ApiError, translate_persistence_error};
use crate::notifier::NotificationDispatcher;
use crate::password_policy::{
    PasswordPolicy, generate_password, hash_password, verify_password,
};
use crate::request_response::{
    ActivateAccountRequest, ForgotPasswordRequest, LoginRequest, LoginResponse, RegisterRequest,
    ResetPasswordRequest, SocialLoginRequest, UserResponse,
};
use crate::token::TokenService;
use crate::validation::{
    ValidRegistration, ValidSocialLogin, validate_email_request, validate_login,
    validate_registration, validate_social_login, validate_token_field,
};

/// Picture assigned to accounts registered without one.
pub const DEFAULT_PROFILE_PICTURE_URL: &str =
    "https://cdn-icons-png.flaticon.com/512/149/149071.png";

/// Display name of the seeded administrator.
pub const SEEDED_ADMIN_NAMES: &str = "Super Admin";

fn invalid_credentials() -> ApiError {
    ApiError::Unauthenticated {
        reason: String::from("Invalid credentials"),
    }
}

fn user_not_found() -> ApiError {
    ApiError::not_found("User")
}

fn find_user_or_not_found(
    persistence: &mut Persistence,
    email: &str,
) -> Result<UserData, ApiError> {
    persistence
        .get_user_by_email(email)
        .map_err(translate_persistence_error)?
        .ok_or_else(user_not_found)
}

/// Registers an account.
///
/// Duplicate addresses are refused for manual registrations. An identity
/// provider registration for a known address returns the existing account.
/// Manual accounts start `pending` and are sent an activation link.
///
/// # Errors
///
/// Returns an error if validation fails, the address is taken, or
/// persistence fails.
pub fn register(
    persistence: &mut Persistence,
    tokens: &TokenService,
    notifications: &NotificationDispatcher,
    request: &RegisterRequest,
) -> Result<UserResponse, ApiError> {
    let registration: ValidRegistration = validate_registration(request)?;

    if let Some(existing) = persistence
        .get_user_by_email(&registration.email)
        .map_err(translate_persistence_error)?
    {
        if registration.registration_type == RegistrationType::OAuth {
            info!(email = %registration.email, "Identity provider registration for existing user");
            return Ok(UserResponse::from(existing));
        }
        warn!(email = %registration.email, "Registration refused: user already exists");
        return Err(ApiError::Conflict {
            message: String::from("User already exists, please login or reset your password"),
        });
    }

    let password_hash: String = hash_password(&registration.password)?;
    let user: UserData = persistence
        .create_user(&NewUser {
            names: registration.names,
            email: registration.email,
            password_hash: Some(password_hash),
            user_type: registration.user_type,
            registration_type: registration.registration_type,
            user_status: registration.registration_type.initial_status(),
            profile_picture_url: registration
                .profile_picture_url
                .unwrap_or_else(|| String::from(DEFAULT_PROFILE_PICTURE_URL)),
        })
        .map_err(translate_persistence_error)?;

    if user.registration_type == RegistrationType::Manual {
        match tokens.issue_email(&user.email) {
            Ok(token) => notifications.account_activation(&user.email, &user.names, &token),
            Err(e) => error!(error = %e, email = %user.email, "Failed to issue activation token"),
        }
    }

    info!(user_id = user.id, email = %user.email, "User registered");
    Ok(UserResponse::from(user))
}

/// Logs in with email and password and issues a session token.
///
/// Accounts without a password hash (identity provider accounts) cannot
/// log in this way.
///
/// # Errors
///
/// Returns `Unauthenticated` with "Invalid credentials" for an unknown
/// address or a wrong password.
pub fn login(
    persistence: &mut Persistence,
    tokens: &TokenService,
    request: &LoginRequest,
) -> Result<LoginResponse, ApiError> {
    let (email, password) = validate_login(request)?;

    let user: UserData = persistence
        .get_user_by_email(&email)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| {
            warn!(email = %email, "Login failed: unknown email");
            invalid_credentials()
        })?;

    let verified: bool = user
        .password_hash
        .as_deref()
        .is_some_and(|hash| verify_password(&password, hash));
    if !verified {
        warn!(email = %email, "Login failed: invalid credentials");
        return Err(invalid_credentials());
    }

    let token: String = tokens.issue_session(&user)?;
    info!(user_id = user.id, "User logged in");
    Ok(LoginResponse { token })
}

/// Logs in through an identity provider, creating the account on first use.
///
/// # Errors
///
/// Returns an error if validation or persistence fails.
pub fn social_login(
    persistence: &mut Persistence,
    tokens: &TokenService,
    request: &SocialLoginRequest,
) -> Result<LoginResponse, ApiError> {
    let social: ValidSocialLogin = validate_social_login(request)?;

    let existing: Option<UserData> = persistence
        .get_user_by_email(&social.email)
        .map_err(translate_persistence_error)?;

    let user: UserData = if let Some(user) = existing {
        user
    } else {
        let created: UserData = persistence
            .create_user(&NewUser {
                names: social.names,
                email: social.email,
                password_hash: None,
                user_type: social.user_type,
                registration_type: RegistrationType::OAuth,
                user_status: RegistrationType::OAuth.initial_status(),
                profile_picture_url: social.profile_picture_url,
            })
            .map_err(translate_persistence_error)?;
        info!(user_id = created.id, "User registered through identity provider");
        created
    };

    let token: String = tokens.issue_session(&user)?;
    Ok(LoginResponse { token })
}

/// Returns the account of the authenticated caller.
///
/// # Errors
///
/// Returns `NotFound` if the account no longer exists.
pub fn me(persistence: &mut Persistence, identity: &Identity) -> Result<UserResponse, ApiError> {
    find_user_by_email(persistence, &identity.email)?.ok_or_else(user_not_found)
}

/// Looks up a user by email, without sensitive fields.
///
/// # Errors
///
/// Returns an error if persistence fails.
pub fn find_user_by_email(
    persistence: &mut Persistence,
    email: &str,
) -> Result<Option<UserResponse>, ApiError> {
    Ok(persistence
        .get_user_by_email(email)
        .map_err(translate_persistence_error)?
        .map(UserResponse::from))
}

/// Looks up a user by id, without sensitive fields.
///
/// # Errors
///
/// Returns `NotFound` if no such user exists.
pub fn find_user_by_id(
    persistence: &mut Persistence,
    user_id: i64,
) -> Result<UserResponse, ApiError> {
    persistence
        .get_user_by_id(user_id)
        .map_err(translate_persistence_error)?
        .map(UserResponse::from)
        .ok_or_else(user_not_found)
}

/// Activates an account from an emailed token.
///
/// # Errors
///
/// Returns `Unauthenticated` for a bad token and `NotFound` if the address
/// has no account.
pub fn activate_account(
    persistence: &mut Persistence,
    tokens: &TokenService,
    request: &ActivateAccountRequest,
) -> Result<UserResponse, ApiError> {
    let token: String = validate_token_field(request.token.as_deref())?;
    let email: String = tokens.verify_email(&token)?;

    let user: UserData = find_user_or_not_found(persistence, &email)?;
    let activated: UserData = persistence
        .update_user_status(user.id, UserStatus::Active)
        .map_err(translate_persistence_error)?;

    info!(user_id = activated.id, "Account activated");
    Ok(UserResponse::from(activated))
}

/// Starts a password reset.
///
/// The account is set `inactive` until the reset completes, and a reset
/// link carrying an email token is sent.
///
/// # Errors
///
/// Returns `NotFound` if the address has no account.
pub fn forgot_password(
    persistence: &mut Persistence,
    tokens: &TokenService,
    notifications: &NotificationDispatcher,
    request: &ForgotPasswordRequest,
) -> Result<(), ApiError> {
    let email: String = validate_email_request(request.email.as_deref())?;
    let user: UserData = find_user_or_not_found(persistence, &email)?;

    persistence
        .update_user_status(user.id, UserStatus::Inactive)
        .map_err(translate_persistence_error)?;

    let token: String = tokens.issue_email(&user.email)?;
    notifications.password_reset(&user.email, &user.names, &token);

    info!(user_id = user.id, "Password reset requested");
    Ok(())
}

/// Completes a password reset and reactivates the account.
///
/// # Errors
///
/// Returns `Unauthenticated` for a bad token, `Validation` for a bad
/// password, and `NotFound` if the address has no account.
pub fn reset_password(
    persistence: &mut Persistence,
    tokens: &TokenService,
    request: &ResetPasswordRequest,
) -> Result<(), ApiError> {
    let token: String = validate_token_field(request.token.as_deref())?;
    let new_password: &str = PasswordPolicy::default().validate(request.new_password.as_deref())?;
    let email: String = tokens.verify_email(&token)?;

    let user: UserData = find_user_or_not_found(persistence, &email)?;
    let password_hash: String = hash_password(new_password)?;
    persistence
        .update_user_password(user.id, &password_hash, UserStatus::Active)
        .map_err(translate_persistence_error)?;

    info!(user_id = user.id, "Password reset completed");
    Ok(())
}

/// Creates the first administrator if no account uses `email`.
///
/// The account gets a random password, which is sent to the address.
///
/// # Returns
///
/// The new account, or `None` if the address was already registered.
///
/// # Errors
///
/// Returns an error if hashing or persistence fails.
pub fn seed_first_admin(
    persistence: &mut Persistence,
    notifications: &NotificationDispatcher,
    email: &str,
) -> Result<Option<UserResponse>, ApiError> {
    if persistence
        .get_user_by_email(email)
        .map_err(translate_persistence_error)?
        .is_some()
    {
        info!(email = %email, "First admin already present");
        return Ok(None);
    }

    let password: String = generate_password();
    let admin: UserData = persistence
        .create_user(&NewUser {
            names: String::from(SEEDED_ADMIN_NAMES),
            email: email.to_string(),
            password_hash: Some(hash_password(&password)?),
            user_type: UserType::Admin,
            registration_type: RegistrationType::Manual,
            user_status: UserStatus::Active,
            profile_picture_url: String::from(DEFAULT_PROFILE_PICTURE_URL),
        })
        .map_err(translate_persistence_error)?;

    notifications.admin_seeded(&admin.email, &admin.names, &password);
    info!(user_id = admin.id, email = %admin.email, "First admin created");
    Ok(Some(UserResponse::from(admin)))
}
