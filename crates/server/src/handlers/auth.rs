// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use axum::extract::{Path, State};
use job_board_api::{
    ActivateAccountRequest, ForgotPasswordRequest, LoginRequest, LoginResponse, RegisterRequest,
    ResetPasswordRequest, SocialLoginRequest, UserResponse, activate_account, find_user_by_id,
    forgot_password, login, me, register, reset_password, social_login,
};
use tracing::info;

use crate::error::{ApiResponse, JsonBody, created, ok, ok_message, parse_id};
use crate::session::SessionUser;
use crate::state::AppState;

/// Handler for POST `/api/v1/auth/register`.
pub async fn handle_register(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<RegisterRequest>,
) -> ApiResponse<UserResponse> {
    info!("Handling register request");
    let mut persistence = state.persistence.lock().await;
    let user: UserResponse = register(
        &mut persistence,
        &state.tokens,
        &state.notifications,
        &request,
    )?;
    drop(persistence);

    created("User registered successfully", user)
}

/// Handler for POST `/api/v1/auth/login`.
pub async fn handle_login(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> ApiResponse<LoginResponse> {
    info!("Handling login request");
    let mut persistence = state.persistence.lock().await;
    let response: LoginResponse = login(&mut persistence, &state.tokens, &request)?;
    drop(persistence);

    ok("Login successful", response)
}

/// Handler for POST `/api/v1/auth/social-login`.
pub async fn handle_social_login(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<SocialLoginRequest>,
) -> ApiResponse<LoginResponse> {
    info!("Handling social login request");
    let mut persistence = state.persistence.lock().await;
    let response: LoginResponse = social_login(&mut persistence, &state.tokens, &request)?;
    drop(persistence);

    ok("Login successful", response)
}

/// Handler for POST `/api/v1/auth/activate`.
pub async fn handle_activate(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<ActivateAccountRequest>,
) -> ApiResponse<UserResponse> {
    info!("Handling account activation request");
    let mut persistence = state.persistence.lock().await;
    let user: UserResponse = activate_account(&mut persistence, &state.tokens, &request)?;
    drop(persistence);

    ok("Account activated successfully", user)
}

/// Handler for POST `/api/v1/auth/forgot-password`.
pub async fn handle_forgot_password(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<ForgotPasswordRequest>,
) -> ApiResponse<()> {
    info!("Handling forgot password request");
    let mut persistence = state.persistence.lock().await;
    forgot_password(
        &mut persistence,
        &state.tokens,
        &state.notifications,
        &request,
    )?;
    drop(persistence);

    ok_message("Password reset link sent to your email")
}

/// Handler for POST `/api/v1/auth/reset-password`.
pub async fn handle_reset_password(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<ResetPasswordRequest>,
) -> ApiResponse<()> {
    info!("Handling reset password request");
    let mut persistence = state.persistence.lock().await;
    reset_password(&mut persistence, &state.tokens, &request)?;
    drop(persistence);

    ok_message("Password reset successfully")
}

/// Handler for GET `/api/v1/auth/me`.
pub async fn handle_me(
    State(state): State<AppState>,
    SessionUser(identity): SessionUser,
) -> ApiResponse<UserResponse> {
    info!(user_id = identity.id, "Handling me request");
    let mut persistence = state.persistence.lock().await;
    let user: UserResponse = me(&mut persistence, &identity)?;
    drop(persistence);

    ok("User retrieved successfully", user)
}

/// Handler for GET `/api/v1/auth/user/{id}`.
pub async fn handle_get_user(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResponse<UserResponse> {
    let user_id: i64 = parse_id(&raw_id, "User")?;
    info!(user_id, "Handling get user request");
    let mut persistence = state.persistence.lock().await;
    let user: UserResponse = find_user_by_id(&mut persistence, user_id)?;
    drop(persistence);

    ok("User retrieved successfully", user)
}
