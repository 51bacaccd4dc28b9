// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use job_board_domain::UserType;

use super::helpers::{TEST_SECRET, create_test_tokens, create_test_user, setup_test_persistence};
use crate::{SessionClaims, TokenError, TokenService};

#[test]
fn test_session_claims_carry_identity() {
    let mut persistence = setup_test_persistence();
    let user = create_test_user(&mut persistence, "admin@example.com", UserType::Admin);
    let tokens: TokenService = create_test_tokens();

    let claims: SessionClaims = tokens
        .verify_session(&tokens.issue_session(&user).unwrap())
        .unwrap();

    assert_eq!(claims.id, user.id);
    assert_eq!(claims.email, "admin@example.com");
    assert_eq!(claims.user_type, UserType::Admin);
    assert_eq!(claims.names, user.names);
    assert_eq!(claims.exp - claims.iat, 3600);
}

#[test]
fn test_email_token_round_trips_address() {
    let tokens: TokenService = create_test_tokens();

    let token: String = tokens.issue_email("reset@example.com").unwrap();

    assert_eq!(tokens.verify_email(&token).unwrap(), "reset@example.com");
}

#[test]
fn test_expired_token_is_rejected() {
    let tokens: TokenService = TokenService::new(TEST_SECRET, -120);

    let token: String = tokens.issue_email("late@example.com").unwrap();

    assert!(matches!(
        tokens.verify_email(&token),
        Err(TokenError::Invalid(_))
    ));
}

#[test]
fn test_token_expired_seconds_ago_is_rejected() {
    let tokens: TokenService = TokenService::new(TEST_SECRET, -5);

    let email_token: String = tokens.issue_email("late@example.com").unwrap();
    assert!(matches!(
        tokens.verify_email(&email_token),
        Err(TokenError::Invalid(_))
    ));
}

#[test]
fn test_session_expired_seconds_ago_is_rejected() {
    let mut persistence = setup_test_persistence();
    let user = create_test_user(&mut persistence, "late@example.com", UserType::JobSeeker);
    let tokens: TokenService = TokenService::new(TEST_SECRET, -5);

    let token: String = tokens.issue_session(&user).unwrap();

    assert!(matches!(
        tokens.verify_session(&token),
        Err(TokenError::Invalid(_))
    ));
}

#[test]
fn test_tampered_token_is_rejected() {
    let tokens: TokenService = create_test_tokens();
    let token: String = tokens.issue_email("reset@example.com").unwrap();

    let mut parts: Vec<String> = token.split('.').map(String::from).collect();
    parts[2] = parts[2].chars().rev().collect();
    let tampered: String = parts.join(".");

    assert!(tokens.verify_email(&tampered).is_err());
    assert!(tokens.verify_email("not.a.token").is_err());
}

#[test]
fn test_email_token_is_not_a_session() {
    let tokens: TokenService = create_test_tokens();
    let token: String = tokens.issue_email("reset@example.com").unwrap();

    assert!(tokens.verify_session(&token).is_err());
}
