// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    ApiError, GENERATED_PASSWORD_LENGTH, PasswordPolicy, PasswordPolicyError, generate_password,
    hash_password, verify_password,
};

#[test]
fn test_policy_requires_a_password() {
    let policy: PasswordPolicy = PasswordPolicy::default();

    assert_eq!(policy.validate(None), Err(PasswordPolicyError::Missing));
    assert_eq!(policy.validate(Some("")), Err(PasswordPolicyError::Missing));
}

#[test]
fn test_policy_enforces_minimum_length() {
    let policy: PasswordPolicy = PasswordPolicy::default();

    assert_eq!(
        policy.validate(Some("12345")),
        Err(PasswordPolicyError::TooShort { min_length: 6 })
    );
    assert_eq!(policy.validate(Some("123456")), Ok("123456"));
}

#[test]
fn test_policy_errors_are_validation_errors() {
    let err: ApiError = ApiError::from(PasswordPolicyError::TooShort { min_length: 6 });

    assert_eq!(
        err,
        ApiError::Validation {
            field: String::from("password"),
            message: String::from("Password should have a minimum length of 6"),
        }
    );
}

#[test]
fn test_hash_verifies_only_the_original_password() {
    let hash: String = hash_password("correct horse").unwrap();

    assert_ne!(hash, "correct horse");
    assert!(verify_password("correct horse", &hash));
    assert!(!verify_password("wrong horse", &hash));
    assert!(!verify_password("correct horse", "not-a-bcrypt-hash"));
}

#[test]
fn test_generated_passwords_have_fixed_length() {
    let first: String = generate_password();
    let second: String = generate_password();

    assert_eq!(first.chars().count(), GENERATED_PASSWORD_LENGTH);
    assert!(first.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    assert_ne!(first, second);
}
