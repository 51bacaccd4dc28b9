// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Password policy validation and hashing.
//!
//! This module enforces password requirements for manual accounts and
//! owns the bcrypt calls, so no other layer handles plaintext passwords.

use thiserror::Error;

/// Characters used for generated passwords. 64 entries, so a random byte
/// maps onto it without bias.
const GENERATED_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Length of generated passwords.
pub const GENERATED_PASSWORD_LENGTH: usize = 12;

/// Password policy errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PasswordPolicyError {
    /// No password was supplied.
    #[error("Password is a required field")]
    Missing,

    /// Password is too short.
    #[error("Password should have a minimum length of {min_length}")]
    TooShort { min_length: usize },

    /// The hashing backend failed.
    #[error("Failed to hash password: {0}")]
    Hashing(String),
}

/// Password policy configuration.
pub struct PasswordPolicy {
    /// Minimum password length, in characters.
    pub min_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self { min_length: 6 }
    }
}

impl PasswordPolicy {
    /// Validates a password against the policy.
    ///
    /// # Errors
    ///
    /// Returns a `PasswordPolicyError` if the password is missing or too short.
    pub fn validate<'a>(&self, password: Option<&'a str>) -> Result<&'a str, PasswordPolicyError> {
        let password: &str = password
            .filter(|p| !p.is_empty())
            .ok_or(PasswordPolicyError::Missing)?;

        if password.chars().count() < self.min_length {
            return Err(PasswordPolicyError::TooShort {
                min_length: self.min_length,
            });
        }

        Ok(password)
    }
}

/// Hashes a password with bcrypt.
///
/// # Errors
///
/// Returns `PasswordPolicyError::Hashing` if bcrypt fails.
pub fn hash_password(password: &str) -> Result<String, PasswordPolicyError> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST)
        .map_err(|e| PasswordPolicyError::Hashing(e.to_string()))
}

/// Checks a password against a stored bcrypt hash.
///
/// A malformed hash counts as a mismatch.
#[must_use]
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    bcrypt::verify(password, password_hash).unwrap_or(false)
}

/// Generates a random password for seeded accounts.
#[must_use]
pub fn generate_password() -> String {
    (0..GENERATED_PASSWORD_LENGTH)
        .map(|_| {
            let index: usize = usize::from(rand::random::<u8>()) % GENERATED_ALPHABET.len();
            char::from(GENERATED_ALPHABET[index])
        })
        .collect()
}
