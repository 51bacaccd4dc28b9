// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Signed bearer and email tokens.
//!
//! Two claim sets share one HMAC secret. Session tokens carry the caller's
//! identity; email tokens carry only an address and back the activation
//! and password-reset links.

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use job_board_domain::UserType;
use job_board_persistence::UserData;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::OffsetDateTime;

/// Token errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// The token could not be signed.
    #[error("Failed to sign token: {0}")]
    Encode(String),

    /// The token is malformed, tampered with, or expired.
    #[error("Invalid token: {0}")]
    Invalid(String),
}

/// Claims of a session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub id: i64,
    pub email: String,
    #[serde(rename = "type")]
    pub user_type: UserType,
    pub names: String,
    #[serde(rename = "profilePictureURL")]
    pub profile_picture_url: String,
    /// Issued at (unix timestamp).
    pub iat: i64,
    /// Expiration (unix timestamp).
    pub exp: i64,
}

/// Claims of an activation or password-reset token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailClaims {
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

/// Issues and verifies HS256 tokens with a fixed validity window.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_secs: i64,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("ttl_secs", &self.ttl_secs)
            .finish_non_exhaustive()
    }
}

impl TokenService {
    /// Creates a token service.
    ///
    /// # Arguments
    ///
    /// * `secret` - The HMAC secret
    /// * `ttl_secs` - How long issued tokens stay valid
    #[must_use]
    pub fn new(secret: &str, ttl_secs: i64) -> Self {
        // Expiry is exact: a token is rejected from the second after `exp`.
        let mut validation: Validation = Validation::default();
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl_secs,
        }
    }

    /// The validity window of issued tokens, in seconds.
    #[must_use]
    pub const fn ttl_secs(&self) -> i64 {
        self.ttl_secs
    }

    fn window(&self) -> (i64, i64) {
        let now: i64 = OffsetDateTime::now_utc().unix_timestamp();
        (now, now.saturating_add(self.ttl_secs))
    }

    fn sign<T: Serialize>(&self, claims: &T) -> Result<String, TokenError> {
        jsonwebtoken::encode(&Header::default(), claims, &self.encoding_key)
            .map_err(|e| TokenError::Encode(e.to_string()))
    }

    fn decode<T: for<'de> Deserialize<'de>>(&self, token: &str) -> Result<T, TokenError> {
        jsonwebtoken::decode::<T>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| TokenError::Invalid(e.to_string()))
    }

    /// Issues a session token for a user.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Encode` if signing fails.
    pub fn issue_session(&self, user: &UserData) -> Result<String, TokenError> {
        let (iat, exp) = self.window();
        self.sign(&SessionClaims {
            id: user.id,
            email: user.email.clone(),
            user_type: user.user_type,
            names: user.names.clone(),
            profile_picture_url: user.profile_picture_url.clone(),
            iat,
            exp,
        })
    }

    /// Verifies a session token.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Invalid` if the signature, expiry, or claim set
    /// does not check out.
    pub fn verify_session(&self, token: &str) -> Result<SessionClaims, TokenError> {
        self.decode(token)
    }

    /// Issues an email-only token for activation or password reset.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Encode` if signing fails.
    pub fn issue_email(&self, email: &str) -> Result<String, TokenError> {
        let (iat, exp) = self.window();
        self.sign(&EmailClaims {
            email: email.to_string(),
            iat,
            exp,
        })
    }

    /// Verifies an email token and returns the address it carries.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Invalid` if the token does not verify or carries
    /// an empty address.
    pub fn verify_email(&self, token: &str) -> Result<String, TokenError> {
        let claims: EmailClaims = self.decode(token)?;
        if claims.email.is_empty() {
            return Err(TokenError::Invalid(String::from("missing email claim")));
        }
        Ok(claims.email)
    }
}
