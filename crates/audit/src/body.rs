// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;

use crate::UNKNOWN;

/// A request or response payload as seen by the audit layer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuditBody {
    /// No payload, or a payload that is not valid UTF-8.
    #[default]
    Missing,
    /// A textual payload, kept exactly as it was sent.
    Text(String),
    /// A structured payload that has not been serialized yet.
    Json(Value),
}

impl AuditBody {
    /// Classifies raw payload bytes.
    ///
    /// Empty and non-UTF-8 payloads are treated as missing. Anything else
    /// is kept verbatim so that the stored copy matches what was on the wire.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        if bytes.is_empty() {
            return Self::Missing;
        }
        std::str::from_utf8(bytes).map_or(Self::Missing, |text| Self::Text(text.to_string()))
    }

    /// Serializes the payload to the text that gets encoded.
    ///
    /// A missing payload serializes as the JSON string `"unknown"` so the
    /// stored column is never empty and still decodes as JSON.
    #[must_use]
    pub fn serialize(&self) -> String {
        match self {
            Self::Missing => Value::String(UNKNOWN.to_string()).to_string(),
            Self::Text(text) => text.clone(),
            Self::Json(value) => value.to_string(),
        }
    }

    /// Serializes and base64-encodes the payload for storage.
    #[must_use]
    pub fn encode(&self) -> String {
        STANDARD.encode(self.serialize())
    }

    /// Parses the payload as a JSON value, if it is one.
    #[must_use]
    pub fn as_json(&self) -> Option<Value> {
        match self {
            Self::Missing => None,
            Self::Text(text) => serde_json::from_str(text).ok(),
            Self::Json(value) => Some(value.clone()),
        }
    }
}

/// Decodes a stored body back into JSON.
///
/// Returns `None` when the value is not valid base64, not UTF-8, or not
/// JSON. Decoding never fails loudly; an unreadable body is simply absent.
#[must_use]
pub fn decode_body(encoded: &str) -> Option<Value> {
    let bytes: Vec<u8> = STANDARD.decode(encoded).ok()?;
    let text: String = String::from_utf8(bytes).ok()?;
    serde_json::from_str(&text).ok()
}
