// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::time::Duration;

use job_board_domain::format_timestamp;
use serde_json::Value;
use time::OffsetDateTime;

use crate::UNKNOWN;
use crate::body::AuditBody;

/// Request-side material gathered by the HTTP layer.
#[derive(Debug, Clone, Default)]
pub struct CapturedRequest {
    /// The HTTP method, e.g. `POST`.
    pub method: String,
    /// The original request URL including the query string.
    pub url: String,
    /// The `user-agent` header, if sent.
    pub user_agent: Option<String>,
    /// The `user-public-ip` header, if sent.
    pub user_public_ip: Option<String>,
    /// The `x-forwarded-for` header, if sent.
    pub forwarded_for: Option<String>,
    /// The socket peer address, if known.
    pub remote_addr: Option<String>,
    /// The authenticated caller's email, if any.
    pub done_by: Option<String>,
    /// The request payload.
    pub body: AuditBody,
}

/// Response-side material gathered by the HTTP layer.
#[derive(Debug, Clone)]
pub struct CapturedResponse {
    /// The status code actually sent.
    pub status_code: u16,
    /// The response payload as sent.
    pub body: AuditBody,
}

/// One fully resolved audit row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditRecord {
    pub timestamp: String,
    pub method: String,
    pub url: String,
    pub status_code: u16,
    pub user_agent: String,
    pub duration: String,
    pub done_by: String,
    pub ip_address: String,
    pub activity: String,
    pub details: String,
    pub status: String,
    pub response_body: String,
    pub request_body: String,
}

impl AuditRecord {
    /// Builds the record for one request/response pair.
    ///
    /// # Arguments
    ///
    /// * `request` - What was observed about the request
    /// * `response` - What was observed about the response
    /// * `elapsed` - Time from request entry to response completion
    /// * `finished_at` - The instant the response completed
    #[must_use]
    pub fn capture(
        request: CapturedRequest,
        response: &CapturedResponse,
        elapsed: Duration,
        finished_at: OffsetDateTime,
    ) -> Self {
        let ip_address: String = resolve_ip(
            request.user_public_ip.as_deref(),
            request.forwarded_for.as_deref(),
            request.remote_addr.as_deref(),
        );
        let response_json: Option<Value> = response.body.as_json();

        Self {
            timestamp: format_timestamp(finished_at),
            activity: request.method.clone(),
            method: request.method,
            url: request.url,
            status_code: response.status_code,
            user_agent: non_empty(request.user_agent.as_deref()),
            duration: format!("{}ms", elapsed.as_millis()),
            done_by: resolve_done_by(request.done_by.as_deref()),
            ip_address,
            details: extract_field(response_json.as_ref(), "message"),
            status: extract_field(response_json.as_ref(), "status"),
            response_body: response.body.encode(),
            request_body: request.body.encode(),
        }
    }
}

/// Resolves the caller's address.
///
/// An explicit `user-public-ip` header wins, then the first hop of
/// `x-forwarded-for`, then the socket peer. Blank values are skipped.
#[must_use]
pub fn resolve_ip(
    user_public_ip: Option<&str>,
    forwarded_for: Option<&str>,
    remote_addr: Option<&str>,
) -> String {
    let first_hop = forwarded_for.and_then(|chain| chain.split(',').next());

    [user_public_ip, first_hop, remote_addr]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|candidate| !candidate.is_empty())
        .map_or_else(|| UNKNOWN.to_string(), ToString::to_string)
}

/// Resolves who performed the request.
#[must_use]
pub fn resolve_done_by(email: Option<&str>) -> String {
    non_empty(email)
}

fn non_empty(value: Option<&str>) -> String {
    value
        .filter(|v| !v.is_empty())
        .map_or_else(|| UNKNOWN.to_string(), ToString::to_string)
}

// Falsy JSON values (null, false, 0, "") degrade to the placeholder.
fn extract_field(body: Option<&Value>, key: &str) -> String {
    match body.and_then(|value| value.get(key)) {
        Some(Value::String(text)) if !text.is_empty() => text.clone(),
        Some(Value::Bool(true)) => String::from("true"),
        Some(Value::Number(number)) if number.as_f64().is_some_and(|n| n.abs() > 0.0) => {
            number.to_string()
        }
        Some(value @ (Value::Array(_) | Value::Object(_))) => value.to_string(),
        _ => UNKNOWN.to_string(),
    }
}
