// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Audit middleware.
//!
//! Every response that finishes produces exactly one audit row. The request
//! body is buffered before the handler runs. The response body is copied
//! chunk by chunk while the connection drains it, and the row is written
//! only once the last chunk has gone out. A response dropped before that
//! point, because the client went away, leaves no row.
//!
//! The write runs on a detached task: the client never waits for it and
//! never sees its failure.

use std::net::SocketAddr;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Instant;

use axum::{
    body::{Body, BodyDataStream, Bytes, to_bytes},
    extract::{ConnectInfo, Request, State},
    http::{
        HeaderMap, StatusCode,
        header::{CONTENT_TYPE, USER_AGENT},
    },
    middleware::Next,
    response::{IntoResponse, Response},
};
use futures::{Stream, StreamExt};
use job_board_api::record_audit_log;
use job_board_audit::{
    AuditBody, AuditRecord, CapturedRequest, CapturedResponse, FORWARDED_FOR_HEADER,
    USER_PUBLIC_IP_HEADER,
};
use job_board_persistence::Persistence;
use time::OffsetDateTime;
use tokio::sync::Mutex;
use tracing::{debug, error, warn};

use crate::error::HttpError;
use crate::session::Authentication;
use crate::state::AppState;

fn header(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(String::from)
}

fn content_type(headers: &HeaderMap) -> String {
    header(headers, CONTENT_TYPE.as_str())
        .unwrap_or_default()
        .to_ascii_lowercase()
}

// Binary payloads (uploads, served files) are not copied into the trail.
fn is_textual(headers: &HeaderMap) -> bool {
    let content_type: String = content_type(headers);
    content_type.starts_with("application/json") || content_type.starts_with("text/")
}

fn is_multipart(headers: &HeaderMap) -> bool {
    content_type(headers).starts_with("multipart/")
}

/// Middleware that records one audit row per request.
pub async fn record_audit(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let started: Instant = Instant::now();
    let (parts, body) = request.into_parts();

    let mut captured = CapturedRequest {
        method: parts.method.to_string(),
        url: parts.uri.to_string(),
        user_agent: header(&parts.headers, USER_AGENT.as_str()),
        user_public_ip: header(&parts.headers, USER_PUBLIC_IP_HEADER),
        forwarded_for: header(&parts.headers, FORWARDED_FOR_HEADER),
        remote_addr: parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip().to_string()),
        done_by: parts
            .extensions
            .get::<Authentication>()
            .and_then(Authentication::identity)
            .map(|identity| identity.email.clone()),
        body: AuditBody::Missing,
    };

    let response: Response = match to_bytes(body, state.settings.max_body_bytes).await {
        Ok(bytes) => {
            if !is_multipart(&parts.headers) {
                captured.body = AuditBody::from_bytes(&bytes);
            }
            next.run(Request::from_parts(parts, Body::from(bytes))).await
        }
        Err(e) => {
            warn!(error = %e, url = %captured.url, "Request body rejected");
            HttpError::new(StatusCode::PAYLOAD_TOO_LARGE, "Request body too large").into_response()
        }
    };

    // These responses are never polled for a body, so the row is written
    // once the connection lets go of them.
    let finish_on_drop: bool = never_streams_body(&captured.method, response.status());
    let copy: Option<Vec<u8>> = is_textual(response.headers()).then(Vec::new);
    let pending = PendingAudit {
        persistence: Arc::clone(&state.persistence),
        request: captured,
        status_code: response.status().as_u16(),
        started,
    };

    let (parts, body) = response.into_parts();
    let audited = AuditedBody {
        inner: body.into_data_stream(),
        copy,
        pending: Some(pending),
        finish_on_drop,
    };
    Response::from_parts(parts, Body::from_stream(audited))
}

fn never_streams_body(method: &str, status: StatusCode) -> bool {
    method == "HEAD" || status == StatusCode::NO_CONTENT || status == StatusCode::NOT_MODIFIED
}

/// What the row needs besides the response body.
struct PendingAudit {
    persistence: Arc<Mutex<Persistence>>,
    request: CapturedRequest,
    status_code: u16,
    started: Instant,
}

/// A response body that records its audit row at end of stream.
struct AuditedBody {
    inner: BodyDataStream,
    /// `None` for binary responses, which are not copied.
    copy: Option<Vec<u8>>,
    pending: Option<PendingAudit>,
    finish_on_drop: bool,
}

impl AuditedBody {
    fn finish(&mut self) {
        let Some(pending) = self.pending.take() else {
            return;
        };
        let body: AuditBody = self
            .copy
            .take()
            .map_or(AuditBody::Missing, |bytes| AuditBody::from_bytes(&bytes));

        let record: AuditRecord = AuditRecord::capture(
            pending.request,
            &CapturedResponse {
                status_code: pending.status_code,
                body,
            },
            pending.started.elapsed(),
            OffsetDateTime::now_utc(),
        );
        dispatch(pending.persistence, record);
    }
}

impl Stream for AuditedBody {
    type Item = Result<Bytes, axum::Error>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this: &mut Self = self.get_mut();
        match this.inner.poll_next_unpin(cx) {
            Poll::Ready(Some(Ok(chunk))) => {
                if let Some(copy) = this.copy.as_mut() {
                    copy.extend_from_slice(&chunk);
                }
                Poll::Ready(Some(Ok(chunk)))
            }
            Poll::Ready(Some(Err(e))) => {
                if let Some(pending) = this.pending.take() {
                    warn!(
                        error = %e,
                        url = %pending.request.url,
                        "Response body failed, no audit row"
                    );
                }
                Poll::Ready(Some(Err(e)))
            }
            Poll::Ready(None) => {
                this.finish();
                Poll::Ready(None)
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

impl Drop for AuditedBody {
    fn drop(&mut self) {
        if self.finish_on_drop {
            self.finish();
        } else if let Some(pending) = self.pending.take() {
            debug!(
                url = %pending.request.url,
                "Response dropped before it finished, no audit row"
            );
        }
    }
}

/// Writes the record from a detached task. Success and failure are logged
/// and go nowhere else.
fn dispatch(persistence: Arc<Mutex<Persistence>>, record: AuditRecord) {
    tokio::spawn(async move {
        let mut persistence = persistence.lock().await;
        match record_audit_log(&mut persistence, &record) {
            Ok(audit_log_id) => debug!(
                audit_log_id,
                method = %record.method,
                url = %record.url,
                status_code = record.status_code,
                "Audit log recorded"
            ),
            Err(e) => error!(
                error = %e,
                method = %record.method,
                url = %record.url,
                "Failed to record audit log"
            ),
        }
    });
}
