// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! HTTP handlers. Each one locks persistence, calls the matching API
//! function, and wraps the result in the response envelope.

pub mod applications;
pub mod audits;
pub mod auth;
pub mod jobs;

use axum::http::{StatusCode, Uri};
use tracing::debug;

use crate::error::HttpError;

/// Fallback for paths no route matches.
pub async fn handle_not_found(uri: Uri) -> HttpError {
    debug!(uri = %uri, "No route matched");
    HttpError::new(StatusCode::NOT_FOUND, "Route not found")
}
