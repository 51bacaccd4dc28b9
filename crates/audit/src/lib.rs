// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

//! The audit-capture core.
//!
//! This crate turns one observed HTTP request/response pair into an
//! [`AuditRecord`] ready to be persisted. It performs no I/O: the HTTP
//! layer gathers the raw material into [`CapturedRequest`] and
//! [`CapturedResponse`], and the persistence layer stores the result.
//!
//! Every field of a record is always populated. Values that cannot be
//! determined fall back to [`UNKNOWN`].

mod body;
mod record;

#[cfg(test)]
mod tests;

pub use body::{AuditBody, decode_body};
pub use record::{AuditRecord, CapturedRequest, CapturedResponse, resolve_done_by, resolve_ip};

/// Placeholder stored for any audit value that could not be determined.
pub const UNKNOWN: &str = "unknown";

/// Header a client may set to report its own public address.
pub const USER_PUBLIC_IP_HEADER: &str = "user-public-ip";

/// Header set by proxies with the chain of forwarded addresses.
pub const FORWARDED_FOR_HEADER: &str = "x-forwarded-for";
