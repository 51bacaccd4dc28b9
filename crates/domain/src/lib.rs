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

mod error;
mod pagination;
mod timestamp;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use pagination::{DEFAULT_LIMIT, DEFAULT_PAGE, MAX_LIMIT, Page, PageRequest};
pub use timestamp::{
    compact_timestamp, format_timestamp, normalize_timestamp, now_timestamp, parse_timestamp,
};
pub use types::{ApplicationStatus, JobStatus, JobType, RegistrationType, UserStatus, UserType};
pub use validation::{
    validate_email, validate_future_deadline, validate_min_length, validate_phone_number,
    validate_url,
};
