// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend-agnostic read-only queries.
//!
//! All queries use Diesel DSL and are generated for every supported
//! backend through `backend_fn!`.
//!
//! ## Module Organization
//!
//! - `users` — user lookups by id and email
//! - `jobs` — job lookups, listings and the duplicate check
//! - `applications` — application lookups and listings
//! - `audit_logs` — filtered audit listing and detail

pub mod applications;
pub mod audit_logs;
pub mod jobs;
pub mod users;
