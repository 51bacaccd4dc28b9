// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend-agnostic mutation modules.
//!
//! Every insert runs in a single transaction that inserts the row, reads
//! back the generated id through `PersistenceBackend::last_insert_id`,
//! and fetches the stored row. A failure anywhere rolls the insert back.
//!
//! ## Module Organization
//!
//! - `users` — account creation and status/password transitions
//! - `jobs` — job writes, the delete guard and the deadline sweep
//! - `applications` — application writes
//! - `audit_logs` — audit row inserts

pub mod applications;
pub mod audit_logs;
pub mod jobs;
pub mod users;
