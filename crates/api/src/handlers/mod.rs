// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Business operations behind the HTTP routes.
//!
//! Handlers are synchronous and take the persistence layer by mutable
//! reference; the server owns locking. Every handler validates its input
//! before touching storage.

pub mod applications;
pub mod audits;
pub mod auth;
pub mod jobs;
