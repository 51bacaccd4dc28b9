// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::sync::Arc;

use job_board_api::{NotificationDispatcher, TokenService};
use job_board_persistence::Persistence;
use tokio::sync::Mutex;

use crate::uploads::LocalFileStore;

/// Request-independent settings read once at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Public base URL used for uploaded file links.
    pub backend_url: String,
    /// A `doneBy` value left out of audit listings.
    pub audit_hidden_actor: Option<String>,
    /// Largest request body accepted, in bytes.
    pub max_body_bytes: usize,
}

/// Application state shared across handlers and middleware.
///
/// The persistence layer sits behind a single mutex; every handler and
/// the background audit writes take turns on it.
#[derive(Clone)]
pub struct AppState {
    /// The shared store.
    pub persistence: Arc<Mutex<Persistence>>,
    /// Issues and verifies bearer and email tokens.
    pub tokens: Arc<TokenService>,
    /// Queues outbound notifications.
    pub notifications: NotificationDispatcher,
    /// Where uploads are written.
    pub uploads: LocalFileStore,
    pub settings: Arc<Settings>,
}

impl AppState {
    #[must_use]
    pub fn new(
        persistence: Persistence,
        tokens: TokenService,
        notifications: NotificationDispatcher,
        uploads: LocalFileStore,
        settings: Settings,
    ) -> Self {
        Self {
            persistence: Arc::new(Mutex::new(persistence)),
            tokens: Arc::new(tokens),
            notifications,
            uploads,
            settings: Arc::new(settings),
        }
    }
}
