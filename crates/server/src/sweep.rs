// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Periodic closing of jobs whose deadline has passed.

use std::sync::Arc;
use std::time::Duration;

use job_board_api::close_expired_jobs;
use job_board_persistence::Persistence;
use time::OffsetDateTime;
use tokio::sync::Mutex;
use tokio::time::MissedTickBehavior;
use tracing::{error, info};

/// Runs one sweep.
///
/// # Returns
///
/// The number of jobs closed, or `None` if the sweep failed. Failures are
/// logged here.
pub async fn sweep_once(persistence: &Mutex<Persistence>) -> Option<usize> {
    let mut persistence = persistence.lock().await;
    match close_expired_jobs(&mut persistence, OffsetDateTime::now_utc()) {
        Ok(closed) => Some(closed),
        Err(e) => {
            error!(error = %e, "Deadline sweep failed");
            None
        }
    }
}

/// Sweeps every `period`, starting immediately. Never returns.
pub async fn run_deadline_sweep(persistence: Arc<Mutex<Persistence>>, period: Duration) {
    info!(period_secs = period.as_secs(), "Deadline sweep scheduled");
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        sweep_once(&persistence).await;
    }
}
