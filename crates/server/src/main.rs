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
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod audit_log;
mod authorization;
mod config;
mod error;
mod handlers;
mod routes;
mod session;
mod state;
mod sweep;
mod uploads;

#[cfg(test)]
mod tests;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use clap::Parser;
use job_board_api::{
    LoggingNotifier, NotificationDispatcher, TokenService, run_notification_worker,
    seed_first_admin,
};
use job_board_persistence::Persistence;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::Args;
use crate::routes::build_router;
use crate::state::{AppState, Settings};
use crate::sweep::run_deadline_sweep;
use crate::uploads::LocalFileStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Job Board Server");

    let mut persistence: Persistence = Persistence::open(args.database.as_deref())?;

    let (notifications, receiver) =
        NotificationDispatcher::new(&args.frontend_url, args.logo_url.clone());
    tokio::spawn(run_notification_worker(receiver, Arc::new(LoggingNotifier)));

    if let Some(email) = &args.first_admin_email {
        seed_first_admin(&mut persistence, &notifications, email)?;
    }

    let app_state: AppState = AppState::new(
        persistence,
        TokenService::new(&args.token_secret, args.token_validation_time),
        notifications,
        LocalFileStore::new(args.uploads_dir.clone()),
        Settings {
            backend_url: args.backend_url.clone(),
            audit_hidden_actor: args.audit_hidden_actor.clone(),
            max_body_bytes: args.max_body_bytes,
        },
    );

    tokio::spawn(run_deadline_sweep(
        Arc::clone(&app_state.persistence),
        Duration::from_secs(args.sweep_interval_secs),
    ));

    // Build router
    let app: Router = build_router(app_state);

    // Bind and run; peer addresses feed audit IP resolution
    let listener: TcpListener = TcpListener::bind((args.host.as_str(), args.port)).await?;
    info!(address = %listener.local_addr()?, "Server listening");
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
