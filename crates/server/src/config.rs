// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Command-line and environment configuration.

use std::path::PathBuf;

use clap::Parser;

/// Job Board Server - HTTP backend for job postings, applications, and the
/// request audit trail
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// `SQLite` database file, or a `mysql://` URL. Uses an in-memory
    /// database when omitted.
    #[arg(short, long, env = "DATABASE_URL")]
    pub database: Option<String>,

    /// Address to bind the server to
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind the server to
    #[arg(short, long, env = "PORT", default_value_t = 3001)]
    pub port: u16,

    /// Secret used to sign bearer and email tokens
    #[arg(long, env = "TOKEN_SECRET", hide_env_values = true)]
    pub token_secret: String,

    /// Validity window of issued tokens, in seconds
    #[arg(
        long,
        env = "TOKEN_VALIDATION_TIME",
        default_value_t = 86_400,
        value_parser = clap::value_parser!(i64).range(1..)
    )]
    pub token_validation_time: i64,

    /// Base URL of the frontend, used in emailed links
    #[arg(long, env = "FRONTEND_URL", default_value = "http://localhost:3000")]
    pub frontend_url: String,

    /// Public base URL of this server, used in uploaded file URLs
    #[arg(long, env = "BACKEND_URL", default_value = "http://localhost:3001")]
    pub backend_url: String,

    /// Logo shown in notifications
    #[arg(long, env = "LOGO_URL")]
    pub logo_url: Option<String>,

    /// Creates a Super Admin with this email at startup if none exists
    #[arg(long, env = "FIRST_ADMIN_EMAIL")]
    pub first_admin_email: Option<String>,

    /// Directory for uploaded files, served under `/uploads`
    #[arg(long, env = "UPLOADS_DIR", default_value = "uploads")]
    pub uploads_dir: PathBuf,

    /// Largest request body accepted, in bytes
    #[arg(long, env = "MAX_BODY_BYTES", default_value_t = 10_485_760)]
    pub max_body_bytes: usize,

    /// Period of the job deadline sweep, in seconds
    #[arg(
        long,
        env = "SWEEP_INTERVAL_SECS",
        default_value_t = 86_400,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub sweep_interval_secs: u64,

    /// A `doneBy` value hidden from audit listings
    #[arg(long, env = "AUDIT_HIDDEN_ACTOR")]
    pub audit_hidden_actor: Option<String>,
}
