//! Custdedup - Customer Deduplication Daemon
//!
//! Serves the REST API on `/api/v1/*` and exposes the same analysis as
//! operator subcommands (seed, analyze, compare, clear).
//!
//! Records live in PostgreSQL when `DATABASE_URL` is set, otherwise in memory.

#![cfg_attr(
    test,
    allow(clippy::panic, clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)
)]

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod api;
mod cli;
mod commands;
mod router;
mod server_utils;
mod state;
#[cfg(test)]
mod test_helpers;

use cli::{Cli, Commands};
use custdedup_core::CustomerService;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let mut cli = Cli::parse();

    tracing_subscriber::fmt().with_env_filter(EnvFilter::new(&cli.log_level)).init();

    let store = state::open_store(cli.database_url.as_deref(), cli.max_connections).await?;
    let service = CustomerService::new(store);

    match cli.take_command() {
        Commands::Serve(args) => run_server(service, &args.host, args.port).await,
        Commands::Seed { file, append } => commands::handle_seed(&service, &file, append).await,
        Commands::Analyze { json } => commands::handle_analyze(&service, json).await,
        Commands::Compare { json } => commands::handle_compare(&service, json).await,
        Commands::Clear => commands::handle_clear(&service).await,
    }
}

async fn run_server(service: CustomerService, host: &str, port: u16) -> Result<()> {
    info!("🚀 Customer Deduplication API v{} starting...", env!("CARGO_PKG_VERSION"));
    info!("💾 Record store: {}", service.backend());

    let app = router::build_router(AppState::new(service));
    let listener = server_utils::create_listener(host, port).await?;
    info!("🔌 API available at http://{}:{}/api/v1/", host, port);

    axum::serve(listener, app).with_graceful_shutdown(server_utils::shutdown_signal()).await?;

    info!("👋 Server stopped");
    Ok(())
}
