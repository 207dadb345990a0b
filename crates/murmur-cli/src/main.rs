#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

mod config;
mod server;

use std::process;

use anyhow::Context;
use axum::Router;
use murmur_postgres::query::AccountRepository;
use murmur_postgres::run_pending_migrations;
use murmur_server::handler;
use murmur_server::middleware::{RouterObservabilityExt, RouterRecoveryExt, RouterSecurityExt};
use murmur_server::service::{ServiceState, stub_account};

use crate::config::{Cli, MiddlewareConfig};

/// Tracing target for server startup events.
pub const TRACING_TARGET_STARTUP: &str = "murmur_cli::server::startup";

/// Tracing target for server shutdown events.
pub const TRACING_TARGET_SHUTDOWN: &str = "murmur_cli::server::shutdown";

/// Tracing target for configuration events.
pub const TRACING_TARGET_CONFIG: &str = "murmur_cli::config";

#[tokio::main]
async fn main() {
    let Err(error) = run().await else {
        tracing::info!(
            target: TRACING_TARGET_SHUTDOWN,
            "application terminated successfully"
        );
        process::exit(0);
    };

    if tracing::enabled!(tracing::Level::ERROR) {
        tracing::error!(
            target: TRACING_TARGET_SHUTDOWN,
            error = %error,
            "application terminated with error"
        );
    } else {
        eprintln!("Error: {error:#}");
    }

    process::exit(1);
}

/// Main application entry point.
async fn run() -> anyhow::Result<()> {
    let cli = Cli::init();
    Cli::init_tracing();

    cli.validate().context("invalid configuration")?;
    cli.log();

    let state = ServiceState::from_config(&cli.service)
        .await
        .context("failed to create service state")?;

    prepare_database(&state)
        .await
        .context("failed to prepare database")?;

    let router = create_router(state, &cli.middleware);
    server::serve(router, cli.server).await?;

    Ok(())
}

/// Applies pending migrations and seeds the fixed development identity.
async fn prepare_database(state: &ServiceState) -> anyhow::Result<()> {
    run_pending_migrations(state.pg_client()).await?;

    let mut conn = state.pg_client().get_connection().await?;
    let account = conn.ensure_account(stub_account()).await?;

    tracing::debug!(
        target: TRACING_TARGET_STARTUP,
        account_id = %account.id,
        "Development identity ready"
    );

    Ok(())
}

/// Creates the router with all middleware layers applied.
///
/// Middleware is applied in reverse order (last added = outermost):
/// recovery wraps observability wraps security wraps the routes.
fn create_router(state: ServiceState, middleware: &MiddlewareConfig) -> Router {
    handler::router(state)
        .with_security(&middleware.cors)
        .with_observability()
        .with_recovery(&middleware.recovery)
}
