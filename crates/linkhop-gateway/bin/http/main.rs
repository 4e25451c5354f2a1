mod cli;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use clap::Parser;
use linkhop_gateway::{App, AppState};
use linkhop_generator::{RandomGenerator, SlugPolicy};
use linkhop_shortener::ShortenerSettings;
use linkhop_storage::{InMemoryRepository, MySqlRepository};
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::cli::{Cli, StorageBackendArg};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Cli::parse();

    linkhop_telemetry::init(config.log_format)?;

    info!(
        listen_addr = %config.listen_addr,
        public_base_url = %config.public_base_url,
        storage_backend = %config.storage,
        slug_length = config.slug_length,
        max_attempts = config.max_attempts,
        "starting gateway server"
    );

    let generator = RandomGenerator::new(SlugPolicy::builder().length(config.slug_length).build())
        .context("invalid slug policy")?;
    let settings = ShortenerSettings::builder()
        .max_attempts(config.max_attempts)
        .build();

    let state = match config.storage {
        StorageBackendArg::InMemory => AppState::with_repository(
            Arc::new(InMemoryRepository::new()),
            generator,
            settings,
            config.public_base_url,
        ),
        StorageBackendArg::Mysql => {
            let mysql_dsn = config
                .mysql_dsn
                .context("mysql dsn is required when storage backend is mysql")?;
            let repository = MySqlRepository::connect(&mysql_dsn)
                .await
                .context("failed to connect to mysql")?;
            AppState::with_repository(
                Arc::new(repository),
                generator,
                settings,
                config.public_base_url,
            )
        }
    };

    run_server(config.listen_addr, App::router(state)).await
}

async fn run_server(listen_addr: SocketAddr, router: Router) -> anyhow::Result<()> {
    let listener = TcpListener::bind(listen_addr)
        .await
        .with_context(|| format!("failed to bind {listen_addr}"))?;
    info!(listen_addr = %listener.local_addr()?, "gateway listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("gateway stopped");
    Ok(())
}

/// Resolves on SIGINT (Ctrl-C) or, on Unix, SIGTERM.
///
/// If a handler cannot be installed that signal is ignored and the other
/// one still works.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let sigterm = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let sigterm = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = sigterm => {}
    }

    info!("shutdown signal received, draining connections");
}
