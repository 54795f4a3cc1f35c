//! Serves the task API over HTTP.
//!
//! Usage:
//!
//! ```text
//! taskmanager-api
//! ```
//!
//! Settings come from `TASKMANAGER_*` environment variables; see
//! [`taskmanager::config::AppConfig`]. `RUST_LOG` overrides the configured
//! log filter.

use eyre::WrapErr;
use std::sync::Arc;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use taskmanager::api::{AppState, Server, create_router};
use taskmanager::config::AppConfig;
use taskmanager::task::adapters::memory::InMemoryTaskRepository;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let config = AppConfig::from_env().wrap_err("failed to read configuration")?;
    init_tracing(&config.log_filter)?;
    let address = config.server.socket_addr();
    tracing::info!(%address, "taskmanager starting");

    let state = AppState::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(mockable::DefaultClock),
    );
    let router = create_router(state);

    Server::new(config.server)
        .run(router)
        .await
        .wrap_err_with(|| format!("server on {address} failed"))
}

fn init_tracing(default_filter: &str) -> eyre::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .wrap_err_with(|| format!("invalid log filter '{default_filter}'"))?;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .try_init()
        .wrap_err("failed to install tracing subscriber")
}
