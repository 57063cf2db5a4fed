mod cli;

use crate::cli::CLI;
use anyhow::Context;
use clap::Parser;
use snip_engine::{RandomGenerator, ShortenerService};
use snip_gateway::{App, AppState, Configuration};
use snip_store::RedisStore;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CLI::parse();

    let config = Configuration::load(&args.config).with_context(|| {
        format!(
            "failed to load configuration from {}",
            args.config.display()
        )
    })?;

    // RUST_LOG wins over the configured level when set.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(&config.log.level))
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    config.announce();

    info!(redis_url = %args.redis_url, "connecting to redis");
    let store = RedisStore::connect(&args.redis_url)
        .await
        .context("failed to connect to redis")?;
    info!("connected to redis");

    let shortener = Arc::new(ShortenerService::new(store, RandomGenerator::new()));
    let state = AppState::new(shortener, config.registry());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(listen_addr = %listener.local_addr()?, "gateway listening");

    axum::serve(listener, App::router(state))
        .await
        .context("server error")?;

    Ok(())
}
