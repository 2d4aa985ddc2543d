//! Sleepytime gateway binary.
//!
//! Loads the settings file, then starts one worker per requested instance,
//! worker `i` bound to `port + i`. Workers are independent; horizontal
//! scaling is a matter of putting a load balancer in front of them.

use std::net::IpAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

use sleepytime::config;
use sleepytime::http::HttpServer;
use sleepytime::upstream::HttpUpstream;

#[derive(Parser)]
#[command(name = "sleepytime")]
#[command(about = "Time-ranged sensor data gateway", long_about = None)]
struct Cli {
    /// Path to the settings file (JSON).
    #[arg(short, long, default_value = "settings.json")]
    config: PathBuf,

    /// Address to bind workers on.
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: IpAddr,

    /// Base port; worker i listens on port + i.
    #[arg(short, long, default_value_t = 1990)]
    port: u16,

    /// Number of workers to run.
    #[arg(short, long, default_value_t = 2)]
    workers: u16,

    /// Upstream data source URL.
    #[arg(long)]
    upstream: Url,

    /// Upstream request timeout in seconds.
    #[arg(long, default_value_t = 30)]
    upstream_timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sleepytime=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("sleepytime v{} starting", env!("CARGO_PKG_VERSION"));

    // A missing or malformed settings file is fatal: refuse to serve
    // rather than run with a partial registry.
    let settings = config::load_settings(&cli.config)?;

    tracing::info!(
        config = %cli.config.display(),
        places = settings.places.len(),
        upstream = %cli.upstream,
        "settings loaded"
    );

    let upstream = Arc::new(HttpUpstream::new(
        cli.upstream.clone(),
        Duration::from_secs(cli.upstream_timeout_secs),
    )?);

    let (shutdown_tx, _) = broadcast::channel(1);
    let mut workers = tokio::task::JoinSet::new();

    for offset in 0..cli.workers {
        let port = cli
            .port
            .checked_add(offset)
            .ok_or("worker port exceeds the port range")?;
        let listener = TcpListener::bind((cli.bind, port)).await?;

        let server = HttpServer::new(offset, settings.clone(), upstream.clone());
        let shutdown = shutdown_tx.subscribe();
        workers.spawn(async move { server.run(listener, shutdown).await });
    }

    // Workers only return once the shutdown signal fires, so one finishing
    // before Ctrl+C is a failure worth surfacing immediately.
    tokio::select! {
        signal = tokio::signal::ctrl_c() => {
            signal?;
            tracing::info!("shutdown signal received");
            let _ = shutdown_tx.send(());
        }
        Some(finished) = workers.join_next() => {
            finished??;
            return Err("worker exited before shutdown".into());
        }
    }

    while let Some(finished) = workers.join_next().await {
        finished??;
    }

    tracing::info!("shutdown complete");
    Ok(())
}
