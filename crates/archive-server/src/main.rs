mod routes;
mod source;

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use archive_core::{ArchiveSession, DirTransport, HttpTransport, ShardFetcher, discover_shards};

use crate::routes::AppState;
use crate::source::ShardSource;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "archive_server=debug,archive_core=debug,tower_http=debug".into()),
        )
        .init();

    // Config
    let host = std::env::var("ARCHIVE_HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let port: u16 = std::env::var("ARCHIVE_PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()?;
    let data_dir: PathBuf = std::env::var("ARCHIVE_DATA_DIR")
        .unwrap_or_else(|_| "./static/data".into())
        .into();
    let remote_url = std::env::var("ARCHIVE_REMOTE_URL")
        .ok()
        .filter(|v| !v.trim().is_empty());
    let fetch_timeout_secs: u64 = std::env::var("ARCHIVE_FETCH_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(30);

    let remote = remote_url.is_some();
    let source = match remote_url {
        Some(url) => {
            info!("Fetching shards from {}/data", url);
            let client = reqwest::Client::builder()
                .timeout(Duration::from_secs(fetch_timeout_secs))
                .build()?;
            ShardSource::Http(HttpTransport::with_client(client, url))
        }
        None => {
            info!("Reading shards from {}", data_dir.display());
            ShardSource::Dir(DirTransport::new(&data_dir))
        }
    };
    let fetcher = Arc::new(ShardFetcher::new(source));

    // The shard listing always comes from the local data dir
    let shards = discover_shards(&data_dir).await;
    if let Some(message) = empty_listing_warning(remote, &data_dir, shards.len()) {
        warn!("{}", message);
    }
    let channel = fetcher.fetch_channel().await;
    if let Some(channel) = &channel {
        info!(
            "Channel #{} with {} tags",
            channel.name,
            channel.available_tags.len()
        );
    }

    let session = Arc::new(ArchiveSession::new(channel));

    // Load in the background; requests see the collection fill in as shards land
    let load_session = session.clone();
    let load_fetcher = fetcher.clone();
    tokio::spawn(async move {
        load_session.load(&load_fetcher, &shards).await;
    });

    let app = routes::router(AppState { session }, &data_dir);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Forum archive listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// A remote source still needs a local listing; say so when there is none.
fn empty_listing_warning(remote: bool, data_dir: &Path, shard_count: usize) -> Option<String> {
    (remote && shard_count == 0).then(|| {
        format!(
            "ARCHIVE_REMOTE_URL is set but {} lists no shards; no threads will load",
            data_dir.display()
        )
    })
}

async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();
    #[cfg(unix)]
    {
        let mut sigterm =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                .expect("failed to install SIGTERM handler");
        tokio::select! {
            _ = ctrl_c => info!("Received Ctrl+C, shutting down..."),
            _ = sigterm.recv() => info!("Received SIGTERM, shutting down..."),
        }
    }
    #[cfg(not(unix))]
    {
        ctrl_c.await.ok();
        info!("Received Ctrl+C, shutting down...");
    }
}
