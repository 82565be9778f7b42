use std::future::Future;
use std::io::ErrorKind;
use std::path::PathBuf;

use bytes::Bytes;
use reqwest::Client;
use tokio::fs;
use tracing::debug;

use crate::error::TransportError;

/// Raw result of fetching one shard: a status code plus whatever body came with it.
#[derive(Debug, Clone)]
pub struct ShardPayload {
    pub status: u16,
    pub body: Bytes,
}

impl ShardPayload {
    pub fn ok(body: impl Into<Bytes>) -> Self {
        Self { status: 200, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Fetches shard bytes by name.
///
/// Implementations hold no per-call state, so one transport can serve any
/// number of fetches in flight at once.
pub trait Transport: Send + Sync {
    fn fetch(
        &self,
        shard: &str,
    ) -> impl Future<Output = Result<ShardPayload, TransportError>> + Send;
}

/// Shard names are plain file names; anything that could walk out of the
/// data root is refused.
fn check_name(shard: &str) -> Result<(), TransportError> {
    if shard.is_empty() || shard == "." || shard == ".." || shard.contains(['/', '\\']) {
        return Err(TransportError::InvalidName(shard.to_string()));
    }
    Ok(())
}

/// Reads shards straight from a directory on disk.
#[derive(Debug, Clone)]
pub struct DirTransport {
    root: PathBuf,
}

impl DirTransport {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &std::path::Path {
        &self.root
    }
}

impl Transport for DirTransport {
    async fn fetch(&self, shard: &str) -> Result<ShardPayload, TransportError> {
        check_name(shard)?;
        let path = self.root.join(shard);

        match fs::read(&path).await {
            Ok(data) => Ok(ShardPayload::ok(data)),
            // Missing file behaves like a 404 from the static file server
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Shard file {} not found", path.display());
                Ok(ShardPayload { status: 404, body: Bytes::new() })
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Fetches shards from a static file server at `{base_url}/data/{shard}`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn shard_url(&self, shard: &str) -> String {
        format!("{}/data/{}", self.base_url, shard)
    }
}

impl Transport for HttpTransport {
    async fn fetch(&self, shard: &str) -> Result<ShardPayload, TransportError> {
        check_name(shard)?;

        let resp = self.client.get(self.shard_url(shard)).send().await?;
        let status = resp.status().as_u16();
        let body = resp.bytes().await?;

        Ok(ShardPayload { status, body })
    }
}
