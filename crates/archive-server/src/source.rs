use archive_core::{DirTransport, HttpTransport, ShardPayload, Transport, TransportError};

/// Where shards come from, picked at startup from the environment.
#[derive(Debug, Clone)]
pub enum ShardSource {
    Dir(DirTransport),
    Http(HttpTransport),
}

impl Transport for ShardSource {
    async fn fetch(&self, shard: &str) -> Result<ShardPayload, TransportError> {
        match self {
            Self::Dir(t) => t.fetch(shard).await,
            Self::Http(t) => t.fetch(shard).await,
        }
    }
}
