use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use archive_types::{ChannelMetadata, ThreadRecord};

use crate::error::{ShapeError, ShardError};
use crate::transport::Transport;

/// Well-known shard holding the channel metadata. Never a thread.
pub const CHANNEL_SHARD: &str = "channel_data.json";

/// Turns shard names into parsed records.
///
/// Every failure (transport, status, JSON, shape) is logged and collapsed into
/// `None`; callers only ever see "record" or "no record".
#[derive(Debug, Clone)]
pub struct ShardFetcher<T> {
    transport: T,
}

impl<T: Transport> ShardFetcher<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn fetch_thread(&self, shard: &str) -> Option<ThreadRecord> {
        match self.fetch_first::<ThreadRecord>(shard).await {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(shard, error = %e, "Failed to load thread shard");
                None
            }
        }
    }

    pub async fn fetch_channel(&self) -> Option<ChannelMetadata> {
        match self.fetch_first::<ChannelMetadata>(CHANNEL_SHARD).await {
            Ok(channel) => Some(channel),
            Err(e) => {
                warn!(shard = CHANNEL_SHARD, error = %e, "Failed to load channel metadata");
                None
            }
        }
    }

    /// Fetch a shard and decode element 0 of its top-level array.
    pub async fn fetch_first<R: DeserializeOwned>(&self, shard: &str) -> Result<R, ShardError> {
        let payload = self.transport.fetch(shard).await?;
        if !payload.is_success() {
            return Err(ShardError::Status(payload.status));
        }
        parse_first(&payload.body)
    }
}

pub fn parse_first<R: DeserializeOwned>(body: &[u8]) -> Result<R, ShardError> {
    let value: Value = serde_json::from_slice(body).map_err(ShardError::Parse)?;

    let Value::Array(items) = value else {
        return Err(ShardError::Shape(ShapeError::NotArray));
    };
    let first = items
        .into_iter()
        .next()
        .ok_or(ShardError::Shape(ShapeError::Empty))?;

    serde_json::from_value(first).map_err(|e| ShardError::Shape(ShapeError::Element(e)))
}
