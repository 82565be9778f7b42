use std::path::Path;

use tokio::fs;
use tracing::{info, warn};

use crate::fetcher::CHANNEL_SHARD;

/// List the thread shards in `dir`: every `*.json` file except the channel
/// metadata shard, sorted by name.
///
/// A directory that cannot be read is logged and treated as empty.
pub async fn discover_shards(dir: &Path) -> Vec<String> {
    match list_shards(dir).await {
        Ok(shards) => {
            info!("Found {} thread shards in {}", shards.len(), dir.display());
            shards
        }
        Err(e) => {
            warn!("Failed to read data directory {}: {}", dir.display(), e);
            Vec::new()
        }
    }
}

async fn list_shards(dir: &Path) -> std::io::Result<Vec<String>> {
    let mut entries = fs::read_dir(dir).await?;
    let mut shards = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        if !entry.file_type().await?.is_file() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            if name.ends_with(".json") && name != CHANNEL_SHARD {
                shards.push(name.to_string());
            }
        }
    }

    shards.sort();
    Ok(shards)
}
