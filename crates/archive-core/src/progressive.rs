use futures_util::StreamExt;
use futures_util::stream::FuturesUnordered;
use tracing::{debug, info};

use crate::collection::ThreadCollection;
use crate::fetcher::ShardFetcher;
use crate::merge::unique_shards;
use crate::transport::Transport;

/// Load shards concurrently, reporting the growing collection as it fills.
///
/// After each shard that parses, the record is added (order invariant kept)
/// and `on_progress` receives a snapshot of the whole collection. Shards that
/// fail only advance the countdown. Resolves with the final collection once
/// every shard has settled.
///
/// All completions are drained by this one future, so the insert and the
/// snapshot for one shard never interleave with another shard's.
pub async fn load_threads_progressively<T, S, F>(
    fetcher: &ShardFetcher<T>,
    shards: &[S],
    mut on_progress: F,
) -> ThreadCollection
where
    T: Transport,
    S: AsRef<str>,
    F: FnMut(ThreadCollection),
{
    let shards = unique_shards(shards);
    let mut threads = ThreadCollection::new();
    let mut remaining = shards.len();

    if remaining == 0 {
        return threads;
    }

    let mut pending: FuturesUnordered<_> = shards
        .iter()
        .map(|&shard| async move { (shard, fetcher.fetch_thread(shard).await) })
        .collect();

    while let Some((shard, result)) = pending.next().await {
        remaining -= 1;

        if let Some(record) = result {
            threads.insert(record);
            on_progress(threads.snapshot());
        }

        debug!(shard, remaining, loaded = threads.len(), "Thread shard settled");
        if remaining == 0 {
            break;
        }
    }

    info!(
        requested = shards.len(),
        loaded = threads.len(),
        "Progressive load complete"
    );
    threads
}
