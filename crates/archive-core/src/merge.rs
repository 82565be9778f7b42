use std::collections::HashSet;

use futures_util::future::join_all;
use tracing::{debug, info};

use crate::collection::ThreadCollection;
use crate::fetcher::ShardFetcher;
use crate::transport::Transport;

/// Load every shard, wait for all of them, then sort once.
///
/// All fetches are in flight together. Nothing is returned until every one of
/// them has settled; failed shards are simply missing from the result.
pub async fn load_all_threads<T, S>(fetcher: &ShardFetcher<T>, shards: &[S]) -> ThreadCollection
where
    T: Transport,
    S: AsRef<str>,
{
    let shards = unique_shards(shards);

    let results = join_all(shards.iter().map(|shard| fetcher.fetch_thread(shard))).await;
    // join_all yields in input order, so timestamp ties keep the listing order
    let threads = ThreadCollection::from_records(results.into_iter().flatten());

    info!(
        requested = shards.len(),
        loaded = threads.len(),
        "Loaded thread shards"
    );
    threads
}

/// Drop repeated shard names, keeping the first occurrence.
pub(crate) fn unique_shards<S: AsRef<str>>(shards: &[S]) -> Vec<&str> {
    let mut seen = HashSet::with_capacity(shards.len());
    let mut unique = Vec::with_capacity(shards.len());

    for shard in shards {
        let shard = shard.as_ref();
        if seen.insert(shard) {
            unique.push(shard);
        } else {
            debug!(shard, "Skipping duplicate shard name");
        }
    }
    unique
}
