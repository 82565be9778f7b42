use std::sync::Arc;

use tokio::sync::watch;

use archive_types::api::LoadStatus;
use archive_types::{ChannelMetadata, ThreadRecord};

use crate::collection::ThreadCollection;
use crate::fetcher::ShardFetcher;
use crate::progressive::load_threads_progressively;
use crate::tags::TagIndex;
use crate::transport::Transport;

/// What readers of the archive see at any moment during and after a load.
#[derive(Debug, Clone, Default)]
pub struct LoadState {
    pub threads: ThreadCollection,
    pub requested: usize,
    pub complete: bool,
}

/// Holds the loaded archive for the lifetime of the process.
///
/// The thread collection is published through a watch channel: it fills in
/// while a progressive load runs and readers always get a consistent, sorted
/// snapshot.
pub struct ArchiveSession {
    channel: Option<ChannelMetadata>,
    state: watch::Sender<LoadState>,
}

impl ArchiveSession {
    pub fn new(channel: Option<ChannelMetadata>) -> Self {
        let (state, _) = watch::channel(LoadState::default());
        Self { channel, state }
    }

    /// Load `shards`, publishing each snapshot as it arrives.
    pub async fn load<T, S>(&self, fetcher: &ShardFetcher<T>, shards: &[S]) -> ThreadCollection
    where
        T: Transport,
        S: AsRef<str>,
    {
        self.state.send_modify(|s| {
            s.threads = ThreadCollection::new();
            s.requested = shards.len();
            s.complete = false;
        });

        let threads = load_threads_progressively(fetcher, shards, |snapshot| {
            self.state.send_modify(|s| s.threads = snapshot);
        })
        .await;

        self.state.send_modify(|s| {
            s.threads = threads.clone();
            s.complete = true;
        });
        threads
    }

    pub fn subscribe(&self) -> watch::Receiver<LoadState> {
        self.state.subscribe()
    }

    pub fn threads(&self) -> ThreadCollection {
        self.state.borrow().threads.clone()
    }

    pub fn search(&self, query: &str) -> ThreadCollection {
        self.state.borrow().threads.search(query)
    }

    pub fn thread(&self, thread_id: &str) -> Option<Arc<ThreadRecord>> {
        self.state.borrow().threads.get(thread_id).cloned()
    }

    pub fn status(&self) -> LoadStatus {
        let state = self.state.borrow();
        LoadStatus {
            loaded: state.threads.len(),
            requested: state.requested,
            complete: state.complete,
        }
    }

    pub fn channel(&self) -> Option<&ChannelMetadata> {
        self.channel.as_ref()
    }

    /// Empty when no channel metadata was loaded.
    pub fn tag_index(&self) -> TagIndex<'_> {
        self.channel
            .as_ref()
            .map(|c| TagIndex::build(&c.available_tags))
            .unwrap_or_default()
    }
}
