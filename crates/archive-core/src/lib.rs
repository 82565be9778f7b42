//! Archive core: loads forum thread shards and keeps them searchable.
//!
//! - Transports that fetch shard bytes from disk or over HTTP
//! - A fetcher that turns shards into records, logging and dropping bad ones
//! - Bulk loading (join all, sort once) and progressive loading (snapshot per shard)
//! - A newest-first thread collection with case-insensitive search
//! - Tag id lookup for the channel's tag vocabulary

pub mod collection;
pub mod discovery;
pub mod error;
pub mod fetcher;
pub mod merge;
pub mod progressive;
pub mod search;
pub mod session;
pub mod tags;
pub mod transport;

#[cfg(test)]
pub(crate) mod test_support;

pub use collection::ThreadCollection;
pub use discovery::discover_shards;
pub use error::{ShapeError, ShardError, TransportError};
pub use fetcher::{CHANNEL_SHARD, ShardFetcher};
pub use merge::load_all_threads;
pub use progressive::load_threads_progressively;
pub use search::search_threads;
pub use session::{ArchiveSession, LoadState};
pub use tags::TagIndex;
pub use transport::{DirTransport, HttpTransport, ShardPayload, Transport};
