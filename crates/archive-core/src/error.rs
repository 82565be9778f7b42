use thiserror::Error;

/// Failure below the transport boundary: the shard bytes could not be obtained.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid shard name '{0}'")]
    InvalidName(String),
}

/// Every way a shard can turn out unusable. Never escapes the fetcher.
#[derive(Debug, Error)]
pub enum ShardError {
    #[error("transport failure: {0}")]
    Transport(#[from] TransportError),

    #[error("non-success status {0}")]
    Status(u16),

    #[error("invalid JSON: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("unexpected shape: {0}")]
    Shape(ShapeError),
}

#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("top level is not an array")]
    NotArray,

    #[error("array is empty")]
    Empty,

    #[error("first element does not match: {0}")]
    Element(#[source] serde_json::Error),
}
