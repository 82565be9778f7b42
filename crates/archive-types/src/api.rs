use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{AvailableTag, ThreadRecord};

// -- Threads --

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// Row of the thread list. Messages are left out; fetch the thread for those.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadSummary {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub message_count: u32,
    pub archived: bool,
    pub locked: bool,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadDetail {
    #[serde(flatten)]
    pub record: ThreadRecord,
    pub tags: Vec<AvailableTag>,
}

// -- Loading --

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoadStatus {
    pub loaded: usize,
    pub requested: usize,
    pub complete: bool,
}
