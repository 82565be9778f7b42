use std::slice;
use std::sync::Arc;

use archive_types::ThreadRecord;

/// Thread records ordered newest first by `create_timestamp`.
///
/// Records are immutable and shared, so cloning a collection only copies the
/// list of pointers. A clone handed out as a snapshot is never affected by
/// later inserts into the original.
///
/// Equal timestamps keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThreadCollection {
    records: Vec<Arc<ThreadRecord>>,
}

impl ThreadCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from records in arrival order; one stable sort at the end.
    pub fn from_records(records: impl IntoIterator<Item = ThreadRecord>) -> Self {
        let mut records: Vec<Arc<ThreadRecord>> = records.into_iter().map(Arc::new).collect();
        records.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Self { records }
    }

    /// Caller guarantees `records` is already in collection order.
    pub(crate) fn from_sorted(records: Vec<Arc<ThreadRecord>>) -> Self {
        Self { records }
    }

    /// Add a record, keeping the order invariant.
    ///
    /// Lands after every record with the same or a newer timestamp, which is
    /// where an append followed by a stable sort would put it.
    pub fn insert(&mut self, record: ThreadRecord) {
        let created = record.created_at();
        let at = self.records.partition_point(|r| r.created_at() >= created);
        self.records.insert(at, Arc::new(record));
    }

    pub fn snapshot(&self) -> Self {
        self.clone()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Arc<ThreadRecord>> {
        self.records.iter()
    }

    pub fn records(&self) -> &[Arc<ThreadRecord>] {
        &self.records
    }

    pub fn get(&self, thread_id: &str) -> Option<&Arc<ThreadRecord>> {
        self.records.iter().find(|r| r.thread.id == thread_id)
    }

    pub fn search(&self, query: &str) -> Self {
        crate::search::search_threads(self, query)
    }
}

impl<'a> IntoIterator for &'a ThreadCollection {
    type Item = &'a Arc<ThreadRecord>;
    type IntoIter = slice::Iter<'a, Arc<ThreadRecord>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::record;

    fn ids(c: &ThreadCollection) -> Vec<&str> {
        c.iter().map(|r| r.thread.id.as_str()).collect()
    }

    #[test]
    fn from_records_sorts_newest_first() {
        let c = ThreadCollection::from_records([
            record("old", "2023-01-01T00:00:00Z"),
            record("new", "2024-06-01T00:00:00Z"),
            record("mid", "2024-01-01T00:00:00Z"),
        ]);
        assert_eq!(ids(&c), ["new", "mid", "old"]);
    }

    #[test]
    fn ties_keep_insertion_order() {
        let mut c = ThreadCollection::new();
        c.insert(record("a", "2024-01-01T00:00:00Z"));
        c.insert(record("b", "2024-01-01T00:00:00Z"));
        c.insert(record("newer", "2024-02-01T00:00:00Z"));
        c.insert(record("c", "2024-01-01T00:00:00Z"));
        assert_eq!(ids(&c), ["newer", "a", "b", "c"]);

        let bulk = ThreadCollection::from_records([
            record("a", "2024-01-01T00:00:00Z"),
            record("b", "2024-01-01T00:00:00Z"),
            record("newer", "2024-02-01T00:00:00Z"),
            record("c", "2024-01-01T00:00:00Z"),
        ]);
        assert_eq!(c, bulk);
    }

    #[test]
    fn snapshot_is_isolated() {
        let mut c = ThreadCollection::new();
        c.insert(record("a", "2024-01-01T00:00:00Z"));
        let snap = c.snapshot();
        c.insert(record("b", "2025-01-01T00:00:00Z"));
        assert_eq!(ids(&snap), ["a"]);
        assert_eq!(ids(&c), ["b", "a"]);
    }

    #[test]
    fn get_by_thread_id() {
        let c = ThreadCollection::from_records([record("x", "2024-01-01T00:00:00Z")]);
        assert!(c.get("x").is_some());
        assert!(c.get("y").is_none());
    }
}
