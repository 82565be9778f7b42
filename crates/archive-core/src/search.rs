use crate::collection::ThreadCollection;

/// Case-insensitive containment filter over thread names and message bodies.
///
/// A blank query returns the whole collection. Matches keep the collection's
/// order; nothing is scored or re-sorted.
pub fn search_threads(threads: &ThreadCollection, query: &str) -> ThreadCollection {
    if query.trim().is_empty() {
        return threads.clone();
    }

    let needle = query.to_lowercase();
    let hits = threads
        .iter()
        .filter(|r| r.matches_lowercase(&needle))
        .cloned()
        .collect();

    ThreadCollection::from_sorted(hits)
}
