use std::collections::HashMap;

use archive_types::{AvailableTag, Thread};

/// Lookup from tag id to the channel's tag definition.
///
/// Borrows from the tag list it was built from; rebuild whenever that list
/// changes.
#[derive(Debug, Clone, Default)]
pub struct TagIndex<'a> {
    tags: HashMap<&'a str, &'a AvailableTag>,
}

impl<'a> TagIndex<'a> {
    /// Later duplicates overwrite earlier ones.
    pub fn build(tags: &'a [AvailableTag]) -> Self {
        let mut map = HashMap::with_capacity(tags.len());
        for tag in tags {
            map.insert(tag.id.as_str(), tag);
        }
        Self { tags: map }
    }

    pub fn get(&self, id: &str) -> Option<&'a AvailableTag> {
        self.tags.get(id).copied()
    }

    /// Tags applied to `thread`, in the thread's order. Unknown ids are skipped.
    pub fn resolve(&self, thread: &Thread) -> Vec<&'a AvailableTag> {
        thread
            .applied_tags
            .iter()
            .flatten()
            .filter_map(|id| self.get(id))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
