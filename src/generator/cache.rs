use std::collections::HashMap;
use std::sync::Arc;

use crate::entity::EntityKey;
use crate::toc::TableOfContents;

/// Store of finished tables of contents keyed by entity identity.
///
/// Every entity visited during a walk maps to the same shared
/// [`TableOfContents`], so looking up a sub-entity yields its ancestor's
/// full outline. The cache is owned by whoever owns the engine; scoping
/// it per request is the caller's choice.
#[derive(Debug, Default)]
pub struct TocCache {
    entries: HashMap<EntityKey, Arc<TableOfContents>>,
}

impl TocCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &EntityKey) -> Option<Arc<TableOfContents>> {
        self.entries.get(key).map(Arc::clone)
    }

    pub fn insert(&mut self, key: EntityKey, toc: Arc<TableOfContents>) {
        self.entries.insert(key, toc);
    }

    pub fn contains(&self, key: &EntityKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get_share_ownership() {
        let mut cache = TocCache::new();
        let key = EntityKey::new("node", "1");
        let toc = Arc::new(TableOfContents::new(key.clone(), false));

        cache.insert(key.clone(), Arc::clone(&toc));
        let fetched = cache.get(&key).unwrap();
        assert!(Arc::ptr_eq(&fetched, &toc));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_miss_and_clear() {
        let mut cache = TocCache::new();
        let key = EntityKey::new("node", "1");
        assert!(cache.get(&key).is_none());

        cache.insert(key.clone(), Arc::new(TableOfContents::new(key.clone(), false)));
        cache.clear();
        assert!(cache.is_empty());
        assert!(!cache.contains(&key));
    }
}
