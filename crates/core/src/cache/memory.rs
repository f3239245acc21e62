//! In-memory layout memo with LRU eviction.
//!
//! A layout is a pure function of the filtered events, the view and the
//! layout options, so a memoized copy is interchangeable with a fresh
//! computation. Entries never expire; they are only evicted.

use std::num::NonZeroUsize;

use lru::LruCache;

use super::error::{CacheError, Result};
use super::keys::LayoutKey;
use crate::calendar::Layout;

/// Bounded memo of computed layouts.
#[derive(Debug)]
pub struct LayoutCache {
    store: LruCache<LayoutKey, Layout>,
}

impl LayoutCache {
    /// Creates a cache holding at most `max_entries` layouts.
    pub fn new(max_entries: usize) -> Result<Self> {
        let capacity = NonZeroUsize::new(max_entries).ok_or(CacheError::ZeroCapacity)?;
        Ok(Self {
            store: LruCache::new(capacity),
        })
    }

    /// Returns a copy of the memoized layout, marking it recently used.
    pub fn get(&mut self, key: &LayoutKey) -> Option<Layout> {
        self.store.get(key).cloned()
    }

    pub fn insert(&mut self, key: LayoutKey, layout: Layout) {
        self.store.put(key, layout);
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn clear(&mut self) {
        self.store.clear();
    }
}
