//! Bounded cache of last-shown marker info.
//!
//! Keyed by marker id, attributed to the overlay source that created the
//! marker so removal of a source evicts its entries. Bounded in insertion
//! order; re-selecting the same marker then costs no rebuild.

use std::collections::HashMap;
use std::collections::VecDeque;

use crate::map::{MarkerId, MarkerInfo};

#[derive(Debug)]
struct CachedInfo {
    source: String,
    info: MarkerInfo,
}

#[derive(Debug)]
pub(crate) struct MarkerInfoCache {
    entries: HashMap<MarkerId, CachedInfo>,
    order: VecDeque<MarkerId>,
    capacity: usize,
}

impl MarkerInfoCache {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            order: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    pub(crate) fn get(&self, marker: MarkerId) -> Option<&MarkerInfo> {
        self.entries.get(&marker).map(|cached| &cached.info)
    }

    pub(crate) fn contains(&self, marker: MarkerId) -> bool {
        self.entries.contains_key(&marker)
    }

    pub(crate) fn insert(&mut self, marker: MarkerId, source: &str, info: MarkerInfo) {
        if self.entries.len() >= self.capacity && !self.entries.contains_key(&marker) {
            if let Some(oldest) = self.order.pop_front() {
                self.entries.remove(&oldest);
            }
        }
        if self.entries.contains_key(&marker) {
            self.order.retain(|m| *m != marker);
        }
        self.order.push_back(marker);
        self.entries.insert(
            marker,
            CachedInfo {
                source: source.to_string(),
                info,
            },
        );
    }

    /// Drops every entry attributed to `source`.
    pub(crate) fn evict_source(&mut self, source: &str) {
        self.entries.retain(|_, cached| cached.source != source);
        let entries = &self.entries;
        self.order.retain(|marker| entries.contains_key(marker));
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
