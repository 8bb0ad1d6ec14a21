// Rust guideline compliant 2026-10-14

//! Query cache for remote list pages.
//!
//! Pages are keyed by [`QueryKey`]. Entries never expire on their own:
//! correctness depends on explicit invalidation after writes.

use crate::models::{Filters, Identified, ListPage, ListQuery, QueryKey};
use crate::moderation::Invalidation;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;
use tracing::debug;

/// Cache handle shared by every list view on the UI thread.
pub type SharedCache<T> = Rc<RefCell<QueryCache<T>>>;

#[derive(Debug, Clone)]
struct Entry<T> {
    query: ListQuery,
    page: ListPage<T>,
}

/// Last-known-good pages, keyed by query identity.
#[derive(Debug, Clone)]
pub struct QueryCache<T> {
    entries: HashMap<QueryKey, Entry<T>>,
    in_flight: HashSet<QueryKey>,
}

impl<T> Default for QueryCache<T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            in_flight: HashSet::new(),
        }
    }
}

impl<T> QueryCache<T> {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty cache wrapped for sharing between views.
    #[must_use]
    pub fn shared() -> SharedCache<T> {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Looks up the page stored for `query`. Never performs I/O.
    #[must_use]
    pub fn get(&self, query: &ListQuery) -> Option<&ListPage<T>> {
        self.entries.get(&query.key()).map(|entry| &entry.page)
    }

    /// Stores `page` for `query`, replacing any previous entry.
    pub fn put(&mut self, query: ListQuery, page: ListPage<T>) {
        let key = query.key();
        debug!(key = %key, page = query.page(), items = page.items.len(), "cache put");
        self.entries.insert(key, Entry { query, page });
    }

    /// Number of cached pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no pages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every entry whose filters satisfy `predicate`.
    ///
    /// # Returns
    ///
    /// The number of removed entries.
    pub fn invalidate<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&Filters) -> bool,
    {
        let before = self.entries.len();
        self.entries
            .retain(|_, entry| !predicate(entry.query.filters()));
        let removed = before - self.entries.len();
        debug!(removed, "cache invalidate by filters");
        removed
    }

    /// Removes every entry whose page holds an item with `id`.
    ///
    /// # Returns
    ///
    /// The number of removed entries.
    pub fn invalidate_containing(&mut self, id: &str) -> usize
    where
        T: Identified,
    {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.page.contains(id));
        let removed = before - self.entries.len();
        debug!(id, removed, "cache invalidate by item");
        removed
    }

    /// Applies an invalidation plan produced by a moderation transition.
    ///
    /// An entry is removed when any of the plan's `(key, value)` pairs
    /// matches its filters, or when it holds the plan's item.
    ///
    /// # Returns
    ///
    /// The number of removed entries.
    pub fn apply(&mut self, plan: &Invalidation) -> usize
    where
        T: Identified,
    {
        let before = self.entries.len();
        self.entries.retain(|_, entry| {
            let filters = entry.query.filters();
            let by_filter = plan
                .filters
                .iter()
                .any(|(key, value)| filters.matches(key, value));
            let by_item = plan
                .item_id
                .as_deref()
                .is_some_and(|id| entry.page.contains(id));
            !(by_filter || by_item)
        });
        let removed = before - self.entries.len();
        debug!(removed, "cache invalidate by plan");
        removed
    }

    /// Marks `query` as in flight.
    ///
    /// # Returns
    ///
    /// `true` if the caller should issue the request, `false` if an
    /// identical request is already outstanding.
    pub fn begin_fetch(&mut self, query: &ListQuery) -> bool {
        self.in_flight.insert(query.key())
    }

    /// Clears the in-flight marker for `query`.
    pub fn finish_fetch(&mut self, query: &ListQuery) {
        self.in_flight.remove(&query.key());
    }

    /// Whether a request for `query` is outstanding.
    #[must_use]
    pub fn is_in_flight(&self, query: &ListQuery) -> bool {
        self.in_flight.contains(&query.key())
    }

    /// Drops every entry and in-flight marker.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.in_flight.clear();
    }
}
