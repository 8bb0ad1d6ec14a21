// Rust guideline compliant 2026-10-14

//! Incremental loader for infinite-scroll lists.
//!
//! The loader is sans-IO: [`IncrementalLoader::load_next`] hands out a
//! [`PageRequest`] and the caller reports the outcome through
//! [`IncrementalLoader::complete`]. Each request carries a [`Ticket`]; a
//! ticket from an older generation (filters changed since it was issued)
//! is rejected as stale and never touches the accumulated list.
//!
//! State flow:
//!
//! - Idle → Loading(1)
//! - Loading(p) → Loaded(p) when more pages exist
//! - Loading(p) → Exhausted(p) when the server reports no more pages
//! - Loading(p) → Loaded(p-1) or Idle on failure, keeping the error

use crate::models::{Filters, Identified, ListPage, ListQuery};
use crate::{Error, Result};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Loader state for the active filter set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderState {
    /// Nothing requested yet.
    Idle,
    /// A request for `page` is outstanding.
    Loading {
        /// Page being loaded.
        page: u32,
    },
    /// Pages up to `page` are accumulated and more exist.
    Loaded {
        /// Last accumulated page.
        page: u32,
    },
    /// The server reported no further pages. Terminal until filters change.
    Exhausted {
        /// Last accumulated page.
        page: u32,
    },
}

/// Identifies which request a response belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket {
    /// Filter generation the request was issued under.
    pub generation: u64,
    /// Requested page.
    pub page: u32,
}

/// A page request the caller must send to the remote list source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Ticket to hand back on completion.
    pub ticket: Ticket,
    /// Query to send.
    pub query: ListQuery,
}

/// Result of applying a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The page was appended.
    Appended {
        /// Items added to the list.
        added: usize,
        /// Items skipped because their ID was already present.
        duplicates: usize,
    },
    /// The request failed; the error is held in the loader state.
    Failed,
}

/// Accumulates pages for one filter set at a time.
#[derive(Debug)]
pub struct IncrementalLoader<T> {
    filters: Filters,
    page_size: u32,
    state: LoaderState,
    loaded_page: u32,
    items: Vec<T>,
    seen: HashSet<String>,
    generation: u64,
    error: Option<Error>,
}

impl<T: Identified> IncrementalLoader<T> {
    /// Creates an idle loader.
    ///
    /// # Arguments
    ///
    /// * `filters` - Initial filter set
    /// * `page_size` - Items per page
    ///
    /// # Errors
    ///
    /// Returns `InvalidQuery` if `page_size` is zero.
    pub fn new(filters: Filters, page_size: u32) -> Result<Self> {
        if page_size == 0 {
            return Err(Error::InvalidQuery(
                "page size must be greater than 0".to_string(),
            ));
        }
        Ok(Self {
            filters,
            page_size,
            state: LoaderState::Idle,
            loaded_page: 0,
            items: Vec::new(),
            seen: HashSet::new(),
            generation: 0,
            error: None,
        })
    }

    /// Requests the next page.
    ///
    /// # Returns
    ///
    /// `None` while a request is outstanding or after the list is
    /// exhausted; otherwise the request for the page after the last
    /// accumulated one. After a failure this is the same page again.
    pub fn load_next(&mut self) -> Option<PageRequest> {
        if matches!(
            self.state,
            LoaderState::Loading { .. } | LoaderState::Exhausted { .. }
        ) {
            return None;
        }

        let page = self.loaded_page + 1;
        let query = ListQuery::new(self.filters.clone(), page, self.page_size).ok()?;
        self.state = LoaderState::Loading { page };
        self.error = None;
        debug!(page, generation = self.generation, "loader request");

        Some(PageRequest {
            ticket: Ticket {
                generation: self.generation,
                page,
            },
            query,
        })
    }

    /// Applies the outcome of a request.
    ///
    /// # Arguments
    ///
    /// * `ticket` - Ticket of the request being answered
    /// * `result` - Page returned by the source, or the transport error
    ///
    /// # Returns
    ///
    /// What happened to the accumulated list.
    ///
    /// # Errors
    ///
    /// Returns `StaleResponse` when the ticket does not match the
    /// outstanding request. Loader state is untouched in that case.
    pub fn complete(&mut self, ticket: Ticket, result: Result<ListPage<T>>) -> Result<Completion> {
        let outstanding = match self.state {
            LoaderState::Loading { page } => Some(page),
            _ => None,
        };
        if ticket.generation != self.generation || outstanding != Some(ticket.page) {
            debug!(
                page = ticket.page,
                generation = ticket.generation,
                current = self.generation,
                "discarding stale response"
            );
            return Err(Error::StaleResponse { page: ticket.page });
        }

        match result {
            Ok(ListPage { items, has_more, .. }) => {
                let mut added = 0;
                let mut duplicates = 0;
                for item in items {
                    if self.seen.insert(item.id().to_string()) {
                        self.items.push(item);
                        added += 1;
                    } else {
                        duplicates += 1;
                    }
                }

                self.loaded_page = ticket.page;
                self.state = if has_more {
                    LoaderState::Loaded { page: ticket.page }
                } else {
                    LoaderState::Exhausted { page: ticket.page }
                };
                debug!(page = ticket.page, added, duplicates, has_more, "page appended");
                Ok(Completion::Appended { added, duplicates })
            }
            Err(err) => {
                warn!(page = ticket.page, error = %err, "page load failed");
                self.state = if self.loaded_page == 0 {
                    LoaderState::Idle
                } else {
                    LoaderState::Loaded {
                        page: self.loaded_page,
                    }
                };
                self.error = Some(err);
                Ok(Completion::Failed)
            }
        }
    }

    /// Switches to a new filter set.
    ///
    /// # Returns
    ///
    /// `true` if the filters differed and accumulated state was discarded.
    pub fn set_filters(&mut self, filters: Filters) -> bool {
        if filters == self.filters {
            return false;
        }
        self.filters = filters;
        self.reset();
        true
    }

    /// Discards accumulated state and invalidates outstanding tickets.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.state = LoaderState::Idle;
        self.loaded_page = 0;
        self.items.clear();
        self.seen.clear();
        self.error = None;
    }

    /// Replaces the item with the same ID.
    ///
    /// # Returns
    ///
    /// `true` if an item was replaced.
    pub fn replace_item(&mut self, item: T) -> bool {
        match self.items.iter_mut().find(|existing| existing.id() == item.id()) {
            Some(slot) => {
                *slot = item;
                true
            }
            None => false,
        }
    }

    /// Removes the item with `id`.
    pub fn remove_item(&mut self, id: &str) -> Option<T> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        self.seen.remove(id);
        Some(self.items.remove(index))
    }

    /// Returns the item with `id`.
    #[must_use]
    pub fn item(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }
}

impl<T> IncrementalLoader<T> {
    /// Accumulated items in request order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> LoaderState {
        self.state
    }

    /// Whether a request is outstanding.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoaderState::Loading { .. })
    }

    /// Whether more pages may exist.
    #[must_use]
    pub fn has_more(&self) -> bool {
        !matches!(self.state, LoaderState::Exhausted { .. })
    }

    /// Error from the most recent failed request.
    #[must_use]
    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    /// Last accumulated page (0 before the first page).
    #[must_use]
    pub fn page(&self) -> u32 {
        self.loaded_page
    }

    /// Active filter set.
    #[must_use]
    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    /// Items per page.
    #[must_use]
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Current filter generation.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
