// Rust guideline compliant 2026-10-14

//! List view: the surface a rendering layer binds to.
//!
//! A view owns one loader and one visibility trigger for its active filter
//! set and shares the query cache with every other view. Changing filters
//! or closing the view disconnects the trigger and abandons the in-flight
//! request; a response arriving afterwards is neither cached nor applied.

use crate::cache::SharedCache;
use crate::loader::{Completion, IncrementalLoader, LoaderState, PageRequest, Ticket};
use crate::models::{Filters, Identified, ListPage, ListQuery, Viewer};
use crate::moderation::{Acknowledgement, ModerationApi, Moderated, Moderator};
use crate::trigger::VisibilityTrigger;
use crate::{Config, Error, Result};
use tracing::debug;

/// Paged query endpoint of the remote API.
pub trait ListSource<T> {
    /// Fetches one page.
    ///
    /// # Errors
    ///
    /// Returns `Transport` for network failures and non-success responses.
    fn fetch(&mut self, query: &ListQuery) -> Result<ListPage<T>>;
}

impl<T, F> ListSource<T> for F
where
    F: FnMut(&ListQuery) -> Result<ListPage<T>>,
{
    fn fetch(&mut self, query: &ListQuery) -> Result<ListPage<T>> {
        self(query)
    }
}

/// Result of [`ListView::sync`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// No request outstanding.
    Idle,
    /// The request is still in flight.
    Waiting,
    /// A page shared by another view was applied.
    Applied(Completion),
    /// The other view gave up; the caller must send this request.
    Reissue(PageRequest),
}

#[derive(Debug)]
struct InFlight {
    request: PageRequest,
    owner: bool,
}

enum Begin {
    Nothing,
    Cached(Completion),
    Joined,
    Issue(PageRequest),
}

/// Infinite-scroll list bound to a shared cache.
#[derive(Debug)]
pub struct ListView<T> {
    loader: IncrementalLoader<T>,
    trigger: VisibilityTrigger,
    cache: SharedCache<T>,
    in_flight: Option<InFlight>,
}

impl<T: Identified + Clone> ListView<T> {
    /// Creates a view using page size and trigger margin from `config`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidQuery` if the configured page size is zero.
    pub fn new(cache: SharedCache<T>, filters: Filters, config: &Config) -> Result<Self> {
        Self::with_options(cache, filters, config.page_size, config.trigger_margin_px)
    }

    /// Creates a view with explicit page size and trigger margin.
    ///
    /// # Errors
    ///
    /// Returns `InvalidQuery` if `page_size` is zero.
    pub fn with_options(
        cache: SharedCache<T>,
        filters: Filters,
        page_size: u32,
        margin: f64,
    ) -> Result<Self> {
        Ok(Self {
            loader: IncrementalLoader::new(filters, page_size)?,
            trigger: VisibilityTrigger::new(margin),
            cache,
            in_flight: None,
        })
    }

    /// Loads the next page through `source`.
    ///
    /// Serves the page from the cache when possible. Does nothing while a
    /// request is outstanding or after the list is exhausted.
    ///
    /// # Returns
    ///
    /// The completion, or `None` if nothing was applied.
    pub fn load_next<S>(&mut self, source: &mut S) -> Option<Completion>
    where
        S: ListSource<T> + ?Sized,
    {
        match self.begin() {
            Begin::Issue(request) => {
                let result = source.fetch(&request.query);
                self.deliver(&request, result).ok()
            }
            Begin::Cached(completion) => Some(completion),
            Begin::Joined | Begin::Nothing => None,
        }
    }

    /// Starts loading the next page for callers with their own transport.
    ///
    /// # Returns
    ///
    /// The request to send, or `None` if nothing needs sending: the page
    /// came from the cache, another view is already fetching it (see
    /// [`ListView::sync`]), a request is outstanding, or the list is
    /// exhausted.
    pub fn begin_next(&mut self) -> Option<PageRequest> {
        match self.begin() {
            Begin::Issue(request) => Some(request),
            _ => None,
        }
    }

    fn begin(&mut self) -> Begin {
        if self.in_flight.is_some() {
            return Begin::Nothing;
        }
        let Some(request) = self.loader.load_next() else {
            return Begin::Nothing;
        };

        let cached = self.cache.borrow().get(&request.query).cloned();
        if let Some(page) = cached {
            debug!(key = %request.query.key(), "serving page from cache");
            return match self.apply(request.ticket, Ok(page)) {
                Ok(completion) => Begin::Cached(completion),
                Err(_) => Begin::Nothing,
            };
        }

        let owner = self.cache.borrow_mut().begin_fetch(&request.query);
        self.in_flight = Some(InFlight {
            request: request.clone(),
            owner,
        });
        if owner {
            Begin::Issue(request)
        } else {
            debug!(key = %request.query.key(), "joining in-flight request");
            Begin::Joined
        }
    }

    /// Delivers the outcome of a request returned by [`ListView::begin_next`].
    ///
    /// Only the request this view is still waiting on releases the
    /// in-flight marker and writes to the cache. A page for a superseded
    /// ticket is neither cached nor applied: a transition may have
    /// invalidated its key while it was in flight.
    ///
    /// # Errors
    ///
    /// Returns `StaleResponse` if the request was superseded.
    pub fn deliver(
        &mut self,
        request: &PageRequest,
        result: Result<ListPage<T>>,
    ) -> Result<Completion> {
        let current = self
            .in_flight
            .as_ref()
            .is_some_and(|flight| flight.request.ticket == request.ticket);
        if current {
            if let Some(flight) = self.in_flight.take() {
                let mut cache = self.cache.borrow_mut();
                if flight.owner {
                    cache.finish_fetch(&request.query);
                }
                if let Ok(page) = &result {
                    cache.put(request.query.clone(), page.clone());
                }
            }
        } else {
            debug!(key = %request.query.key(), "dropping response for superseded request");
        }

        self.apply(request.ticket, result)
    }

    /// Picks up a page fetched by another view.
    pub fn sync(&mut self) -> SyncOutcome {
        let Some(flight) = self.in_flight.as_mut() else {
            return SyncOutcome::Idle;
        };
        if flight.owner {
            return SyncOutcome::Waiting;
        }

        let query = flight.request.query.clone();
        let ticket = flight.request.ticket;
        let cached = self.cache.borrow().get(&query).cloned();
        if let Some(page) = cached {
            self.in_flight = None;
            return match self.apply(ticket, Ok(page)) {
                Ok(completion) => SyncOutcome::Applied(completion),
                Err(_) => SyncOutcome::Idle,
            };
        }

        let mut cache = self.cache.borrow_mut();
        if cache.is_in_flight(&query) {
            return SyncOutcome::Waiting;
        }
        flight.owner = cache.begin_fetch(&query);
        SyncOutcome::Reissue(flight.request.clone())
    }

    /// Reports the position of a rendered item.
    ///
    /// # Returns
    ///
    /// `true` if the end of the list was reached and the caller should
    /// load the next page.
    pub fn reached_end(&mut self, target: &str, distance: f64) -> bool {
        self.trigger.report(target, distance)
    }

    /// Reports the position of a rendered item and loads the next page
    /// through `source` when the end of the list was reached.
    pub fn report_visibility<S>(
        &mut self,
        target: &str,
        distance: f64,
        source: &mut S,
    ) -> Option<Completion>
    where
        S: ListSource<T> + ?Sized,
    {
        if self.reached_end(target, distance) {
            self.load_next(source)
        } else {
            None
        }
    }

    /// Switches to a new filter set.
    ///
    /// # Returns
    ///
    /// `true` if the filters differed and the list restarted.
    pub fn set_filters(&mut self, filters: Filters) -> bool {
        if !self.loader.set_filters(filters) {
            return false;
        }
        self.abandon();
        true
    }

    /// Restarts the list under the same filters.
    pub fn reload(&mut self) {
        self.loader.reset();
        self.abandon();
    }

    /// Tears the view down: drops accumulated items, disconnects the
    /// trigger and abandons the in-flight request.
    pub fn close(&mut self) {
        self.reload();
    }

    /// Applies a moderation action to an item of this list.
    ///
    /// The local item is replaced or removed only after the server
    /// acknowledges the action.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the item is not in the list,
    /// `InvalidTransition` if a guard fails (no remote call is made), or
    /// the server's error.
    pub fn transition<A>(
        &mut self,
        item_id: &str,
        action: &T::Action,
        viewer: &Viewer,
        api: &mut A,
    ) -> Result<Acknowledgement<T>>
    where
        T: Moderated,
        A: ModerationApi<T> + ?Sized,
    {
        let item = self
            .loader
            .item(item_id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("item {item_id}")))?;

        let ack = {
            let mut cache = self.cache.borrow_mut();
            Moderator::new(*viewer, &mut *cache).transition(&item, action, api)?
        };

        match &ack {
            Acknowledgement::Updated(updated) => {
                self.loader.replace_item(updated.clone());
            }
            Acknowledgement::Removed => {
                self.loader.remove_item(item_id);
            }
        }
        self.rearm();
        Ok(ack)
    }

    fn apply(&mut self, ticket: Ticket, result: Result<ListPage<T>>) -> Result<Completion> {
        let completion = self.loader.complete(ticket, result)?;
        if matches!(completion, Completion::Appended { .. }) {
            self.rearm();
        }
        Ok(completion)
    }

    fn rearm(&mut self) {
        if !self.loader.has_more() {
            self.trigger.disconnect();
            return;
        }
        match self.loader.items().last() {
            Some(last) => {
                self.trigger.observe(last.id());
            }
            None => self.trigger.disconnect(),
        }
    }
}

impl<T> ListView<T> {
    fn abandon(&mut self) {
        self.trigger.disconnect();
        if let Some(flight) = self.in_flight.take() {
            if flight.owner {
                self.cache.borrow_mut().finish_fetch(&flight.request.query);
            }
            debug!(page = flight.request.ticket.page, "abandoned in-flight request");
        }
    }

    /// Accumulated items.
    #[must_use]
    pub fn items(&self) -> &[T] {
        self.loader.items()
    }

    /// Whether a page is loading.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loader.is_loading()
    }

    /// Whether more pages may exist.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.loader.has_more()
    }

    /// Error from the last failed page, for a retry affordance.
    #[must_use]
    pub fn error(&self) -> Option<&Error> {
        self.loader.error()
    }

    /// Loader state.
    #[must_use]
    pub fn state(&self) -> LoaderState {
        self.loader.state()
    }

    /// Active filter set.
    #[must_use]
    pub fn filters(&self) -> &Filters {
        self.loader.filters()
    }

    /// The view's visibility trigger.
    #[must_use]
    pub fn trigger(&self) -> &VisibilityTrigger {
        &self.trigger
    }

    /// The shared cache.
    #[must_use]
    pub fn cache(&self) -> &SharedCache<T> {
        &self.cache
    }
}

impl<T> Drop for ListView<T> {
    fn drop(&mut self) {
        if let Some(flight) = self.in_flight.take() {
            if flight.owner {
                if let Ok(mut cache) = self.cache.try_borrow_mut() {
                    cache.finish_fetch(&flight.request.query);
                }
            }
        }
    }
}
