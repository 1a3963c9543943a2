//! Paginated, searchable city table state.
//!
//! [`CitiesTable`] owns the accumulated records, the page counter, the
//! "has more" flag and the current search string. The rendering layer
//! drives it with three kinds of events: mount, scroll boundary reached,
//! and search input. It reads back the visible rows, suggestions and
//! status after each event.

mod outcome;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, error, info, instrument};

use crate::filter::{Suggestion, filter_cities, suggestions};
use crate::traits::CitySource;
use crate::types::{CityRecord, Offset, Page};

pub use outcome::{LoadOutcome, SkipReason, TableStatus};

/// City table backed by a [`CitySource`].
///
/// Cloning is cheap and clones share state, so a view may hand copies to
/// several event handlers. At most one fetch is outstanding at a time;
/// overlapping load requests are skipped, not queued.
///
/// # Example
///
/// ```no_run
/// use citytable_core::{CitiesTable, CitySource};
///
/// # async fn example(source: impl CitySource) {
/// let table = CitiesTable::new(source);
/// table.on_mount().await;
/// table.on_search_input("lon");
/// for city in table.visible() {
///     println!("{} ({})", city.name, city.country);
/// }
/// table.on_scroll_end().await;
/// # }
/// ```
pub struct CitiesTable<S> {
    inner: Arc<TableInner<S>>,
}

struct TableInner<S> {
    source: S,
    mounted: AtomicBool,
    loading: AtomicBool,
    state: RwLock<TableState>,
}

#[derive(Debug)]
struct TableState {
    page: u32,
    has_more: bool,
    cities: Vec<CityRecord>,
    query: String,
    visible: Vec<CityRecord>,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            page: 0,
            has_more: true,
            cities: Vec::new(),
            query: String::new(),
            visible: Vec::new(),
        }
    }
}

impl TableState {
    fn append(&mut self, page: Page) {
        let exhausted = page.exhausted();
        self.visible
            .extend(filter_cities(&page.records, &self.query));
        self.cities.extend(page.records);
        self.page = self.page.saturating_add(1);
        if exhausted {
            self.has_more = false;
        }
    }

    fn set_query(&mut self, query: String) {
        self.visible = filter_cities(&self.cities, &query);
        self.query = query;
    }
}

/// Holds the in-flight flag for the duration of one fetch.
struct LoadingGuard<'a>(&'a AtomicBool);

impl<'a> LoadingGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<S> Clone for CitiesTable<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: CitySource> CitiesTable<S> {
    /// Create an empty table. Nothing is fetched until [`on_mount`](Self::on_mount).
    pub fn new(source: S) -> Self {
        Self {
            inner: Arc::new(TableInner {
                source,
                mounted: AtomicBool::new(false),
                loading: AtomicBool::new(false),
                state: RwLock::new(TableState::default()),
            }),
        }
    }

    /// Initial load. Only the first call fetches.
    pub async fn on_mount(&self) -> LoadOutcome {
        if self.inner.mounted.swap(true, Ordering::AcqRel) {
            return LoadOutcome::Skipped(SkipReason::AlreadyMounted);
        }
        self.load_more().await
    }

    /// The view scrolled to its boundary.
    pub async fn on_scroll_end(&self) -> LoadOutcome {
        self.load_more().await
    }

    /// The search input changed.
    pub fn on_search_input(&self, query: impl Into<String>) {
        let query = query.into();
        debug!(query = %query, "Search input changed");
        self.write_state().set_query(query);
    }

    /// A suggestion was picked; its value becomes the search string.
    pub fn select_suggestion(&self, value: impl Into<String>) {
        self.on_search_input(value);
    }

    /// Fetch the next page unless one is in flight or data is exhausted.
    ///
    /// Failures are logged and leave the page counter and the "has more"
    /// flag untouched.
    #[instrument(skip(self))]
    pub async fn load_more(&self) -> LoadOutcome {
        if !self.has_more() {
            debug!("Skipping load: no more pages");
            return LoadOutcome::Skipped(SkipReason::Exhausted);
        }

        let Some(_guard) = LoadingGuard::acquire(&self.inner.loading) else {
            debug!("Skipping load: fetch already in flight");
            return LoadOutcome::Skipped(SkipReason::InFlight);
        };

        // The fetch that held the flag may have been the last page.
        let offset = {
            let state = self.read_state();
            if !state.has_more {
                debug!("Skipping load: no more pages");
                return LoadOutcome::Skipped(SkipReason::Exhausted);
            }
            Offset::for_page(state.page)
        };

        debug!(%offset, "Fetching cities");

        match self.inner.source.fetch_page(offset).await {
            Ok(page) => {
                let count = page.len();
                let exhausted = page.exhausted();
                self.write_state().append(page);
                info!(%offset, count, exhausted, "Loaded cities");
                LoadOutcome::Loaded {
                    offset,
                    count,
                    exhausted,
                }
            }
            Err(err) => {
                error!(%offset, error = %err, "Error fetching cities");
                LoadOutcome::Failed(err)
            }
        }
    }

    /// All accumulated records, in fetch order.
    pub fn cities(&self) -> Vec<CityRecord> {
        self.read_state().cities.clone()
    }

    /// Records matching the current search string.
    pub fn visible(&self) -> Vec<CityRecord> {
        self.read_state().visible.clone()
    }

    /// Autocomplete entries for the current search string.
    pub fn suggestions(&self, limit: Option<usize>) -> Vec<Suggestion> {
        suggestions(&self.read_state().visible, limit)
    }

    /// Current search string.
    pub fn query(&self) -> String {
        self.read_state().query.clone()
    }

    /// Number of accumulated records.
    pub fn len(&self) -> usize {
        self.read_state().cities.len()
    }

    /// Returns true if nothing has been loaded yet.
    pub fn is_empty(&self) -> bool {
        self.read_state().cities.is_empty()
    }

    /// Number of pages successfully loaded.
    pub fn pages_loaded(&self) -> u32 {
        self.read_state().page
    }

    /// Offset the next load will request.
    pub fn next_offset(&self) -> Offset {
        Offset::for_page(self.read_state().page)
    }

    /// Returns false once a short page has been seen.
    pub fn has_more(&self) -> bool {
        self.read_state().has_more
    }

    /// Returns true while a fetch is outstanding.
    pub fn is_loading(&self) -> bool {
        self.inner.loading.load(Ordering::Acquire)
    }

    /// Indicator for the end of the table.
    pub fn status(&self) -> TableStatus {
        if self.is_loading() {
            TableStatus::Loading
        } else if self.has_more() {
            TableStatus::HasMore
        } else {
            TableStatus::Exhausted
        }
    }

    fn read_state(&self) -> RwLockReadGuard<'_, TableState> {
        self.inner
            .state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, TableState> {
        self.inner
            .state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
