use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

use crate::filter::PropertyFilter;
use crate::listing::fallback::sample_result_set;
use crate::listing::{ListingError, ListingSource};
use crate::models::ResultSet;
use crate::pagination::{page_request, resize, DEFAULT_PAGE_SIZE};

/// What a finished search produced
#[derive(Debug)]
pub enum SearchOutcome {
    /// Fresh data from the listing source
    Live(ResultSet),
    /// The source failed; fixed sample listings substituted, with the
    /// failure kept visible instead of swallowed
    Degraded {
        sample: ResultSet,
        error: ListingError,
    },
    /// The filter changed while this search was in flight; its result
    /// was discarded
    Superseded,
}

/// Holds the current filter and runs searches against a listing source.
///
/// Every filter mutation bumps a generation counter, and a search only
/// reports data if its generation is still current when the response
/// lands. A slow response to an old filter can never overwrite a newer
/// search.
pub struct SearchSession {
    source: Arc<dyn ListingSource>,
    filter: Mutex<PropertyFilter>,
    generation: AtomicU64,
}

impl SearchSession {
    pub fn new(source: Arc<dyn ListingSource>) -> Self {
        Self {
            source,
            filter: Mutex::new(PropertyFilter::default()),
            generation: AtomicU64::new(0),
        }
    }

    /// Snapshot of the current filter
    pub fn filter(&self) -> PropertyFilter {
        self.filter.lock().expect("filter state poisoned").clone()
    }

    /// Replace the whole filter (a new search from the caller)
    pub fn set_filter(&self, filter: PropertyFilter) {
        let mut current = self.filter.lock().expect("filter state poisoned");
        *current = filter;
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Jump to a page. Pages below 1 snap to the first page; the page
    /// size stays as it was.
    #[allow(dead_code)]
    pub fn go_to_page(&self, page: u32) {
        let mut current = self.filter.lock().expect("filter state poisoned");
        let limit = current.limit.unwrap_or(DEFAULT_PAGE_SIZE);
        current.offset = Some(page_request(page, limit));
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Change the page size and return to the first page, so the caller
    /// never ends up on a page that no longer exists.
    #[allow(dead_code)]
    pub fn set_page_size(&self, per_page: u32) {
        let (limit, offset) = resize(per_page);
        let mut current = self.filter.lock().expect("filter state poisoned");
        current.limit = Some(limit);
        current.offset = Some(offset);
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Run one search against the current filter.
    pub async fn search(&self) -> SearchOutcome {
        let (filter, generation) = {
            let current = self.filter.lock().expect("filter state poisoned");
            (current.clone(), self.generation.load(Ordering::SeqCst))
        };

        let result = self.source.search(&filter).await;

        if self.generation.load(Ordering::SeqCst) != generation {
            debug!(
                "Discarding stale response from {}",
                self.source.source_name()
            );
            return SearchOutcome::Superseded;
        }

        match result {
            Ok(set) => SearchOutcome::Live(set),
            Err(error) => {
                warn!("Live search failed: {error}");
                SearchOutcome::Degraded {
                    sample: sample_result_set(),
                    error,
                }
            }
        }
    }
}
