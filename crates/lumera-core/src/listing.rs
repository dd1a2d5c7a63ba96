//! Paginated listing controller.
//!
//! One state machine drives every "infinite scroll" grid in the app: it
//! hands out fetch passes describing the page to load, and folds results
//! back in with identity dedup, exhaustion tracking, and stale-result
//! discard. The controller never fetches anything itself — the caller runs
//! the pass against whatever data source parametrizes the screen.

use std::collections::HashSet;

use crate::models::CatalogSummary;

/// Load state of a listing. Initial and incremental loads are mutually
/// exclusive by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum LoadState {
    #[default]
    Idle,
    LoadingInitial,
    LoadingMore,
}

/// A fetch the caller has been asked to run. Carries the query identity and
/// generation captured at start time so a result that arrives after the
/// query changed can be recognized and dropped.
#[derive(Debug, Clone)]
pub struct FetchPass<Q> {
    pub query: Q,
    pub page: u32,
    generation: u64,
}

/// Incremental-fetch state for one listing surface.
///
/// `Q` is whatever identifies the listing: category, genre, search text,
/// language tag. Changing it restarts the listing from page 1 and
/// invalidates any in-flight pass.
#[derive(Debug)]
pub struct Listing<Q> {
    query: Option<Q>,
    items: Vec<CatalogSummary>,
    page: u32,
    has_more: bool,
    state: LoadState,
    generation: u64,
}

impl<Q> Default for Listing<Q> {
    fn default() -> Self {
        Self {
            query: None,
            items: Vec::new(),
            page: 1,
            has_more: true,
            state: LoadState::Idle,
            generation: 0,
        }
    }
}

impl<Q: Clone + PartialEq> Listing<Q> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restart from page 1 for `query`. Always allowed — an in-flight load
    /// is preempted, and its result will fail the generation check when it
    /// eventually arrives.
    pub fn begin_initial(&mut self, query: Q) -> FetchPass<Q> {
        self.generation += 1;
        self.query = Some(query.clone());
        self.items.clear();
        self.page = 1;
        self.has_more = true;
        self.state = LoadState::LoadingInitial;
        FetchPass {
            query,
            page: 1,
            generation: self.generation,
        }
    }

    /// Ask for the next page. Returns `None` — and must cause no fetch —
    /// while a load is in flight, after exhaustion, or before any initial
    /// load, so the view layer can call this on every scroll event.
    pub fn begin_more(&mut self) -> Option<FetchPass<Q>> {
        if self.state != LoadState::Idle || !self.has_more {
            return None;
        }
        let query = self.query.clone()?;
        self.state = LoadState::LoadingMore;
        Some(FetchPass {
            query,
            page: self.page + 1,
            generation: self.generation,
        })
    }

    /// Drop everything and return to the unloaded state (e.g. the search
    /// query was cleared). In-flight passes are invalidated.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.query = None;
        self.items.clear();
        self.page = 1;
        self.has_more = true;
        self.state = LoadState::Idle;
    }

    /// Fold a completed fetch back in.
    ///
    /// Stale passes (query changed since the fetch started) are dropped
    /// without touching state. Batches are deduplicated by item ID against
    /// everything already loaded and within the batch itself; a page that
    /// contributes nothing new marks the listing exhausted without
    /// advancing the page counter. Errors keep the last-known-good items
    /// and are not retried.
    pub fn resolve<E: std::fmt::Display>(
        &mut self,
        pass: &FetchPass<Q>,
        result: Result<Vec<CatalogSummary>, E>,
    ) {
        if pass.generation != self.generation {
            tracing::debug!(page = pass.page, "Discarding stale listing result");
            return;
        }
        self.state = LoadState::Idle;
        match result {
            Ok(batch) => {
                let mut seen: HashSet<u64> = self.items.iter().map(|i| i.id).collect();
                let fresh: Vec<CatalogSummary> =
                    batch.into_iter().filter(|i| seen.insert(i.id)).collect();
                if fresh.is_empty() {
                    self.has_more = false;
                } else {
                    self.items.extend(fresh);
                    self.page = pass.page;
                }
            }
            Err(e) => {
                tracing::warn!(page = pass.page, "Listing fetch failed: {e}");
            }
        }
    }

    /// Loaded items in arrival order.
    pub fn items(&self) -> &[CatalogSummary] {
        &self.items
    }

    pub fn query(&self) -> Option<&Q> {
        self.query.as_ref()
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn is_loading_initial(&self) -> bool {
        self.state == LoadState::LoadingInitial
    }

    pub fn is_loading_more(&self) -> bool {
        self.state == LoadState::LoadingMore
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MediaType;

    fn summary(id: u64) -> CatalogSummary {
        CatalogSummary {
            id,
            media_type: MediaType::Movie,
            title: format!("Movie {id}"),
            poster_path: None,
            backdrop_path: None,
            vote_average: 6.5,
            release_date: None,
            overview: None,
        }
    }

    fn page(ids: &[u64]) -> Vec<CatalogSummary> {
        ids.iter().copied().map(summary).collect()
    }

    fn ids<Q: Clone + PartialEq>(listing: &Listing<Q>) -> Vec<u64> {
        listing.items().iter().map(|i| i.id).collect()
    }

    type Err = String;

    #[test]
    fn test_initial_load_replaces_items() {
        let mut listing: Listing<&str> = Listing::new();
        let pass = listing.begin_initial("trending");
        assert!(listing.is_loading_initial());

        listing.resolve::<Err>(&pass, Ok(page(&[1, 2, 3])));
        assert_eq!(ids(&listing), vec![1, 2, 3]);
        assert!(listing.has_more());
        assert!(!listing.is_loading_initial());
    }

    #[test]
    fn test_initial_load_dedups_within_batch() {
        // The source API does not guarantee uniqueness even within one page.
        let mut listing: Listing<&str> = Listing::new();
        let pass = listing.begin_initial("trending");
        listing.resolve::<Err>(&pass, Ok(page(&[1, 2, 1, 3, 2])));
        assert_eq!(ids(&listing), vec![1, 2, 3]);
    }

    #[test]
    fn test_merge_dedups_against_loaded_pages() {
        let mut listing: Listing<&str> = Listing::new();
        let pass = listing.begin_initial("trending");
        listing.resolve::<Err>(&pass, Ok(page(&[1, 2])));

        let pass = listing.begin_more().expect("page 2 should be requested");
        assert_eq!(pass.page, 2);
        listing.resolve::<Err>(&pass, Ok(page(&[2, 3])));

        assert_eq!(ids(&listing), vec![1, 2, 3]);
    }

    #[test]
    fn test_empty_page_exhausts_and_stops_fetching() {
        let mut listing: Listing<&str> = Listing::new();
        let pass = listing.begin_initial("trending");
        listing.resolve::<Err>(&pass, Ok(page(&[1])));

        let pass = listing.begin_more().unwrap();
        listing.resolve::<Err>(&pass, Ok(Vec::new()));
        assert!(!listing.has_more());

        // Exhausted: no further pass may be issued, i.e. no fetch happens.
        assert!(listing.begin_more().is_none());
        assert_eq!(ids(&listing), vec![1]);
    }

    #[test]
    fn test_all_duplicate_page_exhausts_without_advancing() {
        let mut listing: Listing<&str> = Listing::new();
        let pass = listing.begin_initial("trending");
        listing.resolve::<Err>(&pass, Ok(page(&[1, 2])));

        let pass = listing.begin_more().unwrap();
        listing.resolve::<Err>(&pass, Ok(page(&[1, 2])));

        assert!(!listing.has_more());
        assert!(listing.begin_more().is_none());
        assert_eq!(ids(&listing), vec![1, 2]);
    }

    #[test]
    fn test_empty_initial_result_exhausts() {
        let mut listing: Listing<&str> = Listing::new();
        let pass = listing.begin_initial("obscure query");
        listing.resolve::<Err>(&pass, Ok(Vec::new()));
        assert!(!listing.has_more());
        assert!(listing.is_empty());
        assert!(listing.begin_more().is_none());
    }

    #[test]
    fn test_no_concurrent_passes() {
        let mut listing: Listing<&str> = Listing::new();
        let pass = listing.begin_initial("trending");
        // Initial still in flight.
        assert!(listing.begin_more().is_none());
        listing.resolve::<Err>(&pass, Ok(page(&[1])));

        let _pass2 = listing.begin_more().unwrap();
        // Page 2 still in flight.
        assert!(listing.begin_more().is_none());
    }

    #[test]
    fn test_no_pass_before_initial_load() {
        let mut listing: Listing<&str> = Listing::new();
        assert!(listing.begin_more().is_none());
    }

    #[test]
    fn test_stale_query_result_is_discarded() {
        let mut listing: Listing<&str> = Listing::new();
        let pass_a = listing.begin_initial("query a");
        listing.resolve::<Err>(&pass_a, Ok(page(&[1, 2])));
        let more_a = listing.begin_more().unwrap();

        // Query changes while page 2 of A is in flight.
        let pass_b = listing.begin_initial("query b");
        listing.resolve::<Err>(&pass_b, Ok(page(&[10])));

        // A's late page 2 must not leak into B's items.
        listing.resolve::<Err>(&more_a, Ok(page(&[3, 4])));
        assert_eq!(ids(&listing), vec![10]);
        assert_eq!(listing.query(), Some(&"query b"));
    }

    #[test]
    fn test_stale_result_does_not_clobber_inflight_state() {
        let mut listing: Listing<&str> = Listing::new();
        let pass_a = listing.begin_initial("query a");

        // Restart before A resolves; B is now in flight.
        let _pass_b = listing.begin_initial("query b");
        listing.resolve::<Err>(&pass_a, Ok(page(&[1])));

        // Still loading B — the stale resolve must not flip us to idle.
        assert!(listing.is_loading_initial());
        assert!(listing.begin_more().is_none());
    }

    #[test]
    fn test_more_failure_keeps_items_and_allows_retry() {
        let mut listing: Listing<&str> = Listing::new();
        let pass = listing.begin_initial("trending");
        listing.resolve::<Err>(&pass, Ok(page(&[1, 2])));

        let pass = listing.begin_more().unwrap();
        listing.resolve(&pass, Err("connection reset".to_string()));

        // Last-known-good kept, no automatic retry, but scrolling again may
        // re-request the same page.
        assert_eq!(ids(&listing), vec![1, 2]);
        assert!(listing.has_more());
        let retry = listing.begin_more().unwrap();
        assert_eq!(retry.page, 2);
    }

    #[test]
    fn test_initial_failure_leaves_empty() {
        let mut listing: Listing<&str> = Listing::new();
        let pass = listing.begin_initial("trending");
        listing.resolve(&pass, Err("timeout".to_string()));
        assert!(listing.is_empty());
        assert!(!listing.is_loading_initial());
    }

    #[test]
    fn test_clear_invalidates_inflight_pass() {
        let mut listing: Listing<&str> = Listing::new();
        let pass = listing.begin_initial("query");
        listing.clear();

        listing.resolve::<Err>(&pass, Ok(page(&[1])));
        assert!(listing.is_empty());
        assert!(listing.query().is_none());
        assert!(listing.begin_more().is_none());
    }

    #[test]
    fn test_page_counter_advances_only_on_new_items() {
        let mut listing: Listing<&str> = Listing::new();
        let pass = listing.begin_initial("trending");
        listing.resolve::<Err>(&pass, Ok(page(&[1])));

        let pass = listing.begin_more().unwrap();
        assert_eq!(pass.page, 2);
        listing.resolve::<Err>(&pass, Ok(page(&[2])));

        let pass = listing.begin_more().unwrap();
        assert_eq!(pass.page, 3);
    }
}
