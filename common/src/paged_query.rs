//! Paging and fetch sequencing for the securities table.
//!
//! The coordinator never performs I/O itself. Every change returns a [`FetchTicket`]
//! that the caller dispatches to a [`SecurityQueryService`]; the answer comes back
//! through [`PagedQueryCoordinator::complete_fetch`] together with the ticket's
//! generation. Between the two calls the coordinator may receive more events, so
//! several tickets can be in flight at once.

use std::collections::BTreeMap;

use crate::filter_criteria::FilterEmission;
use crate::query_error::{PageRequestError, QueryFailure};
use crate::securities_const::DEFAULT_PAGE_SIZE;
use crate::security::Security;
use crate::security_query::{SecurityPage, SecurityQuery};
use crate::security_service::SecurityQueryService;


/// How completions of superseded fetches are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StaleResponsePolicy {
    /// Only the most recently issued fetch may update the table.
    #[default]
    DiscardStale,
    /// Every completion applies, so the response that resolves last wins
    /// even if it answers an older request.
    LastResolvedWins,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinatorOptions {
    pub page_size: u64,
    /// When false a filter change keeps the current page index.
    pub reset_page_on_filter_change: bool,
    pub stale_responses: StaleResponsePolicy,
}

impl Default for CoordinatorOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            reset_page_on_filter_change: false,
            stale_responses: StaleResponsePolicy::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub query: SecurityQuery,
}

impl FetchTicket {
    pub async fn dispatch<S: SecurityQueryService>(self, service: &S) -> FetchCompletion {
        let result = service.query_securities(self.query).await;
        FetchCompletion { generation: self.generation, result }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchCompletion {
    pub generation: u64,
    pub result: Result<SecurityPage, QueryFailure>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied,
    Failed,
    Discarded,
}


/// Page index and size of one query window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page_index: u64,
    pub page_size: u64,
}

/// `page_index`/`page_size` track the latest request; `displayed` is the window
/// of the rows in `securities`, which only moves when a page is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct PagedQueryCoordinator {
    options: CoordinatorOptions,
    filters: FilterEmission,
    page_index: u64,
    page_size: u64,
    displayed: PageWindow,
    total_count: u64,
    is_loading: bool,
    securities: Vec<Security>,
    last_error: Option<QueryFailure>,
    latest_generation: u64,
    in_flight: BTreeMap<u64, PageWindow>,
}

impl Default for PagedQueryCoordinator {
    fn default() -> Self {
        Self::with_valid_options(CoordinatorOptions::default())
    }
}

impl PagedQueryCoordinator {
    /// Rejects a zero page size the same way a page change would.
    pub fn new(options: CoordinatorOptions) -> Result<Self, PageRequestError> {
        if options.page_size == 0 {
            return Err(PageRequestError::NonPositivePageSize(0));
        }
        Ok(Self::with_valid_options(options))
    }

    fn with_valid_options(options: CoordinatorOptions) -> Self {
        Self {
            options,
            filters: FilterEmission::NoFilters,
            page_index: 0,
            page_size: options.page_size,
            displayed: PageWindow { page_index: 0, page_size: options.page_size },
            total_count: 0,
            is_loading: false,
            securities: Vec::new(),
            last_error: None,
            latest_generation: 0,
            in_flight: BTreeMap::new(),
        }
    }

    /// Initial fetch, issued once when the table becomes active.
    pub fn activate(&mut self) -> FetchTicket {
        self.fetch()
    }

    pub fn on_filters_changed(&mut self, filters: FilterEmission) -> FetchTicket {
        self.filters = filters;
        if self.options.reset_page_on_filter_change {
            self.page_index = 0;
        }
        self.fetch()
    }

    pub fn on_page_changed(&mut self, page_index: i64, page_size: i64) -> Result<FetchTicket, PageRequestError> {
        let index = u64::try_from(page_index).map_err(|_| PageRequestError::NegativePageIndex(page_index))?;
        let size = u64::try_from(page_size)
            .ok()
            .filter(|size| *size > 0)
            .ok_or(PageRequestError::NonPositivePageSize(page_size))?;
        self.page_index = index;
        self.page_size = size;
        Ok(self.fetch())
    }

    pub fn fetch(&mut self) -> FetchTicket {
        self.is_loading = true;
        self.latest_generation += 1;
        self.in_flight.insert(self.latest_generation, PageWindow { page_index: self.page_index, page_size: self.page_size });
        FetchTicket {
            generation: self.latest_generation,
            query: SecurityQuery::for_page(&self.filters, self.page_index, self.page_size),
        }
    }

    pub fn complete_fetch(&mut self, generation: u64, result: Result<SecurityPage, QueryFailure>) -> FetchOutcome {
        let window = self.in_flight.remove(&generation);
        if self.options.stale_responses == StaleResponsePolicy::DiscardStale && generation != self.latest_generation {
            return FetchOutcome::Discarded;
        }
        self.is_loading = false;
        match result {
            Ok(page) => {
                if let Some(window) = window {
                    self.displayed = window;
                }
                self.securities = page.securities;
                self.total_count = page.total_count;
                self.last_error = None;
                FetchOutcome::Applied
            }
            Err(failure) => {
                // the last good page stays on screen, with its window
                self.last_error = Some(failure);
                FetchOutcome::Failed
            }
        }
    }

    pub fn filters(&self) -> &FilterEmission {
        &self.filters
    }

    pub fn page_index(&self) -> u64 {
        self.page_index
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    /// Window of the rows currently on screen.
    pub fn displayed_window(&self) -> PageWindow {
        self.displayed
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn page_count(&self) -> u64 {
        self.total_count.div_ceil(self.displayed.page_size)
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn securities(&self) -> &[Security] {
        &self.securities
    }

    pub fn last_error(&self) -> Option<&QueryFailure> {
        self.last_error.as_ref()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter_criteria::{FilterCriteria, FilterValue};

    fn page_of(names: &[&str], total_count: u64) -> SecurityPage {
        SecurityPage {
            securities: names.iter().map(|name| Security::new(*name, "Bond", "EUR", false)).collect(),
            total_count,
        }
    }

    fn name_filter(name: &str) -> FilterEmission {
        FilterEmission::Criteria(FilterCriteria::new().with("name", FilterValue::Text(name.to_string())))
    }

    #[test]
    fn starts_on_first_page_of_ten() {
        let coordinator = PagedQueryCoordinator::default();

        assert_eq!(coordinator.page_index(), 0);
        assert_eq!(coordinator.page_size(), 10);
        assert_eq!(coordinator.total_count(), 0);
        assert!(!coordinator.is_loading());
        assert_eq!(coordinator.filters(), &FilterEmission::NoFilters);
    }

    #[test]
    fn activation_fetches_first_page_without_filters() {
        let mut coordinator = PagedQueryCoordinator::default();

        let ticket = coordinator.activate();

        assert!(coordinator.is_loading());
        assert_eq!(ticket.query, SecurityQuery { filters: FilterCriteria::new(), skip: 0, limit: 10 });
    }

    #[test]
    fn page_change_derives_window() {
        let mut coordinator = PagedQueryCoordinator::default();

        let ticket = coordinator.on_page_changed(2, 10).expect("page should be accepted");

        assert_eq!((ticket.query.skip, ticket.query.limit), (20, 30));
        assert_eq!(coordinator.page_index(), 2);
    }

    #[test]
    fn filter_change_merges_filters_with_window() {
        let mut coordinator = PagedQueryCoordinator::default();

        let ticket = coordinator.on_filters_changed(name_filter("Bond"));

        let json = serde_json::to_value(&ticket.query).expect("query should serialize");
        assert_eq!(json, serde_json::json!({ "name": "Bond", "skip": 0, "limit": 10 }));
    }

    #[test]
    fn filter_change_keeps_page_by_default() {
        let mut coordinator = PagedQueryCoordinator::default();
        coordinator.on_page_changed(3, 10).expect("page should be accepted");

        let ticket = coordinator.on_filters_changed(name_filter("Bond"));

        assert_eq!(coordinator.page_index(), 3);
        assert_eq!(ticket.query.skip, 30);
    }

    #[test]
    fn filter_change_can_reset_page() {
        let mut coordinator = PagedQueryCoordinator::new(CoordinatorOptions { reset_page_on_filter_change: true, ..CoordinatorOptions::default() })
            .expect("options should be valid");
        coordinator.on_page_changed(3, 10).expect("page should be accepted");

        let ticket = coordinator.on_filters_changed(name_filter("Bond"));

        assert_eq!(coordinator.page_index(), 0);
        assert_eq!(ticket.query.skip, 0);
    }

    #[test]
    fn invalid_page_requests_are_rejected_before_dispatch() {
        let mut coordinator = PagedQueryCoordinator::default();
        let ticket = coordinator.activate();
        coordinator.complete_fetch(ticket.generation, Ok(page_of(&["A"], 1)));

        assert_eq!(coordinator.on_page_changed(-1, 10), Err(PageRequestError::NegativePageIndex(-1)));
        assert_eq!(coordinator.on_page_changed(0, 0), Err(PageRequestError::NonPositivePageSize(0)));
        assert_eq!(coordinator.on_page_changed(0, -5), Err(PageRequestError::NonPositivePageSize(-5)));
        assert!(!coordinator.is_loading());
        assert_eq!((coordinator.page_index(), coordinator.page_size()), (0, 10));
    }

    #[test]
    fn successful_completion_updates_display_state() {
        let mut coordinator = PagedQueryCoordinator::default();
        let ticket = coordinator.activate();

        let outcome = coordinator.complete_fetch(ticket.generation, Ok(page_of(&["A", "B"], 42)));

        assert_eq!(outcome, FetchOutcome::Applied);
        assert!(!coordinator.is_loading());
        assert_eq!(coordinator.securities().len(), 2);
        assert_eq!(coordinator.total_count(), 42);
        assert_eq!(coordinator.page_count(), 5);
    }

    #[test]
    fn failed_completion_keeps_last_page_and_records_error() {
        let mut coordinator = PagedQueryCoordinator::default();
        let first = coordinator.activate();
        coordinator.complete_fetch(first.generation, Ok(page_of(&["A", "B"], 2)));

        let second = coordinator.on_page_changed(1, 10).expect("page should be accepted");
        let outcome = coordinator.complete_fetch(second.generation, Err(QueryFailure::Timeout));

        assert_eq!(outcome, FetchOutcome::Failed);
        assert!(!coordinator.is_loading());
        assert_eq!(coordinator.last_error(), Some(&QueryFailure::Timeout));
        assert_eq!(coordinator.securities().len(), 2);
        assert_eq!(coordinator.total_count(), 2);

        let third = coordinator.fetch();
        coordinator.complete_fetch(third.generation, Ok(page_of(&["C"], 11)));
        assert_eq!(coordinator.last_error(), None);
    }

    #[test]
    fn stale_completion_is_discarded_by_default() {
        let mut coordinator = PagedQueryCoordinator::default();
        let older = coordinator.on_page_changed(1, 10).expect("page should be accepted");
        let newer = coordinator.on_page_changed(2, 10).expect("page should be accepted");

        assert_eq!(coordinator.complete_fetch(newer.generation, Ok(page_of(&["page 2"], 30))), FetchOutcome::Applied);
        assert_eq!(coordinator.complete_fetch(older.generation, Ok(page_of(&["page 1"], 30))), FetchOutcome::Discarded);

        assert_eq!(coordinator.securities()[0].name, "page 2");
    }

    #[test]
    fn loading_lasts_until_latest_fetch_resolves() {
        let mut coordinator = PagedQueryCoordinator::default();
        let older = coordinator.on_page_changed(1, 10).expect("page should be accepted");
        let newer = coordinator.on_page_changed(2, 10).expect("page should be accepted");

        coordinator.complete_fetch(older.generation, Ok(page_of(&["page 1"], 30)));
        assert!(coordinator.is_loading());

        coordinator.complete_fetch(newer.generation, Ok(page_of(&["page 2"], 30)));
        assert!(!coordinator.is_loading());
    }

    #[test]
    fn last_resolved_response_wins_when_configured() {
        let mut coordinator = PagedQueryCoordinator::new(CoordinatorOptions {
            stale_responses: StaleResponsePolicy::LastResolvedWins,
            ..CoordinatorOptions::default()
        })
        .expect("options should be valid");
        let older = coordinator.on_page_changed(1, 10).expect("page should be accepted");
        let newer = coordinator.on_page_changed(2, 10).expect("page should be accepted");

        coordinator.complete_fetch(newer.generation, Ok(page_of(&["page 2"], 30)));
        let outcome = coordinator.complete_fetch(older.generation, Ok(page_of(&["page 1"], 30)));

        assert_eq!(outcome, FetchOutcome::Applied);
        assert_eq!(coordinator.securities()[0].name, "page 1");
        assert_eq!(coordinator.page_index(), 2);
        assert_eq!(coordinator.displayed_window(), PageWindow { page_index: 1, page_size: 10 });
    }

    #[test]
    fn failed_page_change_keeps_window_of_displayed_rows() {
        let mut coordinator = PagedQueryCoordinator::default();
        let first = coordinator.activate();
        coordinator.complete_fetch(first.generation, Ok(page_of(&["A"], 25)));

        let second = coordinator.on_page_changed(2, 10).expect("page should be accepted");
        coordinator.complete_fetch(second.generation, Err(QueryFailure::Timeout));

        assert_eq!(coordinator.securities()[0].name, "A");
        assert_eq!(coordinator.displayed_window(), PageWindow { page_index: 0, page_size: 10 });
        assert_eq!(coordinator.page_count(), 3);

        // retry asks for the page that failed
        let retry = coordinator.fetch();
        assert_eq!((retry.query.skip, retry.query.limit), (20, 30));
        coordinator.complete_fetch(retry.generation, Ok(page_of(&["U"], 25)));
        assert_eq!(coordinator.displayed_window(), PageWindow { page_index: 2, page_size: 10 });
    }

    #[test]
    fn page_count_follows_displayed_page_size() {
        let mut coordinator = PagedQueryCoordinator::default();
        let first = coordinator.activate();
        coordinator.complete_fetch(first.generation, Ok(page_of(&["A"], 40)));

        let resized = coordinator.on_page_changed(0, 5).expect("page should be accepted");
        assert_eq!(coordinator.page_count(), 4);

        coordinator.complete_fetch(resized.generation, Ok(page_of(&["A"], 40)));
        assert_eq!(coordinator.page_count(), 8);
    }

    #[test]
    fn zero_page_size_is_rejected_at_construction() {
        let options = CoordinatorOptions { page_size: 0, ..CoordinatorOptions::default() };

        assert_eq!(PagedQueryCoordinator::new(options), Err(PageRequestError::NonPositivePageSize(0)));
        let coordinator = PagedQueryCoordinator::new(CoordinatorOptions { page_size: 25, ..options }).expect("options should be valid");
        assert_eq!(coordinator.page_size(), 25);
        assert_eq!(coordinator.displayed_window().page_size, 25);
    }
}
