// SPDX-License-Identifier: MPL-2.0
//! Search, pagination and result accumulation.
//!
//! [`SearchState`] owns the query, the current page, the accumulated results,
//! the reported total and the request status. It is changed only through
//! [`SearchState::update`], which takes a named [`Event`] and returns the
//! [`Effect`] the caller must perform (start a fetch, show a notice).
//!
//! The state machine never awaits anything itself. A fetch is described by a
//! [`FetchRequest`]; the caller runs it and feeds the outcome back as
//! [`Event::FetchCompleted`] carrying the same request. Only the completion
//! of the outstanding request is folded in; anything else is stale and is
//! dropped.
//!
//! ```text
//!            SubmitQuery                  Ok(total > 0)
//!   Idle ───────────────▶ Pending ─────────────────────▶ Resolved
//!    ▲                     │  │                            │
//!    │      Ok(total == 0) │  │ Err                        │ RequestMore
//!    └─────────────────────┘  ▼                            │
//!                          Rejected          Pending ◀─────┘
//! ```

use crate::application::port::{SearchError, SearchRequest};
use crate::domain::search::{ImageResult, Page, PageSize, Query, SearchPage};

/// Lifecycle of the most recent request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestStatus {
    /// No query yet, or the last query had no results.
    #[default]
    Idle,
    /// A fetch for the current query and page is in flight.
    Pending,
    /// At least one page was fetched and is displayed.
    Resolved,
    /// The last fetch failed.
    Rejected,
}

/// Image currently shown in the preview overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewSelection {
    pub full_url: String,
    pub alt: String,
}

/// A fetch the caller must run on behalf of the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub query: Query,
    pub page: Page,
    pub page_size: PageSize,
    /// Distinguishes two requests for the same query and page.
    seq: u64,
}

impl FetchRequest {
    /// Returns the arguments for the image search provider.
    #[must_use]
    pub fn to_search_request(&self) -> SearchRequest {
        SearchRequest {
            query: self.query.clone(),
            page: self.page,
            page_size: self.page_size,
        }
    }

    /// Sequence number assigned when the request was issued.
    #[must_use]
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// Informational messages for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The query matched nothing.
    NoResults { query: Query },
}

/// Events accepted by [`SearchState::update`].
#[derive(Debug, Clone)]
pub enum Event {
    /// A new search was submitted from the search bar.
    SubmitQuery(String),
    /// The load-more button was pressed.
    RequestMore,
    /// A fetch started by a previous [`Effect::Fetch`] finished.
    FetchCompleted {
        request: FetchRequest,
        outcome: Result<SearchPage, SearchError>,
    },
    /// A gallery item was clicked.
    SelectPreview { full_url: String, alt: String },
    /// The preview overlay was closed.
    ClosePreview,
}

/// Side effects the caller should perform after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Run this request against the image search provider.
    Fetch(FetchRequest),
    /// Show an informational notification.
    Notify(Notice),
}

/// Search session state.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    query: Option<Query>,
    page: Page,
    page_size: PageSize,
    results: Vec<ImageResult>,
    total: u64,
    status: RequestStatus,
    error: Option<SearchError>,
    preview: Option<PreviewSelection>,
    in_flight: Option<FetchRequest>,
    next_seq: u64,
}

impl SearchState {
    /// Creates an idle session using the default page size.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an idle session with a custom page size.
    #[must_use]
    pub fn with_page_size(page_size: PageSize) -> Self {
        Self {
            page_size,
            ..Self::default()
        }
    }

    /// Applies an event and returns the effect to perform.
    pub fn update(&mut self, event: Event) -> Effect {
        match event {
            Event::SubmitQuery(text) => self.submit_query(&text),
            Event::RequestMore => self.request_more(),
            Event::FetchCompleted { request, outcome } => self.fetch_completed(request, outcome),
            Event::SelectPreview { full_url, alt } => {
                self.preview = Some(PreviewSelection { full_url, alt });
                Effect::None
            }
            Event::ClosePreview => {
                self.preview = None;
                Effect::None
            }
        }
    }

    fn submit_query(&mut self, text: &str) -> Effect {
        let Some(query) = Query::parse(text) else {
            return Effect::None;
        };

        self.query = Some(query);
        self.results.clear();
        self.page = Page::FIRST;
        self.total = 0;
        self.error = None;
        self.start_fetch()
    }

    fn request_more(&mut self) -> Effect {
        if !self.load_more_visible() {
            return Effect::None;
        }

        self.page = self.page.next();
        self.start_fetch()
    }

    fn start_fetch(&mut self) -> Effect {
        let Some(query) = self.query.clone() else {
            return Effect::None;
        };

        self.next_seq += 1;
        let request = FetchRequest {
            query,
            page: self.page,
            page_size: self.page_size,
            seq: self.next_seq,
        };
        log::debug!("fetching page {} for {:?}", request.page, request.query.as_str());

        self.status = RequestStatus::Pending;
        self.in_flight = Some(request.clone());
        Effect::Fetch(request)
    }

    fn fetch_completed(
        &mut self,
        request: FetchRequest,
        outcome: Result<SearchPage, SearchError>,
    ) -> Effect {
        if self.in_flight.as_ref() != Some(&request) {
            log::debug!(
                "dropping stale response for {:?} page {}",
                request.query.as_str(),
                request.page
            );
            return Effect::None;
        }
        self.in_flight = None;

        match outcome {
            Ok(page) if page.total == 0 => {
                self.status = RequestStatus::Idle;
                Effect::Notify(Notice::NoResults {
                    query: request.query,
                })
            }
            Ok(page) => {
                if self.results.is_empty() {
                    self.results = page.items;
                } else {
                    self.results.extend(page.items);
                }
                self.total = page.total;
                self.status = RequestStatus::Resolved;
                Effect::None
            }
            Err(error) => {
                log::warn!(
                    "search for {:?} page {} failed: {error}",
                    request.query.as_str(),
                    request.page
                );
                // Page tracks the last page whose results are displayed.
                if let Some(previous) = request.page.previous() {
                    self.page = previous;
                }
                self.status = RequestStatus::Rejected;
                self.error = Some(error);
                Effect::None
            }
        }
    }

    /// Whether the load-more affordance should be offered.
    #[must_use]
    pub fn load_more_visible(&self) -> bool {
        self.status == RequestStatus::Resolved
            && self.total > self.page_size.covered_by(self.page)
    }

    /// The current query, if one was submitted.
    #[must_use]
    pub fn query(&self) -> Option<&Query> {
        self.query.as_ref()
    }

    /// The page most recently requested.
    #[must_use]
    pub fn page(&self) -> Page {
        self.page
    }

    #[must_use]
    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Accumulated results for the current query, earlier pages first.
    #[must_use]
    pub fn results(&self) -> &[ImageResult] {
        &self.results
    }

    /// Total reported by the last successful fetch for the current query.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.total
    }

    #[must_use]
    pub fn status(&self) -> RequestStatus {
        self.status
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.status == RequestStatus::Pending
    }

    /// Error of the last failed fetch, while the status is `Rejected`.
    #[must_use]
    pub fn error(&self) -> Option<&SearchError> {
        match self.status {
            RequestStatus::Rejected => self.error.as_ref(),
            _ => None,
        }
    }

    #[must_use]
    pub fn preview(&self) -> Option<&PreviewSelection> {
        self.preview.as_ref()
    }

    /// The request whose completion will be folded in, if any.
    #[must_use]
    pub fn in_flight(&self) -> Option<&FetchRequest> {
        self.in_flight.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u64) -> ImageResult {
        ImageResult {
            id,
            thumbnail_url: format!("https://cdn.test/{id}_640.jpg"),
            full_url: format!("https://cdn.test/{id}_1280.jpg"),
            alt: format!("tag{id}"),
        }
    }

    fn page_of(total: u64, ids: std::ops::Range<u64>) -> SearchPage {
        SearchPage {
            total,
            items: ids.map(item).collect(),
        }
    }

    fn expect_fetch(effect: Effect) -> FetchRequest {
        match effect {
            Effect::Fetch(request) => request,
            other => panic!("expected a fetch, got {other:?}"),
        }
    }

    fn complete(
        state: &mut SearchState,
        request: FetchRequest,
        outcome: Result<SearchPage, SearchError>,
    ) -> Effect {
        state.update(Event::FetchCompleted { request, outcome })
    }

    #[test]
    fn new_state_is_idle_and_empty() {
        let state = SearchState::new();
        assert_eq!(state.status(), RequestStatus::Idle);
        assert!(state.results().is_empty());
        assert!(state.query().is_none());
        assert!(!state.load_more_visible());
        assert_eq!(state.page_size().get(), 12);
    }

    #[test]
    fn blank_submit_is_a_no_op() {
        let mut state = SearchState::new();
        assert_eq!(state.update(Event::SubmitQuery("   ".into())), Effect::None);
        assert_eq!(state.status(), RequestStatus::Idle);
        assert!(state.query().is_none());
        assert!(state.in_flight().is_none());
    }

    #[test]
    fn submit_starts_first_page_fetch() {
        let mut state = SearchState::new();
        let request = expect_fetch(state.update(Event::SubmitQuery(" cats ".into())));

        assert_eq!(request.query.as_str(), "cats");
        assert_eq!(request.page, Page::FIRST);
        assert_eq!(request.page_size, PageSize::DEFAULT);
        assert_eq!(state.status(), RequestStatus::Pending);
        assert!(state.is_pending());
        assert_eq!(state.in_flight(), Some(&request));
    }

    #[test]
    fn zero_results_notifies_once_and_returns_to_idle() {
        let mut state = SearchState::new();
        let request = expect_fetch(state.update(Event::SubmitQuery("qwzx".into())));

        let effect = complete(&mut state, request, Ok(SearchPage::default()));

        assert_eq!(
            effect,
            Effect::Notify(Notice::NoResults {
                query: Query::parse("qwzx").unwrap()
            })
        );
        assert_eq!(state.status(), RequestStatus::Idle);
        assert!(state.results().is_empty());
        assert!(!state.load_more_visible());
    }

    #[test]
    fn first_page_sets_results_exactly() {
        let mut state = SearchState::new();
        let request = expect_fetch(state.update(Event::SubmitQuery("cats".into())));

        let effect = complete(&mut state, request, Ok(page_of(30, 0..12)));

        assert_eq!(effect, Effect::None);
        assert_eq!(state.results().len(), 12);
        assert_eq!(state.results()[0].id, 0);
        assert_eq!(state.total(), 30);
        assert_eq!(state.status(), RequestStatus::Resolved);
        assert!(state.load_more_visible());
    }

    #[test]
    fn request_more_appends_in_order() {
        let mut state = SearchState::new();
        let first = expect_fetch(state.update(Event::SubmitQuery("cats".into())));
        complete(&mut state, first, Ok(page_of(30, 0..12)));

        let second = expect_fetch(state.update(Event::RequestMore));
        assert_eq!(second.page.get(), 2);
        assert_eq!(state.status(), RequestStatus::Pending);
        assert!(!state.load_more_visible());

        complete(&mut state, second, Ok(page_of(30, 12..24)));
        let ids: Vec<u64> = state.results().iter().map(|r| r.id).collect();
        assert_eq!(ids, (0..24).collect::<Vec<_>>());
    }

    #[test]
    fn request_more_is_ignored_unless_offered() {
        let mut state = SearchState::new();
        assert_eq!(state.update(Event::RequestMore), Effect::None);

        let request = expect_fetch(state.update(Event::SubmitQuery("cats".into())));
        // Pending: the button is hidden.
        assert_eq!(state.update(Event::RequestMore), Effect::None);

        complete(&mut state, request, Ok(page_of(12, 0..12)));
        // Everything fits on one page.
        assert_eq!(state.update(Event::RequestMore), Effect::None);
        assert_eq!(state.page(), Page::FIRST);
    }

    #[test]
    fn load_more_hidden_when_pages_cover_total() {
        for total in 0..=40u64 {
            for page in 1..=4u32 {
                let mut state = SearchState::new();
                let request = expect_fetch(state.update(Event::SubmitQuery("q".into())));
                complete(&mut state, request, Ok(page_of(total.max(1), 0..1)));
                state.total = total;
                state.page = Page::new(page).unwrap();

                let covered = u64::from(page) * 12;
                assert_eq!(
                    state.load_more_visible(),
                    total > covered,
                    "total={total} page={page}"
                );
            }
        }
    }

    #[test]
    fn failed_load_more_keeps_results() {
        let mut state = SearchState::new();
        let first = expect_fetch(state.update(Event::SubmitQuery("cats".into())));
        complete(&mut state, first, Ok(page_of(30, 0..12)));
        let before = state.results().to_vec();

        let second = expect_fetch(state.update(Event::RequestMore));
        complete(
            &mut state,
            second,
            Err(SearchError::Transport("connection reset".into())),
        );

        assert_eq!(state.results(), before.as_slice());
        assert_eq!(state.status(), RequestStatus::Rejected);
        assert_eq!(
            state.error(),
            Some(&SearchError::Transport("connection reset".into()))
        );
        assert_eq!(state.page(), Page::FIRST);
        assert!(!state.load_more_visible());
    }

    #[test]
    fn failure_is_not_reported_as_zero_results() {
        let mut state = SearchState::new();
        let request = expect_fetch(state.update(Event::SubmitQuery("cats".into())));

        let effect = complete(&mut state, request, Err(SearchError::Status(500)));

        assert_eq!(effect, Effect::None);
        assert_eq!(state.status(), RequestStatus::Rejected);
    }

    #[test]
    fn new_submit_clears_error_and_results() {
        let mut state = SearchState::new();
        let first = expect_fetch(state.update(Event::SubmitQuery("cats".into())));
        complete(&mut state, first, Ok(page_of(30, 0..12)));
        let second = expect_fetch(state.update(Event::RequestMore));
        complete(&mut state, second, Err(SearchError::Status(502)));

        let third = expect_fetch(state.update(Event::SubmitQuery("dogs".into())));

        assert!(state.results().is_empty());
        assert!(state.error().is_none());
        assert_eq!(third.page, Page::FIRST);
        assert_eq!(state.total(), 0);
    }

    #[test]
    fn superseded_query_response_is_dropped() {
        let mut state = SearchState::new();
        let cats = expect_fetch(state.update(Event::SubmitQuery("cats".into())));
        let dogs = expect_fetch(state.update(Event::SubmitQuery("dogs".into())));

        assert_eq!(complete(&mut state, cats, Ok(page_of(30, 0..12))), Effect::None);
        assert!(state.results().is_empty());
        assert_eq!(state.status(), RequestStatus::Pending);

        complete(&mut state, dogs, Ok(page_of(5, 100..105)));
        assert!(state.results().iter().all(|r| r.id >= 100));
        assert_eq!(state.results().len(), 5);
        assert_eq!(state.status(), RequestStatus::Resolved);
    }

    #[test]
    fn resubmitting_same_query_drops_first_response() {
        let mut state = SearchState::new();
        let first = expect_fetch(state.update(Event::SubmitQuery("cats".into())));
        let second = expect_fetch(state.update(Event::SubmitQuery("cats".into())));
        assert_ne!(first.seq(), second.seq());

        complete(&mut state, first, Ok(page_of(30, 0..12)));
        assert_eq!(state.status(), RequestStatus::Pending);

        complete(&mut state, second, Ok(page_of(30, 0..12)));
        assert_eq!(state.results().len(), 12);
    }

    #[test]
    fn duplicate_completion_is_not_folded_twice() {
        let mut state = SearchState::new();
        let request = expect_fetch(state.update(Event::SubmitQuery("cats".into())));
        complete(&mut state, request.clone(), Ok(page_of(30, 0..12)));
        complete(&mut state, request, Ok(page_of(30, 0..12)));
        assert_eq!(state.results().len(), 12);
    }

    #[test]
    fn stale_failure_does_not_reject_current_search() {
        let mut state = SearchState::new();
        let cats = expect_fetch(state.update(Event::SubmitQuery("cats".into())));
        let _dogs = expect_fetch(state.update(Event::SubmitQuery("dogs".into())));

        complete(&mut state, cats, Err(SearchError::Status(500)));
        assert_eq!(state.status(), RequestStatus::Pending);
        assert!(state.error().is_none());
    }

    #[test]
    fn preview_can_open_and_close_in_any_state() {
        let mut state = SearchState::new();
        state.update(Event::SelectPreview {
            full_url: "https://cdn.test/1_1280.jpg".into(),
            alt: "cat, kitten".into(),
        });
        assert_eq!(
            state.preview(),
            Some(&PreviewSelection {
                full_url: "https://cdn.test/1_1280.jpg".into(),
                alt: "cat, kitten".into(),
            })
        );

        state.update(Event::SubmitQuery("cats".into()));
        assert!(state.preview().is_some());

        state.update(Event::ClosePreview);
        assert!(state.preview().is_none());
    }

    #[test]
    fn cats_scenario_walks_three_pages() {
        let mut state = SearchState::new();

        let request = expect_fetch(state.update(Event::SubmitQuery("cats".into())));
        complete(&mut state, request, Ok(page_of(30, 0..12)));
        assert_eq!(state.results().len(), 12);
        assert!(state.load_more_visible());

        let request = expect_fetch(state.update(Event::RequestMore));
        assert_eq!(request.page.get(), 2);
        complete(&mut state, request, Ok(page_of(30, 12..24)));
        assert_eq!(state.results().len(), 24);
        assert!(state.load_more_visible());

        let request = expect_fetch(state.update(Event::RequestMore));
        assert_eq!(request.page.get(), 3);
        complete(&mut state, request, Ok(page_of(30, 24..30)));
        assert_eq!(state.results().len(), 30);
        assert!(!state.load_more_visible());
    }
}
