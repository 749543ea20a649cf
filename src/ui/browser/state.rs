// SPDX-License-Identifier: MPL-2.0
//! Browser state record and its transitions.
//!
//! Every transition is a plain method on [`State`]. Transitions that need
//! network I/O return a request description ([`SearchRequest`],
//! [`ThumbnailRequest`], [`DetailRequest`]) instead of performing it, so the
//! whole lifecycle can be driven synchronously in tests. The component layer
//! turns those descriptions into iced tasks.

use super::detail::DetailPresentation;
use crate::domain::catalog::{BreedId, BreedOption, DetailOutcome, ImageSummary};
use crate::error::FetchError;
use iced::widget::image::Handle;
use std::collections::{HashMap, VecDeque};

/// Lifecycle of the current search.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    Failed(FetchError),
}

/// Tag attached to an outstanding search.
///
/// A response is applied only if its generation is still the latest one
/// issued, so a slow reply for an earlier breed cannot overwrite a newer one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub generation: u64,
    pub breed: BreedId,
}

/// Search the caller must issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub ticket: SearchTicket,
}

/// Card image download the caller must issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailRequest {
    pub generation: u64,
    pub id: String,
    pub url: String,
}

/// Detail lookup the caller must issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRequest {
    pub id: String,
}

/// Card image download state.
#[derive(Debug, Clone)]
pub enum Thumbnail {
    Pending,
    Loaded(Handle),
    Failed,
}

/// One card of the grid, in result order.
#[derive(Debug, Clone)]
pub struct Card<'a> {
    pub summary: &'a ImageSummary,
    /// `None` until a search has registered the card's download.
    pub thumbnail: Option<&'a Thumbnail>,
}

/// What the browser renders, derived from [`State`] only.
#[derive(Debug, Clone)]
pub enum Layout<'a> {
    /// Loading indicator and nothing else.
    Loading,
    /// The error text and nothing else.
    Failed(&'a FetchError),
    Grid {
        /// `None` when the current breed is not one of the options.
        selected: Option<&'a BreedOption>,
        options: &'a [BreedOption],
        cards: Vec<Card<'a>>,
    },
}

#[derive(Debug, Clone)]
pub struct State {
    breed: BreedId,
    options: Vec<BreedOption>,
    results: Vec<ImageSummary>,
    load_state: LoadState,
    generation: u64,
    thumbnails: HashMap<String, Thumbnail>,
    presentations: VecDeque<DetailPresentation>,
}

impl State {
    pub fn new(options: Vec<BreedOption>, breed: BreedId) -> Self {
        Self {
            breed,
            options,
            results: Vec::new(),
            load_state: LoadState::Loading,
            generation: 0,
            thumbnails: HashMap::new(),
            presentations: VecDeque::new(),
        }
    }

    /// Issues the initial search for the current breed.
    pub fn start(&mut self) -> SearchRequest {
        self.issue_search()
    }

    /// Switches the filter and issues a new search.
    ///
    /// Re-selecting the current breed does nothing unless the last search
    /// failed, in which case it retries.
    pub fn select_breed(&mut self, breed: BreedId) -> Option<SearchRequest> {
        if breed == self.breed && !matches!(self.load_state, LoadState::Failed(_)) {
            tracing::debug!(%breed, "breed already selected");
            return None;
        }

        self.breed = breed;
        Some(self.issue_search())
    }

    fn issue_search(&mut self) -> SearchRequest {
        self.generation += 1;
        self.load_state = LoadState::Loading;

        SearchRequest {
            ticket: SearchTicket {
                generation: self.generation,
                breed: self.breed.clone(),
            },
        }
    }

    /// Applies a settled search and returns the thumbnails to download.
    ///
    /// Failure keeps the previous `results`; only the load state changes.
    pub fn apply_search(
        &mut self,
        ticket: &SearchTicket,
        result: Result<Vec<ImageSummary>, FetchError>,
    ) -> Vec<ThumbnailRequest> {
        if ticket.generation != self.generation {
            tracing::debug!(
                breed = %ticket.breed,
                generation = ticket.generation,
                latest = self.generation,
                "discarding stale search response"
            );
            return Vec::new();
        }

        match result {
            Ok(items) => {
                tracing::info!(breed = %ticket.breed, count = items.len(), "search ready");
                self.thumbnails = items
                    .iter()
                    .map(|item| (item.id.clone(), Thumbnail::Pending))
                    .collect();
                let requests = items
                    .iter()
                    .map(|item| ThumbnailRequest {
                        generation: self.generation,
                        id: item.id.clone(),
                        url: item.url.clone(),
                    })
                    .collect();
                self.results = items;
                self.load_state = LoadState::Ready;
                requests
            }
            Err(err) => {
                tracing::warn!(breed = %ticket.breed, %err, "search failed");
                self.load_state = LoadState::Failed(err);
                Vec::new()
            }
        }
    }

    /// Stores a downloaded card image. Bytes for an outdated result list are dropped.
    pub fn apply_thumbnail(
        &mut self,
        generation: u64,
        id: &str,
        result: Result<Vec<u8>, FetchError>,
    ) {
        if generation != self.generation {
            return;
        }
        let Some(slot) = self.thumbnails.get_mut(id) else {
            return;
        };

        *slot = match result {
            Ok(bytes) => Thumbnail::Loaded(Handle::from_bytes(bytes)),
            Err(err) => {
                tracing::debug!(id, %err, "thumbnail download failed");
                Thumbnail::Failed
            }
        };
    }

    /// Validates a card activation. Empty ids never reach the network.
    pub fn request_detail(&self, id: &str) -> Option<DetailRequest> {
        if id.is_empty() {
            tracing::debug!("ignoring detail request without an id");
            return None;
        }
        Some(DetailRequest { id: id.to_owned() })
    }

    /// Queues a detail result for display. Never touches the grid.
    pub fn present_detail(&mut self, id: String, outcome: DetailOutcome) {
        self.presentations
            .push_back(DetailPresentation::new(id, outcome));
    }

    /// Closes the detail currently on screen, revealing the next queued one.
    pub fn dismiss_detail(&mut self) -> Option<DetailPresentation> {
        let dismissed = self.presentations.pop_front();
        if let Some(presentation) = &dismissed {
            tracing::debug!(id = presentation.id(), "detail dismissed");
        }
        dismissed
    }

    /// Detail currently on screen.
    pub fn active_detail(&self) -> Option<&DetailPresentation> {
        self.presentations.front()
    }

    /// Number of detail results waiting behind the active one.
    pub fn queued_details(&self) -> usize {
        self.presentations.len().saturating_sub(1)
    }

    pub fn breed(&self) -> &BreedId {
        &self.breed
    }

    pub fn results(&self) -> &[ImageSummary] {
        &self.results
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn layout(&self) -> Layout<'_> {
        match &self.load_state {
            LoadState::Loading => Layout::Loading,
            LoadState::Failed(err) => Layout::Failed(err),
            LoadState::Ready => Layout::Grid {
                selected: self.options.iter().find(|option| option.id == self.breed),
                options: &self.options,
                cards: self
                    .results
                    .iter()
                    .map(|summary| Card {
                        summary,
                        thumbnail: self.thumbnails.get(&summary.id),
                    })
                    .collect(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::ImageDetail;

    fn options() -> Vec<BreedOption> {
        vec![
            BreedOption::new("beng", "Bengal"),
            BreedOption::new("siam", "Siamese"),
            BreedOption::new("pers", "Persian"),
        ]
    }

    fn summary(id: &str) -> ImageSummary {
        ImageSummary {
            id: id.to_string(),
            url: format!("https://cdn.example/{id}.jpg"),
            width: None,
            height: None,
        }
    }

    fn ready_state(ids: &[&str]) -> State {
        let mut state = State::new(options(), BreedId::new("beng"));
        let request = state.start();
        state.apply_search(&request.ticket, Ok(ids.iter().map(|id| summary(id)).collect()));
        state
    }

    fn card_ids(state: &State) -> Vec<String> {
        match state.layout() {
            Layout::Grid { cards, .. } => cards.iter().map(|c| c.summary.id.clone()).collect(),
            other => panic!("expected grid, got {other:?}"),
        }
    }

    #[test]
    fn start_requests_current_breed_and_shows_loading() {
        let mut state = State::new(options(), BreedId::new("beng"));
        let request = state.start();

        assert_eq!(request.ticket.breed, BreedId::new("beng"));
        assert!(matches!(state.layout(), Layout::Loading));
    }

    #[test]
    fn each_supported_breed_triggers_one_search() {
        for option in options() {
            let mut state = ready_state(&["a"]);
            let expected = option.id.clone();
            let requests: Vec<_> = state.select_breed(option.id).into_iter().collect();

            if expected == BreedId::new("beng") {
                assert!(requests.is_empty());
            } else {
                assert_eq!(requests.len(), 1);
                assert_eq!(requests[0].ticket.breed, expected);
                assert!(matches!(state.layout(), Layout::Loading));
            }
        }
    }

    #[test]
    fn success_renders_cards_in_response_order() {
        let state = ready_state(&["c", "a", "b"]);
        assert_eq!(card_ids(&state), vec!["c", "a", "b"]);
    }

    #[test]
    fn success_requests_one_thumbnail_per_item() {
        let mut state = State::new(options(), BreedId::new("beng"));
        let request = state.start();
        let thumbs = state.apply_search(&request.ticket, Ok(vec![summary("x"), summary("y")]));

        assert_eq!(thumbs.len(), 2);
        assert_eq!(thumbs[0].id, "x");
        assert_eq!(thumbs[0].url, "https://cdn.example/x.jpg");
        assert!(thumbs.iter().all(|t| t.generation == request.ticket.generation));
    }

    #[test]
    fn grid_marks_selected_option() {
        let state = ready_state(&["a"]);
        match state.layout() {
            Layout::Grid { selected, options, .. } => {
                assert_eq!(selected.map(|o| o.label.as_str()), Some("Bengal"));
                assert_eq!(options.len(), 3);
            }
            other => panic!("expected grid, got {other:?}"),
        }
    }

    #[test]
    fn failure_shows_error_and_no_cards() {
        let mut state = ready_state(&["a", "b"]);
        let request = state.select_breed(BreedId::new("siam")).expect("new breed");
        state.apply_search(&request.ticket, Err(FetchError::Status(500)));

        match state.layout() {
            Layout::Failed(err) => {
                assert_eq!(err.to_string(), "Network response was not ok (HTTP 500)");
            }
            other => panic!("expected failure, got {other:?}"),
        }
        // The previous list is kept in the record but not rendered.
        assert_eq!(state.results().len(), 2);
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut state = State::new(options(), BreedId::new("beng"));
        let first = state.start();
        let second = state.select_breed(BreedId::new("siam")).expect("new breed");

        state.apply_search(&second.ticket, Ok(vec![summary("siam-1")]));
        let late = state.apply_search(&first.ticket, Ok(vec![summary("beng-1")]));

        assert!(late.is_empty());
        assert_eq!(card_ids(&state), vec!["siam-1"]);
        assert_eq!(state.breed(), &BreedId::new("siam"));
    }

    #[test]
    fn stale_failure_does_not_replace_ready_grid() {
        let mut state = State::new(options(), BreedId::new("beng"));
        let first = state.start();
        let second = state.select_breed(BreedId::new("pers")).expect("new breed");

        state.apply_search(&second.ticket, Ok(vec![summary("p")]));
        state.apply_search(&first.ticket, Err(FetchError::Network("reset".into())));

        assert_eq!(state.load_state(), &LoadState::Ready);
    }

    #[test]
    fn repeating_selection_is_idempotent() {
        let mut once = ready_state(&[]);
        let request = once.select_breed(BreedId::new("siam")).expect("new breed");
        once.apply_search(&request.ticket, Ok(vec![summary("s1"), summary("s2")]));

        let mut twice = ready_state(&[]);
        let request = twice.select_breed(BreedId::new("siam")).expect("new breed");
        assert!(twice.select_breed(BreedId::new("siam")).is_none());
        twice.apply_search(&request.ticket, Ok(vec![summary("s1"), summary("s2")]));

        assert_eq!(card_ids(&once), card_ids(&twice));
    }

    #[test]
    fn reselecting_after_failure_retries() {
        let mut state = State::new(options(), BreedId::new("beng"));
        let request = state.start();
        state.apply_search(&request.ticket, Err(FetchError::Status(503)));

        let retry = state.select_breed(BreedId::new("beng"));
        assert!(retry.is_some());
        assert!(matches!(state.layout(), Layout::Loading));
    }

    #[test]
    fn unknown_breed_passes_through() {
        let mut state = ready_state(&["a"]);
        let request = state.select_breed(BreedId::new("zzzz")).expect("new breed");
        state.apply_search(&request.ticket, Ok(Vec::new()));

        assert_eq!(request.ticket.breed.as_str(), "zzzz");
        match state.layout() {
            Layout::Grid { selected, cards, .. } => {
                assert!(selected.is_none());
                assert!(cards.is_empty());
            }
            other => panic!("expected grid, got {other:?}"),
        }
    }

    #[test]
    fn thumbnails_follow_current_generation_only() {
        let mut state = State::new(options(), BreedId::new("beng"));
        let request = state.start();
        let thumbs = state.apply_search(&request.ticket, Ok(vec![summary("a"), summary("b")]));

        state.apply_thumbnail(thumbs[0].generation, "a", Ok(vec![0u8; 4]));
        state.apply_thumbnail(thumbs[1].generation, "b", Err(FetchError::Status(404)));
        state.apply_thumbnail(thumbs[0].generation + 1, "a", Err(FetchError::Status(500)));

        match state.layout() {
            Layout::Grid { cards, .. } => {
                assert!(matches!(cards[0].thumbnail, Some(Thumbnail::Loaded(_))));
                assert!(matches!(cards[1].thumbnail, Some(Thumbnail::Failed)));
            }
            other => panic!("expected grid, got {other:?}"),
        }
    }

    #[test]
    fn request_detail_rejects_empty_id() {
        let state = ready_state(&["a"]);
        assert!(state.request_detail("").is_none());
        assert_eq!(
            state.request_detail("a"),
            Some(DetailRequest { id: "a".to_string() })
        );
    }

    #[test]
    fn detail_results_queue_without_touching_grid() {
        let mut state = ready_state(&["a", "b"]);
        let detail = ImageDetail {
            id: "a".into(),
            width: 10,
            height: 20,
            breed: None,
        };

        state.present_detail("a".into(), DetailOutcome::Found(detail));
        state.present_detail("b".into(), DetailOutcome::Unavailable);

        assert_eq!(state.active_detail().map(|p| p.id()), Some("a"));
        assert_eq!(state.queued_details(), 1);
        assert_eq!(card_ids(&state), vec!["a", "b"]);

        state.dismiss_detail();
        assert_eq!(state.active_detail().map(|p| p.id()), Some("b"));
        state.dismiss_detail();
        assert!(state.active_detail().is_none());
        assert!(state.dismiss_detail().is_none());
        assert_eq!(state.load_state(), &LoadState::Ready);
    }
}
