// SPDX-License-Identifier: MPL-2.0
//! Browser component: routes messages into [`State`] transitions and turns
//! the resulting requests into async tasks.

use super::state::{DetailRequest, SearchRequest, SearchTicket, State, ThumbnailRequest};
use super::{detail, view};
use crate::domain::catalog::{BreedId, BreedOption, DetailOutcome, ImageSummary};
use crate::error::FetchError;
use crate::i18n::fluent::I18n;
use crate::infrastructure::CatApiClient;
use iced::{Element, Task};

/// Messages emitted by the browser widgets and its async tasks.
#[derive(Debug, Clone)]
pub enum Message {
    BreedSelected(BreedOption),
    SearchFinished {
        ticket: SearchTicket,
        result: Result<Vec<ImageSummary>, FetchError>,
    },
    ThumbnailLoaded {
        generation: u64,
        id: String,
        result: Result<Vec<u8>, FetchError>,
    },
    /// A card image was clicked.
    ImagePressed(String),
    DetailFetched {
        id: String,
        outcome: DetailOutcome,
    },
    /// A card's download button was pressed. Carries the full-size URL.
    OpenOriginal(String),
    /// The detail panel's reference link was pressed.
    OpenReference(String),
    DismissDetail,
}

/// Side effects the application performs on the browser's behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Open the URL in the system browser. Nothing is awaited.
    OpenUrl(String),
}

/// Network work a message asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Request {
    None,
    Search(SearchRequest),
    Thumbnails(Vec<ThumbnailRequest>),
    Detail(DetailRequest),
}

/// Contextual data needed to render the browser.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub columns: u16,
}

#[derive(Debug, Clone)]
pub struct Browser {
    state: State,
    /// `Err` when the HTTP client could not be set up. Every request then
    /// settles immediately with this error.
    client: Result<CatApiClient, FetchError>,
}

impl Browser {
    pub fn new(
        client: Result<CatApiClient, FetchError>,
        options: Vec<BreedOption>,
        breed: BreedId,
    ) -> Self {
        Self {
            state: State::new(options, breed),
            client,
        }
    }

    #[must_use]
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Whether a detail panel is on screen.
    #[must_use]
    pub fn has_detail(&self) -> bool {
        self.state.active_detail().is_some()
    }

    /// Issues the initial search.
    pub fn start(&mut self) -> Task<Message> {
        let request = Request::Search(self.state.start());
        self.perform(request)
    }

    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        let (effect, request) = self.route(message);
        (effect, self.perform(request))
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let base = view::layout(self.state.layout(), &ctx);

        match self.state.active_detail() {
            Some(presentation) => detail::modal(
                base,
                detail::view(presentation, self.state.queued_details(), ctx.i18n),
            ),
            None => base,
        }
    }

    fn route(&mut self, message: Message) -> (Effect, Request) {
        match message {
            Message::BreedSelected(option) => {
                let request = self
                    .state
                    .select_breed(option.id)
                    .map_or(Request::None, Request::Search);
                (Effect::None, request)
            }
            Message::SearchFinished { ticket, result } => {
                let requests = self.state.apply_search(&ticket, result);
                (Effect::None, Request::Thumbnails(requests))
            }
            Message::ThumbnailLoaded {
                generation,
                id,
                result,
            } => {
                self.state.apply_thumbnail(generation, &id, result);
                (Effect::None, Request::None)
            }
            Message::ImagePressed(id) => {
                let request = self
                    .state
                    .request_detail(&id)
                    .map_or(Request::None, Request::Detail);
                (Effect::None, request)
            }
            Message::DetailFetched { id, outcome } => {
                self.state.present_detail(id, outcome);
                (Effect::None, Request::None)
            }
            Message::OpenOriginal(url) | Message::OpenReference(url) => {
                (Effect::OpenUrl(url), Request::None)
            }
            Message::DismissDetail => {
                self.state.dismiss_detail();
                (Effect::None, Request::None)
            }
        }
    }

    fn perform(&mut self, request: Request) -> Task<Message> {
        let client = match self.client.clone() {
            Ok(client) => client,
            Err(err) => {
                self.settle_without_client(request, err);
                return Task::none();
            }
        };

        match request {
            Request::None => Task::none(),
            Request::Search(request) => search_task(client, request),
            Request::Thumbnails(requests) => thumbnail_tasks(&client, requests),
            Request::Detail(request) => detail_task(client, request),
        }
    }

    fn settle_without_client(&mut self, request: Request, err: FetchError) {
        match request {
            Request::None | Request::Thumbnails(_) => {}
            Request::Search(SearchRequest { ticket }) => {
                self.state.apply_search(&ticket, Err(err));
            }
            Request::Detail(DetailRequest { id }) => {
                tracing::warn!(%id, %err, "image detail unavailable");
                self.state.present_detail(id, DetailOutcome::Unavailable);
            }
        }
    }
}

fn search_task(client: CatApiClient, request: SearchRequest) -> Task<Message> {
    let SearchRequest { ticket } = request;
    tracing::debug!(breed = %ticket.breed, generation = ticket.generation, "issuing search");

    let breed = ticket.breed.clone();
    Task::perform(async move { client.search(&breed).await }, move |result| {
        Message::SearchFinished { ticket, result }
    })
}

fn thumbnail_tasks(client: &CatApiClient, requests: Vec<ThumbnailRequest>) -> Task<Message> {
    if requests.is_empty() {
        return Task::none();
    }

    Task::batch(requests.into_iter().map(|request| {
        let client = client.clone();
        let ThumbnailRequest {
            generation,
            id,
            url,
        } = request;
        Task::perform(async move { client.fetch_image(&url).await }, move |result| {
            Message::ThumbnailLoaded {
                generation,
                id,
                result,
            }
        })
    }))
}

fn detail_task(client: CatApiClient, request: DetailRequest) -> Task<Message> {
    let DetailRequest { id } = request;
    tracing::debug!(%id, "fetching detail");

    let lookup_id = id.clone();
    Task::perform(
        async move { client.fetch_detail(&lookup_id).await },
        move |outcome| Message::DetailFetched { id, outcome },
    )
}
