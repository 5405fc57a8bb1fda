// SPDX-License-Identifier: MPL-2.0
//! Search gallery screen: search bar, result grid, load-more footer and
//! preview overlay.
//!
//! The component owns a [`SearchState`] and forwards user intents to it as
//! [`search::Event`]s. The effects returned by the state machine are turned
//! into Iced tasks here (fetches) or bubbled up to the application as
//! [`Effect`]s (notifications).

mod footer;
mod grid;
mod preview;
mod search_bar;
pub mod thumbnails;

use crate::application::port::{ImageSearch, SearchError};
use crate::domain::search::{PageSize, SearchPage};
use crate::i18n::fluent::I18n;
use crate::infrastructure::ImageFetcher;
use crate::search::{self, FetchRequest, Notice, SearchState};
use crate::ui::design_tokens::spacing;
use crate::ui::notifications::Notification;
use crate::ui::theming::ColorScheme;
use iced::widget::{scrollable, stack, Column, Container};
use iced::{event, keyboard, time, Element, Length, Subscription, Task};
use std::f32::consts::TAU;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use thumbnails::ThumbnailCache;

/// Spinner rotation per animation tick (radians).
const SPINNER_STEP: f32 = 0.12;

/// Interval between spinner animation ticks.
const SPINNER_TICK: Duration = Duration::from_millis(16);

/// Messages emitted by the gallery widgets and its background tasks.
#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    SubmitQuery,
    LoadMore,
    FetchCompleted {
        request: FetchRequest,
        outcome: Result<SearchPage, SearchError>,
    },
    ThumbnailLoaded {
        id: u64,
        generation: u64,
        result: Result<Vec<u8>, String>,
    },
    OpenPreview {
        full_url: String,
        alt: String,
    },
    PreviewLoaded {
        url: String,
        result: Result<Vec<u8>, String>,
    },
    ClosePreview,
    ToggleErrorDetails,
    SpinnerTick,
}

/// Events the application must handle on behalf of the gallery.
#[derive(Debug, Clone)]
pub enum Effect {
    None,
    /// A new search started; notices about the previous query are stale.
    SearchStarted,
    /// Show a toast.
    Notify(Notification),
}

/// Full-size image shown in the preview overlay.
#[derive(Debug, Clone)]
pub enum PreviewImage {
    Loading,
    Ready(iced::widget::image::Handle),
    Failed,
}

pub struct State {
    search: SearchState,
    client: Arc<dyn ImageSearch>,
    fetcher: ImageFetcher,
    input: String,
    thumbnails: ThumbnailCache,
    preview_image: Option<PreviewImage>,
    columns: usize,
    show_error_details: bool,
    spinner_rotation: f32,
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("search", &self.search)
            .field("input", &self.input)
            .field("thumbnails", &self.thumbnails.len())
            .field("columns", &self.columns)
            .finish_non_exhaustive()
    }
}

impl State {
    /// Creates an idle gallery backed by `client`.
    #[must_use]
    pub fn new(client: Arc<dyn ImageSearch>, fetcher: ImageFetcher, columns: usize) -> Self {
        Self {
            search: SearchState::with_page_size(PageSize::DEFAULT),
            client,
            fetcher,
            input: String::new(),
            thumbnails: ThumbnailCache::default(),
            preview_image: None,
            columns: columns.max(1),
            show_error_details: false,
            spinner_rotation: 0.0,
        }
    }

    #[must_use]
    pub fn search(&self) -> &SearchState {
        &self.search
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub fn thumbnails(&self) -> &ThumbnailCache {
        &self.thumbnails
    }

    #[must_use]
    pub fn preview_image(&self) -> Option<&PreviewImage> {
        self.preview_image.as_ref()
    }

    /// Whether an animation tick is needed (search or preview download running).
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.search.is_pending() || matches!(self.preview_image, Some(PreviewImage::Loading))
    }

    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::QueryChanged(text) => {
                self.input = text;
                (Effect::None, Task::none())
            }
            Message::SubmitQuery => {
                if self.input.trim().is_empty() {
                    return (
                        Effect::Notify(Notification::blank_query()),
                        Task::none(),
                    );
                }
                let effect = self.search.update(search::Event::SubmitQuery(self.input.clone()));
                if matches!(effect, search::Effect::Fetch(_)) {
                    self.thumbnails.reset();
                    self.show_error_details = false;
                }
                let (_, task) = self.apply(effect);
                (Effect::SearchStarted, task)
            }
            Message::LoadMore => {
                let effect = self.search.update(search::Event::RequestMore);
                self.apply(effect)
            }
            Message::FetchCompleted { request, outcome } => {
                let shown_before = self.search.results().len();
                let effect = self
                    .search
                    .update(search::Event::FetchCompleted { request, outcome });
                let (app_effect, fetch_task) = self.apply(effect);
                let thumbnail_task = self.request_thumbnails(shown_before);
                (app_effect, Task::batch([fetch_task, thumbnail_task]))
            }
            Message::ThumbnailLoaded {
                id,
                generation,
                result,
            } => {
                let bytes = match result {
                    Ok(bytes) => Some(bytes),
                    Err(err) => {
                        log::debug!("thumbnail {id} failed: {err}");
                        None
                    }
                };
                self.thumbnails.finish(id, generation, bytes);
                (Effect::None, Task::none())
            }
            Message::OpenPreview { full_url, alt } => {
                let url = full_url.clone();
                self.search
                    .update(search::Event::SelectPreview { full_url, alt });
                self.preview_image = Some(PreviewImage::Loading);

                let fetcher = self.fetcher.clone();
                let task = Task::perform(
                    async move {
                        let result = fetcher.fetch(url.clone()).await.map_err(|e| e.to_string());
                        (url, result)
                    },
                    |(url, result)| Message::PreviewLoaded { url, result },
                );
                (Effect::None, task)
            }
            Message::PreviewLoaded { url, result } => {
                let is_current = self
                    .search
                    .preview()
                    .is_some_and(|selection| selection.full_url == url);
                if !is_current {
                    return (Effect::None, Task::none());
                }
                self.preview_image = Some(match result {
                    Ok(bytes) => PreviewImage::Ready(iced::widget::image::Handle::from_bytes(bytes)),
                    Err(err) => {
                        log::warn!("preview download failed: {err}");
                        PreviewImage::Failed
                    }
                });
                (Effect::None, Task::none())
            }
            Message::ClosePreview => {
                self.search.update(search::Event::ClosePreview);
                self.preview_image = None;
                (Effect::None, Task::none())
            }
            Message::ToggleErrorDetails => {
                self.show_error_details = !self.show_error_details;
                (Effect::None, Task::none())
            }
            Message::SpinnerTick => {
                self.spinner_rotation = (self.spinner_rotation + SPINNER_STEP) % TAU;
                (Effect::None, Task::none())
            }
        }
    }

    /// Turns a state machine effect into an application effect and a task.
    fn apply(&self, effect: search::Effect) -> (Effect, Task<Message>) {
        match effect {
            search::Effect::None => (Effect::None, Task::none()),
            search::Effect::Fetch(request) => {
                log::debug!(
                    "searching {:?} page {} (seq {})",
                    request.query.as_str(),
                    request.page,
                    request.seq()
                );
                let future = self.client.search(request.to_search_request());
                let task = Task::perform(future, move |outcome| Message::FetchCompleted {
                    request: request.clone(),
                    outcome,
                });
                (Effect::None, task)
            }
            search::Effect::Notify(Notice::NoResults { query }) => (
                Effect::Notify(Notification::no_results(query.as_str())),
                Task::none(),
            ),
        }
    }

    /// Claims cache entries for the results appended after `from`.
    ///
    /// Returns the `(id, url)` pairs that need a download. Earlier results
    /// already own an entry and are left alone.
    fn claim_thumbnails(&mut self, from: usize) -> Vec<(u64, String)> {
        let appended = self.search.results().get(from..).unwrap_or_default();
        appended
            .iter()
            .filter(|item| self.thumbnails.begin(item.id))
            .map(|item| (item.id, item.thumbnail_url.clone()))
            .collect()
    }

    /// Starts thumbnail downloads for the results appended after `from`.
    fn request_thumbnails(&mut self, from: usize) -> Task<Message> {
        let generation = self.thumbnails.generation();
        let downloads = self.claim_thumbnails(from).into_iter().map(|(id, url)| {
            let fetcher = self.fetcher.clone();
            Task::perform(
                async move { fetcher.fetch(url).await.map_err(|e| e.to_string()) },
                move |result| Message::ThumbnailLoaded {
                    id,
                    generation,
                    result,
                },
            )
        });

        Task::batch(downloads)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let spinner = if self.is_animating() {
            time::every(SPINNER_TICK).map(|_| Message::SpinnerTick)
        } else {
            Subscription::none()
        };

        let escape = if self.search.preview().is_some() {
            event::listen_with(|event, _status, _window| match event {
                event::Event::Keyboard(keyboard::Event::KeyPressed {
                    key: keyboard::Key::Named(keyboard::key::Named::Escape),
                    ..
                }) => Some(Message::ClosePreview),
                _ => None,
            })
        } else {
            Subscription::none()
        };

        Subscription::batch([spinner, escape])
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n, colors: &ColorScheme) -> Element<'a, Message> {
        let mut body = Column::new()
            .spacing(spacing::MD)
            .padding(spacing::MD)
            .width(Length::Fill);

        if let Some(error) = self.search.error() {
            body = body.push(footer::error_banner(error, self.show_error_details, i18n));
        }

        if self.search.results().is_empty() {
            if !self.search.is_pending() && self.search.error().is_none() {
                body = body.push(grid::empty_state(i18n));
            }
        } else {
            body = body.push(grid::view(
                self.search.results(),
                &self.thumbnails,
                self.columns,
            ));
        }

        body = body.push(footer::view(&self.search, self.spinner_rotation, colors, i18n));

        let content = Column::new()
            .push(search_bar::view(&self.input, self.search.is_pending(), i18n))
            .push(scrollable(body).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill);

        let base: Element<'a, Message> = Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into();

        match self.search.preview() {
            Some(selection) => stack![
                base,
                preview::view(
                    selection,
                    self.preview_image.as_ref(),
                    self.spinner_rotation,
                    colors,
                    i18n
                )
            ]
            .into(),
            None => base,
        }
    }
}
