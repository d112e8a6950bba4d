// SPDX-License-Identifier: MPL-2.0
//! Kitty component: owns the single fetch and the lifecycle it drives.
//!
//! The fetch is started by [`State::new`] and never again. Its task handle is
//! kept with `abort_on_drop`, so dropping the component cancels a request that
//! is still in flight.

use crate::i18n::fluent::I18n;
use crate::kitty::fetch::{build_client, fetch_kitty};
use crate::kitty::{FetchError, Kitty, LifecycleState, MaxDimension, Transition};
use iced::widget::image;
use iced::{task, Element, Task};
use std::path::PathBuf;

use super::view::{self, KittyView};

/// Inputs supplied by the parent.
#[derive(Debug, Clone)]
pub struct Props {
    /// Placeholder image shown while loading.
    pub loading_image: PathBuf,
    /// Image-search endpoint.
    pub endpoint: String,
    /// Bound for the larger side of any displayed image.
    pub max_dimension: MaxDimension,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// The fetch finished, successfully or not.
    Fetched(Result<Kitty, FetchError>),
}

pub struct State {
    props: Props,
    lifecycle: LifecycleState,
    loading_handle: image::Handle,
    /// Aborts the fetch when dropped.
    in_flight: Option<task::Handle>,
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("props", &self.props)
            .field("lifecycle", &self.lifecycle)
            .field("fetching", &self.is_fetching())
            .finish()
    }
}

impl State {
    /// Creates the component and the task that performs its one fetch.
    pub fn new(props: Props) -> (Self, Task<Message>) {
        let mut state = Self::without_fetch(props);
        let task = state.start_fetch();
        (state, task)
    }

    /// Creates the component in `Loading` without issuing any request.
    ///
    /// Completion can still be fed in through [`State::update`]; the app
    /// tests drive the lifecycle this way.
    #[must_use]
    pub fn without_fetch(props: Props) -> Self {
        let loading_handle = image::Handle::from_path(&props.loading_image);
        Self {
            props,
            lifecycle: LifecycleState::default(),
            loading_handle,
            in_flight: None,
        }
    }

    fn start_fetch(&mut self) -> Task<Message> {
        let client = match build_client() {
            Ok(client) => client,
            Err(err) => {
                log::warn!("Cannot build HTTP client: {err}");
                return Task::done(Message::Fetched(Err(err)));
            }
        };

        let (task, handle) = Task::perform(
            fetch_kitty(client, self.props.endpoint.clone()),
            Message::Fetched,
        )
        .abortable();
        self.in_flight = Some(handle.abort_on_drop());
        task
    }

    pub fn update(&mut self, message: Message) -> Transition {
        match message {
            Message::Fetched(outcome) => {
                self.in_flight = None;
                let transition = self.lifecycle.complete(outcome);
                match (&transition, &self.lifecycle) {
                    (Transition::Loaded, LifecycleState::Loaded(kitty)) => {
                        let record = kitty.record();
                        log::info!(
                            "Kitty loaded: {} ({}x{})",
                            record.url,
                            record.width,
                            record.height
                        );
                    }
                    (Transition::Failed, LifecycleState::Error(err)) => {
                        log::warn!("No kitty: {err}");
                    }
                    (Transition::Ignored, _) => {
                        log::warn!("Ignoring fetch result; lifecycle already settled");
                    }
                    _ => {}
                }
                transition
            }
        }
    }

    #[must_use]
    pub fn lifecycle(&self) -> &LifecycleState {
        &self.lifecycle
    }

    /// Whether a request is still outstanding.
    #[must_use]
    pub fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Pure description of what [`State::view`] draws.
    #[must_use]
    pub fn view_model(&self, i18n: &I18n) -> KittyView {
        view::view_model(&self.lifecycle, &self.props, &self.loading_handle, i18n)
    }

    pub fn view(&self, i18n: &I18n) -> Element<'_, Message> {
        view::render(self.view_model(i18n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kitty::FetchResult;

    fn props() -> Props {
        Props {
            loading_image: PathBuf::from("assets/loading.gif"),
            endpoint: "http://127.0.0.1:9/search".into(),
            max_dimension: MaxDimension::default(),
        }
    }

    fn kitty() -> Kitty {
        Kitty::new(
            FetchResult {
                url: "http://x/cat.jpg".into(),
                width: 1200,
                height: 800,
            },
            image::Handle::from_bytes(vec![0u8; 8]),
        )
    }

    #[test]
    fn new_starts_exactly_one_fetch() {
        let (state, _task) = State::new(props());
        assert!(state.is_fetching());
        assert!(state.lifecycle().is_loading());
    }

    #[test]
    fn without_fetch_stays_idle() {
        let state = State::without_fetch(props());
        assert!(!state.is_fetching());
        assert!(state.lifecycle().is_loading());
    }

    #[test]
    fn completion_clears_in_flight_handle() {
        let (mut state, _task) = State::new(props());
        let transition = state.update(Message::Fetched(Ok(kitty())));
        assert_eq!(transition, Transition::Loaded);
        assert!(!state.is_fetching());
    }

    #[test]
    fn late_result_does_not_overwrite_error() {
        let mut state = State::without_fetch(props());
        state.update(Message::Fetched(Err(FetchError::Empty)));
        let transition = state.update(Message::Fetched(Ok(kitty())));

        assert_eq!(transition, Transition::Ignored);
        assert!(state.lifecycle().is_error());
    }
}
