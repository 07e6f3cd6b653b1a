use chrono::{DateTime, Local};
use std::future::Future;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::error::AppError;
use crate::utils::input::InputPolicy;

/// What a card currently shows.
#[derive(Debug, PartialEq)]
pub enum FetchState<T> {
    /// Nothing requested yet (or cleared): the card prompts the user to act
    Idle,
    Loading,
    Loaded(Rc<T>),
    /// Fixed user-facing message for the failed request
    Error(String),
}

impl<T> Clone for FetchState<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Idle => Self::Idle,
            Self::Loading => Self::Loading,
            Self::Loaded(data) => Self::Loaded(Rc::clone(data)),
            Self::Error(message) => Self::Error(message.clone()),
        }
    }
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> FetchState<T> {
    /// Returns true if the state is loading
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns the data if it is loaded
    pub const fn data(&self) -> Option<&Rc<T>> {
        match self {
            Self::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Transitions of a card's fetch cycle.
///
/// Every request carries a ticket; only the latest ticket may resolve.
#[derive(Debug)]
pub enum CardAction<T> {
    Started(u32),
    Succeeded(u32, T),
    Failed(u32, String),
    /// Back to idle; any request still in flight is ignored when it lands
    Reset,
}

/// Reducer state behind a card.
#[derive(Debug, PartialEq)]
pub struct CardState<T> {
    latest: Option<u32>,
    status: FetchState<T>,
    /// When the shown result arrived
    resolved_at: Option<DateTime<Local>>,
}

impl<T> Default for CardState<T> {
    fn default() -> Self {
        Self {
            latest: None,
            status: FetchState::Idle,
            resolved_at: None,
        }
    }
}

impl<T> CardState<T> {
    pub const fn status(&self) -> &FetchState<T> {
        &self.status
    }

    /// Ticket of the request the card is waiting on, if any
    pub const fn latest_ticket(&self) -> Option<u32> {
        self.latest
    }

    /// Time the loaded result arrived; `None` unless a result is shown
    pub fn resolved_at(&self) -> Option<DateTime<Local>> {
        self.resolved_at
    }

    fn is_current(&self, ticket: u32) -> bool {
        self.latest == Some(ticket)
    }
}

impl<T: 'static> Reducible for CardState<T> {
    type Action = CardAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            CardAction::Started(ticket) => Rc::new(Self {
                latest: Some(ticket),
                status: FetchState::Loading,
                resolved_at: None,
            }),
            CardAction::Succeeded(ticket, data) if self.is_current(ticket) => Rc::new(Self {
                latest: self.latest,
                status: FetchState::Loaded(Rc::new(data)),
                resolved_at: Some(Local::now()),
            }),
            CardAction::Failed(ticket, message) if self.is_current(ticket) => Rc::new(Self {
                latest: self.latest,
                status: FetchState::Error(message),
                resolved_at: None,
            }),
            CardAction::Reset => Rc::new(Self::default()),
            // Stale resolution from a superseded request
            _ => self,
        }
    }
}

/// Per-card settings for [`use_fetch_card`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardOptions {
    pub policy: InputPolicy,
    pub failure_message: &'static str,
    /// Prefix for console logs, e.g. "weather"
    pub label: &'static str,
}

/// Handle returned by `use_fetch_card`
pub struct FetchHandle<T: 'static> {
    pub state: UseReducerHandle<CardState<T>>,
    pub submit: Callback<String>,
    pub reset: Callback<()>,
}

impl<T: 'static> FetchHandle<T> {
    pub fn status(&self) -> &FetchState<T> {
        self.state.status()
    }
}

/// Runs one card's fetch cycle.
///
/// `submit` applies the card's input policy, starts a request through
/// `fetch` and resolves the card when it completes. Input rejected by the
/// policy never reaches `fetch`. Failures are logged with their detail and
/// shown as `options.failure_message`.
#[hook]
pub fn use_fetch_card<T, F, Fut>(fetch: F, options: CardOptions) -> FetchHandle<T>
where
    T: 'static,
    F: Fn(String) -> Fut + 'static,
    Fut: Future<Output = Result<T, AppError>> + 'static,
{
    let state = use_reducer(CardState::<T>::default);
    let tickets = use_mut_ref(|| 0u32);

    let submit = {
        let dispatcher = state.dispatcher();
        let fetch = Rc::new(fetch);

        Callback::from(move |raw: String| {
            let Some(input) = options.policy.accept(&raw) else {
                return;
            };

            let ticket = {
                let mut counter = tickets.borrow_mut();
                *counter = counter.wrapping_add(1);
                *counter
            };
            dispatcher.dispatch(CardAction::Started(ticket));

            let dispatcher = dispatcher.clone();
            let request = (*fetch)(input);
            spawn_local(async move {
                match request.await {
                    Ok(data) => dispatcher.dispatch(CardAction::Succeeded(ticket, data)),
                    Err(e) => {
                        gloo::console::error!(format!("{} request failed: {e}", options.label));
                        dispatcher.dispatch(CardAction::Failed(
                            ticket,
                            options.failure_message.to_string(),
                        ));
                    }
                }
            });
        })
    };

    let reset = {
        let dispatcher = state.dispatcher();
        Callback::from(move |()| dispatcher.dispatch(CardAction::Reset))
    };

    FetchHandle {
        state,
        submit,
        reset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: CardState<u32>, actions: Vec<CardAction<u32>>) -> Rc<CardState<u32>> {
        actions
            .into_iter()
            .fold(Rc::new(state), |state, action| state.reduce(action))
    }

    #[test]
    fn test_default_is_idle() {
        let state = CardState::<u32>::default();
        assert_eq!(state.status(), &FetchState::Idle);
        assert_eq!(state.latest_ticket(), None);
    }

    #[test]
    fn test_start_then_succeed() {
        let state = reduce(
            CardState::default(),
            vec![CardAction::Started(1), CardAction::Succeeded(1, 42)],
        );
        assert_eq!(state.status().data().map(|d| **d), Some(42));
        assert!(state.resolved_at().is_some());
    }

    #[test]
    fn test_refetch_restamps_result() {
        // Same value fetched twice still counts as a new result
        let first = reduce(
            CardState::default(),
            vec![CardAction::Started(1), CardAction::Succeeded(1, 42)],
        );
        let stamped = first.resolved_at();

        let loading = first.reduce(CardAction::Started(2));
        assert_eq!(loading.resolved_at(), None);

        let second = loading.reduce(CardAction::Succeeded(2, 42));
        assert!(second.resolved_at().is_some());
        assert!(second.resolved_at() >= stamped);
    }

    #[test]
    fn test_stale_result_keeps_stamp() {
        let state = reduce(
            CardState::default(),
            vec![
                CardAction::Started(1),
                CardAction::Started(2),
                CardAction::Succeeded(2, 1),
            ],
        );
        let stamped = state.resolved_at();

        let state = state.reduce(CardAction::Succeeded(1, 9));
        assert_eq!(state.resolved_at(), stamped);
        assert_eq!(state.status().data().map(|d| **d), Some(1));
    }

    #[test]
    fn test_resolution_without_request_is_ignored() {
        let state = reduce(CardState::default(), vec![CardAction::Succeeded(7, 1)]);
        assert_eq!(state.status(), &FetchState::Idle);
    }
}
