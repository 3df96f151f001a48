//! Pure state transitions for the application.

use crate::mvi::{Intent, Reducer};

use super::model::{AppState, Hotel, UiMode, UiStatus};

/// State changes issued by the dispatcher's effects.
#[derive(Debug, Clone, PartialEq)]
pub enum StateChange {
    /// A load started; any previous error is cleared.
    LoadStarted,
    /// The hotel list arrived.
    HotelsLoaded { hotels: Vec<Hotel> },
    /// The load failed; `message` is what the user sees.
    LoadFailed { message: String },
    /// Show the hotel list screen.
    EnterHotelList,
}

impl Intent for StateChange {}

/// Reducer for [`AppState`].
///
/// Each branch only touches the fields it owns; `mode` survives load
/// transitions so a reload returns the user to the screen they were on.
pub struct AppReducer;

impl Reducer for AppReducer {
    type State = AppState;
    type Intent = StateChange;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            StateChange::LoadStarted => {
                state.ui.status = UiStatus::Loading;
                state.ui.error_message = None;
            }
            StateChange::HotelsLoaded { hotels } => {
                state.hotels = hotels;
                state.ui.status = UiStatus::Ready;
                state.ui.error_message = None;
            }
            StateChange::LoadFailed { message } => {
                state.ui.status = UiStatus::Error;
                state.ui.error_message = Some(message);
            }
            StateChange::EnterHotelList => {
                state.ui.mode = UiMode::HotelList;
                state.ui.status = UiStatus::Ready;
                state.ui.error_message = None;
            }
        }
        state
    }
}
