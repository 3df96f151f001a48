//! State → view state derivation.
//!
//! Everything here is a pure function of [`AppState`] and runs on every
//! render; there is no memoization to keep in sync.

use serde::Serialize;

use crate::state::{AppState, Hotel, UiMode, UiStatus};

/// What a view may offer beyond plain display. The base hotel list offers
/// nothing yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Capabilities {}

/// Presentation-ready description of the current screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViewState {
    Loading,
    Error {
        message: String,
    },
    HotelList {
        hotels: Vec<Hotel>,
        capabilities: Capabilities,
    },
}

pub fn select_hotels(state: &AppState) -> Vec<Hotel> {
    state.hotels.clone()
}

pub fn select_hotel_list_view(state: &AppState) -> ViewState {
    ViewState::HotelList {
        hotels: select_hotels(state),
        capabilities: Capabilities::default(),
    }
}

/// Derive the view state. Total: an invalid status or mode becomes an error
/// view instead of a failure. An error status without a message shows an
/// empty message; the reducer never produces one.
pub fn select_view_state(state: &AppState) -> ViewState {
    let ui = &state.ui;

    match &ui.status {
        UiStatus::Loading => ViewState::Loading,
        UiStatus::Error => ViewState::Error {
            message: ui.error_message.clone().unwrap_or_default(),
        },
        UiStatus::Unrecognized(status) => ViewState::Error {
            message: format!("Unknown ui status: {status}"),
        },
        UiStatus::Ready => match &ui.mode {
            UiMode::HotelList => select_hotel_list_view(state),
            UiMode::Unrecognized(mode) => ViewState::Error {
                message: format!("Unknown ui mode: {mode}"),
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Notification;

    fn with_status(status: UiStatus) -> AppState {
        let mut state = AppState::initial();
        state.ui.status = status;
        state
    }

    #[test]
    fn loading_ignores_everything_else() {
        let mut state = with_status(UiStatus::Loading);
        state.hotels = vec![Hotel::new("Hotel A", "Prague")];
        state.ui.mode = UiMode::Unrecognized("BOOKING".to_string());
        state.ui.error_message = Some("stale".to_string());
        state.ui.notification = Some(Notification {
            message: "n".to_string(),
        });
        assert_eq!(select_view_state(&state), ViewState::Loading);
    }

    #[test]
    fn error_carries_message() {
        let mut state = with_status(UiStatus::Error);
        state.ui.error_message = Some("Nepodařilo se načíst data".to_string());
        assert_eq!(
            select_view_state(&state),
            ViewState::Error {
                message: "Nepodařilo se načíst data".to_string()
            }
        );
    }

    #[test]
    fn error_without_message_shows_empty_message() {
        let state = with_status(UiStatus::Error);
        assert_eq!(
            select_view_state(&state),
            ViewState::Error {
                message: String::new()
            }
        );
    }

    #[test]
    fn unknown_status_becomes_error_view() {
        let state = with_status(UiStatus::Unrecognized("PAUSED".to_string()));
        assert_eq!(
            select_view_state(&state),
            ViewState::Error {
                message: "Unknown ui status: PAUSED".to_string()
            }
        );
    }

    #[test]
    fn ready_hotel_list_exposes_hotels() {
        let mut state = with_status(UiStatus::Ready);
        state.hotels = vec![Hotel::new("Hotel A", "Prague")];
        assert_eq!(
            select_view_state(&state),
            ViewState::HotelList {
                hotels: vec![Hotel::new("Hotel A", "Prague")],
                capabilities: Capabilities::default(),
            }
        );
    }

    #[test]
    fn ready_unknown_mode_becomes_error_view() {
        let mut state = with_status(UiStatus::Ready);
        state.ui.mode = UiMode::Unrecognized("BOOKING".to_string());
        assert_eq!(
            select_view_state(&state),
            ViewState::Error {
                message: "Unknown ui mode: BOOKING".to_string()
            }
        );
    }

    #[test]
    fn view_state_serializes_with_type_tag() {
        let mut state = with_status(UiStatus::Ready);
        state.hotels = vec![Hotel::new("Hotel A", "Prague")];
        let json = serde_json::to_value(select_view_state(&state)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "HOTEL_LIST",
                "hotels": [{"name": "Hotel A", "city": "Prague"}],
                "capabilities": {}
            })
        );
        assert_eq!(
            serde_json::to_value(ViewState::Loading).unwrap(),
            serde_json::json!({"type": "LOADING"})
        );
    }
}
