//! Application state and its transitions.

mod model;
mod reducer;

pub use model::{
    AppState, AuthRole, AuthState, Hotel, Notification, UiMode, UiSlice, UiStatus,
};
pub use reducer::{AppReducer, StateChange};
