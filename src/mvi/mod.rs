//! Model-View-Intent (MVI) primitives.
//!
//! The application runs a single unidirectional loop:
//!
//! ```text
//! Action ──→ Dispatcher ──→ Reducer ──→ Store ──→ Selector ──→ View
//!    ↑                                                          │
//!    └──────────────────────── handlers ────────────────────────┘
//! ```
//!
//! - **State**: immutable snapshot of everything the view needs
//! - **Intent**: a state change requested by an effect
//! - **Reducer**: pure function that transforms state based on intents

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
