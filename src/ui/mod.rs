//! Terminal host for the render pipeline.
//!
//! Plays the part of the browser: draws each frame, owns the address bar
//! and history, and turns keys into handler calls and navigations.

pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod views;

pub use runtime::run;
