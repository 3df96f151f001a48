//! Client runtime for the hotel reservations front end.
//!
//! State lives in a single [`store::Store`]. Actions go through the
//! [`dispatcher::Dispatcher`], which talks to the API through a
//! [`gateway::Gateway`] and commits state changes via a pure reducer. Every
//! change is turned into a [`render::RenderFrame`] by the
//! [`selector`] and handed to a host: the terminal UI in [`ui`] or the
//! JSON-lines printer in [`headless`].

pub mod action;
pub mod cli;
pub mod config;
pub mod dispatcher;
pub mod gateway;
pub mod headless;
pub mod location;
pub mod logging;
pub mod mvi;
pub mod render;
pub mod router;
pub mod selector;
pub mod state;
pub mod store;
pub mod ui;
