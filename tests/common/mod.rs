//! Shared test utilities: a scripted gateway and store recorders.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use async_trait::async_trait;
use parking_lot::Mutex;
use reservations_front::action::Action;
use reservations_front::dispatcher::Dispatcher;
use reservations_front::gateway::{Gateway, GatewayResult, Method};
use reservations_front::location::FixedLocation;
use reservations_front::render::{self, ActionSink, RenderFrame};
use reservations_front::selector::ViewState;
use reservations_front::state::{AppState, Hotel};
use reservations_front::store::Store;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::sync::Notify;

pub const HOTELS_LOCATION: &str = "app://reservations/#/hotels";

/// A request seen by [`FakeGateway`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
    pub token: Option<String>,
}

/// Gateway that answers from a queue of scripted results and records every
/// request. An empty queue answers with a rejection. A held gateway keeps
/// each answer back until [`FakeGateway::release`] is called.
#[derive(Default)]
pub struct FakeGateway {
    responses: Mutex<VecDeque<GatewayResult>>,
    requests: Mutex<Vec<RecordedRequest>>,
    held: bool,
    requested: Notify,
    released: Notify,
}

impl FakeGateway {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_responses(responses: impl IntoIterator<Item = GatewayResult>) -> Arc<Self> {
        let gateway = Self::default();
        gateway.responses.lock().extend(responses);
        Arc::new(gateway)
    }

    pub fn held(responses: impl IntoIterator<Item = GatewayResult>) -> Arc<Self> {
        let gateway = Self {
            held: true,
            ..Self::default()
        };
        gateway.responses.lock().extend(responses);
        Arc::new(gateway)
    }

    /// Resolves once a request has been received.
    pub async fn wait_for_request(&self) {
        self.requested.notified().await;
    }

    /// Let one held request answer.
    pub fn release(&self) {
        self.released.notify_one();
    }

    pub fn push(&self, response: GatewayResult) {
        self.responses.lock().push_back(response);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl Gateway for FakeGateway {
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> GatewayResult {
        self.requests.lock().push(RecordedRequest {
            method,
            path: path.to_string(),
            body,
            token: token.map(str::to_string),
        });
        self.requested.notify_one();
        if self.held {
            self.released.notified().await;
        }
        self.responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| rejected("no scripted response"))
    }
}

pub fn success(value: Value) -> GatewayResult {
    GatewayResult::Success(value.as_object().cloned().unwrap_or_default())
}

pub fn rejected(reason: &str) -> GatewayResult {
    GatewayResult::Rejected {
        reason: reason.to_string(),
    }
}

/// A successful `GET /hotels` body with `(name, city)` pairs.
pub fn hotels_response(hotels: &[(&str, &str)]) -> GatewayResult {
    let list: Vec<Value> = hotels
        .iter()
        .map(|(name, city)| json!({"name": name, "city": city}))
        .collect();
    success(json!({"status": "SUCCESS", "hotels": list}))
}

pub fn hotels(pairs: &[(&str, &str)]) -> Vec<Hotel> {
    pairs
        .iter()
        .map(|(name, city)| Hotel::new(*name, *city))
        .collect()
}

/// Dispatcher over a fresh store, located at the hotel list.
pub fn dispatcher_with(gateway: Arc<FakeGateway>) -> Dispatcher {
    Dispatcher::new(
        Store::default(),
        gateway,
        Arc::new(FixedLocation(HOTELS_LOCATION.to_string())),
    )
}

/// Records every state the store publishes.
pub fn record_states(store: &Store) -> Arc<Mutex<Vec<AppState>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    store.subscribe(move |state| sink.lock().push((**state).clone()));
    seen
}

/// Attaches the render pipeline and records every frame it emits. Handler
/// calls are collected instead of dispatched.
pub fn record_frames(store: &Store) -> (Arc<Mutex<Vec<RenderFrame>>>, Arc<Mutex<Vec<Action>>>) {
    let frames = Arc::new(Mutex::new(Vec::new()));
    let actions = Arc::new(Mutex::new(Vec::new()));
    let action_log = Arc::clone(&actions);
    let sink: ActionSink = Arc::new(move |action: Action| action_log.lock().push(action));
    let frame_log = Arc::clone(&frames);
    render::attach(store, sink, move |frame| frame_log.lock().push(frame));
    (frames, actions)
}

pub fn views(frames: &Mutex<Vec<RenderFrame>>) -> Vec<ViewState> {
    frames.lock().iter().map(|frame| frame.view.clone()).collect()
}

/// Write `content` to a `config.toml` inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
