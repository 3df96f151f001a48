//! Central action handler.
//!
//! The dispatcher runs each action's effect and commits its outcome to the
//! store through [`AppReducer`]. Dispatches are not serialized against each
//! other: every `set_state` is atomic, and a late response simply wins.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::action::Action;
use crate::gateway::{Gateway, GatewayResult};
use crate::location::LocationSource;
use crate::mvi::Reducer;
use crate::render::ActionSink;
use crate::router;
use crate::state::{AppReducer, Hotel, StateChange};
use crate::store::Store;

/// Shown when the hotel list cannot be loaded. The gateway's reason is
/// logged, never displayed.
pub const LOAD_FAILED_MESSAGE: &str = "Nepodařilo se načíst data";

const HOTELS_PATH: &str = "/hotels";

pub type DispatchFuture<'a> = Pin<Box<dyn Future<Output = ()> + Send + 'a>>;

#[derive(Clone)]
pub struct Dispatcher {
    store: Store,
    gateway: Arc<dyn Gateway>,
    location: Arc<dyn LocationSource>,
}

impl Dispatcher {
    pub fn new(
        store: Store,
        gateway: Arc<dyn Gateway>,
        location: Arc<dyn LocationSource>,
    ) -> Self {
        Self {
            store,
            gateway,
            location,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Handle one action. The returned future completes when the action's
    /// effect (including any follow-up dispatch) has finished.
    pub fn dispatch(&self, action: Action) -> DispatchFuture<'_> {
        Box::pin(async move {
            tracing::debug!(action = %action, "dispatch");
            match action {
                Action::AppInit => self.app_init().await,
                Action::EnterHotelList => self.apply(StateChange::EnterHotelList),
                Action::Unknown { kind } => {
                    tracing::warn!(action = %kind, "Unknown action type");
                }
            }
        })
    }

    /// Dispatch on `runtime` without waiting for completion.
    pub fn spawn_on(&self, runtime: &Handle, action: Action) -> JoinHandle<()> {
        let dispatcher = self.clone();
        runtime.spawn(async move { dispatcher.dispatch(action).await })
    }

    /// An [`ActionSink`] that spawns each action on `runtime`. Safe to call
    /// from threads outside the runtime.
    pub fn sink(&self, runtime: Handle) -> ActionSink {
        let dispatcher = self.clone();
        Arc::new(move |action: Action| {
            dispatcher.spawn_on(&runtime, action);
        })
    }

    fn apply(&self, change: StateChange) {
        self.store
            .set_state(move |state| AppReducer::reduce(state.clone(), change));
    }

    async fn app_init(&self) {
        self.apply(StateChange::LoadStarted);

        let result = self.gateway.get(HOTELS_PATH, None).await;
        let hotels = match hotels_from(&result) {
            Ok(hotels) => hotels,
            Err(reason) => {
                tracing::warn!(path = HOTELS_PATH, %reason, "failed to load hotels");
                self.apply(StateChange::LoadFailed {
                    message: LOAD_FAILED_MESSAGE.to_string(),
                });
                return;
            }
        };

        tracing::info!(count = hotels.len(), "hotels loaded");
        self.apply(StateChange::HotelsLoaded { hotels });

        let location = self.location.current();
        let next = router::location_to_action(&location);
        tracing::debug!(%location, action = %next, "initial route");
        self.dispatch(next).await;
    }
}

/// Hotels from a `GET /hotels` result. A missing or `null` list is empty; a
/// list that does not parse counts as a failed load.
fn hotels_from(result: &GatewayResult) -> Result<Vec<Hotel>, String> {
    match result {
        GatewayResult::Rejected { reason } => Err(reason.clone()),
        GatewayResult::Success(_) => match result.field("hotels") {
            None => Ok(Vec::new()),
            Some(value) => serde_json::from_value(value.clone())
                .map_err(|e| format!("malformed hotel list: {e}")),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn success(value: serde_json::Value) -> GatewayResult {
        GatewayResult::Success(value.as_object().cloned().unwrap())
    }

    #[test]
    fn missing_hotels_field_is_empty_list() {
        assert_eq!(hotels_from(&success(json!({"status": "SUCCESS"}))), Ok(vec![]));
        assert_eq!(hotels_from(&success(json!({"hotels": null}))), Ok(vec![]));
    }

    #[test]
    fn hotels_parse_in_order() {
        let result = success(json!({"hotels": [
            {"name": "B", "city": "Brno"},
            {"name": "A", "city": "Prague", "zip": "11000"}
        ]}));
        let hotels = hotels_from(&result).unwrap();
        assert_eq!(hotels[0].name, "B");
        assert_eq!(hotels[1].zip.as_deref(), Some("11000"));
    }

    #[test]
    fn malformed_list_is_an_error() {
        let result = success(json!({"hotels": [{"city": "Brno"}]}));
        assert!(hotels_from(&result).unwrap_err().contains("malformed hotel list"));
    }

    #[test]
    fn rejection_passes_reason_through() {
        let result = GatewayResult::Rejected {
            reason: "timeout".to_string(),
        };
        assert_eq!(hotels_from(&result), Err("timeout".to_string()));
    }
}
