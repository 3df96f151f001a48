//! The application store.
//!
//! Holds the single [`AppState`] value and notifies subscribers after every
//! replacement. Cloning a [`Store`] clones the handle, not the state: every
//! clone observes the same value. Independently constructed stores share
//! nothing.
//!
//! Every replacement gets a version, assigned under the state lock. Two
//! `set_state` calls racing on different threads may notify out of order;
//! versioned listeners use the version to drop the older notification.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::state::AppState;

/// Callback invoked with the version and the new state after each
/// `set_state`.
pub type Listener = Arc<dyn Fn(u64, &Arc<AppState>) + Send + Sync>;

#[derive(Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    slot: Mutex<Slot>,
    listeners: Mutex<Vec<Listener>>,
}

struct Slot {
    version: u64,
    state: Arc<AppState>,
}

impl Store {
    pub fn new(initial: AppState) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                slot: Mutex::new(Slot {
                    version: 0,
                    state: Arc::new(initial),
                }),
                listeners: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Current snapshot. Cheap: clones an `Arc`.
    pub fn get_state(&self) -> Arc<AppState> {
        Arc::clone(&self.inner.slot.lock().state)
    }

    /// Version of the current state: 0 for the initial state, then one more
    /// per `set_state`.
    pub fn version(&self) -> u64 {
        self.inner.slot.lock().version
    }

    /// Replace the state with `transform(current)` and notify subscribers.
    ///
    /// The transform runs under the state lock, so two concurrent calls
    /// never interleave inside a transform. Listeners run after the lock is
    /// released, in subscription order, and may call back into the store.
    /// A panicking listener is logged and does not stop the others.
    pub fn set_state<F>(&self, transform: F)
    where
        F: FnOnce(&AppState) -> AppState,
    {
        let (version, next) = {
            let mut slot = self.inner.slot.lock();
            let next = Arc::new(transform(&slot.state));
            slot.version += 1;
            slot.state = Arc::clone(&next);
            (slot.version, next)
        };

        let listeners: Vec<Listener> = self.inner.listeners.lock().clone();
        tracing::debug!(
            version,
            status = %next.ui.status,
            mode = %next.ui.mode,
            listeners = listeners.len(),
            "state replaced"
        );

        for (index, listener) in listeners.iter().enumerate() {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| listener(version, &next)));
            if outcome.is_err() {
                tracing::error!(listener = index, version, "store listener panicked");
            }
        }
    }

    /// Register a listener for every future `set_state`. Past states are not
    /// replayed.
    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(&Arc<AppState>) + Send + Sync + 'static,
    {
        self.subscribe_versioned(move |_, state| listener(state));
    }

    /// Like [`subscribe`](Self::subscribe), with the version of each state.
    pub fn subscribe_versioned<F>(&self, listener: F)
    where
        F: Fn(u64, &Arc<AppState>) + Send + Sync + 'static,
    {
        self.inner.listeners.lock().push(Arc::new(listener));
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(AppState::initial())
    }
}
