//! Address bar and back/forward history.
//!
//! The core only ever reads the current location through
//! [`LocationSource`]. Moving through history belongs to the host shell,
//! which then feeds the new location to the router.

use std::sync::Arc;

use parking_lot::Mutex;

/// Read access to the current location string (including its fragment).
pub trait LocationSource: Send + Sync {
    fn current(&self) -> String;
}

/// A location that never changes.
#[derive(Debug, Clone)]
pub struct FixedLocation(pub String);

impl LocationSource for FixedLocation {
    fn current(&self) -> String {
        self.0.clone()
    }
}

/// Session history with a cursor, shared between the shell and the
/// dispatcher. Cloning shares the history.
#[derive(Debug, Clone)]
pub struct BrowserHistory {
    inner: Arc<Mutex<HistoryInner>>,
}

#[derive(Debug)]
struct HistoryInner {
    entries: Vec<String>,
    cursor: usize,
}

impl BrowserHistory {
    /// History seeded with `entries`; the last one is current. An empty
    /// seed falls back to `fallback`.
    pub fn new(entries: Vec<String>, fallback: &str) -> Self {
        let entries = if entries.is_empty() {
            vec![fallback.to_string()]
        } else {
            entries
        };
        let cursor = entries.len() - 1;
        Self {
            inner: Arc::new(Mutex::new(HistoryInner { entries, cursor })),
        }
    }

    /// Step back. Returns the new current location, or `None` at the start.
    pub fn back(&self) -> Option<String> {
        let mut inner = self.inner.lock();
        if inner.cursor == 0 {
            return None;
        }
        inner.cursor -= 1;
        Some(inner.entries[inner.cursor].clone())
    }

    /// Step forward. Returns the new current location, or `None` at the end.
    pub fn forward(&self) -> Option<String> {
        let mut inner = self.inner.lock();
        if inner.cursor + 1 >= inner.entries.len() {
            return None;
        }
        inner.cursor += 1;
        Some(inner.entries[inner.cursor].clone())
    }

    pub fn can_go_back(&self) -> bool {
        self.inner.lock().cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        let inner = self.inner.lock();
        inner.cursor + 1 < inner.entries.len()
    }
}

impl LocationSource for BrowserHistory {
    fn current(&self) -> String {
        let inner = self.inner.lock();
        inner.entries[inner.cursor].clone()
    }
}
