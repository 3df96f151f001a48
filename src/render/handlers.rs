//! Interaction handlers offered by each view.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::action::Action;
use crate::selector::ViewState;

/// Where handlers send their actions. In the running application this
/// spawns a dispatch; tests record instead.
pub type ActionSink = Arc<dyn Fn(Action) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandlerName {
    OnContinue,
}

impl HandlerName {
    pub fn as_str(&self) -> &'static str {
        match self {
            HandlerName::OnContinue => "onContinue",
        }
    }
}

impl fmt::Display for HandlerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Zero-argument callback that dispatches a fixed action.
#[derive(Clone)]
pub struct Handler {
    action: Action,
    sink: ActionSink,
}

impl Handler {
    pub fn new(action: Action, sink: ActionSink) -> Self {
        Self { action, sink }
    }

    pub fn call(&self) {
        (self.sink)(self.action.clone());
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("action", &self.action)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Default)]
pub struct HandlerSet {
    handlers: BTreeMap<HandlerName, Handler>,
}

impl HandlerSet {
    pub fn get(&self, name: HandlerName) -> Option<&Handler> {
        self.handlers.get(&name)
    }

    /// Call the named handler. Returns `false` when the view does not offer it.
    pub fn invoke(&self, name: HandlerName) -> bool {
        match self.handlers.get(&name) {
            Some(handler) => {
                handler.call();
                true
            }
            None => false,
        }
    }

    pub fn names(&self) -> impl Iterator<Item = HandlerName> + '_ {
        self.handlers.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    fn insert(&mut self, name: HandlerName, handler: Handler) {
        self.handlers.insert(name, handler);
    }
}

pub fn create_handlers(sink: &ActionSink, view: &ViewState) -> HandlerSet {
    let mut handlers = HandlerSet::default();
    match view {
        ViewState::Error { .. } => {
            handlers.insert(
                HandlerName::OnContinue,
                Handler::new(Action::EnterHotelList, Arc::clone(sink)),
            );
        }
        ViewState::HotelList { .. } | ViewState::Loading => {}
    }
    handlers
}
