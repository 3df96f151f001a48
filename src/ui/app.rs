use std::collections::BTreeMap;

use crate::action::Action;
use crate::location::{BrowserHistory, LocationSource};
use crate::render::{ActionSink, HandlerName, RenderFrame};
use crate::router;

/// Terminal host state: the latest render frame plus the browser chrome
/// (address bar and history) around it.
pub struct App {
    should_quit: bool,
    frame: Option<RenderFrame>,
    history: BrowserHistory,
    sink: ActionSink,
    keybindings: BTreeMap<char, Action>,
}

impl App {
    pub fn new(history: BrowserHistory, sink: ActionSink) -> Self {
        Self {
            should_quit: false,
            frame: None,
            history,
            sink,
            keybindings: BTreeMap::new(),
        }
    }

    /// Bind keys to actions. Keys that are not exactly one character are
    /// skipped.
    pub fn with_keybindings<'a, I>(mut self, bindings: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        for (key, kind) in bindings {
            let mut chars = key.chars();
            if let (Some(ch), None) = (chars.next(), chars.next()) {
                self.keybindings.insert(ch, Action::from_type(kind));
            }
        }
        self
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Latest frame from the render pipeline replaces whatever was shown.
    pub fn on_frame(&mut self, frame: RenderFrame) {
        self.frame = Some(frame);
    }

    pub fn frame(&self) -> Option<&RenderFrame> {
        self.frame.as_ref()
    }

    pub fn location(&self) -> String {
        self.history.current()
    }

    pub fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.history.can_go_forward()
    }

    pub fn offers(&self, name: HandlerName) -> bool {
        self.frame
            .as_ref()
            .is_some_and(|frame| frame.handlers.get(name).is_some())
    }

    /// Bound keys in key order.
    pub fn bindings(&self) -> impl Iterator<Item = (char, &Action)> + '_ {
        self.keybindings.iter().map(|(key, action)| (*key, action))
    }

    /// Invoke a handler of the current view. Returns `false` if the view
    /// does not offer it.
    pub fn invoke(&self, name: HandlerName) -> bool {
        self.frame
            .as_ref()
            .map(|frame| frame.handlers.invoke(name))
            .unwrap_or(false)
    }

    /// Step back in history and route the new location.
    pub fn navigate_back(&mut self) -> bool {
        match self.history.back() {
            Some(location) => {
                self.on_popstate(&location);
                true
            }
            None => false,
        }
    }

    /// Step forward in history and route the new location.
    pub fn navigate_forward(&mut self) -> bool {
        match self.history.forward() {
            Some(location) => {
                self.on_popstate(&location);
                true
            }
            None => false,
        }
    }

    /// Dispatch the action bound to `key`, if any.
    pub fn trigger_binding(&self, key: char) -> bool {
        match self.keybindings.get(&key) {
            Some(action) => {
                (self.sink)(action.clone());
                true
            }
            None => false,
        }
    }

    fn on_popstate(&self, location: &str) {
        let action = router::location_to_action(location);
        tracing::debug!(%location, %action, "history navigation");
        (self.sink)(action);
    }
}
