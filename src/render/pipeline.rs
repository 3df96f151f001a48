//! Store → render frame pipeline.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::selector::{select_view_state, ViewState};
use crate::state::{AppState, Notification};
use crate::store::Store;

use super::handlers::{create_handlers, ActionSink, HandlerSet};

/// Everything a renderer needs for one redraw.
#[derive(Debug, Clone)]
pub struct RenderFrame {
    pub view: ViewState,
    pub handlers: HandlerSet,
    pub notification: Option<Notification>,
}

pub fn build_frame(state: &AppState, sink: &ActionSink) -> RenderFrame {
    let view = select_view_state(state);
    let handlers = create_handlers(sink, &view);
    RenderFrame {
        view,
        handlers,
        notification: state.ui.notification.clone(),
    }
}

/// Subscribe `renderer` to `store`: every state change produces one frame.
///
/// Frames reach `renderer` in version order. A notification that arrives
/// after a newer one was delivered is dropped, so the last frame always
/// shows the state the store holds. `renderer` must not call back into
/// the store.
pub fn attach<R>(store: &Store, sink: ActionSink, renderer: R)
where
    R: Fn(RenderFrame) + Send + Sync + 'static,
{
    let delivered = Mutex::new(0u64);
    store.subscribe_versioned(move |version, state: &Arc<AppState>| {
        let mut last = delivered.lock();
        if version <= *last {
            tracing::debug!(version, delivered = *last, "dropping stale frame");
            return;
        }
        *last = version;
        renderer(build_frame(state, &sink));
    });
}
