//! Headless host: runs the load cycle without a terminal UI and prints each
//! emitted view state as a JSON line.

use std::io::Write;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::action::Action;
use crate::dispatcher::Dispatcher;
use crate::render::{self, ActionSink, RenderFrame};

/// Attach a JSON-lines renderer writing to `out`, dispatch `APP_INIT` and
/// wait for it (and its follow-up route) to finish.
///
/// Handlers are not offered in this mode: there is no one to press them.
pub async fn run<W>(dispatcher: &Dispatcher, out: W)
where
    W: Write + Send + 'static,
{
    let out = Arc::new(Mutex::new(out));
    let sink: ActionSink = Arc::new(|action: Action| {
        tracing::debug!(%action, "handler ignored in headless mode");
    });

    render::attach(dispatcher.store(), sink, move |frame: RenderFrame| {
        let mut out = out.lock();
        let written = serde_json::to_string(&frame.view)
            .map_err(std::io::Error::from)
            .and_then(|line| writeln!(out, "{line}"))
            .and_then(|_| out.flush());
        if let Err(err) = written {
            tracing::error!(error = %err, "failed to write view state");
        }
    });

    dispatcher.dispatch(Action::AppInit).await;
}
