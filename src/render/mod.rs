//! Render pipeline: turns each state change into a frame of view state plus
//! the handlers bound to it.

mod handlers;
mod pipeline;

pub use handlers::{create_handlers, ActionSink, Handler, HandlerName, HandlerSet};
pub use pipeline::{attach, build_frame, RenderFrame};
