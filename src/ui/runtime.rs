use std::io;
use std::time::Duration;

use tokio::runtime::Handle;

use crate::action::Action;
use crate::dispatcher::Dispatcher;
use crate::location::BrowserHistory;
use crate::render;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Run the terminal host until the user quits.
///
/// Blocks the calling thread; dispatches run on `runtime`.
pub fn run<'a, I>(
    dispatcher: &Dispatcher,
    history: BrowserHistory,
    keybindings: I,
    tick_rate: Duration,
    runtime: Handle,
) -> io::Result<()>
where
    I: IntoIterator<Item = (&'a String, &'a String)>,
{
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);
    let sink = dispatcher.sink(runtime.clone());

    let frames = events.sender();
    render::attach(dispatcher.store(), sink.clone(), move |frame| {
        let _ = frames.send(AppEvent::Frame(Box::new(frame)));
    });

    let mut app = App::new(history, sink).with_keybindings(keybindings);

    dispatcher.spawn_on(&runtime, Action::AppInit);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            // The next draw picks up the new terminal size.
            Ok(AppEvent::Resize) => {}
            Ok(AppEvent::Frame(frame)) => app.on_frame(*frame),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
