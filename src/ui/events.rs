use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent};

use crate::render::RenderFrame;

pub enum AppEvent {
    Key(KeyEvent),
    Resize,
    /// The render pipeline produced a new frame.
    Frame(Box<RenderFrame>),
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
}

impl EventHandler {
    /// Start the input thread. It polls the terminal and stops once the
    /// receiving side is gone.
    pub fn new(poll_interval: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || loop {
            let forwarded = match event::poll(poll_interval) {
                Ok(true) => match event::read() {
                    Ok(Event::Key(key)) => event_tx.send(AppEvent::Key(key)),
                    Ok(Event::Resize(..)) => event_tx.send(AppEvent::Resize),
                    Ok(_) => Ok(()),
                    Err(err) => {
                        tracing::error!(error = %err, "failed to read terminal event");
                        break;
                    }
                },
                Ok(false) => Ok(()),
                Err(err) => {
                    tracing::error!(error = %err, "failed to poll terminal events");
                    break;
                }
            };
            if forwarded.is_err() {
                break;
            }
        });

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }
}
