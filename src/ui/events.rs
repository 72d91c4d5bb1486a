use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent};

use crate::ui::worker::ApiEvent;

pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    /// A gateway call finished.
    Api(ApiEvent),
}

/// Merges terminal input and API results into one channel.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
    stop: Arc<AtomicBool>,
}

impl EventHandler {
    pub fn new(poll_interval: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let stop = Arc::new(AtomicBool::new(false));

        let input_tx = tx.clone();
        let input_stop = Arc::clone(&stop);
        thread::spawn(move || {
            while !input_stop.load(Ordering::Relaxed) {
                match event::poll(poll_interval) {
                    Ok(true) => {}
                    Ok(false) => continue,
                    Err(err) => {
                        tracing::error!(error = %err, "Terminal poll failed");
                        return;
                    }
                }
                let forwarded = match event::read() {
                    Ok(Event::Key(key)) => Some(AppEvent::Key(key)),
                    Ok(Event::Resize(cols, rows)) => Some(AppEvent::Resize(cols, rows)),
                    Ok(_) => None,
                    Err(err) => {
                        tracing::error!(error = %err, "Terminal read failed");
                        return;
                    }
                };
                if let Some(app_event) = forwarded {
                    if input_tx.send(app_event).is_err() {
                        return;
                    }
                }
            }
        });

        Self { rx, tx, stop }
    }

    /// Sender for other producers (the API worker).
    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}
