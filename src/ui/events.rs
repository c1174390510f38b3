//! Event plumbing for the UI loop.
//!
//! A dedicated thread polls crossterm for input and emits ticks; fetch
//! tasks push their outcomes into the same channel. The UI thread is
//! the only consumer, so all state mutation stays single-threaded.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyEvent, KeyEventKind};

use crate::api::ApiError;
use crate::ui::selector::Level;

/// Outcome of a spawned fetch, tagged with the sequence token it was
/// started under so stale completions can be recognized.
#[derive(Debug)]
pub struct FetchOutcome {
    pub level: Level,
    pub seq: u64,
    pub result: Result<Vec<String>, ApiError>,
}

pub enum AppEvent {
    Key(KeyEvent),
    Resize,
    Tick,
    Fetch(FetchOutcome),
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate.saturating_sub(last_tick.elapsed());
                match crossterm::event::poll(timeout) {
                    Ok(true) => match crossterm::event::read() {
                        Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                            if event_tx.send(AppEvent::Key(key)).is_err() {
                                break;
                            }
                        }
                        Ok(Event::Resize(_, _)) => {
                            if event_tx.send(AppEvent::Resize).is_err() {
                                break;
                            }
                        }
                        Ok(_) => {}
                        Err(_) => break,
                    },
                    Ok(false) => {}
                    Err(_) => break,
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    /// Clone for fetch tasks to report their outcomes.
    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }
}
