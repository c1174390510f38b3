//! Terminal UI: event loop, state machine, rendering.

pub mod app;
pub mod events;
pub mod footer;
pub mod mvi;
pub mod render;
pub mod selector;
pub mod terminal_guard;
pub mod theme;

use std::io;
use std::time::Duration;

use crate::api::LocationClient;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

pub fn run(client: LocationClient, runtime: tokio::runtime::Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let events = EventHandler::new(tick_rate);
    let mut app = App::new(client, runtime, events.sender());
    app.mount();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => app.on_key(key),
            Ok(AppEvent::Fetch(outcome)) => app.on_fetch(outcome),
            Ok(AppEvent::Tick) => {}
            Ok(AppEvent::Resize) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
