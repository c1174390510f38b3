use std::sync::mpsc::Sender;

use crossterm::event::{KeyCode, KeyEvent};

use crate::api::LocationClient;
use crate::ui::events::{AppEvent, FetchOutcome};
use crate::ui::mvi::Reducer;
use crate::ui::selector::{Level, SelectorIntent, SelectorReducer, SelectorState};

/// Top-level UI model: the selector state machine plus everything
/// needed to run its side effects (the API client, the tokio handle
/// fetches are spawned on, and the channel completions come back over).
pub struct App {
    selector: SelectorState,
    client: LocationClient,
    runtime: tokio::runtime::Handle,
    events_tx: Sender<AppEvent>,
    focus: Level,
    cursors: [usize; 3],
    should_quit: bool,
}

impl App {
    pub fn new(
        client: LocationClient,
        runtime: tokio::runtime::Handle,
        events_tx: Sender<AppEvent>,
    ) -> Self {
        Self {
            selector: SelectorState::default(),
            client,
            runtime,
            events_tx,
            focus: Level::Countries,
            cursors: [0; 3],
            should_quit: false,
        }
    }

    pub fn selector(&self) -> &SelectorState {
        &self.selector
    }

    pub fn focus(&self) -> Level {
        self.focus
    }

    pub fn cursor(&self, level: Level) -> usize {
        self.cursors[column_index(level)]
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Kick off the initial countries fetch. Called once before the
    /// event loop starts.
    pub fn mount(&mut self) {
        self.dispatch(SelectorIntent::LoadCountries);
    }

    /// Run an intent through the reducer, then spawn whatever fetch the
    /// new state asks for. A fetch is wanted exactly when the sequence
    /// token advanced and a loading target is set.
    fn dispatch(&mut self, intent: SelectorIntent) {
        let prev_seq = self.selector.seq;
        self.selector = SelectorReducer::reduce(std::mem::take(&mut self.selector), intent);
        if self.selector.seq != prev_seq {
            if let Some(level) = self.selector.loading {
                self.spawn_fetch(level, self.selector.seq);
            }
        }
        self.clamp_cursors();
    }

    fn spawn_fetch(&self, level: Level, seq: u64) {
        let client = self.client.clone();
        let country = self.selector.country.clone();
        let state = self.selector.state.clone();
        let tx = self.events_tx.clone();

        self.runtime.spawn(async move {
            let result = match level {
                Level::Countries => client.countries().await,
                Level::States => {
                    let country = country.unwrap_or_default();
                    client.states(&country).await
                }
                Level::Cities => {
                    let country = country.unwrap_or_default();
                    let state = state.unwrap_or_default();
                    client.cities(&country, &state).await
                }
            };
            if let Err(err) = &result {
                tracing::warn!(list = level.noun(), error = %err, "fetch failed");
            }
            // The receiver only goes away on shutdown.
            let _ = tx.send(AppEvent::Fetch(FetchOutcome { level, seq, result }));
        });
    }

    pub fn on_fetch(&mut self, outcome: FetchOutcome) {
        let FetchOutcome { level, seq, result } = outcome;
        let intent = match result {
            Ok(items) => SelectorIntent::FetchResolved { level, seq, items },
            Err(err) => SelectorIntent::FetchFailed {
                level,
                seq,
                message: err.to_string(),
            },
        };
        self.dispatch(intent);
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::Right => self.focus_next(),
            KeyCode::BackTab | KeyCode::Left => self.focus_prev(),
            KeyCode::Up => self.move_cursor(-1),
            KeyCode::Down => self.move_cursor(1),
            KeyCode::Enter => self.select_highlighted(),
            KeyCode::Backspace | KeyCode::Delete => self.clear_focused(),
            _ => {}
        }
    }

    fn focus_next(&mut self) {
        let next = match self.focus {
            Level::Countries => Level::States,
            Level::States => Level::Cities,
            Level::Cities => Level::Countries,
        };
        if self.selector.enabled(next) {
            self.focus = next;
        } else if self.selector.enabled(Level::States) {
            self.focus = Level::States;
        } else {
            self.focus = Level::Countries;
        }
    }

    fn focus_prev(&mut self) {
        self.focus = match self.focus {
            Level::Countries => Level::Countries,
            Level::States => Level::Countries,
            Level::Cities => Level::States,
        };
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = self.selector.items(self.focus).len();
        if len == 0 {
            return;
        }
        let idx = &mut self.cursors[column_index(self.focus)];
        *idx = (*idx as isize + delta).rem_euclid(len as isize) as usize;
    }

    fn select_highlighted(&mut self) {
        let items = self.selector.items(self.focus);
        let Some(choice) = items.get(self.cursor(self.focus)).cloned() else {
            return;
        };
        self.dispatch_selection(Some(choice));
    }

    fn clear_focused(&mut self) {
        self.dispatch_selection(None);
    }

    fn dispatch_selection(&mut self, choice: Option<String>) {
        let intent = match self.focus {
            Level::Countries => SelectorIntent::SelectCountry(choice),
            Level::States => SelectorIntent::SelectState(choice),
            Level::Cities => SelectorIntent::SelectCity(choice),
        };
        self.dispatch(intent);
        // Downstream highlights restart at the top after a change, and
        // focus retreats if it sat on a now-disabled column.
        if !self.selector.enabled(self.focus) {
            self.focus_prev();
        }
    }

    /// Keep highlights inside their (possibly shrunken) lists.
    fn clamp_cursors(&mut self) {
        for level in [Level::Countries, Level::States, Level::Cities] {
            let len = self.selector.items(level).len();
            let idx = &mut self.cursors[column_index(level)];
            if len == 0 {
                *idx = 0;
            } else if *idx >= len {
                *idx = len - 1;
            }
        }
    }
}

fn column_index(level: Level) -> usize {
    match level {
        Level::Countries => 0,
        Level::States => 1,
        Level::Cities => 2,
    }
}
