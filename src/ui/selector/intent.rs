use crate::ui::mvi::Intent;
use crate::ui::selector::state::Level;

/// User actions and fetch completions driving the selector.
#[derive(Debug, Clone)]
pub enum SelectorIntent {
    /// Start (or restart) the countries fetch. Dispatched at mount.
    LoadCountries,
    /// `None` is the blank/placeholder choice: it clears the selection
    /// and everything downstream.
    SelectCountry(Option<String>),
    SelectState(Option<String>),
    SelectCity(Option<String>),
    /// A fetch spawned under `seq` came back with items.
    FetchResolved {
        level: Level,
        seq: u64,
        items: Vec<String>,
    },
    /// A fetch spawned under `seq` failed; `message` is the rendered
    /// error from the API client.
    FetchFailed {
        level: Level,
        seq: u64,
        message: String,
    },
}

impl Intent for SelectorIntent {}
