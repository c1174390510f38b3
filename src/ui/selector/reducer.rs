use crate::ui::mvi::Reducer;
use crate::ui::selector::intent::SelectorIntent;
use crate::ui::selector::state::{Level, SelectorState};

pub struct SelectorReducer;

impl Reducer for SelectorReducer {
    type State = SelectorState;
    type Intent = SelectorIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SelectorIntent::LoadCountries => begin_fetch(state, Level::Countries),

            SelectorIntent::SelectCountry(choice) => {
                // Clearing an empty selection is a no-op; bumping seq
                // here would invalidate an in-flight countries fetch.
                if choice.is_none() && state.country.is_none() {
                    return state;
                }
                let mut next = state;
                next.country = choice;
                next.state = None;
                next.city = None;
                next.states.clear();
                next.cities.clear();
                match next.country {
                    Some(_) => begin_fetch(next, Level::States),
                    None => cancel_fetch(next),
                }
            }

            SelectorIntent::SelectState(choice) => {
                // A state cannot be chosen without a country.
                if state.country.is_none() {
                    return state;
                }
                // Same no-op rule: an empty clear must not kill an
                // in-flight states fetch.
                if choice.is_none() && state.state.is_none() {
                    return state;
                }
                let mut next = state;
                next.state = choice;
                next.city = None;
                next.cities.clear();
                match next.state {
                    Some(_) => begin_fetch(next, Level::Cities),
                    None => cancel_fetch(next),
                }
            }

            SelectorIntent::SelectCity(choice) => {
                if state.state.is_none() {
                    return state;
                }
                let mut next = state;
                next.city = choice;
                next
            }

            SelectorIntent::FetchResolved { level, seq, items } => {
                if seq != state.seq {
                    // Superseded by a newer selection; drop the result.
                    return state;
                }
                let mut next = state;
                match level {
                    Level::Countries => next.countries = items,
                    Level::States => next.states = items,
                    Level::Cities => next.cities = items,
                }
                next.loading = None;
                next
            }

            SelectorIntent::FetchFailed {
                level,
                seq,
                message,
            } => {
                if seq != state.seq {
                    return state;
                }
                let mut next = state;
                next.error = Some(format!("Error fetching {}: {}", level.noun(), message));
                next.loading = None;
                next
            }
        }
    }
}

/// Arm a new fetch: bump the sequence token, mark the target list as
/// loading, clear any stale error. The caller (App) spawns the request
/// for `state.seq` after reduction.
fn begin_fetch(mut state: SelectorState, level: Level) -> SelectorState {
    state.seq += 1;
    state.loading = Some(level);
    state.error = None;
    state
}

/// Invalidate any outstanding fetch without starting a new one.
fn cancel_fetch(mut state: SelectorState) -> SelectorState {
    state.seq += 1;
    state.loading = None;
    state.error = None;
    state
}
