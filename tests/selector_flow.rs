//! End-to-end state machine scenarios: the full mount → country →
//! state → city flow, failure handling, and the stale-fetch guard.

use locpick::ui::mvi::Reducer;
use locpick::ui::selector::{Level, SelectorIntent, SelectorReducer, SelectorState};

/// Reduce and check the dependency invariants afterwards.
fn step(state: SelectorState, intent: SelectorIntent) -> SelectorState {
    let next = SelectorReducer::reduce(state, intent);
    assert!(next.state.is_none() || next.country.is_some());
    assert!(next.city.is_none() || next.state.is_some());
    next
}

/// Resolve the fetch armed by the previous transition.
fn resolve(state: SelectorState, level: Level, items: &[&str]) -> SelectorState {
    assert_eq!(state.loading, Some(level), "expected an armed {level:?} fetch");
    let seq = state.seq;
    step(
        state,
        SelectorIntent::FetchResolved {
            level,
            seq,
            items: items.iter().map(|s| s.to_string()).collect(),
        },
    )
}

#[test]
fn full_selection_flow() {
    // Before the first fetch the selector is idle and empty.
    let state = SelectorState::default();
    assert!(!state.is_loading());
    assert!(state.countries.is_empty());

    // Mount: countries fetch resolves.
    let state = step(state, SelectorIntent::LoadCountries);
    assert!(state.is_loading());
    let state = resolve(state, Level::Countries, &["India", "USA"]);
    assert_eq!(state.countries, vec!["India", "USA"]);
    assert!(!state.is_loading());
    assert!(!state.states_enabled());

    // Country chosen: exactly one states fetch, columns downstream cleared.
    let state = step(state, SelectorIntent::SelectCountry(Some("India".into())));
    assert_eq!(state.loading, Some(Level::States));
    let state = resolve(state, Level::States, &["Maharashtra"]);
    assert_eq!(state.states, vec!["Maharashtra"]);
    assert!(state.states_enabled());
    assert!(!state.cities_enabled());

    // State chosen: exactly one cities fetch.
    let state = step(state, SelectorIntent::SelectState(Some("Maharashtra".into())));
    assert_eq!(state.loading, Some(Level::Cities));
    let state = resolve(state, Level::Cities, &["Mumbai", "Pune"]);
    assert_eq!(state.cities, vec!["Mumbai", "Pune"]);
    assert!(state.cities_enabled());

    // City chosen: no fetch, summary available.
    let seq_before = state.seq;
    let state = step(state, SelectorIntent::SelectCity(Some("Pune".into())));
    assert_eq!(state.seq, seq_before);
    assert!(!state.is_loading());
    assert_eq!(state.summary(), Some(("Pune", "Maharashtra", "India")));
}

#[test]
fn countries_fetch_failure_surfaces_error() {
    let state = step(SelectorState::default(), SelectorIntent::LoadCountries);
    let seq = state.seq;
    let state = step(
        state,
        SelectorIntent::FetchFailed {
            level: Level::Countries,
            seq,
            message: "connection refused".into(),
        },
    );
    assert_eq!(
        state.error.as_deref(),
        Some("Error fetching countries: connection refused")
    );
    assert!(state.countries.is_empty());
    assert!(!state.is_loading());
}

#[test]
fn reselecting_after_failure_retries_and_clears_banner() {
    let state = step(SelectorState::default(), SelectorIntent::LoadCountries);
    let state = resolve(state, Level::Countries, &["India"]);
    let state = step(state, SelectorIntent::SelectCountry(Some("India".into())));
    let seq = state.seq;
    let state = step(
        state,
        SelectorIntent::FetchFailed {
            level: Level::States,
            seq,
            message: "timeout".into(),
        },
    );
    assert!(state.error.is_some());

    // Reselecting the country re-triggers the fetch and dismisses the banner.
    let state = step(state, SelectorIntent::SelectCountry(Some("India".into())));
    assert_eq!(state.error, None);
    assert_eq!(state.loading, Some(Level::States));
}

#[test]
fn blank_country_during_mount_fetch_does_not_drop_the_result() {
    let state = step(SelectorState::default(), SelectorIntent::LoadCountries);
    let seq = state.seq;

    // Clearing the (already empty) country column while the countries
    // fetch is still in flight must not invalidate it: LoadCountries
    // only fires at mount, so a dropped result would leave the list
    // empty for the rest of the session.
    let state = step(state, SelectorIntent::SelectCountry(None));
    assert_eq!(state.seq, seq);

    let state = step(
        state,
        SelectorIntent::FetchResolved {
            level: Level::Countries,
            seq,
            items: vec!["India".into(), "USA".into()],
        },
    );
    assert_eq!(state.countries, vec!["India", "USA"]);
    assert!(!state.is_loading());
}

#[test]
fn changing_country_mid_flight_drops_the_stale_response() {
    let state = step(SelectorState::default(), SelectorIntent::LoadCountries);
    let state = resolve(state, Level::Countries, &["India", "USA"]);

    let state = step(state, SelectorIntent::SelectCountry(Some("India".into())));
    let stale_seq = state.seq;

    // Faster than the states fetch: switch to USA.
    let state = step(state, SelectorIntent::SelectCountry(Some("USA".into())));
    let current_seq = state.seq;
    assert_ne!(stale_seq, current_seq);

    // India's states arrive late and must not land.
    let state = step(
        state,
        SelectorIntent::FetchResolved {
            level: Level::States,
            seq: stale_seq,
            items: vec!["Maharashtra".into()],
        },
    );
    assert!(state.states.is_empty());
    assert_eq!(state.loading, Some(Level::States));

    // USA's states arrive and do land.
    let state = step(
        state,
        SelectorIntent::FetchResolved {
            level: Level::States,
            seq: current_seq,
            items: vec!["California".into()],
        },
    );
    assert_eq!(state.states, vec!["California"]);
    assert!(!state.is_loading());
}

#[test]
fn changing_state_clears_city_and_cities() {
    let state = step(SelectorState::default(), SelectorIntent::LoadCountries);
    let state = resolve(state, Level::Countries, &["India"]);
    let state = step(state, SelectorIntent::SelectCountry(Some("India".into())));
    let state = resolve(state, Level::States, &["Maharashtra", "Goa"]);
    let state = step(state, SelectorIntent::SelectState(Some("Maharashtra".into())));
    let state = resolve(state, Level::Cities, &["Mumbai", "Pune"]);
    let state = step(state, SelectorIntent::SelectCity(Some("Pune".into())));
    assert!(state.summary().is_some());

    let state = step(state, SelectorIntent::SelectState(Some("Goa".into())));
    assert_eq!(state.city, None);
    assert!(state.cities.is_empty());
    assert_eq!(state.loading, Some(Level::Cities));
    assert_eq!(state.summary(), None);
}

#[test]
fn blank_state_choice_clears_downstream_only() {
    let state = step(SelectorState::default(), SelectorIntent::LoadCountries);
    let state = resolve(state, Level::Countries, &["India"]);
    let state = step(state, SelectorIntent::SelectCountry(Some("India".into())));
    let state = resolve(state, Level::States, &["Maharashtra"]);
    let state = step(state, SelectorIntent::SelectState(Some("Maharashtra".into())));
    let state = resolve(state, Level::Cities, &["Pune"]);

    let state = step(state, SelectorIntent::SelectState(None));
    assert_eq!(state.country.as_deref(), Some("India"));
    assert_eq!(state.state, None);
    assert_eq!(state.city, None);
    assert!(state.cities.is_empty());
    assert_eq!(state.states, vec!["Maharashtra"]);
    assert!(!state.is_loading());
}
