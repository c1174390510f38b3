use crate::ui::mvi::UiState;

/// Which of the three dependent lists a fetch or column refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Countries,
    States,
    Cities,
}

impl Level {
    /// Plural noun for user-facing messages ("Error fetching states: ...").
    pub fn noun(self) -> &'static str {
        match self {
            Level::Countries => "countries",
            Level::States => "states",
            Level::Cities => "cities",
        }
    }

    /// Column title for rendering.
    pub fn title(self) -> &'static str {
        match self {
            Level::Countries => "Country",
            Level::States => "State",
            Level::Cities => "City",
        }
    }
}

/// State of the cascading selector.
///
/// `None` selections mean "unselected". Two invariants hold after every
/// reduction: `state` set implies `country` set, and `city` set implies
/// `state` set.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectorState {
    pub countries: Vec<String>,
    pub states: Vec<String>,
    pub cities: Vec<String>,
    pub country: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    /// Which list the in-flight fetch targets; `None` when idle.
    pub loading: Option<Level>,
    /// Message from the most recent failed fetch, cleared when a new
    /// fetch begins.
    pub error: Option<String>,
    /// Request-sequence token. Bumped by every transition that starts a
    /// fetch or invalidates an outstanding one; completions carrying a
    /// stale token are dropped.
    pub seq: u64,
}

impl UiState for SelectorState {}

impl SelectorState {
    /// The state column accepts input only once a country is chosen.
    pub fn states_enabled(&self) -> bool {
        self.country.is_some()
    }

    /// The city column accepts input only once a state is chosen.
    pub fn cities_enabled(&self) -> bool {
        self.state.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_some()
    }

    pub fn enabled(&self, level: Level) -> bool {
        match level {
            Level::Countries => true,
            Level::States => self.states_enabled(),
            Level::Cities => self.cities_enabled(),
        }
    }

    pub fn items(&self, level: Level) -> &[String] {
        match level {
            Level::Countries => &self.countries,
            Level::States => &self.states,
            Level::Cities => &self.cities,
        }
    }

    pub fn selected(&self, level: Level) -> Option<&str> {
        match level {
            Level::Countries => self.country.as_deref(),
            Level::States => self.state.as_deref(),
            Level::Cities => self.city.as_deref(),
        }
    }

    /// `(city, state, country)` once a full selection exists.
    pub fn summary(&self) -> Option<(&str, &str, &str)> {
        match (&self.city, &self.state, &self.country) {
            (Some(city), Some(state), Some(country)) => Some((city, state, country)),
            _ => None,
        }
    }
}
