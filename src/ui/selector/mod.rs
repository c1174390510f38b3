//! The cascading-selection state machine.
//!
//! Three dependent lists (countries → states → cities): choosing an
//! entry in one list clears everything downstream and triggers a fetch
//! for the next list. All transitions live in [`SelectorReducer`];
//! fetch side effects are spawned by the `App` based on the reduced
//! state.

mod intent;
mod reducer;
mod state;

pub use intent::SelectorIntent;
pub use reducer::SelectorReducer;
pub use state::{Level, SelectorState};
