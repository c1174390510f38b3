//! Model-View-Intent primitives for the UI layer.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! State transitions happen only inside reducers, which are pure
//! functions of `(State, Intent)`. Side effects (spawning fetches) are
//! handled by the `App` after a reduction, based on the new state.

/// Marker trait for UI state objects.
///
/// States are cloneable value types holding everything the view needs,
/// and comparable so the runtime can detect changes.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for intents: user actions and system events (key
/// presses, fetch completions) that drive state transitions.
pub trait Intent: Send + 'static {}

/// Reducer transforms state based on intents.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Process an intent and return the new state. Must be pure.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
