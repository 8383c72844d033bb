//! Per-screen view state.
//!
//! Each screen follows the same unidirectional flow:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Reducers are pure. Controllers wrap a reducer and own the side effects
//! (feedback pulses, delayed callbacks). State is loaded from the provider on
//! screen entry and is never written back, so revisiting a screen starts over.

pub mod feed;
pub mod invitations;
pub mod invite;
pub mod navigation;
pub mod reels;
pub mod scheduling;
pub mod splash;

/// Marker for screen state: cloneable, comparable and self-contained.
pub trait ViewState: Clone + PartialEq + Default + Send + 'static {}

/// Marker for user actions or system events.
pub trait Intent: Send + 'static {}

/// The only place state transitions happen: `(State, Intent) -> State`.
pub trait Reducer {
    type State: ViewState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
