use crate::libs::core::environment::FeedbackEmitter;
use crate::libs::core::models::{IdentityKey, Place};
use crate::libs::provider::DataProvider;
use crate::libs::state::{Intent, Reducer, ViewState};
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeedState {
    pub places: Vec<Place>,
}

impl ViewState for FeedState {}

impl FeedState {
    pub fn place(&self, place_id: &IdentityKey) -> Option<&Place> {
        self.places.iter().find(|p| &p.id == place_id)
    }
}

#[derive(Debug, Clone)]
pub enum FeedIntent {
    Load { places: Vec<Place> },
    /// Flips the interest flag of the matching place only.
    ToggleInterest { place_id: IdentityKey },
}

impl Intent for FeedIntent {}

pub struct FeedReducer;

impl Reducer for FeedReducer {
    type State = FeedState;
    type Intent = FeedIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FeedIntent::Load { places } => FeedState { places },
            FeedIntent::ToggleInterest { place_id } => {
                let mut places = state.places;
                if let Some(place) = places.iter_mut().find(|p| p.id == place_id) {
                    place.is_user_interested = !place.is_user_interested;
                }
                FeedState { places }
            }
        }
    }
}

/// Home feed: the place cards and their "I'm interested" toggles.
pub struct FeedController {
    state: FeedState,
    feedback: Arc<dyn FeedbackEmitter>,
}

impl FeedController {
    pub fn new(provider: &dyn DataProvider, feedback: Arc<dyn FeedbackEmitter>) -> Self {
        let state = FeedReducer::reduce(
            FeedState::default(),
            FeedIntent::Load {
                places: provider.get_places(),
            },
        );
        Self { state, feedback }
    }

    pub fn state(&self) -> &FeedState {
        &self.state
    }

    /// Returns the new flag, or `None` when no place has this id.
    pub fn toggle_interest(&mut self, place_id: &IdentityKey) -> Option<bool> {
        let interested = self.apply_toggle(place_id)?;
        self.feedback.impact();
        Some(interested)
    }

    /// Flips the flag without the feedback pulse. Callers that hold a lock
    /// around the controller pulse through [`FeedController::feedback`] once
    /// the lock is released.
    pub fn apply_toggle(&mut self, place_id: &IdentityKey) -> Option<bool> {
        if self.state.place(place_id).is_none() {
            warn!(%place_id, "interest toggle for unknown place");
            return None;
        }
        let state = std::mem::take(&mut self.state);
        self.state = FeedReducer::reduce(
            state,
            FeedIntent::ToggleInterest {
                place_id: *place_id,
            },
        );
        let interested = self.state.place(place_id).map(|p| p.is_user_interested);
        debug!(%place_id, ?interested, "interest toggled");
        interested
    }

    pub fn feedback(&self) -> Arc<dyn FeedbackEmitter> {
        Arc::clone(&self.feedback)
    }
}
