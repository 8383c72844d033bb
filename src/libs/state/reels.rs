use crate::libs::core::models::{IdentityKey, Reel};
use crate::libs::state::{Intent, Reducer, ViewState};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReelsState {
    pub reels: Vec<Reel>,
    pub current_index: usize,
    pub ui_hidden: bool,
    pub muted: bool,
}

impl ViewState for ReelsState {}

impl ReelsState {
    pub fn current(&self) -> Option<&Reel> {
        self.reels.get(self.current_index)
    }

    pub fn reel(&self, reel_id: &IdentityKey) -> Option<&Reel> {
        self.reels.iter().find(|r| &r.id == reel_id)
    }
}

#[derive(Debug, Clone)]
pub enum ReelsIntent {
    Load { reels: Vec<Reel> },
    /// Clamped to the last reel.
    ShowIndex(usize),
    ToggleUi,
    ToggleMute,
    /// Flips the liked flag. The like counter is left as-is.
    ToggleLike(IdentityKey),
}

impl Intent for ReelsIntent {}

pub struct ReelsReducer;

impl Reducer for ReelsReducer {
    type State = ReelsState;
    type Intent = ReelsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ReelsIntent::Load { reels } => ReelsState {
                reels,
                ..ReelsState::default()
            },
            ReelsIntent::ShowIndex(index) => {
                let current_index = index.min(state.reels.len().saturating_sub(1));
                ReelsState {
                    current_index,
                    ..state
                }
            }
            ReelsIntent::ToggleUi => ReelsState {
                ui_hidden: !state.ui_hidden,
                ..state
            },
            ReelsIntent::ToggleMute => ReelsState {
                muted: !state.muted,
                ..state
            },
            ReelsIntent::ToggleLike(reel_id) => {
                let mut reels = state.reels;
                if let Some(reel) = reels.iter_mut().find(|r| r.id == reel_id) {
                    reel.is_liked = !reel.is_liked;
                }
                ReelsState { reels, ..state }
            }
        }
    }
}
