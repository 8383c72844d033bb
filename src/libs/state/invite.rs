use crate::libs::core::models::{IdentityKey, Place, User};
use crate::libs::state::navigation::InviteTab;
use crate::libs::state::{Intent, Reducer, ViewState};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::info;

/// People listed under "Friends"; everyone after them is a mutual.
pub const FRIENDS_SPLIT: usize = 3;

/// Users picked in one invite flow. Set semantics, so no duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InviteSelection {
    selected: BTreeSet<IdentityKey>,
}

impl InviteSelection {
    /// Adds the user if absent, removes them if present. Returns whether the
    /// user is selected afterwards.
    pub fn toggle(&mut self, user_id: IdentityKey) -> bool {
        if self.selected.remove(&user_id) {
            false
        } else {
            self.selected.insert(user_id);
            true
        }
    }

    pub fn is_selected(&self, user_id: &IdentityKey) -> bool {
        self.selected.contains(user_id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn can_proceed(&self) -> bool {
        !self.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &IdentityKey> {
        self.selected.iter()
    }
}

/// What the invite flow passes on to scheduling. Read-only once built.
#[derive(Debug, Clone, PartialEq)]
pub struct InviteHandoff {
    place: Place,
    invitees: Arc<BTreeSet<IdentityKey>>,
}

impl InviteHandoff {
    fn new(place: Place, invitees: BTreeSet<IdentityKey>) -> Self {
        Self {
            place,
            invitees: Arc::new(invitees),
        }
    }

    pub fn place(&self) -> &Place {
        &self.place
    }

    pub fn invitees(&self) -> &BTreeSet<IdentityKey> {
        &self.invitees
    }

    pub fn invitee_count(&self) -> usize {
        self.invitees.len()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct InviteFlowState {
    pub place: Option<Place>,
    pub tab: InviteTab,
    pub friends: Vec<User>,
    pub mutuals: Vec<User>,
    pub selection: InviteSelection,
}

impl ViewState for InviteFlowState {}

impl InviteFlowState {
    pub fn visible_candidates(&self) -> &[User] {
        match self.tab {
            InviteTab::Friends => &self.friends,
            InviteTab::Mutuals => &self.mutuals,
        }
    }

    /// Looks the user up across both tabs.
    pub fn candidate(&self, user_id: &IdentityKey) -> Option<&User> {
        self.friends
            .iter()
            .chain(self.mutuals.iter())
            .find(|u| &u.id == user_id)
    }

    /// "Next" is a no-op until someone is selected.
    pub fn proceed(&self) -> Option<InviteHandoff> {
        if !self.selection.can_proceed() {
            return None;
        }
        let place = self.place.clone()?;
        info!(
            place = %place.name,
            invitees = self.selection.len(),
            "invite selection handed off"
        );
        Some(InviteHandoff::new(
            place,
            self.selection.iter().copied().collect(),
        ))
    }
}

#[derive(Debug, Clone)]
pub enum InviteIntent {
    Load { place: Place, people: Vec<User> },
    SelectTab(InviteTab),
    ToggleUser(IdentityKey),
}

impl Intent for InviteIntent {}

pub struct InviteReducer;

impl Reducer for InviteReducer {
    type State = InviteFlowState;
    type Intent = InviteIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            InviteIntent::Load { place, mut people } => {
                let mutuals = people.split_off(FRIENDS_SPLIT.min(people.len()));
                InviteFlowState {
                    place: Some(place),
                    friends: people,
                    mutuals,
                    ..InviteFlowState::default()
                }
            }
            InviteIntent::SelectTab(tab) => InviteFlowState { tab, ..state },
            InviteIntent::ToggleUser(user_id) => {
                let mut selection = state.selection;
                selection.toggle(user_id);
                InviteFlowState { selection, ..state }
            }
        }
    }
}

/// Inviting one person: they are fixed, the place is what gets picked.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlaceSelectionState {
    pub invitee: Option<User>,
    pub places: Vec<Place>,
    pub selected_place: Option<IdentityKey>,
}

impl ViewState for PlaceSelectionState {}

impl PlaceSelectionState {
    pub fn prompt(&self) -> String {
        match &self.invitee {
            Some(user) => format!("Where do you want to meet {}?", user.name),
            None => "Pick a Place".to_string(),
        }
    }

    pub fn place(&self, place_id: &IdentityKey) -> Option<&Place> {
        self.places.iter().find(|p| &p.id == place_id)
    }

    pub fn can_proceed(&self) -> bool {
        self.selected_place.is_some() && self.invitee.is_some()
    }

    pub fn proceed(&self) -> Option<InviteHandoff> {
        let invitee = self.invitee.as_ref()?;
        let place_id = self.selected_place?;
        let place = self.place(&place_id)?.clone();
        info!(place = %place.name, invitee = %invitee.name, "single invite handed off");
        Some(InviteHandoff::new(place, BTreeSet::from([invitee.id])))
    }
}

#[derive(Debug, Clone)]
pub enum PlaceSelectionIntent {
    Load { invitee: User, places: Vec<Place> },
    /// Unknown place ids are ignored.
    SelectPlace(IdentityKey),
}

impl Intent for PlaceSelectionIntent {}

pub struct PlaceSelectionReducer;

impl Reducer for PlaceSelectionReducer {
    type State = PlaceSelectionState;
    type Intent = PlaceSelectionIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PlaceSelectionIntent::Load { invitee, places } => PlaceSelectionState {
                invitee: Some(invitee),
                places,
                selected_place: None,
            },
            PlaceSelectionIntent::SelectPlace(place_id) => {
                if state.places.iter().any(|p| p.id == place_id) {
                    PlaceSelectionState {
                        selected_place: Some(place_id),
                        ..state
                    }
                } else {
                    state
                }
            }
        }
    }
}
