use crate::libs::core::models::User;
use crate::libs::state::{Intent, Reducer, ViewState};

/// Bottom navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MainTab {
    #[default]
    Home,
    People,
    Messages,
    Profile,
}

impl MainTab {
    pub const ALL: [MainTab; 4] = [
        MainTab::Home,
        MainTab::People,
        MainTab::Messages,
        MainTab::Profile,
    ];

    pub fn icon(&self, selected: bool) -> &'static str {
        match (self, selected) {
            (MainTab::Home, false) => "house",
            (MainTab::Home, true) => "house.fill",
            (MainTab::People, false) => "person.2",
            (MainTab::People, true) => "person.2.fill",
            (MainTab::Messages, false) => "message",
            (MainTab::Messages, true) => "message.fill",
            (MainTab::Profile, false) => "person",
            (MainTab::Profile, true) => "person.fill",
        }
    }
}

/// Secondary tabs on the invite screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InviteTab {
    #[default]
    Friends,
    Mutuals,
}

impl InviteTab {
    pub fn title(&self) -> &'static str {
        match self {
            InviteTab::Friends => "Friends",
            InviteTab::Mutuals => "Mutuals",
        }
    }
}

/// Profile content tabs, addressed by index from the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProfileTab {
    #[default]
    Plans,
    Reels,
}

impl ProfileTab {
    pub fn from_index(index: u32) -> Option<Self> {
        match index {
            0 => Some(ProfileTab::Plans),
            1 => Some(ProfileTab::Reels),
            _ => None,
        }
    }

    pub fn index(&self) -> u32 {
        match self {
            ProfileTab::Plans => 0,
            ProfileTab::Reels => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NavigationState {
    pub active: MainTab,
}

impl ViewState for NavigationState {}

impl NavigationState {
    pub fn is_selected(&self, tab: MainTab) -> bool {
        self.active == tab
    }
}

#[derive(Debug, Clone)]
pub enum NavigationIntent {
    Select(MainTab),
}

impl Intent for NavigationIntent {}

pub struct NavigationReducer;

impl Reducer for NavigationReducer {
    type State = NavigationState;
    type Intent = NavigationIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            NavigationIntent::Select(active) => NavigationState { active },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileState {
    pub user: Option<User>,
    pub tab: ProfileTab,
}

impl ViewState for ProfileState {}

#[derive(Debug, Clone)]
pub enum ProfileIntent {
    Load { user: User },
    /// Out-of-range indexes leave the current tab in place.
    SelectTab { index: u32 },
}

impl Intent for ProfileIntent {}

pub struct ProfileReducer;

impl Reducer for ProfileReducer {
    type State = ProfileState;
    type Intent = ProfileIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ProfileIntent::Load { user } => ProfileState {
                user: Some(user),
                tab: ProfileTab::default(),
            },
            ProfileIntent::SelectTab { index } => ProfileState {
                tab: ProfileTab::from_index(index).unwrap_or(state.tab),
                ..state
            },
        }
    }
}
