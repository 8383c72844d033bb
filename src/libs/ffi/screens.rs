use crate::libs::core::environment::FeedbackEmitter;
use crate::libs::core::models::{self as domain, IdentityKey};
use crate::libs::ffi::models::{
    Invitation, InvitationInbox, InviteTab, MainTab, Place, Reel, SocialProof, User,
};
use crate::libs::provider::DataProvider;
use crate::libs::state::feed::FeedController;
use crate::libs::state::invitations::{InvitationsIntent, InvitationsReducer, InvitationsState};
use crate::libs::state::invite::{
    InviteFlowState, InviteHandoff, InviteIntent, InviteReducer, PlaceSelectionIntent,
    PlaceSelectionReducer, PlaceSelectionState,
};
use crate::libs::state::navigation::{
    self, NavigationIntent, NavigationReducer, NavigationState, ProfileIntent, ProfileReducer,
    ProfileState,
};
use crate::libs::state::reels::{ReelsIntent, ReelsReducer, ReelsState};
use crate::libs::state::scheduling::{ScheduleChoice, SchedulingController};
use crate::libs::state::splash::{SplashController, SplashPhase};
use crate::libs::state::Reducer;
use crate::LunaError;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use tokio::runtime::Handle;

#[uniffi::export(with_foreign)]
pub trait HapticFeedback: Send + Sync {
    fn impact_occurred(&self);
}

#[uniffi::export(with_foreign)]
pub trait CompletionListener: Send + Sync {
    fn on_complete(&self);
}

pub(crate) struct ForeignFeedback(pub(crate) Arc<dyn HapticFeedback>);

impl FeedbackEmitter for ForeignFeedback {
    fn impact(&self) {
        self.0.impact_occurred();
    }
}

/// Reducer state behind a lock, for screens shared with the foreign side.
struct Store<R: Reducer> {
    state: Mutex<R::State>,
}

impl<R: Reducer> Store<R> {
    fn new(state: R::State) -> Self {
        Self {
            state: Mutex::new(state),
        }
    }

    fn dispatch(&self, intent: R::Intent) {
        let mut guard = self.state.lock();
        let state = std::mem::take(&mut *guard);
        *guard = R::reduce(state, intent);
    }

    /// Checks the id, reduces and reads back under a single guard.
    fn dispatch_known<T>(
        &self,
        kind: &str,
        id: &IdentityKey,
        known: impl FnOnce(&R::State) -> bool,
        intent: R::Intent,
        read: impl FnOnce(&R::State) -> T,
    ) -> Result<T, LunaError> {
        let mut guard = self.state.lock();
        if !known(&guard) {
            return Err(unknown(kind, id));
        }
        let state = std::mem::take(&mut *guard);
        *guard = R::reduce(state, intent);
        Ok(read(&guard))
    }

    fn read<T>(&self, f: impl FnOnce(&R::State) -> T) -> T {
        f(&self.state.lock())
    }
}

fn identity(bytes: &[u8]) -> Result<IdentityKey, LunaError> {
    IdentityKey::try_from(bytes)
}

fn unknown(kind: &str, id: &IdentityKey) -> LunaError {
    LunaError::UnknownEntity {
        kind: kind.to_string(),
        id: id.to_string(),
    }
}

#[derive(uniffi::Object)]
pub struct FeedScreen {
    controller: Mutex<FeedController>,
    provider: Arc<dyn DataProvider>,
    runtime: Handle,
    confirmation_delay: Duration,
    avatar_limit: usize,
}

impl FeedScreen {
    pub(crate) fn new(
        provider: Arc<dyn DataProvider>,
        feedback: Arc<dyn FeedbackEmitter>,
        runtime: Handle,
        confirmation_delay: Duration,
        avatar_limit: u32,
    ) -> Self {
        Self {
            controller: Mutex::new(FeedController::new(provider.as_ref(), feedback)),
            provider,
            runtime,
            confirmation_delay,
            avatar_limit: avatar_limit as usize,
        }
    }
}

#[uniffi::export]
impl FeedScreen {
    pub fn places(&self) -> Vec<Place> {
        self.controller
            .lock()
            .state()
            .places
            .iter()
            .map(Place::from)
            .collect()
    }

    pub fn toggle_interest(&self, place_id: Vec<u8>) -> Result<bool, LunaError> {
        let place_id = identity(&place_id)?;
        let (interested, feedback) = {
            let mut controller = self.controller.lock();
            (controller.apply_toggle(&place_id), controller.feedback())
        };
        let interested = interested.ok_or_else(|| unknown("place", &place_id))?;
        // Outside the lock: the host callback may re-enter this screen.
        feedback.impact();
        Ok(interested)
    }

    pub fn social_proof(&self, place_id: Vec<u8>) -> Result<SocialProof, LunaError> {
        let place_id = identity(&place_id)?;
        let controller = self.controller.lock();
        let place = controller
            .state()
            .place(&place_id)
            .ok_or_else(|| unknown("place", &place_id))?;
        let proof = SocialProof::from(place.social_proof(self.avatar_limit));
        Ok(proof)
    }

    pub fn invite_screen(&self, place_id: Vec<u8>) -> Result<Arc<InviteScreen>, LunaError> {
        let place_id = identity(&place_id)?;
        let place = self
            .controller
            .lock()
            .state()
            .place(&place_id)
            .cloned()
            .ok_or_else(|| unknown("place", &place_id))?;
        let state = InviteReducer::reduce(
            InviteFlowState::default(),
            InviteIntent::Load {
                place,
                people: self.provider.get_people(),
            },
        );
        Ok(Arc::new(InviteScreen {
            store: Store::new(state),
            runtime: self.runtime.clone(),
            confirmation_delay: self.confirmation_delay,
        }))
    }
}

#[derive(uniffi::Object)]
pub struct InviteScreen {
    store: Store<InviteReducer>,
    runtime: Handle,
    confirmation_delay: Duration,
}

#[uniffi::export]
impl InviteScreen {
    pub fn selected_tab(&self) -> InviteTab {
        self.store.read(|s| s.tab.into())
    }

    pub fn select_tab(&self, tab: InviteTab) {
        self.store.dispatch(InviteIntent::SelectTab(tab.into()));
    }

    pub fn visible_candidates(&self) -> Vec<User> {
        self.store
            .read(|s| s.visible_candidates().iter().map(User::from).collect())
    }

    pub fn toggle_user(&self, user_id: Vec<u8>) -> Result<bool, LunaError> {
        let user_id = identity(&user_id)?;
        self.store.dispatch_known(
            "user",
            &user_id,
            |s| s.candidate(&user_id).is_some(),
            InviteIntent::ToggleUser(user_id),
            |s| s.selection.is_selected(&user_id),
        )
    }

    pub fn is_selected(&self, user_id: Vec<u8>) -> Result<bool, LunaError> {
        let user_id = identity(&user_id)?;
        self.store.read(|s| match s.candidate(&user_id) {
            Some(_) => Ok(s.selection.is_selected(&user_id)),
            None => Err(unknown("user", &user_id)),
        })
    }

    pub fn can_proceed(&self) -> bool {
        self.store.read(|s| s.selection.can_proceed())
    }

    /// `None` while nobody is selected.
    pub fn proceed(&self) -> Option<Arc<SchedulingScreen>> {
        let handoff = self.store.read(|s| s.proceed())?;
        Some(SchedulingScreen::new(
            handoff,
            self.runtime.clone(),
            self.confirmation_delay,
        ))
    }
}

#[derive(uniffi::Object)]
pub struct PeopleScreen {
    people: Vec<domain::User>,
    provider: Arc<dyn DataProvider>,
    runtime: Handle,
    confirmation_delay: Duration,
}

impl PeopleScreen {
    pub(crate) fn new(
        provider: Arc<dyn DataProvider>,
        runtime: Handle,
        confirmation_delay: Duration,
    ) -> Self {
        Self {
            people: provider.get_people(),
            provider,
            runtime,
            confirmation_delay,
        }
    }
}

#[uniffi::export]
impl PeopleScreen {
    pub fn people(&self) -> Vec<User> {
        self.people.iter().map(User::from).collect()
    }

    /// Starts the "pick a place" flow for inviting one person.
    pub fn place_selection(&self, user_id: Vec<u8>) -> Result<Arc<PlaceSelectionScreen>, LunaError> {
        let user_id = identity(&user_id)?;
        let invitee = self
            .people
            .iter()
            .find(|u| u.id == user_id)
            .cloned()
            .ok_or_else(|| unknown("user", &user_id))?;
        let state = PlaceSelectionReducer::reduce(
            PlaceSelectionState::default(),
            PlaceSelectionIntent::Load {
                invitee,
                places: self.provider.get_places(),
            },
        );
        Ok(Arc::new(PlaceSelectionScreen {
            store: Store::new(state),
            runtime: self.runtime.clone(),
            confirmation_delay: self.confirmation_delay,
        }))
    }
}

#[derive(uniffi::Object)]
pub struct PlaceSelectionScreen {
    store: Store<PlaceSelectionReducer>,
    runtime: Handle,
    confirmation_delay: Duration,
}

#[uniffi::export]
impl PlaceSelectionScreen {
    pub fn prompt(&self) -> String {
        self.store.read(|s| s.prompt())
    }

    pub fn places(&self) -> Vec<Place> {
        self.store.read(|s| s.places.iter().map(Place::from).collect())
    }

    pub fn select_place(&self, place_id: Vec<u8>) -> Result<(), LunaError> {
        let place_id = identity(&place_id)?;
        self.store.dispatch_known(
            "place",
            &place_id,
            |s| s.place(&place_id).is_some(),
            PlaceSelectionIntent::SelectPlace(place_id),
            |_| (),
        )
    }

    pub fn can_proceed(&self) -> bool {
        self.store.read(|s| s.can_proceed())
    }

    /// `None` until a place is picked.
    pub fn proceed(&self) -> Option<Arc<SchedulingScreen>> {
        let handoff = self.store.read(|s| s.proceed())?;
        Some(SchedulingScreen::new(
            handoff,
            self.runtime.clone(),
            self.confirmation_delay,
        ))
    }
}

#[derive(uniffi::Object)]
pub struct SchedulingScreen {
    controller: Mutex<SchedulingController>,
}

impl SchedulingScreen {
    fn new(handoff: InviteHandoff, runtime: Handle, confirmation_delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            controller: Mutex::new(SchedulingController::new(
                handoff,
                runtime,
                confirmation_delay,
            )),
        })
    }
}

#[uniffi::export]
impl SchedulingScreen {
    pub fn headline(&self) -> String {
        self.controller.lock().state().headline()
    }

    pub fn select_slot(&self, index: u32) {
        self.controller.lock().select_slot(index as usize);
    }

    pub fn selected_slot(&self) -> Option<u32> {
        match self.controller.lock().state().choice {
            ScheduleChoice::Suggested(index) => Some(index as u32),
            _ => None,
        }
    }

    pub fn pick_date(&self, date: SystemTime) {
        self.controller.lock().pick_date(DateTime::<Utc>::from(date));
    }

    pub fn manual_date(&self) -> Option<SystemTime> {
        self.controller
            .lock()
            .state()
            .manual_date()
            .map(SystemTime::from)
    }

    pub fn edit_message(&self, message: String) {
        self.controller.lock().edit_message(message);
    }

    pub fn send(&self, listener: Arc<dyn CompletionListener>) -> bool {
        self.controller
            .lock()
            .send(move || listener.on_complete())
    }

    pub fn dismiss(&self) {
        self.controller.lock().dismiss();
    }
}

#[derive(uniffi::Object)]
pub struct SplashScreen {
    controller: SplashController,
}

impl SplashScreen {
    pub(crate) fn new(controller: SplashController) -> Self {
        Self { controller }
    }
}

#[uniffi::export]
impl SplashScreen {
    pub fn is_active(&self) -> bool {
        self.controller.is_active()
    }

    pub fn is_fading_out(&self) -> bool {
        self.controller.phase() == SplashPhase::FadingOut
    }
}

#[derive(uniffi::Object)]
pub struct ReelsScreen {
    store: Store<ReelsReducer>,
}

impl ReelsScreen {
    pub(crate) fn new(provider: &dyn DataProvider) -> Self {
        let state = ReelsReducer::reduce(
            ReelsState::default(),
            ReelsIntent::Load {
                reels: provider.get_reels(),
            },
        );
        Self {
            store: Store::new(state),
        }
    }
}

#[uniffi::export]
impl ReelsScreen {
    pub fn reels(&self) -> Vec<Reel> {
        self.store.read(|s| s.reels.iter().map(Reel::from).collect())
    }

    pub fn current_index(&self) -> u32 {
        self.store.read(|s| s.current_index as u32)
    }

    pub fn show_index(&self, index: u32) {
        self.store.dispatch(ReelsIntent::ShowIndex(index as usize));
    }

    pub fn is_ui_hidden(&self) -> bool {
        self.store.read(|s| s.ui_hidden)
    }

    pub fn toggle_ui(&self) {
        self.store.dispatch(ReelsIntent::ToggleUi);
    }

    pub fn is_muted(&self) -> bool {
        self.store.read(|s| s.muted)
    }

    pub fn toggle_mute(&self) {
        self.store.dispatch(ReelsIntent::ToggleMute);
    }

    pub fn toggle_like(&self, reel_id: Vec<u8>) -> Result<(), LunaError> {
        let reel_id = identity(&reel_id)?;
        self.store.dispatch_known(
            "reel",
            &reel_id,
            |s| s.reel(&reel_id).is_some(),
            ReelsIntent::ToggleLike(reel_id),
            |_| (),
        )
    }
}

#[derive(uniffi::Object)]
pub struct InvitationsScreen {
    store: Store<InvitationsReducer>,
}

impl InvitationsScreen {
    pub(crate) fn new(provider: &dyn DataProvider) -> Self {
        let state = InvitationsReducer::reduce(
            InvitationsState::default(),
            InvitationsIntent::Load {
                inbox: provider.get_invitations(),
            },
        );
        Self {
            store: Store::new(state),
        }
    }
}

#[uniffi::export]
impl InvitationsScreen {
    pub fn search(&self, text: String) {
        self.store.dispatch(InvitationsIntent::Search(text));
    }

    /// Received and sent invitations matching the current search text.
    pub fn visible(&self) -> InvitationInbox {
        self.store.read(|s| InvitationInbox {
            received: s.visible_received().into_iter().map(Invitation::from).collect(),
            sent: s.visible_sent().into_iter().map(Invitation::from).collect(),
        })
    }

    pub fn respond(&self, invitation_id: Vec<u8>, accept: bool) -> Result<(), LunaError> {
        let invitation_id = identity(&invitation_id)?;
        self.store.dispatch_known(
            "invitation",
            &invitation_id,
            |s| s.received(&invitation_id).is_some(),
            InvitationsIntent::Respond {
                invitation_id,
                accept,
            },
            |_| (),
        )
    }
}

#[derive(uniffi::Object)]
pub struct NavigationScreen {
    store: Store<NavigationReducer>,
}

impl NavigationScreen {
    pub(crate) fn new() -> Self {
        Self {
            store: Store::new(NavigationState::default()),
        }
    }
}

#[uniffi::export]
impl NavigationScreen {
    pub fn active_tab(&self) -> MainTab {
        self.store.read(|s| s.active.into())
    }

    pub fn select(&self, tab: MainTab) {
        self.store.dispatch(NavigationIntent::Select(tab.into()));
    }

    pub fn icon(&self, tab: MainTab) -> String {
        self.store.read(|s| {
            let tab = navigation::MainTab::from(tab);
            tab.icon(s.is_selected(tab)).to_string()
        })
    }
}

#[derive(uniffi::Object)]
pub struct ProfileScreen {
    store: Store<ProfileReducer>,
}

impl ProfileScreen {
    pub(crate) fn new(provider: &dyn DataProvider) -> Self {
        let state = ProfileReducer::reduce(
            ProfileState::default(),
            ProfileIntent::Load {
                user: provider.get_current_user(),
            },
        );
        Self {
            store: Store::new(state),
        }
    }
}

#[uniffi::export]
impl ProfileScreen {
    pub fn user(&self) -> Option<User> {
        self.store.read(|s| s.user.as_ref().map(User::from))
    }

    pub fn selected_tab(&self) -> u32 {
        self.store.read(|s| s.tab.index())
    }

    pub fn select_tab(&self, index: u32) {
        self.store.dispatch(ProfileIntent::SelectTab { index });
    }
}
