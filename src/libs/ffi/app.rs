use crate::libs::config::AppConfig;
use crate::libs::core::environment::{BundleAssetResolver, FeedbackEmitter};
use crate::libs::ffi::models::{InvitationInbox, Place, Reel, TimeSlot, User};
use crate::libs::ffi::screens::{
    CompletionListener, FeedScreen, ForeignFeedback, HapticFeedback, InvitationsScreen,
    NavigationScreen, PeopleScreen, ProfileScreen, ReelsScreen, SplashScreen,
};
use crate::libs::logging::init_tracing;
use crate::libs::provider::{DataProvider, MockDataProvider};
use crate::libs::state::scheduling::SUGGESTED_TIME_SLOTS;
use crate::libs::state::splash::SplashController;
use crate::LunaError;
use once_cell::sync::OnceCell;
use std::path::Path;
use std::sync::Arc;
use tokio::runtime::{Builder, Handle, Runtime};
use tracing::info;

static RUNTIME: OnceCell<Runtime> = OnceCell::new();

fn timer_runtime() -> Result<Handle, LunaError> {
    RUNTIME
        .get_or_try_init(|| {
            Builder::new_multi_thread()
                .worker_threads(1)
                .thread_name("luna-timers")
                .enable_time()
                .build()
        })
        .map(|runtime| runtime.handle().clone())
        .map_err(|e| LunaError::Runtime {
            message: e.to_string(),
        })
}

/// Entry point for the front end. One per app launch; screens are built from it.
#[derive(uniffi::Object)]
pub struct LunaApp {
    config: AppConfig,
    provider: Arc<dyn DataProvider>,
    feedback: Arc<dyn FeedbackEmitter>,
    runtime: Handle,
}

#[uniffi::export]
impl LunaApp {
    #[uniffi::constructor]
    pub fn new(
        config_path: Option<String>,
        haptics: Arc<dyn HapticFeedback>,
    ) -> Result<Arc<Self>, LunaError> {
        init_tracing();
        let config = match config_path {
            Some(path) => AppConfig::load(Path::new(&path))?,
            None => AppConfig::default(),
        };
        let assets = Arc::new(BundleAssetResolver::from_config(&config));
        info!(asset_dir = ?config.asset_dir, "luna core ready");
        Ok(Arc::new(Self {
            provider: Arc::new(MockDataProvider::new(assets)),
            feedback: Arc::new(ForeignFeedback(haptics)),
            runtime: timer_runtime()?,
            config,
        }))
    }

    pub fn current_user(&self) -> User {
        User::from(&self.provider.get_current_user())
    }

    pub fn places(&self) -> Vec<Place> {
        self.provider.get_places().iter().map(Place::from).collect()
    }

    pub fn reels(&self) -> Vec<Reel> {
        self.provider.get_reels().iter().map(Reel::from).collect()
    }

    pub fn people(&self) -> Vec<User> {
        self.provider.get_people().iter().map(User::from).collect()
    }

    pub fn invitations(&self) -> InvitationInbox {
        InvitationInbox::from(&self.provider.get_invitations())
    }

    pub fn suggested_time_slots(&self) -> Vec<TimeSlot> {
        SUGGESTED_TIME_SLOTS.iter().map(TimeSlot::from).collect()
    }

    pub fn avatar_stack_limit(&self) -> u32 {
        self.config.avatar_stack_limit
    }

    pub fn feed_screen(&self) -> Arc<FeedScreen> {
        Arc::new(FeedScreen::new(
            Arc::clone(&self.provider),
            Arc::clone(&self.feedback),
            self.runtime.clone(),
            self.config.invite_confirmation_delay(),
            self.config.avatar_stack_limit,
        ))
    }

    pub fn people_screen(&self) -> Arc<PeopleScreen> {
        Arc::new(PeopleScreen::new(
            Arc::clone(&self.provider),
            self.runtime.clone(),
            self.config.invite_confirmation_delay(),
        ))
    }

    pub fn navigation(&self) -> Arc<NavigationScreen> {
        Arc::new(NavigationScreen::new())
    }

    pub fn profile_screen(&self) -> Arc<ProfileScreen> {
        Arc::new(ProfileScreen::new(self.provider.as_ref()))
    }

    pub fn reels_screen(&self) -> Arc<ReelsScreen> {
        Arc::new(ReelsScreen::new(self.provider.as_ref()))
    }

    pub fn invitations_screen(&self) -> Arc<InvitationsScreen> {
        Arc::new(InvitationsScreen::new(self.provider.as_ref()))
    }

    pub fn splash_screen(&self, listener: Arc<dyn CompletionListener>) -> Arc<SplashScreen> {
        let controller = SplashController::start(
            &self.runtime,
            self.config.splash_display(),
            self.config.splash_fade(),
            move || listener.on_complete(),
        );
        Arc::new(SplashScreen::new(controller))
    }
}
