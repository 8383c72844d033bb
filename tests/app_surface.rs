use luna_core::libs::ffi::app::LunaApp;
use luna_core::libs::ffi::models::{InvitationStatus, InviteTab, MainTab, Relationship, SocialProof};
use luna_core::libs::ffi::screens::{CompletionListener, FeedScreen, HapticFeedback};
use luna_core::LunaError;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[derive(Default)]
struct Taps(AtomicUsize);

impl HapticFeedback for Taps {
    fn impact_occurred(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

impl CompletionListener for Taps {
    fn on_complete(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

/// Haptics that read the feed back while handling the tap.
#[derive(Default)]
struct ReadsFeedOnTap {
    feed: Mutex<Option<Arc<FeedScreen>>>,
    interested_seen: AtomicUsize,
}

impl HapticFeedback for ReadsFeedOnTap {
    fn impact_occurred(&self) {
        let feed = self.feed.lock().clone();
        if let Some(feed) = feed {
            let interested = feed.places().iter().filter(|p| p.is_user_interested).count();
            self.interested_seen.store(interested, Ordering::SeqCst);
        }
    }
}

fn is_unknown<T>(result: Result<T, LunaError>) -> bool {
    matches!(result, Err(LunaError::UnknownEntity { .. }))
}

fn app(haptics: Arc<Taps>) -> Arc<LunaApp> {
    LunaApp::new(None, haptics).expect("default app")
}

#[test]
fn queries_return_fixed_collections() {
    let app = app(Arc::default());
    assert_eq!(app.places().len(), 4);
    assert_eq!(app.reels().len(), 5);
    assert!(app.reels().iter().all(|r| r.is_placeholder_media));
    assert!(app
        .people()
        .iter()
        .all(|u| u.relationship == Relationship::Stranger));
    assert_eq!(app.current_user().handle, "@sarah_j");
    assert_eq!(app.suggested_time_slots().len(), 3);
    assert_eq!(app.avatar_stack_limit(), 4);
    assert_eq!(app.invitations().received.len(), 2);
}

#[test]
fn feed_toggle_pulses_haptics() {
    let haptics = Arc::new(Taps::default());
    let feed = app(Arc::clone(&haptics)).feed_screen();
    let place_id = feed.places()[0].place_id.clone();

    assert!(feed.toggle_interest(place_id.clone()).unwrap());
    assert!(!feed.toggle_interest(place_id).unwrap());
    assert_eq!(haptics.0.load(Ordering::SeqCst), 2);

    let err = feed.toggle_interest(vec![0u8; 16]).unwrap_err();
    assert!(matches!(err, LunaError::UnknownEntity { .. }));
    let err = feed.toggle_interest(vec![1, 2, 3]).unwrap_err();
    assert!(matches!(err, LunaError::InvalidIdentity { expected: 16, found: 3 }));
}

#[test]
fn invite_to_schedule_round_trip() {
    let feed = app(Arc::default()).feed_screen();
    let place_id = feed.places()[3].place_id.clone();
    let invite = feed.invite_screen(place_id).unwrap();

    assert!(!invite.can_proceed());
    assert!(invite.proceed().is_none());

    invite.select_tab(InviteTab::Mutuals);
    assert_eq!(invite.selected_tab(), InviteTab::Mutuals);
    let ethan = invite.visible_candidates()[0].user_id.clone();
    assert!(invite.toggle_user(ethan.clone()).unwrap());
    assert!(!invite.toggle_user(ethan.clone()).unwrap());
    assert!(invite.toggle_user(ethan.clone()).unwrap());
    assert!(invite.is_selected(ethan).unwrap());

    let scheduling = invite.proceed().expect("one invitee");
    assert_eq!(scheduling.headline(), "Inviting 1 people to Rooftop Cinema");
    scheduling.select_slot(0);
    assert_eq!(scheduling.selected_slot(), Some(0));
    scheduling.pick_date(std::time::SystemTime::now());
    assert_eq!(scheduling.selected_slot(), None);
    assert!(scheduling.manual_date().is_some());

    let listener = Arc::new(Taps::default());
    assert!(scheduling.send(listener.clone()));
    scheduling.dismiss();
    std::thread::sleep(Duration::from_millis(50));
    assert_eq!(listener.0.load(Ordering::SeqCst), 0);
}

#[test]
fn reels_and_inbox_screens() {
    let app = app(Arc::default());
    let reels = app.reels_screen();
    let first = reels.reels()[0].clone();
    reels.toggle_like(first.reel_id.clone()).unwrap();
    let liked = &reels.reels()[0];
    assert!(liked.is_liked);
    assert_eq!(liked.likes, first.likes);
    reels.show_index(99);
    assert_eq!(reels.current_index(), 4);

    let inbox = app.invitations_screen();
    inbox.search("blue".to_string());
    let visible = inbox.visible();
    assert_eq!(visible.received.len(), 1);
    assert_eq!(visible.received[0].user.name, "Sarah");
}

#[test]
fn bad_config_path_surfaces_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("luna.toml");
    std::fs::write(&path, "media_extension = \"\"").unwrap();

    let result = LunaApp::new(Some(path.display().to_string()), Arc::new(Taps::default()));
    assert!(matches!(result, Err(LunaError::Config { .. })));
}

#[test]
fn navigation_and_profile_tabs() {
    let app = app(Arc::default());
    let nav = app.navigation();
    assert_eq!(nav.active_tab(), MainTab::Home);
    nav.select(MainTab::Messages);
    assert_eq!(nav.active_tab(), MainTab::Messages);
    assert_eq!(nav.icon(MainTab::Messages), "message.fill");
    assert_eq!(nav.icon(MainTab::Home), "house");

    let profile = app.profile_screen();
    assert_eq!(profile.user().unwrap().name, "Sarah Jenkins");
    assert_eq!(profile.selected_tab(), 0);
    profile.select_tab(1);
    profile.select_tab(5);
    assert_eq!(profile.selected_tab(), 1);
}

#[test]
fn single_person_invite_needs_a_place() {
    let people = app(Arc::default()).people_screen();
    let sophia = people.people()[2].user_id.clone();
    let picking = people.place_selection(sophia).unwrap();
    assert_eq!(picking.prompt(), "Where do you want to meet Sophia?");
    assert!(!picking.can_proceed());
    assert!(picking.proceed().is_none());

    let ramen = picking.places()[2].place_id.clone();
    picking.select_place(ramen).unwrap();
    let scheduling = picking.proceed().expect("place picked");
    assert_eq!(scheduling.headline(), "Inviting 1 people to Hidden Ramen");
}

#[test]
fn haptics_may_read_the_feed_back() {
    let haptics = Arc::new(ReadsFeedOnTap::default());
    let app = LunaApp::new(None, haptics.clone()).expect("default app");
    let feed = app.feed_screen();
    *haptics.feed.lock() = Some(Arc::clone(&feed));

    let place_id = feed.places()[1].place_id.clone();
    assert!(feed.toggle_interest(place_id).unwrap());
    assert_eq!(haptics.interested_seen.load(Ordering::SeqCst), 1);

    haptics.feed.lock().take();
}

#[test]
fn ids_outside_the_screen_are_rejected() {
    let app = app(Arc::default());
    let stranger = vec![0u8; 16];

    let feed = app.feed_screen();
    let invite = feed.invite_screen(feed.places()[0].place_id.clone()).unwrap();
    assert!(is_unknown(invite.toggle_user(stranger.clone())));
    assert!(is_unknown(invite.is_selected(stranger.clone())));
    assert!(!invite.can_proceed());
    assert!(invite.proceed().is_none());

    // Friends stay selectable while the mutuals tab is showing.
    let julia = invite.visible_candidates()[0].user_id.clone();
    invite.select_tab(InviteTab::Mutuals);
    assert!(invite.toggle_user(julia).unwrap());

    let people = app.people_screen();
    let picking = people.place_selection(people.people()[0].user_id.clone()).unwrap();
    assert!(is_unknown(picking.select_place(stranger.clone())));
    assert!(!picking.can_proceed());
    let foreign_place = app.places()[0].place_id.clone();
    assert!(is_unknown(picking.select_place(foreign_place)));

    let reels = app.reels_screen();
    assert!(is_unknown(reels.toggle_like(stranger.clone())));
    assert!(reels.reels().iter().all(|r| !r.is_liked));

    let inbox = app.invitations_screen();
    assert!(is_unknown(inbox.respond(stranger, true)));
    let sent = inbox.visible().sent[0].invitation_id.clone();
    assert!(is_unknown(inbox.respond(sent, false)));
    let received = inbox.visible().received[0].invitation_id.clone();
    inbox.respond(received, true).unwrap();
    assert_eq!(inbox.visible().received[0].status, InvitationStatus::Accepted);
}

#[test]
fn place_cards_cap_the_avatar_stack() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("luna.toml");
    std::fs::write(&path, "avatar_stack_limit = 2").unwrap();
    let app = LunaApp::new(Some(path.display().to_string()), Arc::new(Taps::default())).unwrap();
    assert_eq!(app.avatar_stack_limit(), 2);

    let feed = app.feed_screen();
    let places = feed.places();
    match feed.social_proof(places[0].place_id.clone()).unwrap() {
        SocialProof::Going { visible, overflow } => {
            let names: Vec<_> = visible.iter().map(|u| u.name.as_str()).collect();
            assert_eq!(names, vec!["Sarah", "Mike"]);
            assert_eq!(overflow, 1);
        }
        other => panic!("unexpected {:?}", other),
    }
    assert_eq!(
        feed.social_proof(places[2].place_id.clone()).unwrap(),
        SocialProof::Trendsetter
    );
    assert!(is_unknown(feed.social_proof(vec![0u8; 16])));
}
