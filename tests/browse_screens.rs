mod common;

use crate::common::*;
use luna_core::libs::core::models::InvitationStatus;
use luna_core::libs::provider::DataProvider;
use luna_core::libs::state::invitations::{
    InvitationsIntent, InvitationsReducer, InvitationsState,
};
use luna_core::libs::state::reels::{ReelsIntent, ReelsReducer, ReelsState};
use luna_core::libs::state::Reducer;

fn reels() -> ReelsState {
    ReelsReducer::reduce(
        ReelsState::default(),
        ReelsIntent::Load {
            reels: mock_provider().get_reels(),
        },
    )
}

fn inbox() -> InvitationsState {
    InvitationsReducer::reduce(
        InvitationsState::default(),
        InvitationsIntent::Load {
            inbox: mock_provider().get_invitations(),
        },
    )
}

#[test]
fn liking_a_reel_leaves_the_counter_alone() {
    let state = reels();
    let target = state.reels[0].id;
    let likes = state.reels[0].likes;

    let state = ReelsReducer::reduce(state, ReelsIntent::ToggleLike(target));
    assert!(state.reels[0].is_liked);
    assert_eq!(state.reels[0].likes, likes);
    assert!(state.reels[1..].iter().all(|r| !r.is_liked));

    let state = ReelsReducer::reduce(state, ReelsIntent::ToggleLike(target));
    assert!(!state.reels[0].is_liked);
}

#[test]
fn reel_index_is_clamped() {
    let state = ReelsReducer::reduce(reels(), ReelsIntent::ShowIndex(2));
    assert_eq!(state.current().unwrap().description, "Best ramen in town 🍜");
    let state = ReelsReducer::reduce(state, ReelsIntent::ShowIndex(40));
    assert_eq!(state.current_index, 4);

    let empty = ReelsReducer::reduce(ReelsState::default(), ReelsIntent::ShowIndex(3));
    assert_eq!(empty.current_index, 0);
    assert!(empty.current().is_none());
}

#[test]
fn overlay_and_mute_toggle_independently() {
    let state = ReelsReducer::reduce(reels(), ReelsIntent::ToggleUi);
    assert!(state.ui_hidden);
    assert!(!state.muted);
    let state = ReelsReducer::reduce(state, ReelsIntent::ToggleMute);
    let state = ReelsReducer::reduce(state, ReelsIntent::ToggleUi);
    assert!(!state.ui_hidden);
    assert!(state.muted);
}

#[test]
fn search_matches_people_and_places() {
    let state = InvitationsReducer::reduce(inbox(), InvitationsIntent::Search("ROCK".into()));
    assert_eq!(state.visible_received().len(), 1);
    assert!(state.visible_sent().is_empty());

    let state = InvitationsReducer::reduce(state, InvitationsIntent::Search("tom".into()));
    assert!(state.visible_received().is_empty());
    assert_eq!(state.visible_sent()[0].place_name, "Rooftop Cinema");

    let state = InvitationsReducer::reduce(state, InvitationsIntent::Search("   ".into()));
    assert_eq!(state.visible_received().len(), 2);
    assert_eq!(state.visible_sent().len(), 2);
}

#[test]
fn responding_updates_only_pending_received_invites() {
    let state = inbox();
    let mike = state.inbox.received[0].id;
    let tom_sent = state.inbox.sent[1].id;

    let state = InvitationsReducer::reduce(
        state,
        InvitationsIntent::Respond {
            invitation_id: mike,
            accept: false,
        },
    );
    assert_eq!(state.inbox.received[0].status, InvitationStatus::Declined);

    let state = InvitationsReducer::reduce(
        state,
        InvitationsIntent::Respond {
            invitation_id: mike,
            accept: true,
        },
    );
    assert_eq!(state.inbox.received[0].status, InvitationStatus::Declined);

    let state = InvitationsReducer::reduce(
        state,
        InvitationsIntent::Respond {
            invitation_id: tom_sent,
            accept: false,
        },
    );
    assert_eq!(state.inbox.sent[1].status, InvitationStatus::Accepted);
}
