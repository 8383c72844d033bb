mod common;

use crate::common::*;
use luna_core::libs::core::environment::{FeedbackEmitter, SilentFeedback};
use luna_core::libs::core::models::IdentityKey;
use luna_core::libs::state::feed::FeedController;
use std::sync::Arc;

fn flags(controller: &FeedController) -> Vec<bool> {
    controller
        .state()
        .places
        .iter()
        .map(|p| p.is_user_interested)
        .collect()
}

#[test]
fn toggle_flips_only_the_matching_place() {
    let feedback = Arc::new(CountingFeedback::default());
    let mut feed = FeedController::new(&mock_provider(), feedback.clone());
    let target = feed.state().places[1].id;

    assert_eq!(feed.toggle_interest(&target), Some(true));
    assert_eq!(flags(&feed), vec![false, true, false, false]);
    assert_eq!(feedback.pulses(), 1);
}

#[test]
fn double_toggle_restores_every_place() {
    let feedback = Arc::new(CountingFeedback::default());
    let mut feed = FeedController::new(&mock_provider(), feedback.clone());

    for index in 0..4 {
        let before = feed.state().clone();
        let target = feed.state().places[index].id;
        feed.toggle_interest(&target);
        feed.toggle_interest(&target);
        assert_eq!(feed.state(), &before);
    }
    assert_eq!(feedback.pulses(), 8);
}

#[test]
fn unknown_place_changes_nothing_and_stays_quiet() {
    let feedback = Arc::new(CountingFeedback::default());
    let mut feed = FeedController::new(&mock_provider(), feedback.clone());
    let before = feed.state().clone();

    assert_eq!(feed.toggle_interest(&IdentityKey::generate()), None);
    assert_eq!(feed.state(), &before);
    assert_eq!(feedback.pulses(), 0);
}

#[test]
fn revisiting_the_feed_starts_over() {
    let provider = mock_provider();
    let mut feed = FeedController::new(&provider, Arc::new(SilentFeedback));
    let target = feed.state().places[0].id;
    assert_eq!(feed.toggle_interest(&target), Some(true));

    let again = FeedController::new(&provider, Arc::new(SilentFeedback));
    assert!(again.state().places.iter().all(|p| !p.is_user_interested));
}

#[test]
fn applying_a_toggle_leaves_the_pulse_to_the_caller() {
    let feedback = Arc::new(CountingFeedback::default());
    let mut feed = FeedController::new(&mock_provider(), feedback.clone());
    let target = feed.state().places[2].id;

    assert_eq!(feed.apply_toggle(&target), Some(true));
    assert_eq!(feedback.pulses(), 0);
    feed.feedback().impact();
    assert_eq!(feedback.pulses(), 1);
}
