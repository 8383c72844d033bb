use crate::libs::state::invite::InviteHandoff;
use crate::libs::state::{Intent, Reducer, ViewState};
use crate::libs::timer::ScheduledCallback;
use chrono::{DateTime, Utc};
use std::time::Duration;
use tokio::runtime::Handle;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    pub time: &'static str,
    pub label: &'static str,
    pub is_best: bool,
}

pub static SUGGESTED_TIME_SLOTS: [TimeSlot; 3] = [
    TimeSlot {
        time: "Tomorrow, 7:00 PM",
        label: "Perfect match for everyone",
        is_best: true,
    },
    TimeSlot {
        time: "Friday, 8:00 PM",
        label: "Works for 3/4 people",
        is_best: false,
    },
    TimeSlot {
        time: "Saturday, 1:00 PM",
        label: "Lunch time available",
        is_best: false,
    },
];

/// Suggested slot and manual date are exclusive: whichever was touched last wins.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ScheduleChoice {
    #[default]
    Unset,
    Suggested(usize),
    Manual(DateTime<Utc>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchedulePhase {
    #[default]
    Editing,
    /// Confirmation is showing; the completion callback is pending.
    Sent,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SchedulingState {
    pub handoff: Option<InviteHandoff>,
    pub choice: ScheduleChoice,
    pub message: String,
    pub phase: SchedulePhase,
}

impl ViewState for SchedulingState {}

impl SchedulingState {
    pub fn selected_slot(&self) -> Option<&'static TimeSlot> {
        match self.choice {
            ScheduleChoice::Suggested(index) => SUGGESTED_TIME_SLOTS.get(index),
            _ => None,
        }
    }

    pub fn manual_date(&self) -> Option<DateTime<Utc>> {
        match self.choice {
            ScheduleChoice::Manual(date) => Some(date),
            _ => None,
        }
    }

    pub fn headline(&self) -> String {
        match &self.handoff {
            Some(handoff) => format!(
                "Inviting {} people to {}",
                handoff.invitee_count(),
                handoff.place().name
            ),
            None => "Plan the Details".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum SchedulingIntent {
    Load { handoff: InviteHandoff },
    SelectSlot(usize),
    PickDate(DateTime<Utc>),
    EditMessage(String),
    Send,
}

impl Intent for SchedulingIntent {}

pub struct SchedulingReducer;

impl Reducer for SchedulingReducer {
    type State = SchedulingState;
    type Intent = SchedulingIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        if state.phase == SchedulePhase::Sent {
            return state;
        }
        match intent {
            SchedulingIntent::Load { handoff } => SchedulingState {
                handoff: Some(handoff),
                ..SchedulingState::default()
            },
            SchedulingIntent::SelectSlot(index) if index < SUGGESTED_TIME_SLOTS.len() => {
                SchedulingState {
                    choice: ScheduleChoice::Suggested(index),
                    ..state
                }
            }
            SchedulingIntent::SelectSlot(_) => state,
            SchedulingIntent::PickDate(date) => SchedulingState {
                choice: ScheduleChoice::Manual(date),
                ..state
            },
            SchedulingIntent::EditMessage(message) => SchedulingState { message, ..state },
            SchedulingIntent::Send => SchedulingState {
                phase: SchedulePhase::Sent,
                ..state
            },
        }
    }
}

/// Invite details screen. Owns the pending "sent" callback; dropping the
/// controller cancels it.
pub struct SchedulingController {
    state: SchedulingState,
    runtime: Handle,
    confirmation_delay: Duration,
    pending: Option<ScheduledCallback>,
}

impl SchedulingController {
    pub fn new(handoff: InviteHandoff, runtime: Handle, confirmation_delay: Duration) -> Self {
        let state =
            SchedulingReducer::reduce(SchedulingState::default(), SchedulingIntent::Load { handoff });
        Self {
            state,
            runtime,
            confirmation_delay,
            pending: None,
        }
    }

    pub fn state(&self) -> &SchedulingState {
        &self.state
    }

    pub fn dispatch(&mut self, intent: SchedulingIntent) {
        let state = std::mem::take(&mut self.state);
        self.state = SchedulingReducer::reduce(state, intent);
        debug!(choice = ?self.state.choice, phase = ?self.state.phase, "scheduling updated");
    }

    pub fn select_slot(&mut self, index: usize) {
        self.dispatch(SchedulingIntent::SelectSlot(index));
    }

    pub fn pick_date(&mut self, date: DateTime<Utc>) {
        self.dispatch(SchedulingIntent::PickDate(date));
    }

    pub fn edit_message(&mut self, message: String) {
        self.dispatch(SchedulingIntent::EditMessage(message));
    }

    /// Shows the confirmation and calls `on_complete` after the configured
    /// delay. Nothing is transmitted. Returns false if already sent.
    pub fn send<F>(&mut self, on_complete: F) -> bool
    where
        F: FnOnce() + Send + 'static,
    {
        if self.state.phase == SchedulePhase::Sent {
            return false;
        }
        self.dispatch(SchedulingIntent::Send);
        info!(headline = %self.state.headline(), "invite sent");
        self.pending = Some(ScheduledCallback::after(
            &self.runtime,
            self.confirmation_delay,
            on_complete,
        ));
        true
    }

    /// Cancels a pending completion callback, as on screen teardown.
    pub fn dismiss(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.cancel();
        }
    }
}
