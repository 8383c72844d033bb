use crate::libs::core::models::{IdentityKey, Invitation, InvitationInbox, InvitationStatus};
use crate::libs::state::{Intent, Reducer, ViewState};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct InvitationsState {
    pub inbox: InvitationInbox,
    pub search_text: String,
}

impl ViewState for InvitationsState {}

impl InvitationsState {
    fn matches(&self, invitation: &Invitation) -> bool {
        let query = self.search_text.trim().to_lowercase();
        query.is_empty()
            || invitation.user.name.to_lowercase().contains(&query)
            || invitation.place_name.to_lowercase().contains(&query)
    }

    pub fn received(&self, invitation_id: &IdentityKey) -> Option<&Invitation> {
        self.inbox.received.iter().find(|i| &i.id == invitation_id)
    }

    pub fn visible_received(&self) -> Vec<&Invitation> {
        self.inbox.received.iter().filter(|i| self.matches(i)).collect()
    }

    pub fn visible_sent(&self) -> Vec<&Invitation> {
        self.inbox.sent.iter().filter(|i| self.matches(i)).collect()
    }
}

#[derive(Debug, Clone)]
pub enum InvitationsIntent {
    Load { inbox: InvitationInbox },
    Search(String),
    /// Only received invitations can be answered. Local to this screen.
    Respond {
        invitation_id: IdentityKey,
        accept: bool,
    },
}

impl Intent for InvitationsIntent {}

pub struct InvitationsReducer;

impl Reducer for InvitationsReducer {
    type State = InvitationsState;
    type Intent = InvitationsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            InvitationsIntent::Load { inbox } => InvitationsState {
                inbox,
                search_text: String::new(),
            },
            InvitationsIntent::Search(search_text) => InvitationsState {
                search_text,
                ..state
            },
            InvitationsIntent::Respond {
                invitation_id,
                accept,
            } => {
                let mut inbox = state.inbox;
                if let Some(invitation) = inbox
                    .received
                    .iter_mut()
                    .find(|i| i.id == invitation_id && i.status == InvitationStatus::Pending)
                {
                    invitation.status = if accept {
                        InvitationStatus::Accepted
                    } else {
                        InvitationStatus::Declined
                    };
                }
                InvitationsState { inbox, ..state }
            }
        }
    }
}
