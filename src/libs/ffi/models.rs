// Rust models for the types the Swift front end renders

use crate::libs::core::models as domain;
use crate::libs::state::navigation;
use crate::libs::state::scheduling;

#[derive(Clone, Copy, Hash, Eq, PartialEq, uniffi::Enum, Debug)]
pub enum Relationship {
    Friend,
    Mutual,
    Stranger,
}

#[derive(Clone, PartialEq, uniffi::Record, Debug)]
pub struct User {
    pub user_id: Vec<u8>,
    pub name: String,
    pub handle: String,
    pub avatar: String,
    pub relationship: Relationship,
    pub bio: String,
    pub friends_count: u32,
    pub plans_count: u32,
    pub saved_count: u32,
    pub meets_count: u32,
    pub rating: f64,
    pub university: String,
    pub interests: Vec<String>,
}

#[derive(Clone, PartialEq, uniffi::Record, Debug)]
pub struct Place {
    pub place_id: Vec<u8>,
    pub name: String,
    pub location: String,
    pub icon: String,
    pub interested_users: Vec<User>,
    pub is_user_interested: bool,
}

/// Footer of a place card: who is going, capped to the avatar stack size.
#[derive(Clone, PartialEq, uniffi::Enum, Debug)]
pub enum SocialProof {
    Trendsetter,
    Going { visible: Vec<User>, overflow: u32 },
}

#[derive(Clone, PartialEq, uniffi::Record, Debug)]
pub struct Reel {
    pub reel_id: Vec<u8>,
    pub media_url: String,
    pub is_placeholder_media: bool,
    pub poster: User,
    pub place: Place,
    pub description: String,
    pub likes: u32,
    pub comments: u32,
    pub is_liked: bool,
}

#[derive(Clone, Copy, Eq, PartialEq, uniffi::Enum, Debug)]
pub enum InvitationStatus {
    Pending,
    Accepted,
    Declined,
}

#[derive(Clone, PartialEq, uniffi::Record, Debug)]
pub struct Invitation {
    pub invitation_id: Vec<u8>,
    pub user: User,
    pub place_name: String,
    pub sent_ago: String,
    pub status: InvitationStatus,
}

#[derive(Clone, PartialEq, uniffi::Record, Debug)]
pub struct InvitationInbox {
    pub received: Vec<Invitation>,
    pub sent: Vec<Invitation>,
}

#[derive(Clone, PartialEq, uniffi::Record, Debug)]
pub struct TimeSlot {
    pub time: String,
    pub label: String,
    pub is_best: bool,
}

#[derive(Clone, Copy, Eq, PartialEq, uniffi::Enum, Debug)]
pub enum InviteTab {
    Friends,
    Mutuals,
}

#[derive(Clone, Copy, Eq, PartialEq, uniffi::Enum, Debug)]
pub enum MainTab {
    Home,
    People,
    Messages,
    Profile,
}

impl From<domain::RelationshipKind> for Relationship {
    fn from(kind: domain::RelationshipKind) -> Self {
        match kind {
            domain::RelationshipKind::Friend => Relationship::Friend,
            domain::RelationshipKind::Mutual => Relationship::Mutual,
            domain::RelationshipKind::Stranger => Relationship::Stranger,
        }
    }
}

impl From<&domain::User> for User {
    fn from(user: &domain::User) -> Self {
        Self {
            user_id: user.id.to_bytes(),
            name: user.name.clone(),
            handle: user.handle.clone(),
            avatar: user.avatar.clone(),
            relationship: user.relationship.into(),
            bio: user.bio.clone(),
            friends_count: user.friends_count,
            plans_count: user.plans_count,
            saved_count: user.saved_count,
            meets_count: user.meets_count,
            rating: user.rating,
            university: user.university.clone(),
            interests: user.interests.clone(),
        }
    }
}

impl From<&domain::Place> for Place {
    fn from(place: &domain::Place) -> Self {
        Self {
            place_id: place.id.to_bytes(),
            name: place.name.clone(),
            location: place.location.clone(),
            icon: place.icon.clone(),
            interested_users: place.interested_users.iter().map(User::from).collect(),
            is_user_interested: place.is_user_interested,
        }
    }
}

impl From<domain::SocialProof<'_>> for SocialProof {
    fn from(proof: domain::SocialProof<'_>) -> Self {
        match proof {
            domain::SocialProof::Trendsetter => SocialProof::Trendsetter,
            domain::SocialProof::Going { visible, overflow } => SocialProof::Going {
                visible: visible.iter().map(User::from).collect(),
                overflow: u32::try_from(overflow).unwrap_or(u32::MAX),
            },
        }
    }
}

impl From<&domain::Reel> for Reel {
    fn from(reel: &domain::Reel) -> Self {
        Self {
            reel_id: reel.id.to_bytes(),
            media_url: reel.media.to_uri(),
            is_placeholder_media: reel.media.is_placeholder(),
            poster: User::from(&reel.poster),
            place: Place::from(&reel.place),
            description: reel.description.clone(),
            likes: reel.likes,
            comments: reel.comments,
            is_liked: reel.is_liked,
        }
    }
}

impl From<domain::InvitationStatus> for InvitationStatus {
    fn from(status: domain::InvitationStatus) -> Self {
        match status {
            domain::InvitationStatus::Pending => InvitationStatus::Pending,
            domain::InvitationStatus::Accepted => InvitationStatus::Accepted,
            domain::InvitationStatus::Declined => InvitationStatus::Declined,
        }
    }
}

impl From<&domain::Invitation> for Invitation {
    fn from(invitation: &domain::Invitation) -> Self {
        Self {
            invitation_id: invitation.id.to_bytes(),
            user: User::from(&invitation.user),
            place_name: invitation.place_name.clone(),
            sent_ago: invitation.sent_ago.clone(),
            status: invitation.status.into(),
        }
    }
}

impl From<&domain::InvitationInbox> for InvitationInbox {
    fn from(inbox: &domain::InvitationInbox) -> Self {
        Self {
            received: inbox.received.iter().map(Invitation::from).collect(),
            sent: inbox.sent.iter().map(Invitation::from).collect(),
        }
    }
}

impl From<&scheduling::TimeSlot> for TimeSlot {
    fn from(slot: &scheduling::TimeSlot) -> Self {
        Self {
            time: slot.time.to_string(),
            label: slot.label.to_string(),
            is_best: slot.is_best,
        }
    }
}

impl From<InviteTab> for navigation::InviteTab {
    fn from(tab: InviteTab) -> Self {
        match tab {
            InviteTab::Friends => navigation::InviteTab::Friends,
            InviteTab::Mutuals => navigation::InviteTab::Mutuals,
        }
    }
}

impl From<navigation::InviteTab> for InviteTab {
    fn from(tab: navigation::InviteTab) -> Self {
        match tab {
            navigation::InviteTab::Friends => InviteTab::Friends,
            navigation::InviteTab::Mutuals => InviteTab::Mutuals,
        }
    }
}

impl From<MainTab> for navigation::MainTab {
    fn from(tab: MainTab) -> Self {
        match tab {
            MainTab::Home => navigation::MainTab::Home,
            MainTab::People => navigation::MainTab::People,
            MainTab::Messages => navigation::MainTab::Messages,
            MainTab::Profile => navigation::MainTab::Profile,
        }
    }
}

impl From<navigation::MainTab> for MainTab {
    fn from(tab: navigation::MainTab) -> Self {
        match tab {
            navigation::MainTab::Home => MainTab::Home,
            navigation::MainTab::People => MainTab::People,
            navigation::MainTab::Messages => MainTab::Messages,
            navigation::MainTab::Profile => MainTab::Profile,
        }
    }
}
