use std::fmt;
use std::path::PathBuf;
use uuid::Uuid;

pub const IDENTITY_KEY_SIZE: usize = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IdentityKey {
    pub uuid: Uuid,
}

impl IdentityKey {
    /// Fresh, time-ordered identity. Unique within a run.
    pub fn generate() -> Self {
        Self {
            uuid: Uuid::now_v7(),
        }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.uuid.as_bytes().to_vec()
    }
}

impl From<[u8; IDENTITY_KEY_SIZE]> for IdentityKey {
    fn from(bytes: [u8; IDENTITY_KEY_SIZE]) -> IdentityKey {
        Self {
            uuid: Uuid::from_bytes(bytes),
        }
    }
}

impl TryFrom<&[u8]> for IdentityKey {
    type Error = crate::LunaError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let array: [u8; IDENTITY_KEY_SIZE] =
            bytes
                .try_into()
                .map_err(|_| crate::LunaError::InvalidIdentity {
                    expected: IDENTITY_KEY_SIZE as u32,
                    found: bytes.len() as u32,
                })?;
        Ok(IdentityKey::from(array))
    }
}

impl fmt::Display for IdentityKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.uuid)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RelationshipKind {
    Friend,
    Mutual,
    Stranger,
}

#[derive(Clone, Debug, PartialEq)]
pub struct User {
    pub id: IdentityKey,
    pub name: String,
    pub handle: String,
    pub avatar: String,
    pub relationship: RelationshipKind,
    pub bio: String,
    pub friends_count: u32,
    pub plans_count: u32,
    pub saved_count: u32,
    pub meets_count: u32,
    pub rating: f64,
    pub university: String,
    pub interests: Vec<String>,
}

impl User {
    /// A user with the profile defaults: no handle or bio, zeroed counters
    /// and the generic "University" affiliation.
    pub fn new(name: &str, avatar: &str, relationship: RelationshipKind) -> Self {
        Self {
            id: IdentityKey::generate(),
            name: name.to_string(),
            handle: String::new(),
            avatar: avatar.to_string(),
            relationship,
            bio: String::new(),
            friends_count: 0,
            plans_count: 0,
            saved_count: 0,
            meets_count: 0,
            rating: 0.0,
            university: "University".to_string(),
            interests: Vec::new(),
        }
    }

    pub fn with_handle(mut self, handle: &str) -> Self {
        self.handle = handle.to_string();
        self
    }

    pub fn with_bio(mut self, bio: &str) -> Self {
        self.bio = bio.to_string();
        self
    }

    pub fn with_university(mut self, university: &str) -> Self {
        self.university = university.to_string();
        self
    }

    pub fn with_interests(mut self, interests: &[&str]) -> Self {
        self.interests = interests.iter().map(|i| i.to_string()).collect();
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Place {
    pub id: IdentityKey,
    pub name: String,
    pub location: String,
    pub icon: String,
    // Not deduplicated: adding the same user twice lists them twice.
    pub interested_users: Vec<User>,
    pub is_user_interested: bool,
}

/// What the "friends going" footer of a place card shows.
#[derive(Clone, Debug, PartialEq)]
pub enum SocialProof<'a> {
    Trendsetter,
    Going { visible: &'a [User], overflow: usize },
}

impl Place {
    pub fn new(name: &str, location: &str, icon: &str, interested_users: Vec<User>) -> Self {
        Self {
            id: IdentityKey::generate(),
            name: name.to_string(),
            location: location.to_string(),
            icon: icon.to_string(),
            interested_users,
            is_user_interested: false,
        }
    }

    pub fn add_interested(&mut self, user: User) {
        self.interested_users.push(user);
    }

    pub fn social_proof(&self, limit: usize) -> SocialProof<'_> {
        if self.interested_users.is_empty() {
            return SocialProof::Trendsetter;
        }
        let shown = self.interested_users.len().min(limit);
        SocialProof::Going {
            visible: &self.interested_users[..shown],
            overflow: self.interested_users.len() - shown,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MediaRef {
    Bundled(PathBuf),
    Placeholder(String),
}

impl MediaRef {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, MediaRef::Placeholder(_))
    }

    pub fn to_uri(&self) -> String {
        match self {
            MediaRef::Bundled(path) => format!("file://{}", path.display()),
            MediaRef::Placeholder(url) => url.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Reel {
    pub id: IdentityKey,
    pub media: MediaRef,
    pub poster: User,
    pub place: Place,
    pub description: String,
    pub likes: u32,
    pub comments: u32,
    pub is_liked: bool,
}

impl Reel {
    pub fn new(
        media: MediaRef,
        poster: User,
        place: Place,
        description: &str,
        likes: u32,
        comments: u32,
    ) -> Self {
        Self {
            id: IdentityKey::generate(),
            media,
            poster,
            place,
            description: description.to_string(),
            likes,
            comments,
            is_liked: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvitationStatus {
    Pending,
    Accepted,
    Declined,
}

impl fmt::Display for InvitationStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InvitationStatus::Pending => write!(f, "Pending"),
            InvitationStatus::Accepted => write!(f, "Accepted"),
            InvitationStatus::Declined => write!(f, "Declined"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Invitation {
    pub id: IdentityKey,
    pub user: User,
    pub place_name: String,
    pub sent_ago: String,
    pub status: InvitationStatus,
}

impl Invitation {
    pub fn new(user: User, place_name: &str, sent_ago: &str, status: InvitationStatus) -> Self {
        Self {
            id: IdentityKey::generate(),
            user,
            place_name: place_name.to_string(),
            sent_ago: sent_ago.to_string(),
            status,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct InvitationInbox {
    pub received: Vec<Invitation>,
    pub sent: Vec<Invitation>,
}
