use crate::libs::core::environment::AssetResolver;
use crate::libs::core::models::{
    Invitation, InvitationInbox, InvitationStatus, Place, Reel, RelationshipKind, User,
};
use std::sync::Arc;
use tracing::debug;

const AVATAR_OCEAN: &str = "beautiful-woman-looking-out-ocean-round-window";
const AVATAR_VIBRANT: &str = "vibrant-portrait-person-bright-environment";
const AVATAR_ANDROGYNOUS: &str = "androgynous-avatar-non-binary-queer-person";

/// Stand-in for a backend. Every call builds a fresh collection.
pub trait DataProvider: Send + Sync {
    fn get_current_user(&self) -> User;
    fn get_places(&self) -> Vec<Place>;
    fn get_reels(&self) -> Vec<Reel>;
    fn get_people(&self) -> Vec<User>;
    fn get_invitations(&self) -> InvitationInbox;
}

pub struct MockDataProvider {
    assets: Arc<dyn AssetResolver>,
}

struct SampleUsers {
    sarah: User,
    mike: User,
    jessica: User,
    tom: User,
}

impl SampleUsers {
    fn new() -> Self {
        Self {
            sarah: User::new("Sarah", AVATAR_OCEAN, RelationshipKind::Friend).with_handle("@sarah_j"),
            mike: User::new("Mike", AVATAR_VIBRANT, RelationshipKind::Mutual)
                .with_handle("@mike_moves"),
            jessica: User::new("Jessica", AVATAR_ANDROGYNOUS, RelationshipKind::Friend)
                .with_handle("@jess_codes"),
            tom: User::new("Tom", AVATAR_VIBRANT, RelationshipKind::Stranger)
                .with_handle("@tom_travels"),
        }
    }
}

impl MockDataProvider {
    pub fn new(assets: Arc<dyn AssetResolver>) -> Self {
        Self { assets }
    }
}

impl DataProvider for MockDataProvider {
    fn get_current_user(&self) -> User {
        let mut me = User::new("Sarah Jenkins", AVATAR_OCEAN, RelationshipKind::Friend)
            .with_handle("@sarah_j")
            .with_bio("Adventure seeker 🌍 | Coffee enthusiast ☕️ | Always down for a plan 📅");
        me.friends_count = 1240;
        me.plans_count = 45;
        me.saved_count = 12;
        me.meets_count = 28;
        me.rating = 4.9;
        me
    }

    fn get_places(&self) -> Vec<Place> {
        let u = SampleUsers::new();
        vec![
            Place::new(
                "The Blue Note",
                "Greenwich Village • 0.4 mi",
                "music.mic",
                vec![u.sarah.clone(), u.mike.clone(), u.tom.clone()],
            ),
            Place::new(
                "Central Rock Gym",
                "Manhattan • 1.2 mi",
                "figure.climbing",
                vec![u.jessica.clone(), u.sarah.clone()],
            ),
            Place::new("Hidden Ramen", "Brooklyn • 3.5 mi", "fork.knife", Vec::new()),
            Place::new(
                "Rooftop Cinema",
                "Seaport • 0.8 mi",
                "popcorn.fill",
                vec![u.mike, u.jessica, u.tom, u.sarah],
            ),
        ]
    }

    fn get_reels(&self) -> Vec<Reel> {
        let u = SampleUsers::new();
        let blue_note = Place::new(
            "The Blue Note",
            "Greenwich Village",
            "music.mic",
            vec![u.sarah.clone(), u.mike.clone()],
        );
        let rock_gym = Place::new(
            "Central Rock Gym",
            "Manhattan",
            "figure.climbing",
            vec![u.jessica.clone()],
        );
        let ramen = Place::new("Hidden Ramen", "Brooklyn", "fork.knife", Vec::new());
        let cinema = Place::new(
            "Rooftop Cinema",
            "Seaport",
            "popcorn.fill",
            vec![u.mike.clone(), u.tom.clone()],
        );

        let reels = vec![
            Reel::new(
                self.assets.resolve("5585336-uhd_2160_4096_25fps"),
                u.sarah.clone(),
                blue_note.clone(),
                "Jazz night vibes 🎷",
                124,
                12,
            ),
            Reel::new(
                self.assets.resolve("6602215-hd_1080_1920_30fps"),
                u.mike,
                rock_gym,
                "Crushing the V5 project! 💪",
                89,
                5,
            ),
            Reel::new(
                self.assets.resolve("7339414-uhd_2160_4096_25fps"),
                u.jessica,
                ramen,
                "Best ramen in town 🍜",
                256,
                34,
            ),
            Reel::new(
                self.assets.resolve("8164420-uhd_2160_4096_25fps"),
                u.tom,
                cinema,
                "Movie night under the stars ✨",
                45,
                2,
            ),
            Reel::new(
                self.assets.resolve("13736702-uhd_2160_3840_24fps"),
                u.sarah,
                blue_note,
                "Encore! 👏",
                312,
                45,
            ),
        ];
        debug!(
            placeholders = reels.iter().filter(|r| r.media.is_placeholder()).count(),
            "built reels"
        );
        reels
    }

    fn get_people(&self) -> Vec<User> {
        vec![
            User::new("Julia", AVATAR_OCEAN, RelationshipKind::Stranger)
                .with_handle("@julia_styles")
                .with_bio("I enjoy classical concerts, auctions, pickleball, baseball...")
                .with_university("Northeastern")
                .with_interests(&["Concerts", "Auctions", "Pickleball"]),
            User::new("Liam", AVATAR_VIBRANT, RelationshipKind::Stranger)
                .with_handle("@liam_lens")
                .with_bio("Photography enthusiast capturing life one frame at a time. 📸")
                .with_university("NYU")
                .with_interests(&["Photography", "Travel", "Coffee"]),
            User::new("Sophia", AVATAR_ANDROGYNOUS, RelationshipKind::Stranger)
                .with_handle("@sophia_art")
                .with_bio("Art student living in colors. Let's visit a gallery! 🎨")
                .with_university("Parsons")
                .with_interests(&["Art", "Design", "Fashion"]),
            User::new("Ethan", AVATAR_VIBRANT, RelationshipKind::Stranger)
                .with_handle("@ethan_eats")
                .with_bio("Foodie on a mission to find the best burger in NYC. 🍔")
                .with_university("Columbia")
                .with_interests(&["Food", "Cooking", "Hiking"]),
        ]
    }

    fn get_invitations(&self) -> InvitationInbox {
        let mike = User::new("Mike", AVATAR_VIBRANT, RelationshipKind::Mutual);
        let sarah = User::new("Sarah", AVATAR_OCEAN, RelationshipKind::Friend);
        let jessica = User::new("Jessica", AVATAR_ANDROGYNOUS, RelationshipKind::Friend);
        let tom = User::new("Tom", AVATAR_VIBRANT, RelationshipKind::Stranger);

        InvitationInbox {
            received: vec![
                Invitation::new(mike, "Central Rock Gym", "1h ago", InvitationStatus::Pending),
                Invitation::new(sarah, "The Blue Note", "2h ago", InvitationStatus::Pending),
            ],
            sent: vec![
                Invitation::new(jessica, "Hidden Ramen", "", InvitationStatus::Pending),
                Invitation::new(tom, "Rooftop Cinema", "", InvitationStatus::Accepted),
            ],
        }
    }
}
