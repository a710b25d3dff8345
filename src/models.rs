//! Domain models
//!
//! Rust structs representing the entities the store owns: the signed-in
//! user, catalog plants, and community posts. All models use serde so
//! the view layer can serialize them directly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Category a catalog plant belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlantCategory {
    Immunity,
    Digestion,
    Skin,
    Respiratory,
    Stress,
    General,
    /// Projected from a remote community post, not part of the static catalog
    Community,
}

/// Traditional medicine system a plant is documented in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AyushSystem {
    Ayurveda,
    Yoga,
    Unani,
    Siddha,
    Homeopathy,
}

/// Where a plant grows, for the map view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lng: f64,
    pub region: String,
}

/// An entry in the plant catalog.
///
/// `is_liked` and `is_bookmarked` are per-viewer overlays; they are only
/// meaningful while a user is signed in and reset to false on logout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plant {
    pub id: String,
    pub name: String,
    pub botanical_name: String,
    pub description: String,
    pub medicinal_use: String,
    pub category: PlantCategory,
    pub ayush_systems: Vec<AyushSystem>,
    pub image_url: String,
    pub location: GeoLocation,
    pub likes: u32,
    pub is_liked: bool,
    pub is_bookmarked: bool,
}

/// A user-submitted community post.
///
/// Posts created locally carry a client-assigned uuid until a remote
/// create endpoint exists; posts fetched from the feed carry the
/// server-assigned id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPost {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub user_avatar: Option<String>,
    pub plant_name: String,
    pub description: String,
    pub image_url: Option<String>,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub likes: u32,
    /// True only after moderation; always false for freshly added posts
    pub is_approved: bool,
    pub is_liked: bool,
    pub is_bookmarked: bool,
}

/// Fields the caller supplies when adding a post; everything else is
/// stamped by the store.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostDraft {
    pub plant_name: String,
    pub description: String,
    pub image_url: Option<String>,
    pub location: Option<String>,
}

/// The signed-in user. Absent entirely while anonymous.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
    pub liked_plants: HashSet<String>,
    pub bookmarked_plants: HashSet<String>,
    pub posts: HashSet<String>,
}

impl User {
    /// Build a user fresh from an auth payload: identity fields only,
    /// engagement sets start empty.
    pub fn from_identity(id: String, name: String, email: String) -> Self {
        Self {
            id,
            name,
            email,
            avatar: None,
            liked_plants: HashSet::new(),
            bookmarked_plants: HashSet::new(),
            posts: HashSet::new(),
        }
    }
}
