//! Shared application state
//!
//! The single in-memory source of truth the services mutate and the view
//! layer reads. State lives behind an `Arc<RwLock>`; critical sections
//! are short and never held across an await point, so async operations
//! apply in resolution order.

use crate::models::{Plant, User, UserPost};
use serde::Serialize;
use std::collections::HashSet;
use std::sync::{Arc, RwLock};
use tokio::sync::broadcast;

/// Capacity of the update channel. A lagging subscriber misses events,
/// never blocks the store.
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Notification sent to subscribers after a state mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StoreEvent {
    /// Login, logout, or session restore changed the user
    SessionChanged,
    /// A catalog plant's like or bookmark overlay changed
    CatalogChanged,
    /// The community post list was replaced or a post was added/toggled
    FeedChanged,
    /// The saved-post set changed
    SavedChanged,
}

/// Everything the store owns
#[derive(Debug, Default)]
pub struct AppState {
    /// `None` is the anonymous user
    pub user: Option<User>,
    /// Static catalog plus per-viewer overlays
    pub plants: Vec<Plant>,
    /// Community post cache, most recent first
    pub posts: Vec<UserPost>,
    /// Post ids the current user has saved remotely
    pub saved: HashSet<String>,
}

impl AppState {
    /// Drop everything tied to the current identity: the user, every
    /// per-viewer like/bookmark overlay, and the saved-post set. The
    /// catalog itself and the post cache survive.
    pub fn reset_engagement(&mut self) {
        self.user = None;
        for plant in &mut self.plants {
            plant.is_liked = false;
            plant.is_bookmarked = false;
        }
        for post in &mut self.posts {
            post.is_liked = false;
            post.is_bookmarked = false;
        }
        self.saved.clear();
    }
}

pub type SharedState = Arc<RwLock<AppState>>;

/// Broadcast handle shared by every service
#[derive(Clone)]
pub struct EventBus {
    tx: broadcast::Sender<StoreEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.tx.subscribe()
    }

    /// Emit an event. Having no subscribers is not an error.
    pub fn emit(&self, event: StoreEvent) {
        let _ = self.tx.send(event);
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Create shared state seeded with a plant catalog
pub fn shared_state(plants: Vec<Plant>) -> SharedState {
    Arc::new(RwLock::new(AppState {
        user: None,
        plants,
        posts: Vec::new(),
        saved: HashSet::new(),
    }))
}
