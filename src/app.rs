//! Store assembly and initialization
//!
//! All services are wired here around one shared state and one update
//! channel, then handed to the view layer as a single handle. No
//! ambient singletons; embedders construct the store explicitly and
//! pass it (or clones of it) wherever it is needed.

use crate::api::RemoteApi;
use crate::auth::TokenStore;
use crate::config::DEFAULT_MEDIA_BASE;
use crate::data::builtin_plants;
use crate::models::{Plant, User, UserPost};
use crate::services::{CatalogService, FeedService, PostsService, SavedService, SessionService};
use crate::state::{shared_state, EventBus, SharedState, StoreEvent};
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::broadcast;

/// The client application state store.
///
/// Cloning is cheap; every clone shares the same state and channel.
#[derive(Clone)]
pub struct GardenStore {
    state: SharedState,
    events: EventBus,
    pub session: SessionService,
    pub catalog: CatalogService,
    pub feed: FeedService,
    pub saved: SavedService,
    pub posts: PostsService,
}

impl GardenStore {
    /// Build a store over the built-in catalog with default media
    /// resolution. `data_dir` is where the session token persists.
    pub fn new(api: Arc<dyn RemoteApi>, data_dir: PathBuf) -> Self {
        Self::with_catalog(api, builtin_plants(), DEFAULT_MEDIA_BASE, data_dir)
    }

    /// Build a store over a caller-supplied catalog and media base
    pub fn with_catalog(
        api: Arc<dyn RemoteApi>,
        plants: Vec<Plant>,
        media_base: &str,
        data_dir: PathBuf,
    ) -> Self {
        let state = shared_state(plants);
        let events = EventBus::new();
        let tokens = TokenStore::new(data_dir);

        let session = SessionService::new(
            Arc::clone(&api),
            tokens.clone(),
            Arc::clone(&state),
            events.clone(),
        );
        let catalog = CatalogService::new(Arc::clone(&state), events.clone());
        let feed = FeedService::new(
            Arc::clone(&api),
            Arc::clone(&state),
            events.clone(),
            media_base,
        );
        let saved = SavedService::new(
            api,
            tokens,
            Arc::clone(&state),
            events.clone(),
            session.clone(),
        );
        let posts = PostsService::new(Arc::clone(&state), events.clone());

        Self {
            state,
            events,
            session,
            catalog,
            feed,
            saved,
            posts,
        }
    }

    /// Startup sequence: restore any persisted session, then pull the
    /// community feed and the saved set. Each step degrades
    /// independently; a failed fetch never blocks the rest.
    pub async fn initialize(&self) {
        tracing::info!("Initializing garden store");

        self.session.restore_session().await;
        self.feed.refresh_feed().await;
        self.saved.fetch_saved().await;

        tracing::info!("Garden store initialized");
    }

    /// Receive a notification after every state mutation
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    // ===== Read accessors =====

    pub fn user(&self) -> Option<User> {
        self.state.read().expect("state lock poisoned").user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read().expect("state lock poisoned").user.is_some()
    }

    pub fn plants(&self) -> Vec<Plant> {
        self.state
            .read()
            .expect("state lock poisoned")
            .plants
            .clone()
    }

    pub fn cached_posts(&self) -> Vec<UserPost> {
        self.state
            .read()
            .expect("state lock poisoned")
            .posts
            .clone()
    }

    pub fn saved_ids(&self) -> HashSet<String> {
        self.state
            .read()
            .expect("state lock poisoned")
            .saved
            .clone()
    }
}
