//! Saved-post service
//!
//! Bridges community-post bookmarking to the remote association store.
//! This is a separate path from the catalog's local-only bookmarks: a
//! save here is persisted server-side against the signed-in user.

use crate::api::RemoteApi;
use crate::auth::TokenStore;
use crate::error::{AppError, Result};
use crate::services::SessionService;
use crate::state::{EventBus, SharedState, StoreEvent};
use std::collections::HashSet;
use std::sync::Arc;

/// Service for the remote saved-post set
#[derive(Clone)]
pub struct SavedService {
    api: Arc<dyn RemoteApi>,
    tokens: TokenStore,
    state: SharedState,
    events: EventBus,
    session: SessionService,
}

impl SavedService {
    pub fn new(
        api: Arc<dyn RemoteApi>,
        tokens: TokenStore,
        state: SharedState,
        events: EventBus,
        session: SessionService,
    ) -> Self {
        Self {
            api,
            tokens,
            state,
            events,
            session,
        }
    }

    /// Fetch the post ids the current user has saved. Without a token
    /// this returns the empty set immediately, no network call. A
    /// rejected token triggers the forced sign-out path; any other
    /// failure keeps and returns the local set.
    pub async fn fetch_saved(&self) -> HashSet<String> {
        let Some(token) = self.tokens.load().await else {
            return HashSet::new();
        };

        match self.api.list_saved(&token).await {
            Ok(records) => {
                let ids: HashSet<String> = records.into_iter().map(|r| r.post).collect();

                {
                    let mut state = self.state.write().expect("state lock poisoned");
                    state.saved = ids.clone();
                }

                self.events.emit(StoreEvent::SavedChanged);

                tracing::debug!("Fetched {} saved posts", ids.len());

                ids
            }
            Err(AppError::AuthRejected) => {
                self.session.force_logout().await;
                HashSet::new()
            }
            Err(e) => {
                tracing::warn!("Saved fetch failed, keeping local set: {}", e);
                let state = self.state.read().expect("state lock poisoned");
                state.saved.clone()
            }
        }
    }

    /// Save a post against the signed-in user. Requires a token; the
    /// caller is told explicitly when sign-in is needed so the UI can
    /// prompt for it. Saving an already-saved post is a no-op, and the
    /// server's duplicate rejection is reconciled as already-saved
    /// rather than surfaced as an error.
    pub async fn save_post(&self, post_id: &str) -> Result<()> {
        let Some(token) = self.tokens.load().await else {
            return Err(AppError::AuthRequired);
        };

        {
            let state = self.state.read().expect("state lock poisoned");
            if state.saved.contains(post_id) {
                tracing::debug!("Post already saved locally: {}", post_id);
                return Ok(());
            }
        }

        match self.api.save_post(&token, post_id).await {
            Ok(_) => {
                self.mark_saved(post_id);
                tracing::info!("Saved post {}", post_id);
                Ok(())
            }
            Err(AppError::Conflict(_)) => {
                // The server already has this association; a duplicate
                // save is an expected outcome, not an error.
                tracing::debug!("Post already saved remotely, reconciling: {}", post_id);
                self.mark_saved(post_id);
                Ok(())
            }
            Err(AppError::AuthRejected) => {
                self.session.force_logout().await;
                Err(AppError::AuthRequired)
            }
            Err(e) => {
                tracing::warn!("Save failed for post {}: {}", post_id, e);
                Err(e)
            }
        }
    }

    fn mark_saved(&self, post_id: &str) {
        {
            let mut state = self.state.write().expect("state lock poisoned");
            state.saved.insert(post_id.to_string());
        }
        self.events.emit(StoreEvent::SavedChanged);
    }
}
