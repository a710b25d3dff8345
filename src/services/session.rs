//! Session service
//!
//! Owns the authentication lifecycle and the bearer token. Login and
//! signup collapse every remote failure into a boolean so the view
//! layer never sees an exception; the reason is logged here instead.

use crate::api::RemoteApi;
use crate::auth::TokenStore;
use crate::error::AppError;
use crate::models::User;
use crate::state::{EventBus, SharedState, StoreEvent};
use std::sync::Arc;

/// Service for managing the authenticated session
#[derive(Clone)]
pub struct SessionService {
    api: Arc<dyn RemoteApi>,
    tokens: TokenStore,
    state: SharedState,
    events: EventBus,
}

impl SessionService {
    pub fn new(
        api: Arc<dyn RemoteApi>,
        tokens: TokenStore,
        state: SharedState,
        events: EventBus,
    ) -> Self {
        Self {
            api,
            tokens,
            state,
            events,
        }
    }

    /// Sign in with credentials. On success the token is persisted and
    /// the user is populated with identity fields and empty engagement
    /// sets. On any failure nothing changes and false is returned.
    pub async fn login(&self, email: &str, password: &str) -> bool {
        let response = match self.api.login(email, password).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Login failed: {}", e);
                return false;
            }
        };

        if let Err(e) = self.tokens.save(&response.token).await {
            tracing::warn!("Login succeeded but token could not be persisted: {}", e);
            return false;
        }

        {
            let mut state = self.state.write().expect("state lock poisoned");
            state.user = Some(User::from_identity(
                response.user.id,
                response.user.name,
                response.user.email,
            ));
        }

        self.events.emit(StoreEvent::SessionChanged);

        tracing::info!("Signed in as {}", email);

        true
    }

    /// Register a new account. Does not auto-login.
    pub async fn signup(&self, name: &str, email: &str, password: &str) -> bool {
        match self.api.signup(name, email, password).await {
            Ok(()) => {
                tracing::info!("Account registered for {}", email);
                true
            }
            Err(e) => {
                tracing::warn!("Signup failed: {}", e);
                false
            }
        }
    }

    /// Sign out. Purely local: clears the persisted token and resets
    /// every per-viewer flag, since they are meaningless without an
    /// identity. Never calls the network.
    pub async fn logout(&self) {
        if let Err(e) = self.tokens.clear().await {
            tracing::warn!("Failed to clear persisted token: {}", e);
        }

        {
            let mut state = self.state.write().expect("state lock poisoned");
            state.reset_engagement();
        }

        self.events.emit(StoreEvent::SessionChanged);

        tracing::info!("Signed out");
    }

    /// Restore a previous session from the persisted token, if any.
    ///
    /// A rejected token is purged so it cannot linger as a stale
    /// credential; a plain network failure keeps the token so a later
    /// restart can retry.
    pub async fn restore_session(&self) {
        let Some(token) = self.tokens.load().await else {
            tracing::debug!("No persisted session to restore");
            return;
        };

        match self.api.current_user(&token).await {
            Ok(remote) => {
                {
                    let mut state = self.state.write().expect("state lock poisoned");
                    state.user = Some(User::from_identity(remote.id, remote.name, remote.email));
                }

                self.events.emit(StoreEvent::SessionChanged);

                tracing::info!("Session restored");
            }
            Err(AppError::AuthRejected) => {
                tracing::info!("Stored session token was rejected, clearing it");
                if let Err(e) = self.tokens.clear().await {
                    tracing::warn!("Failed to clear rejected token: {}", e);
                }
            }
            Err(e) => {
                tracing::warn!("Session restore failed, keeping token: {}", e);
            }
        }
    }

    /// Recovery path for a 401 on any authenticated endpoint: the
    /// token is stale, so sign out fully.
    pub(crate) async fn force_logout(&self) {
        tracing::info!("Authenticated call rejected by server, signing out");
        self.logout().await;
    }
}
