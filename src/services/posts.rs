//! Post service
//!
//! Accepts community contributions from the signed-in user and owns the
//! per-viewer like/bookmark toggles over the cached post list. New
//! posts are local-only until a remote create endpoint lands; the
//! remote seam already exists, so that integration will not change this
//! service's public contract.

use crate::error::{AppError, Result};
use crate::models::{PostDraft, UserPost};
use crate::state::{EventBus, SharedState, StoreEvent};
use chrono::Utc;
use uuid::Uuid;

/// Service for post submission and post engagement
#[derive(Clone)]
pub struct PostsService {
    state: SharedState,
    events: EventBus,
}

impl PostsService {
    pub fn new(state: SharedState, events: EventBus) -> Self {
        Self { state, events }
    }

    /// Add a new community post from the signed-in user. The draft is
    /// validated and the user checked before any state changes; the
    /// finished post is stamped with a client-assigned id, the author's
    /// identity, and a pending moderation status, then prepended so the
    /// list stays most-recent-first.
    pub fn add_post(&self, draft: PostDraft) -> Result<UserPost> {
        if draft.plant_name.trim().is_empty() {
            return Err(AppError::Validation("Plant name is required".to_string()));
        }
        if draft.description.trim().is_empty() {
            return Err(AppError::Validation("Description is required".to_string()));
        }

        let mut state = self.state.write().expect("state lock poisoned");

        let Some(user) = state.user.as_ref() else {
            return Err(AppError::AuthRequired);
        };

        let post = UserPost {
            id: Uuid::new_v4().to_string(),
            user_id: user.id.clone(),
            user_name: user.name.clone(),
            user_avatar: user.avatar.clone(),
            plant_name: draft.plant_name,
            description: draft.description,
            image_url: draft.image_url,
            location: draft.location,
            created_at: Utc::now(),
            likes: 0,
            is_approved: false,
            is_liked: false,
            is_bookmarked: false,
        };

        if let Some(user) = state.user.as_mut() {
            user.posts.insert(post.id.clone());
        }

        state.posts.insert(0, post.clone());
        drop(state);

        self.events.emit(StoreEvent::FeedChanged);

        tracing::info!("Added post {} ({})", post.id, post.plant_name);

        Ok(post)
    }

    /// Flip the like flag on a cached post, moving its counter with it.
    /// Post engagement is local-only and not persisted remotely.
    pub fn toggle_like_post(&self, post_id: &str) {
        {
            let mut state = self.state.write().expect("state lock poisoned");

            let Some(post) = state.posts.iter_mut().find(|p| p.id == post_id) else {
                tracing::debug!("toggle_like_post ignored unknown post: {}", post_id);
                return;
            };

            post.is_liked = !post.is_liked;
            post.likes = if post.is_liked {
                post.likes + 1
            } else {
                post.likes.saturating_sub(1)
            };
        }

        self.events.emit(StoreEvent::FeedChanged);
    }

    /// Flip the bookmark flag on a cached post
    pub fn toggle_bookmark_post(&self, post_id: &str) {
        {
            let mut state = self.state.write().expect("state lock poisoned");

            let Some(post) = state.posts.iter_mut().find(|p| p.id == post_id) else {
                tracing::debug!("toggle_bookmark_post ignored unknown post: {}", post_id);
                return;
            };

            post.is_bookmarked = !post.is_bookmarked;
        }

        self.events.emit(StoreEvent::FeedChanged);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;
    use crate::state::shared_state;

    fn create_test_service(signed_in: bool) -> PostsService {
        let state = shared_state(Vec::new());
        if signed_in {
            state.write().unwrap().user = Some(User::from_identity(
                "user1".to_string(),
                "Priya Sharma".to_string(),
                "priya@example.com".to_string(),
            ));
        }
        PostsService::new(state, EventBus::new())
    }

    fn draft(plant_name: &str, description: &str) -> PostDraft {
        PostDraft {
            plant_name: plant_name.to_string(),
            description: description.to_string(),
            image_url: None,
            location: None,
        }
    }

    #[test]
    fn test_add_post_when_anonymous_is_rejected() {
        let service = create_test_service(false);

        let result = service.add_post(draft("Tulsi", "Great for immunity"));

        assert!(matches!(result, Err(AppError::AuthRequired)));
        assert!(service.state.read().unwrap().posts.is_empty());
    }

    #[test]
    fn test_add_post_stamps_fields() {
        let service = create_test_service(true);

        let post = service
            .add_post(draft("Tulsi", "Great for immunity"))
            .unwrap();

        assert_eq!(post.user_id, "user1");
        assert_eq!(post.user_name, "Priya Sharma");
        assert_eq!(post.likes, 0);
        assert!(!post.is_approved);
        assert!(!post.is_liked);
        assert!(!post.is_bookmarked);

        let state = service.state.read().unwrap();
        assert_eq!(state.posts.len(), 1);
        assert_eq!(state.posts[0].id, post.id);
        assert!(state.user.as_ref().unwrap().posts.contains(&post.id));
    }

    #[test]
    fn test_add_post_prepends() {
        let service = create_test_service(true);

        let first = service.add_post(draft("Tulsi", "a")).unwrap();
        let second = service.add_post(draft("Neem", "b")).unwrap();

        let state = service.state.read().unwrap();
        assert_eq!(state.posts[0].id, second.id);
        assert_eq!(state.posts[1].id, first.id);
    }

    #[test]
    fn test_add_post_validates_before_mutation() {
        let service = create_test_service(true);

        assert!(matches!(
            service.add_post(draft("", "desc")),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            service.add_post(draft("Tulsi", "   ")),
            Err(AppError::Validation(_))
        ));
        assert!(service.state.read().unwrap().posts.is_empty());
    }

    #[test]
    fn test_toggle_like_post_round_trips() {
        let service = create_test_service(true);
        let post = service.add_post(draft("Tulsi", "x")).unwrap();

        service.toggle_like_post(&post.id);
        {
            let state = service.state.read().unwrap();
            assert!(state.posts[0].is_liked);
            assert_eq!(state.posts[0].likes, 1);
        }

        service.toggle_like_post(&post.id);
        {
            let state = service.state.read().unwrap();
            assert!(!state.posts[0].is_liked);
            assert_eq!(state.posts[0].likes, 0);
        }
    }

    #[test]
    fn test_toggle_unknown_post_is_noop() {
        let service = create_test_service(true);
        service.add_post(draft("Tulsi", "x")).unwrap();

        service.toggle_like_post("missing");
        service.toggle_bookmark_post("missing");

        let state = service.state.read().unwrap();
        assert!(!state.posts[0].is_liked);
        assert!(!state.posts[0].is_bookmarked);
    }
}
