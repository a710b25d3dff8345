//! Community feed service
//!
//! Keeps a local cache of remote posts and projects them into
//! plant-shaped records so the view layer can render them alongside the
//! static catalog. The cache is replaced wholesale on each successful
//! refresh; a failed refresh keeps the previous cache (stale but
//! available).

use crate::api::types::PostRecord;
use crate::api::RemoteApi;
use crate::config::{
    COMMUNITY_AUTHOR_NAME, COMMUNITY_BOTANICAL_NAME, PLACEHOLDER_IMAGE, UNKNOWN_REGION,
};
use crate::models::{GeoLocation, Plant, PlantCategory, UserPost};
use crate::state::{EventBus, SharedState, StoreEvent};
use std::sync::Arc;

/// Service synchronizing the community post cache
#[derive(Clone)]
pub struct FeedService {
    api: Arc<dyn RemoteApi>,
    state: SharedState,
    events: EventBus,
    media_base: String,
}

impl FeedService {
    pub fn new(
        api: Arc<dyn RemoteApi>,
        state: SharedState,
        events: EventBus,
        media_base: impl Into<String>,
    ) -> Self {
        Self {
            api,
            state,
            events,
            media_base: media_base.into().trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the full post list and replace the cache. Returns whether
    /// the refresh succeeded; on failure the previous cache is kept.
    pub async fn refresh_feed(&self) -> bool {
        let records = match self.api.list_posts().await {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!("Feed refresh failed, keeping cached posts: {}", e);
                return false;
            }
        };

        let posts: Vec<UserPost> = records.into_iter().map(post_from_record).collect();
        let count = posts.len();

        {
            let mut state = self.state.write().expect("state lock poisoned");
            state.posts = posts;
        }

        self.events.emit(StoreEvent::FeedChanged);

        tracing::info!("Feed refreshed with {} posts", count);

        true
    }

    /// Project every cached post into a community-category plant.
    /// Pure and deterministic; community plants bypass the catalog's
    /// toggle path, so engagement always starts cold.
    pub fn project_to_plants(&self) -> Vec<Plant> {
        let state = self.state.read().expect("state lock poisoned");

        state
            .posts
            .iter()
            .map(|post| self.plant_from_post(post))
            .collect()
    }

    /// First `count` cached posts in fetched order. Never fetches;
    /// "show more" paging is entirely client-side.
    pub fn visible_slice(&self, count: usize) -> Vec<UserPost> {
        let state = self.state.read().expect("state lock poisoned");

        state.posts.iter().take(count).cloned().collect()
    }

    fn plant_from_post(&self, post: &UserPost) -> Plant {
        Plant {
            id: post.id.clone(),
            name: post.plant_name.clone(),
            botanical_name: COMMUNITY_BOTANICAL_NAME.to_string(),
            description: post.description.clone(),
            medicinal_use: post.description.clone(),
            category: PlantCategory::Community,
            ayush_systems: Vec::new(),
            image_url: self.resolve_image(post.image_url.as_deref()),
            location: GeoLocation {
                lat: 0.0,
                lng: 0.0,
                region: post
                    .location
                    .clone()
                    .unwrap_or_else(|| UNKNOWN_REGION.to_string()),
            },
            likes: 0,
            is_liked: false,
            is_bookmarked: false,
        }
    }

    /// Resolve a stored relative image path against the media base.
    /// Paths are stored by the upload handler with OS-native separators.
    fn resolve_image(&self, stored: Option<&str>) -> String {
        match stored {
            Some(path) if !path.is_empty() => {
                let normalized = path.replace('\\', "/");
                format!("{}/{}", self.media_base, normalized.trim_start_matches('/'))
            }
            _ => PLACEHOLDER_IMAGE.to_string(),
        }
    }
}

/// Shape a wire record into the cached post form. The feed payload
/// carries no author identity, so those fields take display defaults;
/// anything in the published feed counts as approved.
fn post_from_record(record: PostRecord) -> UserPost {
    UserPost {
        id: record.id,
        user_id: String::new(),
        user_name: COMMUNITY_AUTHOR_NAME.to_string(),
        user_avatar: None,
        plant_name: record.plant_name,
        description: record.description,
        image_url: record.image_url,
        location: record.location,
        created_at: record.created_at,
        likes: 0,
        is_approved: true,
        is_liked: false,
        is_bookmarked: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::shared_state;
    use chrono::Utc;

    struct NeverApi;

    #[async_trait::async_trait]
    impl RemoteApi for NeverApi {
        async fn login(
            &self,
            _: &str,
            _: &str,
        ) -> crate::error::Result<crate::api::LoginResponse> {
            unreachable!()
        }
        async fn signup(&self, _: &str, _: &str, _: &str) -> crate::error::Result<()> {
            unreachable!()
        }
        async fn current_user(&self, _: &str) -> crate::error::Result<crate::api::RemoteUser> {
            unreachable!()
        }
        async fn list_posts(&self) -> crate::error::Result<Vec<PostRecord>> {
            unreachable!()
        }
        async fn list_saved(&self, _: &str) -> crate::error::Result<Vec<crate::api::SavedRecord>> {
            unreachable!()
        }
        async fn save_post(
            &self,
            _: &str,
            _: &str,
        ) -> crate::error::Result<crate::api::SavedRecord> {
            unreachable!()
        }
    }

    fn test_post(id: &str, image_url: Option<&str>, location: Option<&str>) -> UserPost {
        UserPost {
            id: id.to_string(),
            user_id: String::new(),
            user_name: COMMUNITY_AUTHOR_NAME.to_string(),
            user_avatar: None,
            plant_name: "Neem".to_string(),
            description: "x".to_string(),
            image_url: image_url.map(str::to_string),
            location: location.map(str::to_string),
            created_at: Utc::now(),
            likes: 0,
            is_approved: true,
            is_liked: false,
            is_bookmarked: false,
        }
    }

    fn create_test_service(posts: Vec<UserPost>) -> FeedService {
        let state = shared_state(Vec::new());
        state.write().unwrap().posts = posts;
        FeedService::new(
            Arc::new(NeverApi),
            state,
            EventBus::new(),
            "http://localhost:5000",
        )
    }

    #[test]
    fn test_projection_defaults_for_bare_post() {
        let service = create_test_service(vec![test_post("p1", None, None)]);

        let plants = service.project_to_plants();

        assert_eq!(plants.len(), 1);
        assert_eq!(plants[0].category, PlantCategory::Community);
        assert_eq!(plants[0].image_url, PLACEHOLDER_IMAGE);
        assert_eq!(plants[0].location.region, UNKNOWN_REGION);
        assert_eq!(plants[0].botanical_name, COMMUNITY_BOTANICAL_NAME);
        assert_eq!(plants[0].likes, 0);
        assert!(plants[0].ayush_systems.is_empty());
    }

    #[test]
    fn test_projection_resolves_windows_style_paths() {
        let service = create_test_service(vec![test_post(
            "p1",
            Some("uploads\\1717500000-tulsi.jpg"),
            Some("Pune"),
        )]);

        let plants = service.project_to_plants();

        assert_eq!(
            plants[0].image_url,
            "http://localhost:5000/uploads/1717500000-tulsi.jpg"
        );
        assert_eq!(plants[0].location.region, "Pune");
    }

    #[test]
    fn test_visible_slice_respects_order_and_count() {
        let service = create_test_service(vec![
            test_post("p1", None, None),
            test_post("p2", None, None),
            test_post("p3", None, None),
        ]);

        let slice = service.visible_slice(2);

        assert_eq!(slice.len(), 2);
        assert_eq!(slice[0].id, "p1");
        assert_eq!(slice[1].id, "p2");

        let all = service.visible_slice(10);
        assert_eq!(all.len(), 3);
    }
}
