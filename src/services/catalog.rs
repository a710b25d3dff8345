//! Catalog service
//!
//! Holds the per-viewer like/bookmark overlay on the static plant
//! catalog, plus the read-side filtering the search and home pages use.
//! Catalog engagement is not persisted server-side in this version, so
//! every operation here is purely local.

use crate::models::{AyushSystem, Plant, PlantCategory};
use crate::state::{EventBus, SharedState, StoreEvent};

/// Service for catalog reads and engagement toggles
#[derive(Clone)]
pub struct CatalogService {
    state: SharedState,
    events: EventBus,
}

impl CatalogService {
    pub fn new(state: SharedState, events: EventBus) -> Self {
        Self { state, events }
    }

    /// Flip the like flag on a plant, moving its counter with it.
    /// The counter only ever reflects this viewer's own toggle, so
    /// flooring at zero is sufficient. Unknown ids are a no-op.
    pub fn toggle_like(&self, plant_id: &str) {
        {
            let mut state = self.state.write().expect("state lock poisoned");

            let Some(plant) = state.plants.iter_mut().find(|p| p.id == plant_id) else {
                tracing::debug!("toggle_like ignored unknown plant: {}", plant_id);
                return;
            };

            plant.is_liked = !plant.is_liked;
            plant.likes = if plant.is_liked {
                plant.likes + 1
            } else {
                plant.likes.saturating_sub(1)
            };

            if let Some(user) = state.user.as_mut() {
                if !user.liked_plants.remove(plant_id) {
                    user.liked_plants.insert(plant_id.to_string());
                }
            }
        }

        self.events.emit(StoreEvent::CatalogChanged);
    }

    /// Flip the bookmark flag on a plant. Same rules as
    /// [`toggle_like`](Self::toggle_like) but without a counter.
    pub fn toggle_bookmark(&self, plant_id: &str) {
        {
            let mut state = self.state.write().expect("state lock poisoned");

            let Some(plant) = state.plants.iter_mut().find(|p| p.id == plant_id) else {
                tracing::debug!("toggle_bookmark ignored unknown plant: {}", plant_id);
                return;
            };

            plant.is_bookmarked = !plant.is_bookmarked;

            if let Some(user) = state.user.as_mut() {
                if !user.bookmarked_plants.remove(plant_id) {
                    user.bookmarked_plants.insert(plant_id.to_string());
                }
            }
        }

        self.events.emit(StoreEvent::CatalogChanged);
    }

    /// Search catalog plants by name, botanical name, or medicinal use,
    /// optionally narrowed by category and AYUSH system.
    pub fn search(
        &self,
        query: &str,
        category: Option<PlantCategory>,
        system: Option<AyushSystem>,
    ) -> Vec<Plant> {
        let query_lower = query.to_lowercase();

        let state = self.state.read().expect("state lock poisoned");

        state
            .plants
            .iter()
            .filter(|plant| {
                query_lower.is_empty()
                    || plant.name.to_lowercase().contains(&query_lower)
                    || plant.botanical_name.to_lowercase().contains(&query_lower)
                    || plant.medicinal_use.to_lowercase().contains(&query_lower)
            })
            .filter(|plant| category.is_none_or(|c| plant.category == c))
            .filter(|plant| system.is_none_or(|s| plant.ayush_systems.contains(&s)))
            .cloned()
            .collect()
    }

    /// Catalog plants in a single category, for the home page chips
    pub fn by_category(&self, category: PlantCategory) -> Vec<Plant> {
        let state = self.state.read().expect("state lock poisoned");

        state
            .plants
            .iter()
            .filter(|plant| plant.category == category)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::builtin_plants;
    use crate::state::shared_state;

    fn create_test_service() -> CatalogService {
        CatalogService::new(shared_state(builtin_plants()), EventBus::new())
    }

    fn likes_of(service: &CatalogService, id: &str) -> (u32, bool) {
        let state = service.state.read().unwrap();
        let plant = state.plants.iter().find(|p| p.id == id).unwrap();
        (plant.likes, plant.is_liked)
    }

    #[test]
    fn test_toggle_like_twice_round_trips() {
        let service = create_test_service();
        let (likes_before, _) = likes_of(&service, "tulsi");

        service.toggle_like("tulsi");
        let (likes, is_liked) = likes_of(&service, "tulsi");
        assert!(is_liked);
        assert_eq!(likes, likes_before + 1);

        service.toggle_like("tulsi");
        let (likes, is_liked) = likes_of(&service, "tulsi");
        assert!(!is_liked);
        assert_eq!(likes, likes_before);
    }

    #[test]
    fn test_toggle_unknown_plant_is_noop() {
        let service = create_test_service();
        let before: Vec<_> = {
            let state = service.state.read().unwrap();
            state
                .plants
                .iter()
                .map(|p| (p.likes, p.is_liked, p.is_bookmarked))
                .collect()
        };

        service.toggle_like("no-such-plant");
        service.toggle_bookmark("no-such-plant");

        let after: Vec<_> = {
            let state = service.state.read().unwrap();
            state
                .plants
                .iter()
                .map(|p| (p.likes, p.is_liked, p.is_bookmarked))
                .collect()
        };
        assert_eq!(before, after);
    }

    #[test]
    fn test_search_matches_medicinal_use() {
        let service = create_test_service();

        let results = service.search("memory", None, None);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "brahmi");
    }

    #[test]
    fn test_search_with_category_filter() {
        let service = create_test_service();

        let results = service.search("", Some(PlantCategory::Skin), None);

        assert!(!results.is_empty());
        assert!(results.iter().all(|p| p.category == PlantCategory::Skin));
    }

    #[test]
    fn test_search_with_system_filter() {
        let service = create_test_service();

        let results = service.search("", None, Some(AyushSystem::Yoga));

        assert!(!results.is_empty());
        assert!(results
            .iter()
            .all(|p| p.ayush_systems.contains(&AyushSystem::Yoga)));
    }
}
