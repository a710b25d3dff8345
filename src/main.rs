// Herbgarden - virtual herbal garden client store
// Demo entry point: brings the store up against a live backend and
// prints a catalog summary.

use anyhow::Result;
use herbgarden::api::HttpApi;
use herbgarden::config::{DEFAULT_API_BASE, DEFAULT_VISIBLE_COUNT};
use herbgarden::GardenStore;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "herbgarden=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting herbgarden client store");

    let api_base =
        std::env::var("HERBGARDEN_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
    let data_dir = std::env::var("HERBGARDEN_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(".herbgarden"));

    let api = Arc::new(HttpApi::new(&api_base)?);
    let store = GardenStore::new(api, data_dir);

    store.initialize().await;

    let plants = store.plants();
    tracing::info!("Catalog holds {} plants", plants.len());
    for plant in &plants {
        tracing::info!("  {} ({})", plant.name, plant.botanical_name);
    }

    let community = store.feed.project_to_plants();
    tracing::info!(
        "Community feed holds {} posts ({} visible)",
        community.len(),
        store.feed.visible_slice(DEFAULT_VISIBLE_COUNT).len()
    );

    if let Some(user) = store.user() {
        tracing::info!("Signed in as {} <{}>", user.name, user.email);
        tracing::info!("{} saved posts", store.saved_ids().len());
    } else {
        tracing::info!("Browsing anonymously");
    }

    Ok(())
}
