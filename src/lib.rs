//! Herbgarden client store
//!
//! The client-side application state store for the virtual herbal
//! garden: the signed-in user, the plant catalog with its per-viewer
//! engagement overlay, the community post cache, and the saved-post
//! set, synchronized with the garden backend's REST services.

pub mod api;
pub mod app;
pub mod auth;
pub mod config;
pub mod data;
pub mod error;
pub mod models;
pub mod services;
pub mod state;

pub use app::GardenStore;
pub use error::{AppError, Result};
pub use state::StoreEvent;
