//! Remote API boundary
//!
//! The store talks to the garden backend exclusively through the
//! [`RemoteApi`] trait so the transport can be swapped (or faked in
//! tests) without touching any service logic.

pub mod client;
pub mod types;

pub use client::HttpApi;
pub use types::{LoginResponse, PostRecord, RemoteUser, SavedRecord};

use crate::error::Result;
use async_trait::async_trait;

/// The six backend calls the store depends on
#[async_trait]
pub trait RemoteApi: Send + Sync {
    /// POST /api/auth/login
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse>;

    /// POST /api/auth/signup
    async fn signup(&self, name: &str, email: &str, password: &str) -> Result<()>;

    /// GET /api/users/me
    async fn current_user(&self, token: &str) -> Result<RemoteUser>;

    /// GET /api/posts
    async fn list_posts(&self) -> Result<Vec<PostRecord>>;

    /// GET /api/saved
    async fn list_saved(&self, token: &str) -> Result<Vec<SavedRecord>>;

    /// POST /api/saved/:postId
    async fn save_post(&self, token: &str, post_id: &str) -> Result<SavedRecord>;
}
