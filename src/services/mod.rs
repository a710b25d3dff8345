//! Services module
//!
//! Business logic services that mutate the shared state and talk to the
//! remote boundary. The view layer reaches them through the store.

pub mod catalog;
pub mod feed;
pub mod posts;
pub mod saved;
pub mod session;

pub use catalog::CatalogService;
pub use feed::FeedService;
pub use posts::PostsService;
pub use saved::SavedService;
pub use session::SessionService;
