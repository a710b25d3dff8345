//! Application configuration constants
//!
//! Central location for endpoint defaults, media resolution, and
//! display limits used throughout the store.

// ===== Remote Endpoints =====

/// Default base URL for the garden backend API
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Default base URL for resolving uploaded post images.
/// Post records store paths relative to this base.
pub const DEFAULT_MEDIA_BASE: &str = "http://localhost:5000";

/// Request timeout for all remote calls, in seconds.
/// The store has no retry policy; a slow call simply delays its update.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// ===== Community Feed Projection =====

/// Image shown for community posts that were submitted without a photo
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.png";

/// Botanical-name label for plants projected from community posts
pub const COMMUNITY_BOTANICAL_NAME: &str = "Community Contribution";

/// Region label for posts submitted without a location
pub const UNKNOWN_REGION: &str = "Unknown";

/// Display name for feed posts, since the feed payload carries no author
pub const COMMUNITY_AUTHOR_NAME: &str = "Community Member";

// ===== Display Limits =====

/// Initial number of community posts shown before "show more" paging
pub const DEFAULT_VISIBLE_COUNT: usize = 10;

// ===== Session Persistence =====

/// File name for the persisted session token inside the data directory
pub const SESSION_FILE: &str = "session.json";
