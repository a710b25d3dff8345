//! Wire types for the garden backend
//!
//! Deserialized strictly at the network boundary; malformed payloads
//! become Validation errors instead of leaking undefined fields into
//! the domain models.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Identity fields the auth service returns for a user
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteUser {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Successful login payload
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub user: RemoteUser,
    pub token: String,
}

/// Envelope around the current-user endpoint's payload
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct UserEnvelope {
    pub user: RemoteUser,
}

/// Error body the backend attaches to non-success statuses
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: String,
}

/// A community post as stored by the backend.
///
/// Author identity is not part of the feed payload in the current
/// backend, so the projection fills those fields with defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct PostRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "plantName")]
    pub plant_name: String,
    pub description: String,
    #[serde(rename = "imageUrl", default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// A (user, post) bookmark association
#[derive(Debug, Clone, Deserialize)]
pub struct SavedRecord {
    pub user: String,
    pub post: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_record_parses_backend_shape() {
        let json = r#"{
            "_id": "665f1c2e8b1e4a0012ab34cd",
            "plantName": "Tulsi",
            "description": "Grows well on my balcony",
            "imageUrl": "uploads\\1717500000-tulsi.jpg",
            "location": "Pune, Maharashtra",
            "createdAt": "2024-06-04T10:00:00.000Z"
        }"#;

        let record: PostRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "665f1c2e8b1e4a0012ab34cd");
        assert_eq!(record.plant_name, "Tulsi");
        assert!(record.image_url.is_some());
    }

    #[test]
    fn test_post_record_tolerates_missing_optionals() {
        let json = r#"{
            "_id": "abc",
            "plantName": "Neem",
            "description": "x",
            "createdAt": "2024-06-04T10:00:00Z"
        }"#;

        let record: PostRecord = serde_json::from_str(json).unwrap();
        assert!(record.image_url.is_none());
        assert!(record.location.is_none());
    }

    #[test]
    fn test_post_record_rejects_missing_required_field() {
        let json = r#"{"_id": "abc", "createdAt": "2024-06-04T10:00:00Z"}"#;
        assert!(serde_json::from_str::<PostRecord>(json).is_err());
    }
}
