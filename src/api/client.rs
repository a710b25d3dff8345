//! HTTP implementation of the remote API
//!
//! Thin reqwest wrapper around the six backend endpoints. Every failure
//! is folded into the store's error taxonomy here: transport problems
//! become Network, 401 becomes AuthRejected, a duplicate save's 400
//! becomes Conflict, and a payload that does not match the wire types
//! becomes Validation.

use crate::api::types::{ErrorBody, LoginResponse, PostRecord, RemoteUser, SavedRecord, UserEnvelope};
use crate::api::RemoteApi;
use crate::config::REQUEST_TIMEOUT_SECS;
use crate::error::{AppError, Result};
use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::time::Duration;

/// Client for the garden backend REST API
#[derive(Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApi {
    /// Build a client against the given API base URL (no trailing slash)
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| AppError::Network(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Classify a non-success response and pull out the backend's
    /// message when it sent one.
    async fn classify_failure(response: Response) -> AppError {
        let status = response.status();
        let message = response
            .json::<ErrorBody>()
            .await
            .map(|body| body.message)
            .unwrap_or_default();

        match status {
            StatusCode::UNAUTHORIZED => AppError::AuthRejected,
            StatusCode::BAD_REQUEST => AppError::Conflict(message),
            _ => AppError::Network(format!("Server returned status {status}: {message}")),
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        if !response.status().is_success() {
            return Err(Self::classify_failure(response).await);
        }

        response
            .json::<T>()
            .await
            .map_err(|e| AppError::Validation(format!("Malformed server response: {e}")))
    }
}

#[async_trait]
impl RemoteApi for HttpApi {
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let response = self
            .client
            .post(self.url("/api/auth/login"))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        Self::decode(response).await
    }

    async fn signup(&self, name: &str, email: &str, password: &str) -> Result<()> {
        let response = self
            .client
            .post(self.url("/api/auth/signup"))
            .json(&json!({ "name": name, "email": email, "password": password }))
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::classify_failure(response).await);
        }

        Ok(())
    }

    async fn current_user(&self, token: &str) -> Result<RemoteUser> {
        let response = self
            .client
            .get(self.url("/api/users/me"))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        let envelope: UserEnvelope = Self::decode(response).await?;
        Ok(envelope.user)
    }

    async fn list_posts(&self) -> Result<Vec<PostRecord>> {
        let response = self
            .client
            .get(self.url("/api/posts"))
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        Self::decode(response).await
    }

    async fn list_saved(&self, token: &str) -> Result<Vec<SavedRecord>> {
        let response = self
            .client
            .get(self.url("/api/saved"))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        Self::decode(response).await
    }

    async fn save_post(&self, token: &str, post_id: &str) -> Result<SavedRecord> {
        let response = self
            .client
            .post(self.url(&format!("/api/saved/{post_id}")))
            .bearer_auth(token)
            .json(&json!({}))
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        Self::decode(response).await
    }
}
