//! HTTP clients for the two opaque remote services.
//!
//! The document store and the identity provider are black boxes: one
//! append-only document write, one sign-in call returning a refresh token.
//! Nothing else of either response is consumed.

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::error::AuthError;
use crate::models::FederatedUser;

/// Collection the join form writes into.
pub const USERS_COLLECTION: &str = "users";

static CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

/// Thin client for the remote document store.
#[derive(Clone, Debug)]
pub struct DocumentClient {
    base_url: String,
}

impl DocumentClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base: String = base_url.into();
        Self {
            base_url: base.trim_end_matches('/').to_string(),
        }
    }

    /// POST the serialized document to `{base}/{collection}`. Only
    /// success/failure comes back to the caller.
    pub async fn create_document<T: Serialize>(
        &self,
        collection: &str,
        doc: &T,
    ) -> Result<(), AuthError> {
        let url = format!("{}/{}", self.base_url, collection);
        let resp = CLIENT
            .post(&url)
            .json(doc)
            .send()
            .await
            .map_err(|e| AuthError::Remote(e.to_string()))?;
        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(AuthError::Remote(format!("{} {}", status, text)));
        }
        Ok(())
    }
}

/// Client for the federated identity provider. The source system's
/// interactive popup is a single opaque call here.
#[derive(Clone, Debug)]
pub struct IdentityClient {
    base_url: String,
}

impl IdentityClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base: String = base_url.into();
        Self {
            base_url: base.trim_end_matches('/').to_string(),
        }
    }

    /// POST `{base}/session` -> `{ refresh_token }`.
    pub async fn sign_in(&self) -> Result<FederatedUser, AuthError> {
        let url = format!("{}/session", self.base_url);
        let resp = CLIENT
            .post(&url)
            .send()
            .await
            .map_err(|e| AuthError::Provider(e.to_string()))?;
        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| AuthError::Provider(e.to_string()))?;
        if !status.is_success() {
            return Err(AuthError::Provider(format!("{} {}", status, text)));
        }
        let json: serde_json::Value =
            serde_json::from_str(&text).map_err(|e| AuthError::Provider(e.to_string()))?;
        let refresh = json
            .get("refresh_token")
            .and_then(|v| v.as_str())
            .ok_or_else(|| AuthError::Provider("no refresh_token in response".to_string()))?;
        Ok(FederatedUser {
            refresh_token: refresh.to_string(),
        })
    }
}
