//! API key operations.

use pocketid_client::{ListParams, Result};

use crate::client::to_body;
use crate::types::{ApiKey, ApiKeyCreate, ApiKeyWithToken, Paginated};

impl super::PocketIdAdminClient {
    /// List API keys.
    pub async fn list_api_keys(&self, params: Option<&ListParams>) -> Result<Paginated<ApiKey>> {
        self.client
            .get_list("/api/api-keys", params)
            .await?
            .into_json()
    }

    /// Create an API key. The returned token is shown only once.
    pub async fn create_api_key(&self, key: &ApiKeyCreate) -> Result<ApiKeyWithToken> {
        self.client
            .post("/api/api-keys", Some(&to_body(key)?))
            .await?
            .into_json()
    }

    /// Renew an API key, minting a fresh token.
    pub async fn renew_api_key(&self, id: &str) -> Result<ApiKeyWithToken> {
        self.client
            .post(&format!("/api/api-keys/{id}/renew"), None)
            .await?
            .into_json()
    }

    /// Delete an API key.
    pub async fn delete_api_key(&self, id: &str) -> Result<()> {
        self.client.delete(&format!("/api/api-keys/{id}")).await?;
        Ok(())
    }
}
