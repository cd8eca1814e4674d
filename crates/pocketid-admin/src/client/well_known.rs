//! OIDC discovery and version endpoints.
//!
//! The discovery documents have no fixed schema worth typing here;
//! callers get the raw JSON value.

use pocketid_client::Result;

use crate::types::VersionInfo;

impl super::PocketIdAdminClient {
    /// The OpenID Connect discovery document.
    pub async fn openid_configuration(&self) -> Result<serde_json::Value> {
        self.client
            .get("/.well-known/openid-configuration", &[])
            .await?
            .into_json()
    }

    /// The JSON Web Key Set used to verify issued tokens.
    pub async fn jwks(&self) -> Result<serde_json::Value> {
        self.client
            .get("/.well-known/jwks.json", &[])
            .await?
            .into_json()
    }

    /// The latest released Pocket ID version.
    pub async fn latest_version(&self) -> Result<VersionInfo> {
        self.client
            .get("/api/version/latest", &[])
            .await?
            .into_json()
    }
}
