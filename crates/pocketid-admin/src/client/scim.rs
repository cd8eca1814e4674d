//! SCIM service provider operations.

use pocketid_client::Result;

use crate::client::to_body;
use crate::types::{ScimServiceProvider, ScimServiceProviderCreate, ScimServiceProviderUpdate};

impl super::PocketIdAdminClient {
    /// Register a SCIM service provider.
    pub async fn create_scim_provider(
        &self,
        provider: &ScimServiceProviderCreate,
    ) -> Result<ScimServiceProvider> {
        self.client
            .post("/api/scim/service-provider", Some(&to_body(provider)?))
            .await?
            .into_json()
    }

    /// Apply a partial update to a SCIM service provider.
    pub async fn update_scim_provider(
        &self,
        id: &str,
        update: &ScimServiceProviderUpdate,
    ) -> Result<ScimServiceProvider> {
        self.client
            .put(
                &format!("/api/scim/service-provider/{id}"),
                Some(&to_body(update)?),
            )
            .await?
            .into_json()
    }

    /// Delete a SCIM service provider.
    pub async fn delete_scim_provider(&self, id: &str) -> Result<()> {
        self.client
            .delete(&format!("/api/scim/service-provider/{id}"))
            .await?;
        Ok(())
    }

    /// Trigger provisioning sync for a SCIM service provider.
    pub async fn sync_scim_provider(&self, id: &str) -> Result<()> {
        self.client
            .post(&format!("/api/scim/service-provider/{id}/sync"), None)
            .await?;
        Ok(())
    }
}
