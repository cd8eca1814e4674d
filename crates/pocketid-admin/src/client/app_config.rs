//! Application configuration operations.

use pocketid_client::Result;

use crate::client::to_body;
use crate::types::{AppConfigUpdate, AppConfigVariable};

impl super::PocketIdAdminClient {
    /// Publicly visible configuration variables.
    pub async fn public_app_config(&self) -> Result<Vec<AppConfigVariable>> {
        self.client
            .get("/api/application-configuration", &[])
            .await?
            .into_json()
    }

    /// All configuration variables, including private ones.
    pub async fn all_app_config(&self) -> Result<Vec<AppConfigVariable>> {
        self.client
            .get("/api/application-configuration/all", &[])
            .await?
            .into_json()
    }

    /// Apply a partial configuration update; returns the resulting variables.
    pub async fn update_app_config(
        &self,
        update: &AppConfigUpdate,
    ) -> Result<Vec<AppConfigVariable>> {
        self.client
            .put("/api/application-configuration", Some(&to_body(update)?))
            .await?
            .into_json()
    }

    /// Send a test email, to the given address or to the key's own user.
    pub async fn send_test_email(&self, email: Option<&str>) -> Result<()> {
        let body = email.map(|email| serde_json::json!({ "email": email }));
        self.client
            .post("/api/application-configuration/test-email", body.as_ref())
            .await?;
        Ok(())
    }

    /// Trigger an LDAP directory sync.
    pub async fn sync_ldap(&self) -> Result<()> {
        self.client
            .post("/api/application-configuration/sync-ldap", None)
            .await?;
        Ok(())
    }
}
