//! OIDC client management operations.

use tracing::instrument;

use pocketid_client::{ListParams, Result};

use crate::client::to_body;
use crate::types::{
    AuthorizedOidcClient, ClientSecret, OidcClient, OidcClientCreate, OidcClientPreview,
    OidcClientSummary, OidcClientUpdate, Paginated,
};

impl super::PocketIdAdminClient {
    /// List OIDC clients.
    pub async fn list_oidc_clients(
        &self,
        params: Option<&ListParams>,
    ) -> Result<Paginated<OidcClientSummary>> {
        self.client
            .get_list("/api/oidc/clients", params)
            .await?
            .into_json()
    }

    /// Get one OIDC client by id.
    pub async fn get_oidc_client(&self, id: &str) -> Result<OidcClient> {
        self.client
            .get(&format!("/api/oidc/clients/{id}"), &[])
            .await?
            .into_json()
    }

    /// Register an OIDC client.
    #[instrument(skip(self, client))]
    pub async fn create_oidc_client(&self, client: &OidcClientCreate) -> Result<OidcClient> {
        self.client
            .post("/api/oidc/clients", Some(&to_body(client)?))
            .await?
            .into_json()
    }

    /// Apply a partial update to an OIDC client.
    pub async fn update_oidc_client(
        &self,
        id: &str,
        update: &OidcClientUpdate,
    ) -> Result<OidcClient> {
        self.client
            .put(&format!("/api/oidc/clients/{id}"), Some(&to_body(update)?))
            .await?
            .into_json()
    }

    /// Delete an OIDC client.
    pub async fn delete_oidc_client(&self, id: &str) -> Result<()> {
        self.client
            .delete(&format!("/api/oidc/clients/{id}"))
            .await?;
        Ok(())
    }

    /// Rotate and return a new client secret. The secret is only ever
    /// returned by this call.
    pub async fn rotate_oidc_client_secret(&self, id: &str) -> Result<ClientSecret> {
        self.client
            .post(&format!("/api/oidc/clients/{id}/secret"), None)
            .await?
            .into_json()
    }

    /// Restrict the client to the given user groups.
    pub async fn set_oidc_client_allowed_groups(
        &self,
        id: &str,
        user_group_ids: &[String],
    ) -> Result<()> {
        let body = serde_json::json!({ "userGroupIds": user_group_ids });
        self.client
            .put(
                &format!("/api/oidc/clients/{id}/allowed-user-groups"),
                Some(&body),
            )
            .await?;
        Ok(())
    }

    /// Preview the claims the upstream would issue to a user for this client.
    pub async fn preview_oidc_client_for_user(
        &self,
        id: &str,
        user_id: &str,
    ) -> Result<OidcClientPreview> {
        self.client
            .get(&format!("/api/oidc/clients/{id}/preview/{user_id}"), &[])
            .await?
            .into_json()
    }

    /// List the clients a user has authorized.
    pub async fn authorized_clients_for_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<AuthorizedOidcClient>> {
        self.client
            .get(&format!("/api/oidc/users/{user_id}/authorized-clients"), &[])
            .await?
            .into_json()
    }

    /// Revoke the calling user's own authorization of a client.
    pub async fn revoke_own_client_authorization(&self, client_id: &str) -> Result<()> {
        self.client
            .delete(&format!("/api/oidc/users/me/authorized-clients/{client_id}"))
            .await?;
        Ok(())
    }
}
