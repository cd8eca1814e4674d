//! User group operations.

use pocketid_client::{ListParams, Result};

use crate::client::to_body;
use crate::types::{Paginated, UserGroup, UserGroupCreate, UserGroupUpdate};

impl super::PocketIdAdminClient {
    /// List user groups.
    pub async fn list_user_groups(
        &self,
        params: Option<&ListParams>,
    ) -> Result<Paginated<UserGroup>> {
        self.client
            .get_list("/api/user-groups", params)
            .await?
            .into_json()
    }

    /// Get one user group by id.
    pub async fn get_user_group(&self, id: &str) -> Result<UserGroup> {
        self.client
            .get(&format!("/api/user-groups/{id}"), &[])
            .await?
            .into_json()
    }

    /// Create a user group.
    pub async fn create_user_group(&self, group: &UserGroupCreate) -> Result<UserGroup> {
        self.client
            .post("/api/user-groups", Some(&to_body(group)?))
            .await?
            .into_json()
    }

    /// Apply a partial update to a user group.
    pub async fn update_user_group(
        &self,
        id: &str,
        update: &UserGroupUpdate,
    ) -> Result<UserGroup> {
        self.client
            .put(&format!("/api/user-groups/{id}"), Some(&to_body(update)?))
            .await?
            .into_json()
    }

    /// Delete a user group.
    pub async fn delete_user_group(&self, id: &str) -> Result<()> {
        self.client
            .delete(&format!("/api/user-groups/{id}"))
            .await?;
        Ok(())
    }

    /// Replace a group's members with the given set of user ids.
    pub async fn set_user_group_members(
        &self,
        id: &str,
        user_ids: &[String],
    ) -> Result<UserGroup> {
        let body = serde_json::json!({ "userIds": user_ids });
        self.client
            .put(&format!("/api/user-groups/{id}/users"), Some(&body))
            .await?
            .into_json()
    }

    /// Replace the OIDC clients a group is allowed to use.
    pub async fn set_user_group_allowed_clients(
        &self,
        id: &str,
        oidc_client_ids: &[String],
    ) -> Result<UserGroup> {
        let body = serde_json::json!({ "oidcClientIds": oidc_client_ids });
        self.client
            .put(
                &format!("/api/user-groups/{id}/allowed-oidc-clients"),
                Some(&body),
            )
            .await?
            .into_json()
    }
}
