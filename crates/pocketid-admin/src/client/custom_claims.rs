//! Custom claim operations.

use pocketid_client::Result;

use crate::client::to_body;
use crate::types::CustomClaim;

impl super::PocketIdAdminClient {
    /// Claim keys the upstream suggests, based on existing claims.
    pub async fn custom_claim_suggestions(&self) -> Result<Vec<String>> {
        self.client
            .get("/api/custom-claims/suggestions", &[])
            .await?
            .into_json()
    }

    /// Replace the custom claims attached to a user.
    pub async fn set_user_custom_claims(
        &self,
        user_id: &str,
        claims: &[CustomClaim],
    ) -> Result<Vec<CustomClaim>> {
        self.client
            .put(
                &format!("/api/custom-claims/user/{user_id}"),
                Some(&to_body(&claims)?),
            )
            .await?
            .into_json()
    }

    /// Replace the custom claims attached to a user group.
    pub async fn set_user_group_custom_claims(
        &self,
        group_id: &str,
        claims: &[CustomClaim],
    ) -> Result<Vec<CustomClaim>> {
        self.client
            .put(
                &format!("/api/custom-claims/user-group/{group_id}"),
                Some(&to_body(&claims)?),
            )
            .await?
            .into_json()
    }
}
