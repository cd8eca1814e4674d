//! Signup token operations.

use pocketid_client::{ListParams, Result};

use crate::client::to_body;
use crate::types::{Paginated, SignupToken, SignupTokenCreate};

impl super::PocketIdAdminClient {
    /// List signup tokens.
    pub async fn list_signup_tokens(
        &self,
        params: Option<&ListParams>,
    ) -> Result<Paginated<SignupToken>> {
        self.client
            .get_list("/api/signup-tokens", params)
            .await?
            .into_json()
    }

    /// Create a signup token.
    pub async fn create_signup_token(&self, token: &SignupTokenCreate) -> Result<SignupToken> {
        self.client
            .post("/api/signup-tokens", Some(&to_body(token)?))
            .await?
            .into_json()
    }

    /// Delete a signup token.
    pub async fn delete_signup_token(&self, id: &str) -> Result<()> {
        self.client
            .delete(&format!("/api/signup-tokens/{id}"))
            .await?;
        Ok(())
    }
}
