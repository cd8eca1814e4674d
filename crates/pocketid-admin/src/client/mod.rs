//! Typed Pocket ID admin API client.
//!
//! This client wraps [`PocketIdClient`] from `pocketid-client` and adds
//! one typed method per admin operation. Each method is a thin delegation
//! to the verb facade; all transport, gating, and error-normalization
//! behavior lives in the core crate.

use serde::Serialize;

use pocketid_client::{PocketIdClient, PocketIdConfig, Result};

mod api_keys;
mod app_config;
mod app_images;
mod audit_logs;
mod custom_claims;
mod oidc_clients;
mod scim;
mod signup_tokens;
mod user_groups;
mod users;
mod well_known;

/// Typed admin API client for one Pocket ID instance.
///
/// # Example
///
/// ```rust,ignore
/// use pocketid_admin::PocketIdAdminClient;
/// use pocketid_client::ListParams;
///
/// let admin = PocketIdAdminClient::from_env()?;
///
/// let users = admin.list_users(Some(&ListParams::new().limit(50))).await?;
/// for user in users.data {
///     println!("{} ({})", user.username, user.id);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct PocketIdAdminClient {
    client: PocketIdClient,
}

impl PocketIdAdminClient {
    /// Create an admin client for the given endpoint configuration.
    pub fn new(config: PocketIdConfig) -> Result<Self> {
        Ok(Self {
            client: PocketIdClient::new(config)?,
        })
    }

    /// Create an admin client from `POCKETID_URL` and `POCKETID_API_KEY`.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            client: PocketIdClient::from_env()?,
        })
    }

    /// Create an admin client over an existing core client.
    pub fn from_client(client: PocketIdClient) -> Self {
        Self { client }
    }

    /// Get the underlying core client.
    pub fn inner(&self) -> &PocketIdClient {
        &self.client
    }
}

/// Serialize a typed request body for the verb facade.
pub(crate) fn to_body<T: Serialize>(body: &T) -> Result<serde_json::Value> {
    serde_json::to_value(body).map_err(Into::into)
}
