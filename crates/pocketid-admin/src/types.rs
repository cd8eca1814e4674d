//! Wire types for the Pocket ID admin API.
//!
//! Field names follow the upstream JSON (camelCase, with a few legacy
//! all-caps URL fields). Optional fields mirror what the upstream omits
//! or nulls; request types skip absent fields entirely so partial
//! updates stay partial on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Pagination metadata attached to list responses.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub current_page: u32,
    pub items_per_page: u32,
    pub total_items: u64,
    pub total_pages: u32,
}

/// One page of a list endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

// =============================================================================
// Users
// =============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub display_name: String,
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_verified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_group_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body for creating a user.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCreate {
    pub username: String,
    pub display_name: String,
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_verified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_group_ids: Option<Vec<String>>,
}

/// Partial update body for a user; absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_verified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_group_ids: Option<Vec<String>>,
}

/// One-time access token minted for a user.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OneTimeAccessToken {
    pub token: String,
}

// =============================================================================
// User groups
// =============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserGroup {
    pub id: String,
    pub name: String,
    pub friendly_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_oidc_client_ids: Option<Vec<String>>,
}

/// Body for creating a user group.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserGroupCreate {
    pub name: String,
    pub friendly_name: String,
}

/// Partial update body for a user group.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserGroupUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<String>,
}

// =============================================================================
// OIDC clients
// =============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OidcClient {
    pub id: String,
    pub name: String,
    #[serde(rename = "callbackURLs")]
    pub callback_urls: Vec<String>,
    #[serde(rename = "logoutURLs")]
    pub logout_urls: Vec<String>,
    pub is_public: bool,
    pub pkce_enabled: bool,
    pub has_logo: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_user_group_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// List-endpoint view of an OIDC client.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OidcClientSummary {
    #[serde(flatten)]
    pub client: OidcClient,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_user_group_count: Option<u64>,
}

/// Body for creating an OIDC client.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OidcClientCreate {
    pub name: String,
    #[serde(rename = "callbackURLs", skip_serializing_if = "Option::is_none")]
    pub callback_urls: Option<Vec<String>>,
    #[serde(rename = "logoutURLs", skip_serializing_if = "Option::is_none")]
    pub logout_urls: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pkce_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_logo: Option<bool>,
}

/// Partial update body for an OIDC client.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OidcClientUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "callbackURLs", skip_serializing_if = "Option::is_none")]
    pub callback_urls: Option<Vec<String>>,
    #[serde(rename = "logoutURLs", skip_serializing_if = "Option::is_none")]
    pub logout_urls: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pkce_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_logo: Option<bool>,
}

/// Freshly rotated client secret; shown only once by the upstream.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientSecret {
    pub secret: String,
}

/// Claims the upstream would issue to a given user for a given client.
#[derive(Debug, Clone, Deserialize)]
pub struct OidcClientPreview {
    pub user: User,
    pub claims: serde_json::Value,
}

/// A client the user has authorized.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizedOidcClient {
    pub client_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    pub authorized_at: DateTime<Utc>,
}

// =============================================================================
// API keys
// =============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKey {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub expires_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_used_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Create/renew response: the key plus its secret token, shown only once.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeyWithToken {
    pub api_key: ApiKey,
    pub token: String,
}

/// Body for creating an API key.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeyCreate {
    pub name: String,
    pub expires_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// =============================================================================
// Audit logs
// =============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogEntry {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

// =============================================================================
// Signup tokens
// =============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupToken {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub usage_limit: u32,
    pub usage_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_group_ids: Option<Vec<String>>,
}

/// Body for creating a signup token. `ttl` is an upstream duration string
/// such as `"24h"`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupTokenCreate {
    pub ttl: String,
    pub usage_limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_group_ids: Option<Vec<String>>,
}

// =============================================================================
// Custom claims
// =============================================================================

/// A key/value claim attached to a user or group.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CustomClaim {
    pub key: String,
    pub value: String,
}

// =============================================================================
// SCIM
// =============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScimServiceProvider {
    pub id: String,
    pub endpoint: String,
    pub oidc_client_id: String,
    pub token: String,
    pub created_at: DateTime<Utc>,
}

/// Body for registering a SCIM service provider.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScimServiceProviderCreate {
    pub endpoint: String,
    pub oidc_client_id: String,
    pub token: String,
}

/// Partial update body for a SCIM service provider.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScimServiceProviderUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oidc_client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

// =============================================================================
// Application configuration
// =============================================================================

/// One configuration variable as exposed by the upstream.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfigVariable {
    pub key: String,
    pub value: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
}

/// Partial application-configuration update. Only present fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfigUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_page_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_own_account_edit: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_user_signups: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_animations: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_api_key_expiration_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_login_notification_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_one_time_access_as_admin_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_one_time_access_as_unauthenticated_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_verification_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_verification_template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emails_verified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_user_email: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smtp_host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smtp_port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smtp_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smtp_user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smtp_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smtp_tls: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ldap_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ldap_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ldap_bind_dn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ldap_bind_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ldap_base_dn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ldap_admin_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ldap_skip_cert_verify: Option<bool>,
}

// =============================================================================
// Utility
// =============================================================================

/// Latest released upstream version.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionInfo {
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<DateTime<Utc>>,
}
