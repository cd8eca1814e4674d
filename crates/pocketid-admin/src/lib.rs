//! # pocketid-admin
//!
//! Typed client for the Pocket ID admin REST API.
//!
//! One method per admin operation, grouped by resource:
//!
//! - **Users** - CRUD, group membership, one-time access
//! - **User groups** - CRUD, members, allowed OIDC clients
//! - **OIDC clients** - CRUD, secrets, allowed groups, claim previews
//! - **API keys** - create, renew, delete
//! - **Audit logs** - paginated queries and filter values
//! - **Signup tokens, custom claims, SCIM providers**
//! - **Application configuration and images**
//! - **Well-known** - OIDC discovery, JWKS, version
//!
//! Transport behavior (availability gating, timeouts, the error taxonomy)
//! comes from `pocketid-client`; this crate only adds types and paths.
//!
//! ## Example
//!
//! ```rust,ignore
//! use pocketid_admin::PocketIdAdminClient;
//! use pocketid_client::ListParams;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), pocketid_client::Error> {
//!     let admin = PocketIdAdminClient::from_env()?;
//!
//!     let page = admin
//!         .list_users(Some(&ListParams::new().search("alice")))
//!         .await?;
//!     println!("{} users", page.pagination.total_items);
//!
//!     Ok(())
//! }
//! ```

mod client;
pub mod types;

pub use client::PocketIdAdminClient;

// Re-export the core crate's surface so most callers need one import.
pub use pocketid_client::{
    Error, ErrorKind, ListParams, Payload, PocketIdConfig, Result, SortDirection,
};
