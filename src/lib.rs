//! # pocketid-api
//!
//! A Pocket ID admin API client library for Rust.
//!
//! This library provides typed access to the administrative REST API of a
//! [Pocket ID](https://pocket-id.org) instance, authenticated with a
//! static API key.
//!
//! ## Crates
//!
//! - **pocketid-client** - Core HTTP access layer: availability gating,
//!   request construction, timeouts, error normalization, binary uploads
//! - **pocketid-admin** - Typed admin API: users, groups, OIDC clients,
//!   API keys, audit logs, configuration
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use pocketid_api::PocketIdAdminClient;
//! use pocketid_api::client::ListParams;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads POCKETID_URL and POCKETID_API_KEY
//!     let admin = PocketIdAdminClient::from_env()?;
//!
//!     let users = admin.list_users(Some(&ListParams::new().limit(20))).await?;
//!     for user in users.data {
//!         println!("{} ({})", user.username, user.id);
//!     }
//!
//!     Ok(())
//! }
//! ```

// Re-export both crates for convenient access
pub use pocketid_admin as admin;
pub use pocketid_client as client;

// Re-export commonly used types at the top level
pub use pocketid_admin::PocketIdAdminClient;
pub use pocketid_client::{Error, ErrorKind, ListParams, PocketIdClient, PocketIdConfig};
