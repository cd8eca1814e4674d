//! # pocketid-client
//!
//! Core HTTP access layer for the Pocket ID admin API.
//!
//! Every call into this crate funnels through one shared path:
//! availability gating, URL construction, a bounded exchange, and
//! response classification. Higher-level crates (pocketid-admin) add
//! typed methods per resource on top of the verb facade here.
//!
//! - One upstream base URL, one static API key (`X-API-KEY` header)
//! - One-time health probe with concurrent-caller de-duplication
//! - Uniform error taxonomy across heterogeneous response bodies
//! - Three-way payload classification: empty / JSON / text
//! - Multipart upload path for base64-encoded blobs
//!
//! No retries, no circuit breaking; callers decide what a failure means.
//!
//! ## Example
//!
//! ```rust,ignore
//! use pocketid_client::{ListParams, PocketIdClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), pocketid_client::Error> {
//!     let client = PocketIdClient::from_env()?;
//!
//!     let users = client
//!         .get_list("/api/users", Some(&ListParams::new().page(1).limit(20)))
//!         .await?;
//!
//!     println!("{users:?}");
//!     Ok(())
//! }
//! ```

mod availability;
mod client;
mod config;
mod error;
mod request;
mod response;

pub use availability::AvailabilityGate;
pub use client::{
    PocketIdClient, DEFAULT_UPLOAD_MIME, HEALTH_PATH, UPLOAD_FIELD, UPLOAD_FILENAME,
};
pub use config::{PocketIdConfig, API_KEY_ENV_VAR, URL_ENV_VAR};
pub use error::{Error, ErrorKind, Result};
pub use request::{ListParams, SortDirection, API_KEY_HEADER, DEFAULT_TIMEOUT, HEALTH_TIMEOUT};
pub use response::Payload;

/// User-Agent string for the client.
pub const USER_AGENT: &str = concat!("pocketid-api/", env!("CARGO_PKG_VERSION"));
