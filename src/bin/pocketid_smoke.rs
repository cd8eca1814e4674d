//! Smoke check against a live Pocket ID instance.
//!
//! Reads `POCKETID_URL` and `POCKETID_API_KEY`, runs the availability
//! gate, and prints a few read-only facts. Exits non-zero on any failure
//! so it can back a deployment check.
//!
//! Usage:
//!   POCKETID_URL=https://id.example.com POCKETID_API_KEY=... pocketid-smoke

use pocketid_api::PocketIdAdminClient;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run().await {
        eprintln!("smoke check failed: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), pocketid_api::Error> {
    let admin = PocketIdAdminClient::from_env()?;

    admin.inner().ensure_available().await?;
    info!(base_url = admin.inner().base_url(), "instance reachable");

    let version = admin.latest_version().await?;
    println!("latest version: {}", version.version);

    let users = admin.list_users(None).await?;
    println!("users: {}", users.pagination.total_items);

    let clients = admin.list_oidc_clients(None).await?;
    println!("oidc clients: {}", clients.pagination.total_items);

    Ok(())
}
