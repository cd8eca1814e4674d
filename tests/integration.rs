//! Integration test suite (requires a live Pocket ID instance).
//!
//! Run with:
//!   POCKETID_URL=... POCKETID_API_KEY=... cargo test --test integration -- --ignored --nocapture
//!
//! Tests are read-only: they never create, modify, or delete anything on
//! the target instance.

use pocketid_api::client::ListParams;
use pocketid_api::PocketIdAdminClient;

fn live_admin() -> Option<PocketIdAdminClient> {
    if std::env::var("POCKETID_URL").is_err() || std::env::var("POCKETID_API_KEY").is_err() {
        eprintln!("POCKETID_URL / POCKETID_API_KEY not set, skipping");
        return None;
    }
    Some(PocketIdAdminClient::from_env().expect("client construction"))
}

#[tokio::test]
#[ignore = "requires a live Pocket ID instance"]
async fn health_gate_passes() {
    let Some(admin) = live_admin() else { return };
    admin.inner().ensure_available().await.expect("healthz");
    assert!(admin.inner().availability().is_available());
}

#[tokio::test]
#[ignore = "requires a live Pocket ID instance"]
async fn lists_users_with_pagination() {
    let Some(admin) = live_admin() else { return };
    let page = admin
        .list_users(Some(&ListParams::new().page(1).limit(5)))
        .await
        .expect("list users");
    assert!(page.data.len() <= 5);
    eprintln!("total users: {}", page.pagination.total_items);
}

#[tokio::test]
#[ignore = "requires a live Pocket ID instance"]
async fn reads_public_configuration() {
    let Some(admin) = live_admin() else { return };
    let variables = admin.public_app_config().await.expect("public config");
    assert!(variables.iter().all(|v| !v.key.is_empty()));
}

#[tokio::test]
#[ignore = "requires a live Pocket ID instance"]
async fn reads_oidc_discovery_document() {
    let Some(admin) = live_admin() else { return };
    let doc = admin.openid_configuration().await.expect("discovery");
    assert!(doc.get("issuer").is_some());
}
