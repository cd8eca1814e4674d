//! HTTP access layer for the Pocket ID admin API.
//!
//! Every operation funnels through [`PocketIdClient::execute`]: the
//! availability gate runs first, then the exchange with a bounded
//! deadline, then response classification. Failures surface as one of
//! the typed kinds in [`crate::ErrorKind`]; nothing is retried here.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::Method;
use tracing::{debug, instrument};

use crate::availability::AvailabilityGate;
use crate::config::{PocketIdConfig, API_KEY_ENV_VAR, URL_ENV_VAR};
use crate::error::{Error, ErrorKind, Result};
use crate::request::{build_url, ListParams, API_KEY_HEADER, DEFAULT_TIMEOUT, HEALTH_TIMEOUT};
use crate::response::{classify, Payload};

/// Availability probe path.
pub const HEALTH_PATH: &str = "/healthz";

/// Multipart field name for file uploads.
pub const UPLOAD_FIELD: &str = "file";

/// Fixed filename attached to uploaded blobs.
pub const UPLOAD_FILENAME: &str = "upload";

/// MIME type used when an upload does not specify one.
pub const DEFAULT_UPLOAD_MIME: &str = "application/octet-stream";

/// Client for one Pocket ID instance with one static API key.
///
/// Cheap to clone; clones share the HTTP connection pool and the
/// availability state.
#[derive(Debug, Clone)]
pub struct PocketIdClient {
    http: reqwest::Client,
    config: PocketIdConfig,
    gate: Arc<AvailabilityGate>,
}

impl PocketIdClient {
    /// Create a client for the given endpoint configuration.
    pub fn new(config: PocketIdConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(crate::USER_AGENT)
            .build()
            .map_err(|e| Error::with_source(ErrorKind::Config(e.to_string()), e))?;

        Ok(Self {
            http,
            config,
            gate: Arc::new(AvailabilityGate::new()),
        })
    }

    /// Create a client from `POCKETID_URL` and `POCKETID_API_KEY`.
    pub fn from_env() -> Result<Self> {
        Self::new(PocketIdConfig::from_env())
    }

    /// Get the endpoint configuration.
    pub fn config(&self) -> &PocketIdConfig {
        &self.config
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    /// Get the availability gate shared by all clones of this client.
    pub fn availability(&self) -> &AvailabilityGate {
        &self.gate
    }

    /// Verify the instance is reachable, probing `/healthz` at most once.
    ///
    /// Concurrent first-time callers share a single probe; a successful
    /// outcome is memoized for the lifetime of the client, a failed one is
    /// cleared so the next call retries.
    pub async fn ensure_available(&self) -> Result<()> {
        self.gate.ensure(|| self.probe()).await
    }

    fn probe(&self) -> impl Future<Output = Result<()>> + Send + 'static {
        let http = self.http.clone();
        let config = self.config.clone();
        async move {
            if config.base_url().is_empty() {
                return Err(Error::new(ErrorKind::Config(format!(
                    "{URL_ENV_VAR} is not set"
                ))));
            }
            if config.api_key().is_empty() {
                return Err(Error::new(ErrorKind::Config(format!(
                    "{API_KEY_ENV_VAR} is not set"
                ))));
            }

            debug!(path = HEALTH_PATH, "health probe");
            let response = http
                .get(format!("{}{}", config.base_url(), HEALTH_PATH))
                .header(API_KEY_HEADER, config.api_key())
                .timeout(HEALTH_TIMEOUT)
                .send()
                .await
                .map_err(|e| {
                    Error::with_source(
                        ErrorKind::HealthCheck {
                            status: None,
                            message: e.to_string(),
                        },
                        e,
                    )
                })?;

            let status = response.status();
            if !status.is_success() {
                return Err(Error::new(ErrorKind::HealthCheck {
                    status: Some(status.as_u16()),
                    message: format!("status {status}"),
                }));
            }

            // The healthz body varies by deployment (bare string or JSON
            // object); a successful status is the only signal used.
            Ok(())
        }
    }

    /// Perform one exchange against the instance.
    ///
    /// Passes the availability gate, attaches the API key header, sends
    /// the optional JSON body, and classifies the response. The deadline
    /// applies to this exchange only.
    #[instrument(skip(self, body, query))]
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
        query: &[(String, String)],
        timeout: Duration,
    ) -> Result<Payload> {
        self.ensure_available().await?;

        let url = build_url(self.config.base_url(), path, query)?;
        debug!(method = %method, path, "HTTP request");

        let mut request = self
            .http
            .request(method.clone(), &url)
            .header(API_KEY_HEADER, self.config.api_key())
            .timeout(timeout);

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        classify(response, &method, path).await
    }

    // =========================================================================
    // Verb facade
    // =========================================================================

    /// GET a resource.
    pub async fn get(&self, path: &str, query: &[(String, String)]) -> Result<Payload> {
        self.execute(Method::GET, path, None, query, DEFAULT_TIMEOUT)
            .await
    }

    /// GET a list endpoint with pagination-shaped query parameters.
    pub async fn get_list(&self, path: &str, params: Option<&ListParams>) -> Result<Payload> {
        let query = params.map(ListParams::to_query).unwrap_or_default();
        self.execute(Method::GET, path, None, &query, DEFAULT_TIMEOUT)
            .await
    }

    /// POST with an optional JSON body.
    pub async fn post(&self, path: &str, body: Option<&serde_json::Value>) -> Result<Payload> {
        self.execute(Method::POST, path, body, &[], DEFAULT_TIMEOUT)
            .await
    }

    /// PUT with an optional JSON body.
    pub async fn put(&self, path: &str, body: Option<&serde_json::Value>) -> Result<Payload> {
        self.execute(Method::PUT, path, body, &[], DEFAULT_TIMEOUT)
            .await
    }

    /// DELETE a resource.
    pub async fn delete(&self, path: &str) -> Result<Payload> {
        self.execute(Method::DELETE, path, None, &[], DEFAULT_TIMEOUT)
            .await
    }

    /// PUT a base64-encoded blob as a multipart file upload.
    ///
    /// The payload is decoded before anything touches the network, so
    /// malformed input fails without a single request being issued. The
    /// multipart boundary header comes from the body encoding; no JSON
    /// content type is set.
    #[instrument(skip(self, base64_data))]
    pub async fn put_file(
        &self,
        path: &str,
        base64_data: &str,
        mime_type: &str,
    ) -> Result<Payload> {
        let bytes = BASE64.decode(base64_data)?;

        self.ensure_available().await?;

        let url = build_url(self.config.base_url(), path, &[])?;
        debug!(method = "PUT", path, "HTTP file upload");

        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(UPLOAD_FILENAME)
            .mime_str(mime_type)
            .map_err(|e| Error::with_source(ErrorKind::Other(e.to_string()), e))?;
        let form = reqwest::multipart::Form::new().part(UPLOAD_FIELD, part);

        let response = self
            .http
            .put(&url)
            .header(API_KEY_HEADER, self.config.api_key())
            .timeout(DEFAULT_TIMEOUT)
            .multipart(form)
            .send()
            .await?;

        classify(response, &Method::PUT, path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> PocketIdClient {
        PocketIdClient::new(PocketIdConfig::new(server.uri(), "test-key")).unwrap()
    }

    async fn mount_healthz(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path(HEALTH_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string("healthy"))
            .mount(server)
            .await;
    }

    async fn probe_count(server: &MockServer) -> usize {
        server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|r| r.url.path() == HEALTH_PATH)
            .count()
    }

    #[tokio::test]
    async fn test_concurrent_calls_share_one_probe() {
        let server = MockServer::start().await;
        mount_healthz(&server).await;
        Mock::given(method("GET"))
            .and(path("/api/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let (a, b, c) = tokio::join!(
            client.get("/api/users", &[]),
            client.get("/api/users", &[]),
            client.get("/api/users", &[]),
        );

        assert!(a.is_ok() && b.is_ok() && c.is_ok());
        assert_eq!(probe_count(&server).await, 1);
    }

    #[tokio::test]
    async fn test_successful_probe_is_memoized() {
        let server = MockServer::start().await;
        mount_healthz(&server).await;
        Mock::given(method("GET"))
            .and(path("/api/version/latest"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "version": "1.0.0"
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        for _ in 0..4 {
            client.get("/api/version/latest", &[]).await.unwrap();
        }

        assert_eq!(probe_count(&server).await, 1);
    }

    #[tokio::test]
    async fn test_failed_probe_is_not_poisoned() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(HEALTH_PATH))
            .respond_with(ResponseTemplate::new(503))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        mount_healthz(&server).await;
        Mock::given(method("GET"))
            .and(path("/api/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&server)
            .await;

        let client = client_for(&server);

        let err = client.get("/api/users", &[]).await.unwrap_err();
        assert!(err.is_health_check());
        assert_eq!(err.status(), Some(503));
        assert!(!client.availability().is_available());

        // The next call issues a fresh probe and succeeds.
        client.get("/api/users", &[]).await.unwrap();
        assert_eq!(probe_count(&server).await, 2);
    }

    #[tokio::test]
    async fn test_missing_base_url_is_config_error() {
        let client = PocketIdClient::new(PocketIdConfig::new("", "key")).unwrap();
        let err = client.get("/api/users", &[]).await.unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("POCKETID_URL"));
    }

    #[tokio::test]
    async fn test_missing_api_key_is_config_error() {
        let client =
            PocketIdClient::new(PocketIdConfig::new("https://id.example.com", "")).unwrap();
        let err = client.get("/api/users", &[]).await.unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("POCKETID_API_KEY"));
    }

    #[tokio::test]
    async fn test_api_key_header_attached() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(HEALTH_PATH))
            .and(header(API_KEY_HEADER, "test-key"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/users"))
            .and(header(API_KEY_HEADER, "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        client.get("/api/users", &[]).await.unwrap();
    }

    #[tokio::test]
    async fn test_non_success_yields_upstream_error() {
        let server = MockServer::start().await;
        mount_healthz(&server).await;
        Mock::given(method("GET"))
            .and(path("/api/users/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_string("user not found"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.get("/api/users/missing", &[]).await.unwrap_err();

        let display = err.to_string();
        assert!(display.contains("GET"));
        assert!(display.contains("/api/users/missing"));
        assert!(display.contains("404"));
        assert!(display.contains("user not found"));
        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test]
    async fn test_204_yields_empty_payload() {
        let server = MockServer::start().await;
        mount_healthz(&server).await;
        Mock::given(method("DELETE"))
            .and(path("/api/users/abc"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let payload = client.delete("/api/users/abc").await.unwrap();
        assert!(payload.is_empty());
    }

    #[tokio::test]
    async fn test_json_content_type_is_parsed() {
        let server = MockServer::start().await;
        mount_healthz(&server).await;
        Mock::given(method("GET"))
            .and(path("/api/thing"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"a": 1})))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let payload = client.get("/api/thing", &[]).await.unwrap();
        assert_eq!(payload, Payload::Json(serde_json::json!({"a": 1})));
    }

    #[tokio::test]
    async fn test_non_json_content_type_stays_text() {
        let server = MockServer::start().await;
        mount_healthz(&server).await;
        Mock::given(method("GET"))
            .and(path("/api/thing"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw("{\"a\":1}", "text/plain"),
            )
            .mount(&server)
            .await;

        let client = client_for(&server);
        let payload = client.get("/api/thing", &[]).await.unwrap();
        assert_eq!(payload.as_text(), Some("{\"a\":1}"));
    }

    #[tokio::test]
    async fn test_malformed_json_body_is_hard_failure() {
        let server = MockServer::start().await;
        mount_healthz(&server).await;
        Mock::given(method("GET"))
            .and(path("/api/thing"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw("{not json", "application/json"),
            )
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.get("/api/thing", &[]).await.unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Json(_)));
    }

    #[tokio::test]
    async fn test_timeout_is_distinct_from_upstream_error() {
        let server = MockServer::start().await;
        mount_healthz(&server).await;
        Mock::given(method("GET"))
            .and(path("/api/slow"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_delay(Duration::from_millis(500))
                    .set_body_string("late"),
            )
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client
            .execute(
                Method::GET,
                "/api/slow",
                None,
                &[],
                Duration::from_millis(50),
            )
            .await
            .unwrap_err();

        assert!(err.is_timeout());
        assert_eq!(err.status(), None);
    }

    #[tokio::test]
    async fn test_query_parameters_are_encoded() {
        let server = MockServer::start().await;
        mount_healthz(&server).await;
        Mock::given(method("GET"))
            .and(path("/api/users"))
            .and(query_param("search", "a b"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        client
            .get(
                "/api/users",
                &[("search".to_string(), "a b".to_string())],
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_get_list_projects_pagination() {
        let server = MockServer::start().await;
        mount_healthz(&server).await;
        Mock::given(method("GET"))
            .and(path("/api/users"))
            .and(query_param("pagination[page]", "2"))
            .and(query_param("pagination[limit]", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [],
                "pagination": {"currentPage": 2, "itemsPerPage": 10, "totalItems": 0, "totalPages": 0}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let params = ListParams::new().page(2).limit(10);
        client.get_list("/api/users", Some(&params)).await.unwrap();
    }

    #[tokio::test]
    async fn test_post_serializes_json_body() {
        let server = MockServer::start().await;
        mount_healthz(&server).await;
        let body = serde_json::json!({"name": "ci", "expiresAt": "2027-01-01T00:00:00Z"});
        Mock::given(method("POST"))
            .and(path("/api/api-keys"))
            .and(header("content-type", "application/json"))
            .and(body_json(&body))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "ok": true
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        client.post("/api/api-keys", Some(&body)).await.unwrap();
    }

    #[tokio::test]
    async fn test_invalid_base64_fails_before_any_request() {
        let server = MockServer::start().await;
        let client = client_for(&server);

        let err = client
            .put_file("/api/application-images/logo", "!!!not-base64!!!", DEFAULT_UPLOAD_MIME)
            .await
            .unwrap_err();

        assert!(matches!(err.kind, ErrorKind::Decode(_)));
        assert!(server.received_requests().await.unwrap_or_default().is_empty());
    }

    #[tokio::test]
    async fn test_put_file_sends_multipart_form() {
        let server = MockServer::start().await;
        mount_healthz(&server).await;
        Mock::given(method("PUT"))
            .and(path("/api/application-images/logo"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let encoded = BASE64.encode(b"\x89PNG fake image bytes");
        let payload = client
            .put_file("/api/application-images/logo", &encoded, "image/png")
            .await
            .unwrap();
        assert!(payload.is_empty());

        let upload = server
            .received_requests()
            .await
            .unwrap()
            .into_iter()
            .find(|r| r.url.path() == "/api/application-images/logo")
            .unwrap();
        let content_type = upload
            .headers
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.starts_with("multipart/form-data"));
        let raw = String::from_utf8_lossy(&upload.body);
        assert!(raw.contains("name=\"file\""));
        assert!(raw.contains("filename=\"upload\""));
        assert!(raw.contains("image/png"));
    }
}
