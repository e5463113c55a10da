//! Service façade exposing the three upstream operations.
//!
//! [`ToolboxClient`] owns one shared `reqwest::Client`. Overall deadlines are
//! enforced by the caller; the client only bounds connection setup.

mod http;
mod lookup;
mod search;
mod token;

use std::time::Duration;

use reqwest::Client;

use crate::error::{ToolboxError, ToolboxResult};
use crate::types::{LookupPayload, SearchPayload, Target};

pub use http::{truncate_for_log, HttpUtils};
pub use lookup::{lookup_url, parse_lookup_body};
pub use search::{parse_search_body, search_form, SEARCH_PATH};
pub use token::extract_csrf_token;

/// Connection setup timeout (seconds)
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Entry point for all upstream calls.
///
/// ```rust,no_run
/// use hostlens_toolbox::{classify_target, ToolboxClient};
/// # async fn demo() -> hostlens_toolbox::ToolboxResult<()> {
/// let client = ToolboxClient::new()?;
/// if let Some(target) = classify_target("example.com") {
///     let payload = client.lookup("http://127.0.0.1:8000/dns-lookup/", &target).await?;
///     println!("{} A records", payload.records.a.len());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ToolboxClient {
    http: Client,
}

impl ToolboxClient {
    /// Build a client with the default connect timeout.
    pub fn new() -> ToolboxResult<Self> {
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| ToolboxError::NetworkError(format!("Failed to create HTTP client: {e}")))?;
        Ok(Self { http })
    }

    /// Wrap an existing client (shared connection pool, custom TLS, proxies).
    pub fn with_client(http: Client) -> Self {
        Self { http }
    }

    /// Query the lookup service for `target`.
    pub async fn lookup(&self, endpoint: &str, target: &Target) -> ToolboxResult<LookupPayload> {
        lookup::lookup(&self.http, endpoint, target).await
    }

    /// Fetch the host page and scrape its CSRF token.
    pub async fn fetch_token(&self, page_url: &str) -> ToolboxResult<String> {
        token::fetch_token(&self.http, page_url).await
    }

    /// Run a customer search for `term`.
    pub async fn search(
        &self,
        search_url: &str,
        token: &str,
        term: &str,
    ) -> ToolboxResult<SearchPayload> {
        search::search(&self.http, search_url, token, term).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::classify_target;

    #[tokio::test]
    async fn lookup_rejects_missing_endpoint() {
        let client = ToolboxClient::new().unwrap();
        let target = classify_target("example.com").unwrap();
        assert!(matches!(
            client.lookup("", &target).await,
            Err(ToolboxError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn lookup_reports_refused_connection_as_network_error() {
        let client = ToolboxClient::new().unwrap();
        let target = classify_target("example.com").unwrap();
        // Port 9 (discard) is closed on loopback in any sane test environment.
        let result = client.lookup("http://127.0.0.1:9/dns-lookup/", &target).await;
        assert!(matches!(result, Err(ToolboxError::NetworkError(_))));
    }

    #[tokio::test]
    #[ignore = "requires a running lookup service on 127.0.0.1:8000"]
    async fn lookup_real_service() {
        let client = ToolboxClient::new().unwrap();
        let target = classify_target("example.com").unwrap();
        let payload = client
            .lookup("http://127.0.0.1:8000/dns-lookup/", &target)
            .await
            .unwrap_or_else(|e| panic!("lookup failed (service down?): {e}"));
        assert!(!payload.records.a.is_empty());
    }
}
