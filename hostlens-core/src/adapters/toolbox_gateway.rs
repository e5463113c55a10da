//! Gateways over the real HTTP client.

use async_trait::async_trait;

use hostlens_toolbox::{LookupPayload, SearchPayload, Target, ToolboxClient, ToolboxError, ToolboxResult};

use crate::config::LookupConfig;
use crate::traits::{LookupGateway, SearchGateway, TokenProvider};

/// Implements all three upstream traits with one shared [`ToolboxClient`].
#[derive(Debug, Clone)]
pub struct ToolboxGateway {
    client: ToolboxClient,
    lookup_endpoint: String,
    token_page_url: Option<String>,
    search_url: Option<String>,
}

impl ToolboxGateway {
    pub fn new(client: ToolboxClient, config: &LookupConfig) -> Self {
        Self {
            client,
            lookup_endpoint: config.lookup_endpoint.clone(),
            token_page_url: config.token_page_url(),
            search_url: config.search_url(),
        }
    }
}

#[async_trait]
impl LookupGateway for ToolboxGateway {
    async fn lookup(&self, target: &Target) -> ToolboxResult<LookupPayload> {
        self.client.lookup(&self.lookup_endpoint, target).await
    }
}

#[async_trait]
impl TokenProvider for ToolboxGateway {
    async fn fetch_token(&self) -> Option<String> {
        let page = self.token_page_url.as_deref()?;
        match self.client.fetch_token(page).await {
            Ok(token) => Some(token),
            Err(e) if e.is_expected() => {
                log::warn!("[token] {e}");
                None
            }
            Err(e) => {
                log::error!("[token] {page}: {e}");
                None
            }
        }
    }
}

#[async_trait]
impl SearchGateway for ToolboxGateway {
    async fn search(&self, token: &str, term: &str) -> ToolboxResult<SearchPayload> {
        let url = self
            .search_url
            .as_deref()
            .ok_or_else(|| ToolboxError::ValidationError("search is not configured".to_string()))?;
        self.client.search(url, token, term).await
    }
}
