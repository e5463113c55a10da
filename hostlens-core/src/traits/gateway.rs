//! Upstream data sources used by the fetch lanes.

use async_trait::async_trait;
use hostlens_toolbox::{LookupPayload, SearchPayload, Target, ToolboxResult};

/// DNS/GeoIP lookup service.
///
/// Implementations do not enforce the lane deadline; the orchestrator wraps
/// every call in its own timeout.
#[async_trait]
pub trait LookupGateway: Send + Sync {
    async fn lookup(&self, target: &Target) -> ToolboxResult<LookupPayload>;
}

/// Source of the CSRF token the search API requires.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// `None` when no token could be obtained. Absence is an expected outcome,
    /// so implementations log their own failures and never return an error.
    async fn fetch_token(&self) -> Option<String>;
}

/// Customer-management intellisearch API.
#[async_trait]
pub trait SearchGateway: Send + Sync {
    async fn search(&self, token: &str, term: &str) -> ToolboxResult<SearchPayload>;
}
