//! The two fetch lanes.
//!
//! The lookup lane queries the DNS/GeoIP service. The search lane scrapes a
//! token and then runs the customer search. Neither lane returns an error: every outcome,
//! including deadlines, becomes a status-tagged view model for its own tab.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::time::timeout;

use hostlens_toolbox::{Target, ToolboxError, ToolboxResult};

use crate::config::LookupConfig;
use crate::services::normalizer::{normalize_lookup, normalize_search};
use crate::traits::{LookupGateway, SearchGateway, TokenProvider};
use crate::types::{Diagnostic, LookupStatus, LookupViewModel, SearchViewModel};

/// Shown when the search lane could not obtain a token.
pub const NO_TOKEN_MESSAGE: &str =
    "Failed to fetch search token. Check that the customer-management site is reachable.";
const SEARCH_PARSE_MESSAGE: &str = "Failed to parse response";
const SEARCH_NETWORK_MESSAGE: &str = "Network error. Please try again.";

/// Per-lane deadlines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneTimeouts {
    pub lookup: Duration,
    pub token: Duration,
    pub search: Duration,
}

impl From<&LookupConfig> for LaneTimeouts {
    fn from(config: &LookupConfig) -> Self {
        Self {
            lookup: config.lookup_timeout,
            token: config.token_timeout,
            search: config.search_timeout,
        }
    }
}

/// Runs the lanes against injected gateways. Cheap to clone; the runtime
/// hands one clone to every spawned lane.
#[derive(Clone)]
pub struct FetchOrchestrator {
    lookup: Arc<dyn LookupGateway>,
    tokens: Arc<dyn TokenProvider>,
    search: Arc<dyn SearchGateway>,
    timeouts: LaneTimeouts,
    /// Root for search deep links.
    link_base: Option<String>,
}

impl FetchOrchestrator {
    #[must_use]
    pub fn new(
        lookup: Arc<dyn LookupGateway>,
        tokens: Arc<dyn TokenProvider>,
        search: Arc<dyn SearchGateway>,
        timeouts: LaneTimeouts,
    ) -> Self {
        Self {
            lookup,
            tokens,
            search,
            timeouts,
            link_base: None,
        }
    }

    /// Build deep links for search records against `base`.
    #[must_use]
    pub fn with_link_base(mut self, base: Option<String>) -> Self {
        self.link_base = base;
        self
    }

    /// One lookup under the lookup deadline.
    pub async fn run_lookup(&self, target: &Target) -> LookupViewModel {
        log::debug!("[lookup] start {target}");
        let result = with_deadline(self.timeouts.lookup, self.lookup.lookup(target)).await;

        match result {
            Ok(payload) => {
                let view = normalize_lookup(target, &payload);
                log::debug!("[lookup] {target}: {}", view.status);
                view
            }
            Err(e) => {
                log_lane_error("lookup", target, &e);
                lookup_failure(target, &e, self.timeouts.lookup)
            }
        }
    }

    /// Token, then search. The search is only issued once a token
    /// is in hand.
    pub async fn run_search(&self, target: &Target) -> SearchViewModel {
        log::debug!("[search] fetching token for {target}");
        let token = match timeout(self.timeouts.token, self.tokens.fetch_token()).await {
            Ok(token) => token,
            Err(_) => {
                log::warn!(
                    "[search] token fetch timed out after {}s",
                    self.timeouts.token.as_secs()
                );
                None
            }
        };
        let Some(token) = token else {
            log::warn!("[search] no token for {target}, search skipped");
            return SearchViewModel::no_token(NO_TOKEN_MESSAGE);
        };

        let result = with_deadline(
            self.timeouts.search,
            self.search.search(&token, target.value()),
        )
        .await;

        match result {
            Ok(payload) => {
                let view = normalize_search(&payload, self.link_base.as_deref());
                log::debug!("[search] {target}: {} result(s)", view.total());
                view
            }
            Err(e) => {
                log_lane_error("search", target, &e);
                search_failure(&e, self.timeouts.search)
            }
        }
    }
}

/// Run `future`, turning an elapsed deadline into `ToolboxError::Timeout`.
async fn with_deadline<T>(
    limit: Duration,
    future: impl Future<Output = ToolboxResult<T>>,
) -> ToolboxResult<T> {
    timeout(limit, future)
        .await
        .map_err(|_| ToolboxError::Timeout(format!("no response within {}s", limit.as_secs())))?
}

fn log_lane_error(lane: &str, target: &Target, err: &ToolboxError) {
    if err.is_expected() {
        log::warn!("[{lane}] {target}: {err}");
    } else {
        log::error!("[{lane}] {target}: {err}");
    }
}

/// Placeholder view model for a failed lookup.
pub fn lookup_failure(target: &Target, err: &ToolboxError, limit: Duration) -> LookupViewModel {
    let (status, diagnostic) = match err {
        ToolboxError::EmptyResponse(_) => (
            LookupStatus::Empty,
            Diagnostic::new("Error", "Empty Response", "Server likely returned no data."),
        ),
        ToolboxError::ParseError(_) => (
            LookupStatus::ParseError,
            Diagnostic::new(
                "Parsing Error",
                "Returned Non-JSON",
                "Check logs for raw response text.",
            ),
        ),
        ToolboxError::Timeout(_) => (
            LookupStatus::Timeout,
            Diagnostic::new(
                format!("Timeout ({}s)", limit.as_secs()),
                "Request Timed Out",
                "Server took too long to respond.",
            ),
        ),
        other => (
            LookupStatus::NetworkError,
            Diagnostic::new("Request Failed", "Network/Security Error", other.to_string()),
        ),
    };
    LookupViewModel::failed(target.kind(), status, diagnostic)
}

/// Placeholder view model for a failed search.
pub fn search_failure(err: &ToolboxError, limit: Duration) -> SearchViewModel {
    let message = match err {
        ToolboxError::ParseError(_) | ToolboxError::EmptyResponse(_) => {
            SEARCH_PARSE_MESSAGE.to_string()
        }
        ToolboxError::Timeout(_) => format!("Request timed out ({}s)", limit.as_secs()),
        _ => SEARCH_NETWORK_MESSAGE.to_string(),
    };
    SearchViewModel::error(message)
}
