//! Endpoint and timing configuration.
//!
//! Everything is fixed when the host builds the panel: there is no config
//! file. Hosts either take [`LookupConfig::default`] and adjust it with the
//! `with_*` builders, or embed a JSON object (missing keys fall back to the
//! defaults below).

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{CoreError, CoreResult};
use hostlens_toolbox::SEARCH_PATH;

/// Lookup service endpoint; the target is appended to the path.
pub const DEFAULT_LOOKUP_ENDPOINT: &str = "http://127.0.0.1:8000/dns-lookup/";

const LOOKUP_TIMEOUT_MS: u64 = 10_000;
const TOKEN_TIMEOUT_MS: u64 = 10_000;
const SEARCH_TIMEOUT_MS: u64 = 60_000;
const OPEN_SETTLE_MS: u64 = 10;
const CLOSE_SETTLE_MS: u64 = 300;

/// Panel configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LookupConfig {
    /// DNS/GeoIP lookup endpoint.
    pub lookup_endpoint: String,
    /// Customer-management root URL, always slash-terminated. `None`
    /// disables the search tab.
    #[serde(deserialize_with = "slash_terminated")]
    pub search_base_url: Option<String>,
    /// Lookup lane deadline.
    #[serde(with = "millis")]
    pub lookup_timeout: Duration,
    /// Deadline for scraping the CSRF token page.
    #[serde(with = "millis")]
    pub token_timeout: Duration,
    /// Search lane deadline, counted after the token arrives.
    #[serde(with = "millis")]
    pub search_timeout: Duration,
    /// Delay between "opening" and "open".
    #[serde(with = "millis")]
    pub open_settle: Duration,
    /// Delay between "closing" and content being cleared.
    #[serde(with = "millis")]
    pub close_settle: Duration,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            lookup_endpoint: DEFAULT_LOOKUP_ENDPOINT.to_string(),
            search_base_url: None,
            lookup_timeout: Duration::from_millis(LOOKUP_TIMEOUT_MS),
            token_timeout: Duration::from_millis(TOKEN_TIMEOUT_MS),
            search_timeout: Duration::from_millis(SEARCH_TIMEOUT_MS),
            open_settle: Duration::from_millis(OPEN_SETTLE_MS),
            close_settle: Duration::from_millis(CLOSE_SETTLE_MS),
        }
    }
}

impl LookupConfig {
    #[must_use]
    pub fn with_lookup_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.lookup_endpoint = endpoint.into();
        self
    }

    /// Enable the search tab against the given customer-management root.
    /// A trailing slash is added when missing.
    #[must_use]
    pub fn with_search_base_url(mut self, base: impl Into<String>) -> Self {
        self.search_base_url = Some(with_trailing_slash(base.into()));
        self
    }

    #[must_use]
    pub fn with_timeouts(mut self, lookup: Duration, token: Duration, search: Duration) -> Self {
        self.lookup_timeout = lookup;
        self.token_timeout = token;
        self.search_timeout = search;
        self
    }

    #[must_use]
    pub fn with_settle_delays(mut self, open: Duration, close: Duration) -> Self {
        self.open_settle = open;
        self.close_settle = close;
        self
    }

    /// Slash-terminated customer-management root. Deep links, the token
    /// page and the search endpoint are all built on this.
    pub fn link_base(&self) -> Option<String> {
        self.search_base_url
            .as_ref()
            .map(|base| with_trailing_slash(base.clone()))
    }

    /// The page the CSRF token is scraped from.
    pub fn token_page_url(&self) -> Option<String> {
        self.link_base()
    }

    /// Full intellisearch endpoint.
    pub fn search_url(&self) -> Option<String> {
        self.link_base().map(|base| format!("{base}{SEARCH_PATH}"))
    }

    /// Check URLs and deadlines before the runtime starts.
    pub fn validate(&self) -> CoreResult<()> {
        check_http_url("lookupEndpoint", &self.lookup_endpoint)?;
        if let Some(base) = &self.search_base_url {
            check_http_url("searchBaseUrl", base)?;
        }
        for (name, value) in [
            ("lookupTimeout", self.lookup_timeout),
            ("tokenTimeout", self.token_timeout),
            ("searchTimeout", self.search_timeout),
        ] {
            if value.is_zero() {
                return Err(CoreError::ConfigError(format!("{name} must be positive")));
            }
        }
        Ok(())
    }
}

fn with_trailing_slash(mut base: String) -> String {
    if !base.ends_with('/') {
        base.push('/');
    }
    base
}

fn slash_terminated<'de, D: serde::Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Option::<String>::deserialize(deserializer).map(|base| base.map(with_trailing_slash))
}

fn check_http_url(name: &str, value: &str) -> CoreResult<()> {
    let url = Url::parse(value)
        .map_err(|e| CoreError::ConfigError(format!("{name} is not a valid URL: {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(CoreError::ConfigError(format!(
            "{name} must use http or https, got {}",
            url.scheme()
        )));
    }
    Ok(())
}

/// Durations as integer milliseconds.
mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(u64::try_from(value.as_millis()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
