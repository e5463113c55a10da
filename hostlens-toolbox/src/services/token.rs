//! CSRF token scrape from the customer-management host page.

use std::sync::LazyLock;

use regex::Regex;
use reqwest::Client;

use super::http::HttpUtils;
use crate::error::{ToolboxError, ToolboxResult};

const SOURCE: &str = "token";

/// `csrfToken = "<40 hex>"`, either quote style, any case.
static CSRF_TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)csrfToken\s*=\s*["']([a-f0-9]{40})["']"#)
        .unwrap_or_else(|e| unreachable!("token pattern is a literal: {e}"))
});

/// Fetch the host page and pull the CSRF token out of it.
///
/// Returns [`ToolboxError::TokenNotFound`] when the page loads but carries no
/// token.
pub async fn fetch_token(client: &Client, page_url: &str) -> ToolboxResult<String> {
    if page_url.trim().is_empty() {
        return Err(ToolboxError::ValidationError(
            "token page is not configured".to_string(),
        ));
    }
    log::debug!("[{SOURCE}] Fetching fresh token");
    let (_, html) =
        HttpUtils::execute_request(client.get(page_url), SOURCE, "GET", page_url).await?;
    extract_csrf_token(&html).ok_or(ToolboxError::TokenNotFound)
}

/// Pull the first CSRF token out of an HTML document.
pub fn extract_csrf_token(html: &str) -> Option<String> {
    CSRF_TOKEN_RE
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
