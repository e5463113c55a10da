//! Customer-management "intellisearch" query.

use reqwest::Client;

use super::http::HttpUtils;
use crate::error::{ToolboxError, ToolboxResult};
use crate::types::SearchPayload;

const SOURCE: &str = "search";

/// Path of the search endpoint relative to the customer-management root.
pub const SEARCH_PATH: &str = "search/intellisearch";

/// Form-encoded POST of `term` with a previously scraped `token`.
pub async fn search(
    client: &Client,
    search_url: &str,
    token: &str,
    term: &str,
) -> ToolboxResult<SearchPayload> {
    let form = search_form(token, term);
    let request = client.post(search_url).form(&form);
    let (status, body) = HttpUtils::execute_request(request, SOURCE, "POST", search_url).await?;
    if !(200..300).contains(&status) {
        log::warn!("[{SOURCE}] '{term}' answered HTTP {status}");
    }
    parse_search_body(&body)
}

/// Form fields in the order the search page submits them.
pub fn search_form<'a>(token: &'a str, term: &'a str) -> [(&'static str, &'a str); 4] {
    [
        ("token", token),
        ("searchterm", term),
        ("hide_inactive", "0"),
        ("more", ""),
    ]
}

/// Interpret a raw search body. An empty body cannot be parsed either.
pub fn parse_search_body(body: &str) -> ToolboxResult<SearchPayload> {
    if body.trim().is_empty() {
        return Err(ToolboxError::ParseError("empty search response".to_string()));
    }
    HttpUtils::parse_json(body, SOURCE)
}
