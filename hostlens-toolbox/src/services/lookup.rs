//! DNS/GeoIP lookup against the remote lookup service.

use reqwest::Client;

use super::http::HttpUtils;
use crate::error::{ToolboxError, ToolboxResult};
use crate::types::{LookupPayload, Target};

const SOURCE: &str = "lookup";

/// `GET <endpoint><target>` and parse the payload.
pub async fn lookup(client: &Client, endpoint: &str, target: &Target) -> ToolboxResult<LookupPayload> {
    let url = lookup_url(endpoint, target)?;
    let (status, body) =
        HttpUtils::execute_request(client.get(&url), SOURCE, "GET", &url).await?;
    if !(200..300).contains(&status) {
        log::warn!("[{SOURCE}] {target} answered HTTP {status}");
    }
    parse_lookup_body(&body)
}

/// Append the target to the endpoint path.
pub fn lookup_url(endpoint: &str, target: &Target) -> ToolboxResult<String> {
    if endpoint.trim().is_empty() {
        return Err(ToolboxError::ValidationError(
            "lookup endpoint is not configured".to_string(),
        ));
    }
    let separator = if endpoint.ends_with('/') { "" } else { "/" };
    Ok(format!(
        "{endpoint}{separator}{}",
        urlencoding::encode(target.value())
    ))
}

/// Interpret a raw lookup body.
///
/// A whitespace-only body is [`ToolboxError::EmptyResponse`]; anything that is
/// not JSON with a `records` object is [`ToolboxError::ParseError`].
pub fn parse_lookup_body(body: &str) -> ToolboxResult<LookupPayload> {
    if body.trim().is_empty() {
        log::error!("[{SOURCE}] API returned an empty response");
        return Err(ToolboxError::EmptyResponse(SOURCE.to_string()));
    }
    HttpUtils::parse_json(body, SOURCE)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::classify_target;

    #[test]
    fn url_appends_target() {
        let target = classify_target("example.com").unwrap();
        assert_eq!(
            lookup_url("http://127.0.0.1:8000/dns-lookup/", &target).unwrap(),
            "http://127.0.0.1:8000/dns-lookup/example.com"
        );
        assert_eq!(
            lookup_url("http://127.0.0.1:8000/dns-lookup", &target).unwrap(),
            "http://127.0.0.1:8000/dns-lookup/example.com"
        );
    }

    #[test]
    fn url_requires_endpoint() {
        let target = classify_target("10.0.0.1").unwrap();
        assert!(matches!(
            lookup_url("  ", &target),
            Err(ToolboxError::ValidationError(_))
        ));
    }

    #[test]
    fn empty_body_is_empty_response() {
        assert!(matches!(
            parse_lookup_body(" \n"),
            Err(ToolboxError::EmptyResponse(_))
        ));
    }

    #[test]
    fn non_json_is_parse_error() {
        assert!(matches!(
            parse_lookup_body("Internal Server Error"),
            Err(ToolboxError::ParseError(_))
        ));
    }

    #[test]
    fn error_envelope_is_parse_error() {
        assert!(matches!(
            parse_lookup_body(r#"{"detail":"Error retrieving DNS records"}"#),
            Err(ToolboxError::ParseError(_))
        ));
    }

    #[test]
    fn full_payload_parses() {
        let payload = parse_lookup_body(
            r#"{"domain":"example.com","records":{"A":["93.184.216.34"],"TXT":["v=spf1 -all"]}}"#,
        )
        .unwrap();
        assert_eq!(payload.domain.as_deref(), Some("example.com"));
        assert_eq!(payload.records.a.len(), 1);
    }
}
