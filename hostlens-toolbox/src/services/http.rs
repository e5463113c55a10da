//! Shared request plumbing.
//!
//! Every upstream call goes through [`HttpUtils::execute_request`] so that
//! sending, logging and transport-error mapping happen in one place. Callers
//! still build their own `RequestBuilder` and decide how to parse the body.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::{ToolboxError, ToolboxResult};

/// Maximum number of bytes of a body echoed into the logs.
const LOG_BODY_LIMIT: usize = 256;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Send a request and return `(status_code, body)`.
    ///
    /// Transport timeouts map to [`ToolboxError::Timeout`]; other send
    /// failures and gateway errors (HTTP 502-504) map to
    /// [`ToolboxError::NetworkError`]. Any other status is returned to the
    /// caller together with the body.
    pub async fn execute_request(
        request_builder: RequestBuilder,
        source: &str,
        method_name: &str,
        url: &str,
    ) -> ToolboxResult<(u16, String)> {
        log::debug!("[{source}] {method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ToolboxError::Timeout(format!("{source}: {e}"))
            } else {
                ToolboxError::NetworkError(format!("{source}: {e}"))
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[{source}] Response Status: {status_code}");

        if matches!(status_code, 502..=504) {
            log::warn!("[{source}] Gateway error (HTTP {status_code})");
            return Err(ToolboxError::NetworkError(format!(
                "{source}: HTTP {status_code}"
            )));
        }

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                ToolboxError::Timeout(format!("{source}: {e}"))
            } else {
                ToolboxError::NetworkError(format!("{source}: failed to read body: {e}"))
            }
        })?;

        log::debug!("[{source}] Response Body: {}", truncate_for_log(&body));
        Ok((status_code, body))
    }

    /// Parse a JSON body, logging the raw text when it does not fit `T`.
    pub fn parse_json<T>(body: &str, source: &str) -> ToolboxResult<T>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(body).map_err(|e| {
            log::error!("[{source}] JSON parse failed: {e}");
            log::error!("[{source}] Raw response: {}", truncate_for_log(body));
            ToolboxError::ParseError(e.to_string())
        })
    }
}

/// Cut a body down to [`LOG_BODY_LIMIT`] bytes on a char boundary.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= LOG_BODY_LIMIT {
        return s.to_string();
    }
    let cut = s
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= LOG_BODY_LIMIT)
        .last()
        .unwrap_or(0);
    format!("{}... [truncated, total {} bytes]", &s[..cut], s.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, serde::Deserialize)]
    struct Probe {
        #[allow(dead_code)]
        ok: bool,
    }

    #[test]
    fn parse_json_maps_to_parse_error() {
        let result: ToolboxResult<Probe> = HttpUtils::parse_json("<html>", "test");
        assert!(matches!(result, Err(ToolboxError::ParseError(_))));
    }

    #[test]
    fn parse_json_accepts_valid_body() {
        let result: ToolboxResult<Probe> = HttpUtils::parse_json(r#"{"ok":true}"#, "test");
        assert!(result.is_ok());
    }

    #[test]
    fn short_body_is_logged_whole() {
        assert_eq!(truncate_for_log("hello"), "hello");
    }

    #[test]
    fn long_body_is_truncated() {
        let body = "x".repeat(LOG_BODY_LIMIT + 44);
        let logged = truncate_for_log(&body);
        assert!(logged.starts_with(&"x".repeat(LOG_BODY_LIMIT)));
        assert!(logged.ends_with(&format!("total {} bytes]", LOG_BODY_LIMIT + 44)));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let body = "é".repeat(LOG_BODY_LIMIT);
        let logged = truncate_for_log(&body);
        assert!(logged.contains("... [truncated"));
    }
}
