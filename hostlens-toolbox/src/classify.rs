//! Selection classification.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::{Target, TargetKind};

/// Dot-separated labels of 1-63 alphanumerics with internal hyphens; the
/// final label is at least two characters long.
static DOMAIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?\.)+[a-zA-Z0-9][a-zA-Z0-9-]{0,61}[a-zA-Z0-9]$",
    )
    .unwrap_or_else(|e| unreachable!("domain pattern is a literal: {e}"))
});

static IPV4_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[0-9]{1,3}\.){3}[0-9]{1,3}$")
        .unwrap_or_else(|e| unreachable!("ipv4 pattern is a literal: {e}"))
});

/// Classify a raw selection as a domain, an IPv4 address, or nothing.
///
/// Leading and trailing whitespace is ignored. The domain grammar is tested
/// first. Its top-level label must contain a non-digit, which keeps the two
/// grammars disjoint: nothing that matches one can match the other.
pub fn classify_target(raw: &str) -> Option<Target> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if is_domain(trimmed) {
        return Some(Target::new(TargetKind::Domain, trimmed));
    }
    if is_ipv4(trimmed) {
        return Some(Target::new(TargetKind::Ip, trimmed));
    }
    None
}

fn is_domain(text: &str) -> bool {
    DOMAIN_RE.is_match(text)
        && text
            .rsplit('.')
            .next()
            .is_some_and(|tld| !tld.bytes().all(|b| b.is_ascii_digit()))
}

fn is_ipv4(text: &str) -> bool {
    IPV4_RE.is_match(text) && text.split('.').all(|octet| octet.parse::<u8>().is_ok())
}
