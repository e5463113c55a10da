//! DNS/GeoIP view model.

use std::fmt;

use serde::{Deserialize, Serialize};

use hostlens_toolbox::TargetKind;

/// Text shown wherever an upstream field is absent.
pub const NOT_AVAILABLE: &str = "N/A";

/// Lifecycle of the DNS tab content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LookupStatus {
    Loading,
    Ready,
    /// Either the server sent nothing (with a diagnostic) or the domain has
    /// no A records (without one).
    Empty,
    ParseError,
    NetworkError,
    Timeout,
}

impl LookupStatus {
    /// Whether the lane has finished, successfully or not.
    pub fn is_terminal(self) -> bool {
        self != Self::Loading
    }
}

impl fmt::Display for LookupStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Loading => "loading",
            Self::Ready => "ready",
            Self::Empty => "empty",
            Self::ParseError => "parse error",
            Self::NetworkError => "network error",
            Self::Timeout => "timeout",
        };
        f.write_str(name)
    }
}

/// Placeholder text for a failed lookup, one string per display slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Shown in place of the A record / address (e.g. `"Timeout (10s)"`).
    pub label: String,
    /// Shown in place of the provider (e.g. `"Request Timed Out"`).
    pub summary: String,
    /// Shown in place of the location.
    pub detail: String,
}

impl Diagnostic {
    pub fn new(label: impl Into<String>, summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            summary: summary.into(),
            detail: detail.into(),
        }
    }
}

/// GeoIP details for one address. Absent fields stay absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoEntry {
    pub ip: Option<String>,
    pub provider: Option<String>,
    pub location: Option<String>,
    pub ptr: Option<String>,
}

impl GeoEntry {
    pub fn ip_label(&self) -> &str {
        or_na(self.ip.as_deref())
    }

    pub fn provider_label(&self) -> &str {
        or_na(self.provider.as_deref())
    }

    pub fn location_label(&self) -> &str {
        or_na(self.location.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nameserver {
    pub host: String,
    pub ips: Vec<String>,
}

impl fmt::Display for Nameserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ips.is_empty() {
            write!(f, "{}", self.host)
        } else {
            write!(f, "{} ({})", self.host, self.ips.join(", "))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailExchanger {
    pub host: String,
    /// Opaque; never compared or reordered.
    pub priority: i64,
    pub ips: Vec<String>,
}

impl fmt::Display for MailExchanger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Priority {})", self.host, self.priority)
    }
}

/// Address card for an IP target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingleIp {
    pub address: String,
    pub provider: Option<String>,
    pub location: Option<String>,
}

impl SingleIp {
    pub fn provider_label(&self) -> &str {
        or_na(self.provider.as_deref())
    }

    pub fn location_label(&self) -> &str {
        or_na(self.location.as_deref())
    }
}

/// Normalized lookup result for one target.
///
/// Outside `Ready`/`Empty` every record list is empty and `single_ip` is
/// `None`; the renderer shows `diagnostic` (or the loading text) instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupViewModel {
    pub is_domain: bool,
    pub a_records: Vec<String>,
    pub geo_entries: Vec<GeoEntry>,
    pub nameservers: Vec<Nameserver>,
    pub mail_exchangers: Vec<MailExchanger>,
    pub canonical_names: Vec<String>,
    pub spf_texts: Vec<String>,
    pub single_ip: Option<SingleIp>,
    pub status: LookupStatus,
    pub diagnostic: Option<Diagnostic>,
}

impl LookupViewModel {
    fn blank(kind: TargetKind, status: LookupStatus) -> Self {
        Self {
            is_domain: kind == TargetKind::Domain,
            a_records: Vec::new(),
            geo_entries: Vec::new(),
            nameservers: Vec::new(),
            mail_exchangers: Vec::new(),
            canonical_names: Vec::new(),
            spf_texts: Vec::new(),
            single_ip: None,
            status,
            diagnostic: None,
        }
    }

    /// Shown the moment a target is selected, before any data arrives.
    pub fn loading(kind: TargetKind) -> Self {
        Self::blank(kind, LookupStatus::Loading)
    }

    /// Placeholder for a lane that ended without usable data.
    pub fn failed(kind: TargetKind, status: LookupStatus, diagnostic: Diagnostic) -> Self {
        Self {
            diagnostic: Some(diagnostic),
            ..Self::blank(kind, status)
        }
    }

    /// A domain the server answered for but which has no A records.
    pub fn is_unresolved_domain(&self) -> bool {
        self.is_domain && self.status == LookupStatus::Empty && self.diagnostic.is_none()
    }

    /// Text for the address slot while no real address is available.
    pub fn placeholder_label(&self) -> &str {
        match (&self.diagnostic, self.status) {
            (Some(d), _) => &d.label,
            (None, LookupStatus::Loading) => "Loading...",
            (None, _) => NOT_AVAILABLE,
        }
    }
}

fn or_na(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => NOT_AVAILABLE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_has_no_data() {
        let vm = LookupViewModel::loading(TargetKind::Domain);
        assert!(vm.is_domain);
        assert_eq!(vm.status, LookupStatus::Loading);
        assert!(vm.a_records.is_empty());
        assert!(vm.single_ip.is_none());
        assert_eq!(vm.placeholder_label(), "Loading...");
    }

    #[test]
    fn failed_carries_diagnostic() {
        let vm = LookupViewModel::failed(
            TargetKind::Ip,
            LookupStatus::Timeout,
            Diagnostic::new("Timeout (10s)", "Request Timed Out", "Server took too long to respond."),
        );
        assert!(!vm.is_domain);
        assert_eq!(vm.placeholder_label(), "Timeout (10s)");
        assert!(!vm.is_unresolved_domain());
    }

    #[test]
    fn absent_geo_fields_render_as_na() {
        let entry = GeoEntry {
            ip: Some("192.0.2.1".into()),
            provider: None,
            location: Some(String::new()),
            ptr: None,
        };
        assert_eq!(entry.ip_label(), "192.0.2.1");
        assert_eq!(entry.provider_label(), NOT_AVAILABLE);
        assert_eq!(entry.location_label(), NOT_AVAILABLE);
    }

    #[test]
    fn record_display_formats() {
        let mx = MailExchanger {
            host: "mx1.example.com.".into(),
            priority: 10,
            ips: vec![],
        };
        assert_eq!(mx.to_string(), "mx1.example.com. (Priority 10)");

        let ns = Nameserver {
            host: "a.iana-servers.net".into(),
            ips: vec!["199.43.135.53".into(), "2001:500:8f::53".into()],
        };
        assert_eq!(ns.to_string(), "a.iana-servers.net (199.43.135.53, 2001:500:8f::53)");
    }

    #[test]
    fn only_loading_is_not_terminal() {
        assert!(!LookupStatus::Loading.is_terminal());
        assert!(LookupStatus::Timeout.is_terminal());
        assert!(LookupStatus::Ready.is_terminal());
    }
}
