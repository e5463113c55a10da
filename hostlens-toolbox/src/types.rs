//! Public types: classified targets and the upstream payload shapes.
//!
//! The payload types mirror the JSON the lookup service and the customer
//! search API return. Every collection tolerates both an absent key and an
//! explicit `null`, so a partially populated payload still deserializes.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// What kind of host a selection was classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    /// Dotted domain name.
    Domain,
    /// Dotted-quad IPv4 address.
    Ip,
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain => write!(f, "domain"),
            Self::Ip => write!(f, "ip"),
        }
    }
}

/// A classified selection. Only [`crate::classify_target`] creates one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Target {
    kind: TargetKind,
    value: String,
}

impl Target {
    pub(crate) fn new(kind: TargetKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    pub fn kind(&self) -> TargetKind {
        self.kind
    }

    /// The trimmed selection text.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_domain(&self) -> bool {
        self.kind == TargetKind::Domain
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.value, self.kind)
    }
}

/// Treat `null` the same as an absent key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ============ Lookup service ============

/// Body of `GET <endpoint>/<target>`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LookupPayload {
    /// Echo of the queried name, when the server includes it.
    #[serde(default)]
    pub domain: Option<String>,
    /// Record groups. Required: a body without it is a shape mismatch.
    pub records: LookupRecords,
}

/// The `records` object of a lookup payload.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct LookupRecords {
    #[serde(rename = "A", default, deserialize_with = "null_as_default")]
    pub a: Vec<String>,
    #[serde(rename = "A_IP_Info", default, deserialize_with = "null_as_default")]
    pub a_ip_info: Vec<GeoRecord>,
    #[serde(rename = "NS", default, deserialize_with = "null_as_default")]
    pub ns: Vec<NameserverRecord>,
    #[serde(rename = "MX", default, deserialize_with = "null_as_default")]
    pub mx: Vec<MxRecord>,
    #[serde(rename = "CNAME_WWW", default, deserialize_with = "null_as_default")]
    pub cname_www: Vec<CnameEntry>,
    #[serde(rename = "TXT", default, deserialize_with = "null_as_default")]
    pub txt: Vec<String>,
}

/// GeoIP details of one resolved address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeoRecord {
    #[serde(default)]
    pub ip: Option<String>,
    /// Reverse DNS name.
    #[serde(default)]
    pub ptr: Option<String>,
    /// Autonomous system organisation.
    #[serde(default)]
    pub provider: Option<String>,
    /// "City, Region, Country".
    #[serde(default)]
    pub location: Option<String>,
}

/// A nameserver and the addresses it resolves to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct NameserverRecord {
    #[serde(default)]
    pub nameserver: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ips: Vec<String>,
}

/// A mail exchanger. `priority` is passed through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct MxRecord {
    #[serde(default)]
    pub mail_server: String,
    #[serde(default)]
    pub priority: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ips: Vec<String>,
}

/// `www` CNAME entry; older servers send bare strings, newer ones objects.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum CnameEntry {
    Name(String),
    Detailed {
        cname: String,
        #[serde(default, deserialize_with = "null_as_default")]
        ips: Vec<String>,
    },
}

impl CnameEntry {
    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) | Self::Detailed { cname: name, .. } => name,
        }
    }
}

// ============ Customer search ============

/// Body of the intellisearch POST. Records are loosely typed objects.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SearchPayload {
    #[serde(default, deserialize_with = "null_as_default")]
    pub client: Vec<Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub domain: Vec<Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub service: Vec<Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub contact: Vec<Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub invoice: Vec<Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ticket: Vec<Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub other: Vec<Value>,
}

impl SearchPayload {
    /// Number of records across all categories.
    pub fn total(&self) -> usize {
        self.client.len()
            + self.domain.len()
            + self.service.len()
            + self.contact.len()
            + self.invoice.len()
            + self.ticket.len()
            + self.other.len()
    }
}
