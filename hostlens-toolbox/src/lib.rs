//! Upstream toolbox for hostlens
//!
//! Classifies selected text into lookup targets and talks to the two remote
//! sources: the DNS/GeoIP lookup service and the customer-management search
//! API (including its CSRF token scrape). All functions are stateless apart
//! from the shared HTTP connection pool in [`ToolboxClient`].

mod classify;
mod error;
mod services;
mod types;

pub use classify::classify_target;
pub use error::{ToolboxError, ToolboxResult};
pub use services::{
    extract_csrf_token, lookup_url, parse_lookup_body, parse_search_body, search_form,
    truncate_for_log, HttpUtils, ToolboxClient, SEARCH_PATH,
};
pub use types::{
    CnameEntry, GeoRecord, LookupPayload, LookupRecords, MxRecord, NameserverRecord,
    SearchPayload, Target, TargetKind,
};
