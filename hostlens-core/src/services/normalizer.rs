//! Upstream payloads → view models.
//!
//! Both functions are pure and total: any payload that deserialized produces
//! a view model, and missing groups simply become empty sequences.

use serde_json::Value;

use hostlens_toolbox::{LookupPayload, SearchPayload, Target};

use crate::types::{
    GeoEntry, LookupStatus, LookupViewModel, MailExchanger, Nameserver, RecordDetail,
    SearchCategory, SearchGroup, SearchRecord, SearchStatus, SearchViewModel, SingleIp,
    StatusTone,
};

/// TXT records containing this marker are SPF policies.
const SPF_MARKER: &str = "v=spf1";

/// Build the DNS tab model for `target` from a lookup payload.
///
/// A domain with no A records is `Empty` (without a diagnostic); everything
/// else is `Ready`. For IP targets the first geo entry becomes the address
/// card, falling back to the target value when the server sent no IP.
pub fn normalize_lookup(target: &Target, payload: &LookupPayload) -> LookupViewModel {
    let records = &payload.records;

    let geo_entries: Vec<GeoEntry> = records
        .a_ip_info
        .iter()
        .map(|geo| GeoEntry {
            ip: geo.ip.clone(),
            provider: geo.provider.clone(),
            location: geo.location.clone(),
            ptr: geo.ptr.clone(),
        })
        .collect();

    let single_ip = (!target.is_domain()).then(|| {
        let first = geo_entries.first();
        SingleIp {
            address: first
                .and_then(|g| g.ip.clone())
                .filter(|ip| !ip.is_empty())
                .unwrap_or_else(|| target.value().to_string()),
            provider: first.and_then(|g| g.provider.clone()),
            location: first.and_then(|g| g.location.clone()),
        }
    });

    let status = if target.is_domain() && records.a.is_empty() {
        LookupStatus::Empty
    } else {
        LookupStatus::Ready
    };

    LookupViewModel {
        is_domain: target.is_domain(),
        a_records: records.a.clone(),
        geo_entries,
        nameservers: records
            .ns
            .iter()
            .map(|ns| Nameserver {
                host: ns.nameserver.clone(),
                ips: ns.ips.clone(),
            })
            .collect(),
        // Upstream order, no sorting by priority
        mail_exchangers: records
            .mx
            .iter()
            .map(|mx| MailExchanger {
                host: mx.mail_server.clone(),
                priority: mx.priority,
                ips: mx.ips.clone(),
            })
            .collect(),
        canonical_names: records
            .cname_www
            .iter()
            .map(|c| c.name().to_string())
            .collect(),
        spf_texts: records
            .txt
            .iter()
            .filter(|txt| txt.contains(SPF_MARKER))
            .cloned()
            .collect(),
        single_ip,
        status,
        diagnostic: None,
    }
}

/// Build the search tab model.
///
/// `base_url` is the customer-management root deep links are built against;
/// without it no record gets a link.
pub fn normalize_search(payload: &SearchPayload, base_url: Option<&str>) -> SearchViewModel {
    let groups: Vec<SearchGroup> = SearchCategory::ALL
        .into_iter()
        .filter_map(|category| {
            let items = category_items(payload, category);
            if items.is_empty() {
                return None;
            }
            Some(SearchGroup {
                category,
                records: items
                    .iter()
                    .map(|item| normalize_record(category, item, base_url))
                    .collect(),
            })
        })
        .collect();

    let status = if groups.is_empty() {
        SearchStatus::Empty
    } else {
        SearchStatus::Ready
    };

    SearchViewModel {
        groups,
        status,
        message: None,
    }
}

fn category_items(payload: &SearchPayload, category: SearchCategory) -> &[Value] {
    match category {
        SearchCategory::Client => &payload.client,
        SearchCategory::Domain => &payload.domain,
        SearchCategory::Service => &payload.service,
        SearchCategory::Contact => &payload.contact,
        SearchCategory::Invoice => &payload.invoice,
        SearchCategory::Ticket => &payload.ticket,
        SearchCategory::Other => &payload.other,
    }
}

fn normalize_record(category: SearchCategory, item: &Value, base_url: Option<&str>) -> SearchRecord {
    let title = category.title_field().and_then(|field| field_text(item, field));
    let status = field_text(item, "status");
    let tone = status.as_deref().map_or(StatusTone::Neutral, StatusTone::classify);

    SearchRecord {
        title,
        tone,
        status,
        details: record_details(category, item),
        link: base_url.and_then(|base| deep_link(base, category, item)),
        raw: item.clone(),
    }
}

/// Labelled fields shown under the title, in display order.
fn record_details(category: SearchCategory, item: &Value) -> Vec<RecordDetail> {
    let fields: &[(&str, &str)] = match category {
        SearchCategory::Client => &[("Company", "company_name"), ("Email", "email"), ("ID", "id")],
        SearchCategory::Domain => &[
            ("Client", "client_name"),
            ("Company", "client_company_name"),
            ("ID", "id"),
        ],
        SearchCategory::Service => &[
            ("Domain", "domain"),
            ("Client", "client_name"),
            ("Company", "client_company_name"),
            ("ID", "id"),
        ],
        _ => &[],
    };

    fields
        .iter()
        .filter_map(|(label, field)| {
            field_text(item, field).map(|value| RecordDetail {
                label: (*label).to_string(),
                value,
            })
        })
        .collect()
}

fn deep_link(base: &str, category: SearchCategory, item: &Value) -> Option<String> {
    let id = link_id(item, "id")?;
    match category {
        SearchCategory::Client => Some(format!("{base}clientssummary.php?userid={id}")),
        SearchCategory::Domain => link_id(item, "user_id")
            .map(|user| format!("{base}clientsdomains.php?userid={user}&id={id}")),
        SearchCategory::Service => link_id(item, "user_id")
            .map(|user| format!("{base}clientsservices.php?userid={user}&productselect={id}")),
        SearchCategory::Contact => link_id(item, "user_id")
            .map(|user| format!("{base}clientscontacts.php?userid={user}&id={id}")),
        _ => None,
    }
}

/// An id usable in a deep link. Zero is never a real record id.
fn link_id(item: &Value, field: &str) -> Option<String> {
    field_text(item, field).filter(|id| id != "0")
}

/// A string or number field as display text; empty strings count as absent.
fn field_text(item: &Value, field: &str) -> Option<String> {
    match item.get(field)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
