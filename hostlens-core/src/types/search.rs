//! Customer-search view model.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Lifecycle of the search tab content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchStatus {
    Loading,
    /// No CSRF token could be obtained; the search was never issued.
    NoToken,
    Ready,
    Empty,
    Error,
}

impl SearchStatus {
    pub fn is_terminal(self) -> bool {
        self != Self::Loading
    }
}

/// Result categories, declared in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchCategory {
    Client,
    Domain,
    Service,
    Contact,
    Invoice,
    Ticket,
    Other,
}

impl SearchCategory {
    pub const ALL: [Self; 7] = [
        Self::Client,
        Self::Domain,
        Self::Service,
        Self::Contact,
        Self::Invoice,
        Self::Ticket,
        Self::Other,
    ];

    /// Group heading.
    pub fn title(self) -> &'static str {
        match self {
            Self::Client => "Clients",
            Self::Domain => "Domains",
            Self::Service => "Services",
            Self::Contact => "Contacts",
            Self::Invoice => "Invoices",
            Self::Ticket => "Tickets",
            Self::Other => "Other",
        }
    }

    /// Field holding the record headline, if the category has one.
    pub fn title_field(self) -> Option<&'static str> {
        match self {
            Self::Client => Some("name"),
            Self::Domain => Some("domain"),
            Self::Service => Some("product_name"),
            _ => None,
        }
    }
}

impl fmt::Display for SearchCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Colour class for a record's status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusTone {
    Active,
    Inactive,
    Suspended,
    Pending,
    Cancelled,
    Expired,
    Neutral,
}

impl StatusTone {
    /// Case-insensitive substring match. `inactive` goes first since it
    /// contains `active`.
    pub fn classify(status: &str) -> Self {
        const ORDER: [(&str, StatusTone); 6] = [
            ("inactive", StatusTone::Inactive),
            ("active", StatusTone::Active),
            ("suspended", StatusTone::Suspended),
            ("pending", StatusTone::Pending),
            ("cancelled", StatusTone::Cancelled),
            ("expired", StatusTone::Expired),
        ];
        let lower = status.to_lowercase();
        ORDER
            .iter()
            .find(|(needle, _)| lower.contains(needle))
            .map_or(Self::Neutral, |(_, tone)| *tone)
    }
}

/// One labelled line under a record title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDetail {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRecord {
    pub title: Option<String>,
    pub status: Option<String>,
    pub tone: StatusTone,
    pub details: Vec<RecordDetail>,
    /// Deep link into the customer-management UI.
    pub link: Option<String>,
    /// The upstream object, untouched.
    pub raw: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchGroup {
    pub category: SearchCategory,
    pub records: Vec<SearchRecord>,
}

/// Normalized search result. Groups only exist for non-empty categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchViewModel {
    pub groups: Vec<SearchGroup>,
    pub status: SearchStatus,
    /// Human-readable cause for `NoToken`/`Error`.
    pub message: Option<String>,
}

impl SearchViewModel {
    pub fn loading() -> Self {
        Self {
            groups: Vec::new(),
            status: SearchStatus::Loading,
            message: None,
        }
    }

    pub fn no_token(message: impl Into<String>) -> Self {
        Self {
            groups: Vec::new(),
            status: SearchStatus::NoToken,
            message: Some(message.into()),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            groups: Vec::new(),
            status: SearchStatus::Error,
            message: Some(message.into()),
        }
    }

    /// Records across all groups.
    pub fn total(&self) -> usize {
        self.groups.iter().map(|g| g.records.len()).sum()
    }

    pub fn group(&self, category: SearchCategory) -> Option<&SearchGroup> {
        self.groups.iter().find(|g| g.category == category)
    }
}
